use anyhow::anyhow;
use battleship_solver::{
    init_logging, Board, BoardSize, Fleet, PlacementGenerator, Player, RandomPlayer,
    TargetingStrategy, DEFAULT_BOARD_SIZE,
};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Strategy {
    Targeting,
    Random,
}

/// Benchmark an attacker against randomly generated boards.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    games: usize,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE.width)]
    width: usize,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE.height)]
    height: usize,
    #[arg(long, value_delimiter = ',', help = "Ship lengths, e.g. 5,4,3,3,2")]
    fleet: Option<Vec<usize>>,
    #[arg(long, value_enum, default_value_t = Strategy::Targeting)]
    strategy: Strategy,
    #[arg(long, default_value_t = 10, help = "Layout restarts after a failed placement")]
    restarts: usize,
}

fn play_one(
    rng: &mut SmallRng,
    generator: &PlacementGenerator,
    strategy: Strategy,
    restarts: usize,
) -> anyhow::Result<usize> {
    let mut board = Board::with_random_fleet(rng, generator, restarts)?;
    let size = generator.size();
    let mut player: Box<dyn Player> = match strategy {
        Strategy::Targeting => Box::new(TargetingStrategy::new(size)),
        Strategy::Random => Box::new(RandomPlayer::new(size)),
    };

    let mut shots = 0;
    while !board.all_ships_sunk() {
        if shots >= size.area() {
            return Err(anyhow!("board not cleared after {} shots", shots));
        }
        let target = player.select_target(rng)?;
        let outcome = board.receive_attack(target)?;
        player.handle_result(outcome)?;
        shots += 1;
    }
    Ok(shots)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let seed = match cli.seed {
        Some(s) => s,
        None => rand::random(),
    };
    log::info!("running {} game(s) with seed {}", cli.games, seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let size = BoardSize::new(cli.width, cli.height);
    let fleet = cli.fleet.map(Fleet::from_lengths).unwrap_or_default();
    let generator = PlacementGenerator::new(size, fleet);

    let mut shots = Vec::with_capacity(cli.games);
    for game in 0..cli.games {
        let n = play_one(&mut rng, &generator, cli.strategy, cli.restarts)?;
        log::debug!("game {} cleared in {} shots", game + 1, n);
        shots.push(n);
    }

    let mean = if shots.is_empty() {
        0.0
    } else {
        shots.iter().sum::<usize>() as f64 / shots.len() as f64
    };
    let result = json!({
        "seed": seed,
        "strategy": format!("{:?}", cli.strategy),
        "games": shots.len(),
        "min_shots": shots.iter().min(),
        "max_shots": shots.iter().max(),
        "mean_shots": mean,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
