use battleship_solver::{
    AttackError, AttackOutcome, Board, BoardSize, Cell, PlacementError, PlacementGenerator, Ship,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn c(x: usize, y: usize) -> Cell {
    Cell::new(x, y)
}

fn ship(a: (usize, usize), b: (usize, usize)) -> Ship {
    Ship::new(a.into(), b.into()).unwrap()
}

const SIZE: BoardSize = BoardSize::new(10, 10);

#[test]
fn test_attack_and_sink_single_ship() {
    let mut board = Board::with_ships(SIZE, vec![ship((3, 3), (5, 3))]).unwrap();

    assert_eq!(board.receive_attack(c(4, 3)).unwrap(), AttackOutcome::HIT);
    assert!(!board.all_ships_sunk());
    assert_eq!(board.receive_attack(c(3, 3)).unwrap(), AttackOutcome::HIT);
    assert_eq!(board.receive_attack(c(5, 3)).unwrap(), AttackOutcome::SINK);
    assert!(board.all_ships_sunk());
    assert_eq!(board.remaining_ships(), 0);
}

#[test]
fn test_miss() {
    let mut board = Board::with_ships(SIZE, vec![ship((3, 3), (5, 3))]).unwrap();
    assert_eq!(board.receive_attack(c(1, 1)).unwrap(), AttackOutcome::MISS);
    assert_eq!(board.attacked().len(), 1);
}

#[test]
fn test_repeated_attack_is_rejected() {
    let mut board = Board::with_ships(SIZE, vec![ship((1, 1), (1, 2))]).unwrap();
    assert_eq!(board.receive_attack(c(1, 1)).unwrap(), AttackOutcome::HIT);
    assert_eq!(
        board.receive_attack(c(1, 1)).unwrap_err(),
        AttackError::AlreadyAttacked(c(1, 1))
    );
    assert_eq!(board.attacked().len(), 1);
    assert_eq!(board.ships()[0].damage_count(), 1);
}

#[test]
fn test_out_of_bounds_attack() {
    let mut board = Board::with_ships(SIZE, vec![ship((1, 1), (1, 2))]).unwrap();
    for cell in [c(0, 5), c(11, 5), c(5, 0), c(5, 11)] {
        assert_eq!(
            board.receive_attack(cell).unwrap_err(),
            AttackError::OutOfBounds(cell)
        );
    }
    assert!(board.attacked().is_empty());
}

#[test]
fn test_place_rejects_overlap() {
    let mut board = Board::new(SIZE);
    let err = board
        .place(vec![ship((1, 1), (1, 3)), ship((5, 5), (5, 6)), ship((1, 2), (3, 2))])
        .unwrap_err();
    assert_eq!(err, PlacementError::Overlap { first: 0, second: 2 });
    assert!(board.ships().is_empty());
}

#[test]
fn test_place_rejects_touching_ships() {
    let mut board = Board::new(SIZE);
    // diagonal corner contact
    let err = board
        .place(vec![ship((3, 3), (5, 3)), ship((6, 4), (6, 6))])
        .unwrap_err();
    assert_eq!(err, PlacementError::TooClose { first: 0, second: 1 });

    // same board can still accept a valid set afterwards
    board
        .place(vec![ship((3, 3), (5, 3)), ship((7, 4), (7, 6))])
        .unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_place_rejects_out_of_bounds_ship() {
    let mut board = Board::new(SIZE);
    let err = board
        .place(vec![ship((1, 1), (1, 1)), ship((8, 10), (11, 10))])
        .unwrap_err();
    assert_eq!(err, PlacementError::OutOfBounds { index: 1 });
}

#[test]
fn test_place_twice_is_rejected() {
    let mut board = Board::new(SIZE);
    board.place(vec![ship((1, 1), (2, 1))]).unwrap();
    assert_eq!(
        board.place(vec![ship((5, 5), (6, 5))]).unwrap_err(),
        PlacementError::AlreadyPlaced
    );
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_ship_at() {
    let board = Board::with_ships(SIZE, vec![ship((2, 2), (2, 4)), ship((6, 6), (8, 6))]).unwrap();
    assert_eq!(board.ship_at(c(2, 3)).map(Ship::length), Some(3));
    assert_eq!(board.ship_at(c(7, 6)).map(Ship::start), Some(c(6, 6)));
    assert!(board.ship_at(c(4, 4)).is_none());
}

#[test]
fn test_random_board_clears_after_every_cell() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::with_random_fleet(&mut rng, &PlacementGenerator::default(), 10).unwrap();
    assert_eq!(board.ships().len(), 5);

    let mut hits = 0;
    for cell in SIZE.cells() {
        let outcome = board.receive_attack(cell).unwrap();
        hits += usize::from(outcome.hit);
    }
    assert_eq!(hits, 15);
    assert!(board.all_ships_sunk());
}
