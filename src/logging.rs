#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;

/// Logger filtering records by target prefix, e.g.
/// `BATTLESHIP_LOG=warn,battleship_solver::placement=debug`.
struct TargetLogger {
    default: LevelFilter,
    // (target prefix, level), longest prefix first
    targets: Vec<(String, LevelFilter)>,
}

impl TargetLogger {
    fn level_for(&self, target: &str) -> LevelFilter {
        self.targets
            .iter()
            .find(|(prefix, _)| target.starts_with(prefix.as_str()))
            .map_or(self.default, |&(_, level)| level)
    }

    fn max_level(&self) -> LevelFilter {
        self.targets
            .iter()
            .map(|&(_, level)| level)
            .fold(self.default, Ord::max)
    }
}

impl log::Log for TargetLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {} - {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Parse comma-separated directives: a bare level sets the default, and
/// `target=level` sets the level for targets starting with `target`.
/// Unparseable directives are skipped.
fn parse_directives(spec: &str) -> TargetLogger {
    let mut default = LevelFilter::Info;
    let mut targets: Vec<(String, LevelFilter)> = Vec::new();
    for directive in spec.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        match directive.split_once('=') {
            Some((target, level)) => {
                if let Ok(level) = level.trim().parse() {
                    targets.push((target.trim().to_string(), level));
                }
            }
            None => {
                if let Ok(level) = directive.parse() {
                    default = level;
                }
            }
        }
    }
    targets.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    TargetLogger { default, targets }
}

/// Initialize logging from the `BATTLESHIP_LOG` environment variable.
/// Defaults to `info` if the variable is not set. Output goes to stderr.
pub fn init_logging() {
    let logger = parse_directives(&env::var("BATTLESHIP_LOG").unwrap_or_default());
    let level = logger.max_level();
    let _ = log::set_boxed_logger(Box::new(logger)).map(|()| log::set_max_level(level));
}
