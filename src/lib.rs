#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
pub mod prelude;
mod ship;
mod targeting;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use player::*;
pub use ship::*;
pub use targeting::*;
