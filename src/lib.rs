#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod console;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
pub mod prelude;
mod resolver;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use player::*;
pub use resolver::*;
pub use ship::*;
