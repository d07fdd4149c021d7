#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod command;
mod common;
mod config;
#[cfg(feature = "std")]
mod coordinator;
mod game;
#[cfg(feature = "std")]
mod logging;
mod ship;
mod stats;
pub mod ui;

pub use board::*;
pub use command::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use coordinator::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
pub use stats::*;
