#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod agent;
mod board;
pub mod catalog;
mod common;
mod config;
mod game;
mod mask;
mod piece;
pub mod rules;
#[cfg(feature = "std")]
mod agent_cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_node;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
mod referee;
#[cfg(feature = "std")]
mod session_handle;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
pub mod ui;

pub use agent::*;
pub use board::*;
pub use catalog::{Direction, Displacement};
pub use common::*;
pub use config::*;
pub use game::*;
pub use mask::{CellMask, CellMaskError, Cells};
pub use piece::*;
pub use rules::{MoveRequest, PieceRef, PlannedMove, Target};
#[cfg(feature = "std")]
pub use agent_cli::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_node::*;
#[cfg(feature = "std")]
pub use protocol::*;
#[cfg(feature = "std")]
pub use referee::*;
#[cfg(feature = "std")]
pub use session_handle::*;
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
