//! Application layer: state, store operations, and command dispatch.
//!
//! - [`state`]: the central [`AppState`] container and its derivations
//! - [`store`]: every operation that mutates state (network + persistence)
//! - [`commands`]: typed user intents
//! - [`handler`]: the coordinator wiring commands to store operations and
//!   view renders

pub mod commands;
pub mod handler;
pub mod state;
pub mod store;

pub use commands::Command;
pub use handler::{App, Location};
pub use state::{AppState, SearchState};
pub use store::Store;
