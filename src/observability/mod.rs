//! Observability support.
//!
//! Structured logging via `tracing`; see [`init_tracing`] for subscriber
//! setup. Store and storage operations open debug spans so a `debug` level
//! shows the full flow of each command.

pub mod init;

pub use init::init_tracing;
