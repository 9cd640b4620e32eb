//! Recipe API access layer.
//!
//! This module owns everything that crosses the network boundary: the
//! timeout-racing HTTP client and the wire types that map API responses into
//! domain values. The state store is the only consumer; views and the
//! coordinator never see wire shapes.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{RecipeEnvelope, RecipeUpload, SearchEnvelope};
