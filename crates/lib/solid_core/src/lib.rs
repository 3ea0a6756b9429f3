//! # solid_core
//!
//! Identity and request metadata core of the Solid server: capability-gated
//! handlers, credentials extraction, header metadata parsing and the
//! password recovery interaction.

pub mod authentication;
pub mod handler;
pub mod http;
pub mod interaction;
pub mod metadata;
pub mod util;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
