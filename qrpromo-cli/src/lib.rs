//! QR Promo command-line front end.
//!
//! Exposes the masking, CPF, registration and admin rules as subcommands
//! so they can be exercised without the web pages. Nothing here talks to
//! the backend: commands print the request that would be sent, or explain
//! a reply passed in by hand.

pub mod commands;
pub mod config;

pub use commands::PreparedRequest;
pub use config::{default_config_path, CliConfig, DEFAULT_UTC_OFFSET_HOURS};
