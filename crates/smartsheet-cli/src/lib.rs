//! Library components of the Smartsheet attachment exporter CLI.

pub mod config;
pub mod logging;
