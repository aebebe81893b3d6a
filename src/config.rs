//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;

use crate::store::{RECORD_TTL_SECS, SWEEP_INTERVAL_SECS};

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration parameters.
///
/// Only the port is read from the environment. Record lifetime and sweep
/// interval are fixed and carried here so startup can report them.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime of every record in seconds
    pub record_ttl_secs: i64,
    /// Interval between sweeper passes in seconds
    pub sweep_interval_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            record_ttl_secs: RECORD_TTL_SECS,
            sweep_interval_secs: SWEEP_INTERVAL_SECS,
        }
    }
}
