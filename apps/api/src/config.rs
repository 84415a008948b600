use anyhow::{bail, Context, Result};

use crate::water_jug::solver::DEFAULT_MAX_ROUNDS;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub solver_max_rounds: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let solver_max_rounds = match lookup("SOLVER_MAX_ROUNDS") {
            Some(raw) => raw
                .parse::<u32>()
                .context("SOLVER_MAX_ROUNDS must be a positive integer")?,
            None => DEFAULT_MAX_ROUNDS,
        };
        if solver_max_rounds == 0 {
            bail!("SOLVER_MAX_ROUNDS must be a positive integer");
        }

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            solver_max_rounds,
        })
    }
}
