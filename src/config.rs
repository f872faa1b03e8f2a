//! Search configuration and logging setup shared by the binaries

use anyhow::{anyhow, Context, Result};

use std::fmt;

use crate::search::Algorithm;

/// The deepest search accepted from user input, a full-width tree this deep
/// already takes seconds
pub const MAX_DEPTH: usize = 8;

/// Environment variable overriding the search algorithm
pub const ALGORITHM_VAR: &str = "C4_ALGORITHM";
/// Environment variable overriding the search depth
pub const DEPTH_VAR: &str = "C4_DEPTH";

/// Log level used when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// How an AI player searches for its moves
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AlphaBeta,
            depth: 4,
        }
    }
}

impl SearchConfig {
    pub fn new(algorithm: Algorithm, depth: usize) -> Result<Self> {
        let config = Self { algorithm, depth };
        config.validate()?;
        Ok(config)
    }

    /// Checks the depth is usable for choosing moves
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(anyhow!("search depth must be at least 1 to choose a move"));
        }
        if self.depth > MAX_DEPTH {
            return Err(anyhow!(
                "search depth {} too large, the maximum is {}",
                self.depth,
                MAX_DEPTH
            ));
        }
        Ok(())
    }

    /// The default configuration with `C4_ALGORITHM` and `C4_DEPTH` overrides applied
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
        let mut config = Self::default();

        if let Some(algorithm) = lookup(ALGORITHM_VAR) {
            config.algorithm = algorithm
                .parse::<Algorithm>()
                .with_context(|| format!("invalid {}", ALGORITHM_VAR))?;
        }
        if let Some(depth) = lookup(DEPTH_VAR) {
            config.depth = depth
                .trim()
                .parse::<usize>()
                .with_context(|| format!("invalid {} '{}'", DEPTH_VAR, depth))?;
        }

        config.validate()?;
        Ok(config)
    }
}

impl fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (depth {})", self.algorithm, self.depth)
    }
}

/// Installs the global `tracing` subscriber, honouring `RUST_LOG` over `level`
pub fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .map_err(|err| anyhow!("failed to initialise logging: {}", err))
}
