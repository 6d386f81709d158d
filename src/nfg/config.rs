//! Configuration options for the analyses.
//!
//! Payoffs are integers and are always compared exactly. The only floating
//! point work is in the mixed equilibrium solver, whose feasibility checks
//! use [`SolverConfig::tolerance`].

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Largest tolerance accepted by [`SolverConfig::validate`].
pub const MAX_TOLERANCE: f64 = 1e-3;

/// Configuration for the solvers.
///
/// # Example
/// ```
/// use strategic_solver::nfg::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.tolerance, 1e-9);
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Slack allowed when checking that mixed probabilities lie in `[0, 1]`
    /// and when deciding that a linear system is singular.
    pub tolerance: f64,

    /// Compute every player's best responses on the rayon pool before
    /// intersecting them.
    pub parallel: bool,

    /// Number of worker threads for the binaries.
    ///
    /// `None` uses all available cores.
    pub num_threads: Option<usize>,

    /// Seed for random game generation.
    ///
    /// If `None`, a random seed is used.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            parallel: false,
            num_threads: None,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Create a new SolverConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a configuration from a JSON string. Missing fields
    /// take their default values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Builder method: set the feasibility tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder method: enable or disable parallel best responses.
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    /// Builder method: set number of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 || self.tolerance > MAX_TOLERANCE {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if self.num_threads == Some(0) {
            return Err(ConfigError::InvalidThreads);
        }
        Ok(())
    }
}

/// Errors that can occur when loading or validating a configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The file could not be read.
    IoError(String),
    /// The JSON could not be parsed.
    ParseError(String),
    /// Tolerance is negative, not finite, or above [`MAX_TOLERANCE`].
    InvalidTolerance(f64),
    /// A thread count of zero was requested.
    InvalidThreads,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {}", e),
            Self::ParseError(e) => write!(f, "Parse error: {}", e),
            Self::InvalidTolerance(val) => {
                write!(f, "Tolerance {} is out of range [0, {}]", val, MAX_TOLERANCE)
            }
            Self::InvalidThreads => write!(f, "Thread count must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
