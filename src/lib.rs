//! # Strategic Solver
//!
//! Solution concepts for finite N-player strategic-form games given as
//! integer payoff tables.
//!
//! ## Features
//!
//! - **Pure Nash equilibria** for any number of players, optionally
//!   computed in parallel
//! - **Dominant strategies** (strict and weak) and **Pareto optimality**
//! - **Security levels** (maximin payoffs) for every player
//! - **Mixed equilibria** for 2×2 and 3×3 two-player games
//! - **Zero-sum value** via maximin/minimax
//!
//! ## Quick Start
//!
//! ```
//! use strategic_solver::nfg::{GameAnalysis, PayoffTable, SolverConfig};
//!
//! let table = PayoffTable::from_rows(vec![
//!     vec![2, 2],
//!     vec![0, 0, 1, -1],
//!     vec![0, 1, -1, 1],
//!     vec![1, 0, -1, 1],
//!     vec![1, 1, 1, -1],
//! ]).unwrap();
//!
//! let report = GameAnalysis::run(&table, &SolverConfig::default()).unwrap();
//! assert!(report.pure_nash.is_empty());
//! assert!(report.mixed.is_some());
//! ```
//!
//! ## Modules
//!
//! - [`nfg`]: payoff tables, tensors and every analysis
//! - [`games`]: reference games and random game generation
//!
//! ## Architecture
//!
//! ```text
//!         CSV / JSON / rows
//!                │
//!                ▼
//!          PayoffTable ───────────────┬──────────────────┐
//!                │                    │                  │
//!                ▼                    ▼                  ▼
//!          PayoffTensor            Pareto            Security
//!                │
//!     ┌──────────┼───────────┬──────────────┬──────────────┐
//!     ▼          ▼           ▼              ▼              ▼
//!  Best resp.  Nash      Dominance        Mixed        Zero-sum
//! ```

#![warn(missing_docs)]

/// Normal-form game analysis.
///
/// Table loading, the payoff tensor and all solution concepts.
pub mod nfg;

/// Game implementations module.
///
/// Textbook games with known solutions and random game generation.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use nfg::{GameAnalysis, GameError, PayoffTable, PayoffTensor, SolverConfig, TableError};
