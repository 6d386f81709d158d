//! Solution concepts for finite strategic-form (normal-form) games.
//!
//! # Overview
//!
//! A game is loaded as a [`PayoffTable`]: row 0 declares each player's
//! strategy count, every following row is a pure-strategy profile followed
//! by one payoff per player. The table is turned into a dense
//! [`PayoffTensor`] for the analyses that need random access.
//!
//! | Analysis                | Input         | Players | Function                 |
//! |-------------------------|---------------|---------|--------------------------|
//! | Best responses          | tensor        | any     | [`best_responses`]       |
//! | Pure Nash equilibria    | tensor        | any     | [`pure_nash`]            |
//! | Dominant strategies     | tensor        | any     | [`dominant_strategies`]  |
//! | Pareto optimality       | table         | any     | [`pareto_optimal`]       |
//! | Security levels         | table         | any     | [`security_level`]       |
//! | Mixed equilibrium       | tensor        | 2       | [`mixed_nash`]           |
//! | Zero-sum value          | tensor        | 2       | [`game_value`]           |
//!
//! [`GameAnalysis`] runs all of them at once.
//!
//! # Example
//!
//! ```
//! use strategic_solver::nfg::{GameAnalysis, PayoffTable, SolverConfig};
//!
//! let table = PayoffTable::from_csv_str(
//!     "2,2\n0,0,3,3\n0,1,0,5\n1,0,5,0\n1,1,1,1\n",
//! ).unwrap();
//! let report = GameAnalysis::run(&table, &SolverConfig::default()).unwrap();
//! assert_eq!(report.pure_nash, vec![vec![1, 1]]);
//! ```
//!
//! Payoffs are integers and are compared exactly. The only floating-point
//! code is the mixed solver, whose feasibility and singularity checks use
//! [`SolverConfig::tolerance`].

pub mod analysis;
pub mod best_response;
pub mod config;
pub mod dominance;
pub mod error;
pub mod mixed;
pub mod nash;
pub mod pareto;
pub mod profile;
pub mod security;
pub mod table;
pub mod tensor;
pub mod zero_sum;

#[cfg(test)]
pub(crate) mod testing;

pub use analysis::GameAnalysis;
pub use best_response::{best_responses, best_strategies};
pub use config::{ConfigError, SolverConfig};
pub use dominance::{dominant_strategies, Dominance};
pub use error::{GameError, GameResult, TableError};
pub use mixed::{mixed_nash, MixedEquilibrium};
pub use nash::{is_pure_nash, pure_nash, pure_nash_with};
pub use pareto::{pareto_dominates, pareto_optimal};
pub use profile::{profiles, Profile, Strategy};
pub use security::{security_level, security_levels};
pub use table::{Payoff, PayoffRow, PayoffTable};
pub use tensor::PayoffTensor;
pub use zero_sum::{game_value, value_bounds, SaddleBounds};
