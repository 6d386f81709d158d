//! Ready-made games.
//!
//! - [`classic`]: textbook games whose equilibria are known, used to
//!   validate the analyses and as demos.
//! - [`random`]: seeded random tables for surveys and benchmarks.

pub mod classic;
pub mod random;
