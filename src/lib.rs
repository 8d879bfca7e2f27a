//! # coin-change
//!
//! Change-making engine: given coin denominations and a target amount,
//! produce a fast greedy answer or every decomposition that uses the
//! minimum possible number of coins.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: amounts, denomination sets, decompositions
//! - **optimization** — Greedy heuristic, exhaustive minimal-coin enumeration, comparison
//! - **simulation** — Random case generation for stress runs and benchmarks

pub mod core;
pub mod optimization;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::amount::Amount;
    pub use crate::core::decomposition::Decomposition;
    pub use crate::core::denomination::{DenominationSet, InvalidArgument};
    pub use crate::optimization::comparison::ChangeComparison;
    pub use crate::optimization::enumeration::{
        enumerate_min_solutions, MinCoinEnumerator, OptimalSolutionSet,
    };
    pub use crate::optimization::greedy::{decompose_greedy, GreedyDecomposer, GreedyOutcome};
}
