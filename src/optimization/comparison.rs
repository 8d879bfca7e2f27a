use crate::core::amount::Amount;
use crate::core::denomination::DenominationSet;
use crate::optimization::enumeration::{MinCoinEnumerator, OptimalSolutionSet};
use crate::optimization::greedy::{GreedyDecomposer, GreedyOutcome};
use serde::{Deserialize, Serialize};

/// Greedy heuristic measured against the exhaustive optimum for one amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeComparison {
    /// The coins both solvers were given.
    pub denominations: DenominationSet,
    pub greedy: GreedyOutcome,
    pub optimal: OptimalSolutionSet,
}

impl ChangeComparison {
    /// Run both solvers independently on the same input.
    pub fn compute(denominations: &DenominationSet, amount: Amount) -> Self {
        ChangeComparison {
            denominations: denominations.clone(),
            greedy: GreedyDecomposer::decompose_with_remainder(denominations, amount),
            optimal: MinCoinEnumerator::enumerate(denominations, amount),
        }
    }

    /// True when greedy paid the amount exactly with a minimal number of coins.
    pub fn greedy_is_optimal(&self) -> bool {
        self.greedy.is_exact()
            && self.optimal.min_count() == Some(self.greedy.decomposition.coin_count())
    }

    /// Coins greedy used beyond the optimum.
    ///
    /// `None` when greedy failed to pay exactly or the amount is unrepresentable,
    /// since there is nothing meaningful to compare.
    pub fn excess_coins(&self) -> Option<u64> {
        if !self.greedy.is_exact() {
            return None;
        }
        let optimal = self.optimal.min_count()?;
        Some(self.greedy.decomposition.coin_count() - optimal)
    }

    /// Greedy coin count relative to the optimum (1.0 means optimal).
    pub fn excess_ratio(&self) -> f64 {
        match (self.excess_coins(), self.optimal.min_count()) {
            (Some(_), Some(0)) => 1.0,
            (Some(_), Some(optimal)) => {
                self.greedy.decomposition.coin_count() as f64 / optimal as f64
            }
            _ => f64::NAN,
        }
    }
}

impl std::fmt::Display for ChangeComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Change for {} ===", self.greedy.amount)?;
        writeln!(f, "Coins:       {}", self.denominations)?;
        write!(f, "Greedy:      {}", self.greedy.decomposition)?;
        if self.greedy.is_exact() {
            writeln!(f, "  [{} coin(s)]", self.greedy.decomposition.coin_count())?;
        } else {
            writeln!(f, "  [short by {}]", self.greedy.remainder)?;
        }
        match self.optimal.min_count() {
            Some(count) => {
                writeln!(f, "Optimal:     {} coin(s), {} way(s)", count, self.optimal.len())?;
                for solution in self.optimal.sorted() {
                    writeln!(f, "  {}", solution)?;
                }
            }
            None => writeln!(f, "Optimal:     no exact representation")?,
        }
        match self.excess_coins() {
            Some(0) => writeln!(f, "Verdict:     greedy is optimal"),
            Some(extra) => writeln!(f, "Verdict:     greedy uses {} extra coin(s)", extra),
            None => writeln!(f, "Verdict:     greedy cannot pay exactly"),
        }
    }
}
