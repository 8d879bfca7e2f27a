//! Random change-making cases for benchmarks, stress runs and the CLI.
//!
//! Generates denomination sets and target amounts within configurable bounds.

use crate::core::amount::Amount;
use crate::core::denomination::DenominationSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Bounds for generating random change-making cases.
#[derive(Debug, Clone)]
pub struct CaseConfig {
    /// Number of distinct coins to draw (including the unit coin, if forced).
    pub denomination_count: usize,
    /// Largest face value a coin may have.
    pub max_denomination: u64,
    /// Largest target amount.
    pub max_amount: u64,
    /// Always include a coin of value 1, making every amount representable.
    pub include_unit_coin: bool,
    /// Fixed seed for reproducible cases. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            denomination_count: 5,
            max_denomination: 50,
            max_amount: 200,
            include_unit_coin: true,
            seed: None,
        }
    }
}

impl CaseConfig {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn draw_denominations(config: &CaseConfig, rng: &mut impl Rng) -> DenominationSet {
    let max = config.max_denomination.max(1);
    // Cannot draw more distinct values than the range holds.
    let wanted = config.denomination_count.clamp(1, max as usize);

    let mut values = BTreeSet::new();
    if config.include_unit_coin {
        values.insert(1);
    }
    while values.len() < wanted {
        values.insert(rng.gen_range(1..=max));
    }
    DenominationSet::from_positive(values)
}

/// Generate one random denomination set.
pub fn generate_denominations(config: &CaseConfig) -> DenominationSet {
    let mut rng = config.rng();
    draw_denominations(config, &mut rng)
}

/// Generate `count` random (denominations, amount) cases.
pub fn generate_cases(config: &CaseConfig, count: usize) -> Vec<(DenominationSet, Amount)> {
    let mut rng = config.rng();
    (0..count)
        .map(|_| {
            let denominations = draw_denominations(config, &mut rng);
            let amount = Amount::from(rng.gen_range(0..=config.max_amount));
            (denominations, amount)
        })
        .collect()
}
