use crate::core::amount::Amount;
use crate::core::decomposition::Decomposition;
use crate::core::denomination::{DenominationSet, InvalidArgument};
use serde::{Deserialize, Serialize};

/// Result of a greedy decomposition, including whatever could not be paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedyOutcome {
    /// The amount that was requested.
    pub amount: Amount,
    /// Coins taken, largest denomination first.
    pub decomposition: Decomposition,
    /// Value left over once no coin fits. Always below the smallest coin.
    pub remainder: u64,
}

impl GreedyOutcome {
    /// True when the coins add up to the full amount.
    pub fn is_exact(&self) -> bool {
        self.remainder == 0
    }
}

/// The greedy change-making heuristic.
///
/// Repeatedly takes as many of the largest fitting coin as possible. This is
/// fast and optimal for canonical coin systems such as {1, 2, 5, 10, 25, 50},
/// but not in general: for {1, 3, 4} and amount 6 it returns 4+1+1 where
/// 3+3 would do.
pub struct GreedyDecomposer;

impl GreedyDecomposer {
    /// Decompose `amount` greedily.
    ///
    /// If the coins cannot represent `amount` exactly, the returned coins sum
    /// to less than `amount`; callers must compare
    /// [`Decomposition::total_value`] with the amount, or use
    /// [`GreedyDecomposer::decompose_with_remainder`].
    pub fn decompose(denominations: &DenominationSet, amount: Amount) -> Decomposition {
        Self::decompose_with_remainder(denominations, amount).decomposition
    }

    /// Decompose `amount` greedily and report the unpaid remainder.
    pub fn decompose_with_remainder(denominations: &DenominationSet, amount: Amount) -> GreedyOutcome {
        let mut remaining = amount.value();
        let mut decomposition = Decomposition::new();

        for coin in denominations.descending() {
            let count = remaining / coin;
            if count > 0 {
                decomposition.add_coins(coin, count);
                remaining -= count * coin;
            }
        }

        if remaining > 0 {
            log::debug!(
                "greedy left {} of {} unpaid with coins [{}]",
                remaining,
                amount,
                denominations
            );
        }

        GreedyOutcome {
            amount,
            decomposition,
            remainder: remaining,
        }
    }
}

/// Greedy decomposition over raw caller input.
///
/// # Examples
///
/// ```
/// use coin_change::optimization::greedy::decompose_greedy;
///
/// let coins = decompose_greedy(&[1, 2, 5, 10, 25, 50], 93).unwrap();
/// assert_eq!(coins.total_value(), 93);
/// assert_eq!(coins.coin_count(), 6);
/// ```
pub fn decompose_greedy(denominations: &[i64], amount: i64) -> Result<Decomposition, InvalidArgument> {
    let amount = Amount::new(amount)?;
    let denominations = DenominationSet::new(denominations.iter().copied())?;
    Ok(GreedyDecomposer::decompose(&denominations, amount))
}
