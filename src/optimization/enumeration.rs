use crate::core::amount::Amount;
use crate::core::decomposition::Decomposition;
use crate::core::denomination::{DenominationSet, InvalidArgument};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Every distinct decomposition of an amount that uses the minimum number of coins.
///
/// Equality ignores the order solutions were discovered in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimalSolutionSet {
    amount: Amount,
    /// `None` when the amount cannot be formed at all.
    min_count: Option<u64>,
    solutions: Vec<Decomposition>,
}

impl OptimalSolutionSet {
    /// The amount these solutions pay.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Minimum number of coins, or `None` if the amount is unrepresentable.
    pub fn min_count(&self) -> Option<u64> {
        self.min_count
    }

    pub fn solutions(&self) -> &[Decomposition] {
        &self.solutions
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn is_representable(&self) -> bool {
        !self.solutions.is_empty()
    }

    pub fn contains(&self, decomposition: &Decomposition) -> bool {
        self.solutions.contains(decomposition)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decomposition> {
        self.solutions.iter()
    }

    /// Solutions in a canonical order, for stable display and comparison.
    pub fn sorted(&self) -> Vec<Decomposition> {
        let mut sorted = self.solutions.clone();
        sorted.sort();
        sorted
    }
}

impl PartialEq for OptimalSolutionSet {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
            && self.min_count == other.min_count
            && self.sorted() == other.sorted()
    }
}

impl Eq for OptimalSolutionSet {}

impl IntoIterator for OptimalSolutionSet {
    type Item = Decomposition;
    type IntoIter = std::vec::IntoIter<Decomposition>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

impl<'a> IntoIterator for &'a OptimalSolutionSet {
    type Item = &'a Decomposition;
    type IntoIter = std::slice::Iter<'a, Decomposition>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}

impl std::fmt::Display for OptimalSolutionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.min_count {
            None => write!(f, "{} = (no exact representation)", self.amount),
            Some(count) => {
                let parts: Vec<String> = self.sorted().iter().map(|d| d.to_string()).collect();
                write!(
                    f,
                    "{} = {}  [{} coin(s), {} way(s)]",
                    self.amount,
                    parts.join(" or "),
                    count,
                    self.solutions.len()
                )
            }
        }
    }
}

/// Exhaustive minimal-coin enumeration by bottom-up dynamic programming.
///
/// For every sub-amount `0..=amount` the engine keeps the best known coin
/// count and every distinct decomposition achieving it. A denomination that
/// strictly improves a sub-amount replaces its solutions; one that ties adds
/// the new decompositions not already present.
pub struct MinCoinEnumerator;

impl MinCoinEnumerator {
    /// Enumerate all minimal-count decompositions of `amount`.
    ///
    /// # Algorithm
    ///
    /// 1. `best[0] = 0`, `solutions[0] = {∅}`; every other sub-amount starts unreachable.
    /// 2. For `i` in `1..=amount`, for each coin `d ≤ i` with `i - d` reachable:
    ///    the candidate count is `best[i - d] + 1`.
    ///    - Better than `best[i]`: replace `solutions[i]` with every
    ///      `solutions[i - d]` entry plus one `d`.
    ///    - Equal: add those extended entries that are not already present.
    ///    - Worse: ignore.
    /// 3. Return `solutions[amount]`.
    ///
    /// The resulting set does not depend on the order coins are examined in.
    /// Unreachable sub-amounts are tracked as `None`, never as a large count.
    ///
    /// # Examples
    ///
    /// ```
    /// use coin_change::core::amount::Amount;
    /// use coin_change::core::denomination::DenominationSet;
    /// use coin_change::optimization::enumeration::MinCoinEnumerator;
    ///
    /// let coins = DenominationSet::new([1, 3, 4]).unwrap();
    /// let result = MinCoinEnumerator::enumerate(&coins, Amount::from(6));
    /// assert_eq!(result.min_count(), Some(2));
    /// assert_eq!(result.len(), 1);
    /// assert_eq!(result.solutions()[0].count_of(3), 2);
    /// ```
    pub fn enumerate(denominations: &DenominationSet, amount: Amount) -> OptimalSolutionSet {
        let target = amount.as_index();
        let mut best: Vec<Option<u64>> = vec![None; target + 1];
        let mut solutions: Vec<Vec<Decomposition>> = vec![Vec::new(); target + 1];

        best[0] = Some(0);
        solutions[0].push(Decomposition::new());

        for i in 1..=target {
            let (done, rest) = solutions.split_at_mut(i);
            let current = &mut rest[0];
            let mut seen: HashSet<Decomposition> = HashSet::new();

            for coin in denominations.iter() {
                let step = coin as usize;
                if step > i {
                    // Ascending order: no larger coin fits either.
                    break;
                }
                let prev = i - step;
                let Some(prev_count) = best[prev] else {
                    continue;
                };
                let candidate = prev_count + 1;

                let known_best = best[i];
                match known_best {
                    Some(known) if candidate > known => {}
                    Some(known) if candidate == known => {
                        for base in &done[prev] {
                            let extended = base.with_coin(coin);
                            if seen.insert(extended.clone()) {
                                current.push(extended);
                            }
                        }
                    }
                    _ => {
                        log::trace!("sub-amount {}: {} coin(s) via {}", i, candidate, coin);
                        best[i] = Some(candidate);
                        current.clear();
                        seen.clear();
                        for base in &done[prev] {
                            let extended = base.with_coin(coin);
                            seen.insert(extended.clone());
                            current.push(extended);
                        }
                    }
                }
            }
        }

        let min_count = best[target];
        let result = std::mem::take(&mut solutions[target]);
        log::debug!(
            "enumerated {} optimal decomposition(s) of {} with coins [{}], min count {:?}",
            result.len(),
            amount,
            denominations,
            min_count
        );

        OptimalSolutionSet {
            amount,
            min_count,
            solutions: result,
        }
    }

    /// Minimum number of coins for `amount`, without tracking the combinations.
    ///
    /// Returns `None` if no combination of the coins sums to `amount`.
    pub fn min_count(denominations: &DenominationSet, amount: Amount) -> Option<u64> {
        let target = amount.as_index();
        let mut best: Vec<Option<u64>> = vec![None; target + 1];
        best[0] = Some(0);

        for i in 1..=target {
            let fewest = denominations
                .iter()
                .take_while(|&coin| coin as usize <= i)
                .filter_map(|coin| best[i - coin as usize])
                .min();
            best[i] = fewest.map(|count| count + 1);
        }

        best[target]
    }
}

/// Minimal-coin enumeration over raw caller input.
///
/// Fails with [`InvalidArgument`] for a negative amount, a non-positive
/// coin, or no coins at all. An unrepresentable amount is not an error: it
/// yields an empty set.
///
/// # Examples
///
/// ```
/// use coin_change::optimization::enumeration::enumerate_min_solutions;
///
/// assert!(enumerate_min_solutions(&[2], 1).unwrap().is_empty());
/// assert_eq!(enumerate_min_solutions(&[1, 3, 4, 6, 10, 25], 7).unwrap().len(), 2);
/// ```
pub fn enumerate_min_solutions(
    denominations: &[i64],
    amount: i64,
) -> Result<OptimalSolutionSet, InvalidArgument> {
    let amount = Amount::new(amount)?;
    let denominations = DenominationSet::new(denominations.iter().copied())?;
    Ok(MinCoinEnumerator::enumerate(&denominations, amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coins(values: &[i64]) -> DenominationSet {
        DenominationSet::new(values.iter().copied()).unwrap()
    }

    fn decomposition(pairs: &[(u64, u64)]) -> Decomposition {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_zero_amount_has_empty_solution() {
        let result = MinCoinEnumerator::enumerate(&coins(&[2, 7]), Amount::ZERO);
        assert_eq!(result.min_count(), Some(0));
        assert_eq!(result.solutions(), &[Decomposition::new()]);
    }

    #[test]
    fn test_unreachable_is_empty() {
        let result = MinCoinEnumerator::enumerate(&coins(&[2]), Amount::from(1));
        assert!(result.is_empty());
        assert!(!result.is_representable());
        assert_eq!(result.min_count(), None);
    }

    #[test]
    fn test_unreachable_sub_amounts_without_unit_coin() {
        // 1 and 3 are unreachable with {2, 5}; 11 = 5+2+2+2 still is.
        let result = MinCoinEnumerator::enumerate(&coins(&[2, 5]), Amount::from(11));
        assert_eq!(result.min_count(), Some(4));
        assert_eq!(result.solutions(), &[decomposition(&[(2, 3), (5, 1)])]);
    }

    #[test]
    fn test_beats_greedy() {
        let result = MinCoinEnumerator::enumerate(&coins(&[1, 3, 4]), Amount::from(6));
        assert_eq!(result.min_count(), Some(2));
        assert_eq!(result.solutions(), &[decomposition(&[(3, 2)])]);
    }

    #[test]
    fn test_ties_are_all_reported() {
        let result = MinCoinEnumerator::enumerate(&coins(&[1, 3, 4, 6, 10, 25]), Amount::from(7));
        assert_eq!(result.min_count(), Some(2));
        assert_eq!(
            result.sorted(),
            vec![decomposition(&[(1, 1), (6, 1)]), decomposition(&[(3, 1), (4, 1)])]
        );
    }

    #[test]
    fn test_no_duplicates_from_different_paths() {
        // 5+1 and 1+5 are reached through both sub-amounts 1 and 5.
        let result = MinCoinEnumerator::enumerate(&coins(&[1, 5]), Amount::from(6));
        assert_eq!(result.len(), 1);
        assert_eq!(result.solutions()[0], decomposition(&[(1, 1), (5, 1)]));
    }

    #[test]
    fn test_min_count_agrees_with_enumeration() {
        let set = coins(&[1, 3, 4, 6, 10, 25]);
        for amount in 0..=90u64 {
            let enumerated = MinCoinEnumerator::enumerate(&set, Amount::from(amount));
            assert_eq!(
                MinCoinEnumerator::min_count(&set, Amount::from(amount)),
                enumerated.min_count(),
                "amount {}",
                amount
            );
        }
    }

    #[test]
    fn test_min_count_unreachable() {
        assert_eq!(MinCoinEnumerator::min_count(&coins(&[4, 6]), Amount::from(7)), None);
        assert_eq!(MinCoinEnumerator::min_count(&coins(&[4, 6]), Amount::from(10)), Some(2));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = OptimalSolutionSet {
            amount: Amount::from(7),
            min_count: Some(2),
            solutions: vec![decomposition(&[(1, 1), (6, 1)]), decomposition(&[(3, 1), (4, 1)])],
        };
        let b = OptimalSolutionSet {
            amount: Amount::from(7),
            min_count: Some(2),
            solutions: vec![decomposition(&[(3, 1), (4, 1)]), decomposition(&[(1, 1), (6, 1)])],
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let result = MinCoinEnumerator::enumerate(&coins(&[1, 3, 4]), Amount::from(6));
        assert_eq!(result.to_string(), "6 = 3×2  [2 coin(s), 1 way(s)]");

        let none = MinCoinEnumerator::enumerate(&coins(&[2]), Amount::from(3));
        assert_eq!(none.to_string(), "3 = (no exact representation)");
    }

    #[test]
    fn test_raw_input_validation() {
        assert_eq!(
            enumerate_min_solutions(&[1, 2], -4).unwrap_err(),
            InvalidArgument::NegativeAmount { amount: -4 }
        );
        assert_eq!(
            enumerate_min_solutions(&[3, -1], 4).unwrap_err(),
            InvalidArgument::NonPositiveDenomination { value: -1 }
        );
        assert_eq!(
            enumerate_min_solutions(&[], 0).unwrap_err(),
            InvalidArgument::EmptyDenominationSet
        );
    }
}
