use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A multiset of coins: denomination → number of coins of that value.
///
/// Only denominations with a positive count are stored, so two
/// decompositions describing the same coins are equal (and hash equal)
/// regardless of the order the coins were added in.
///
/// # Examples
///
/// ```
/// use coin_change::core::decomposition::Decomposition;
///
/// let mut a = Decomposition::new();
/// a.add_coin(3);
/// a.add_coin(1);
/// a.add_coin(3);
///
/// let b: Decomposition = [(1, 1), (3, 2)].into_iter().collect();
/// assert_eq!(a, b);
/// assert_eq!(a.coin_count(), 3);
/// assert_eq!(a.total_value(), 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "BTreeMap<u64, u64>", into = "BTreeMap<u64, u64>")]
pub struct Decomposition {
    coins: BTreeMap<u64, u64>,
}

impl Decomposition {
    /// The empty decomposition (zero coins, value zero).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_coin(&mut self, denomination: u64) {
        self.add_coins(denomination, 1);
    }

    /// Add `count` coins of one denomination. Adding zero coins is a no-op.
    pub fn add_coins(&mut self, denomination: u64, count: u64) {
        if count == 0 {
            return;
        }
        *self.coins.entry(denomination).or_insert(0) += count;
    }

    /// A copy of this decomposition with one more coin of `denomination`.
    pub fn with_coin(&self, denomination: u64) -> Self {
        let mut extended = self.clone();
        extended.add_coin(denomination);
        extended
    }

    /// How many coins of `denomination` are used (zero if absent).
    pub fn count_of(&self, denomination: u64) -> u64 {
        self.coins.get(&denomination).copied().unwrap_or(0)
    }

    /// Total number of coins.
    pub fn coin_count(&self) -> u64 {
        self.coins.values().sum()
    }

    /// Sum of face values.
    pub fn total_value(&self) -> u64 {
        self.coins.iter().map(|(d, n)| d * n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Denominations in use, ascending.
    pub fn denominations(&self) -> impl Iterator<Item = u64> + '_ {
        self.coins.keys().copied()
    }

    /// `(denomination, count)` pairs, ascending by denomination.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.coins.iter().map(|(&d, &n)| (d, n))
    }
}

impl FromIterator<(u64, u64)> for Decomposition {
    fn from_iter<T: IntoIterator<Item = (u64, u64)>>(iter: T) -> Self {
        let mut decomposition = Self::new();
        for (denomination, count) in iter {
            decomposition.add_coins(denomination, count);
        }
        decomposition
    }
}

impl From<BTreeMap<u64, u64>> for Decomposition {
    fn from(coins: BTreeMap<u64, u64>) -> Self {
        coins.into_iter().collect()
    }
}

impl From<Decomposition> for BTreeMap<u64, u64> {
    fn from(decomposition: Decomposition) -> Self {
        decomposition.coins
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "∅");
        }
        // Largest coin first.
        let parts: Vec<String> = self
            .coins
            .iter()
            .rev()
            .map(|(d, n)| format!("{}×{}", d, n))
            .collect();
        write!(f, "{}", parts.join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_decomposition() {
        let d = Decomposition::new();
        assert!(d.is_empty());
        assert_eq!(d.coin_count(), 0);
        assert_eq!(d.total_value(), 0);
        assert_eq!(d.to_string(), "∅");
    }

    #[test]
    fn test_zero_count_not_stored() {
        let mut d = Decomposition::new();
        d.add_coins(25, 0);
        assert!(d.is_empty());

        let from_pairs: Decomposition = [(5, 0), (1, 2)].into_iter().collect();
        assert_eq!(from_pairs.denominations().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut a = Decomposition::new();
        a.add_coin(4);
        a.add_coin(1);
        a.add_coin(1);

        let mut b = Decomposition::new();
        b.add_coin(1);
        b.add_coin(4);
        b.add_coin(1);

        assert_eq!(a, b);
        let set: HashSet<Decomposition> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_with_coin_leaves_original() {
        let base: Decomposition = [(3, 1)].into_iter().collect();
        let extended = base.with_coin(3);
        assert_eq!(base.count_of(3), 1);
        assert_eq!(extended.count_of(3), 2);
        assert_eq!(extended.count_of(4), 0);
    }

    #[test]
    fn test_display_largest_first() {
        let d: Decomposition = [(1, 1), (50, 1), (25, 1)].into_iter().collect();
        assert_eq!(d.to_string(), "50×1 + 25×1 + 1×1");
    }

    #[test]
    fn test_json_shape() {
        let d: Decomposition = [(3, 2)].into_iter().collect();
        assert_eq!(serde_json::to_string(&d).unwrap(), r#"{"3":2}"#);
        let back: Decomposition = serde_json::from_str(r#"{"3":2}"#).unwrap();
        assert_eq!(back, d);

        let with_zero: Decomposition = serde_json::from_str(r#"{"3":2,"5":0}"#).unwrap();
        assert_eq!(with_zero, d);
    }
}
