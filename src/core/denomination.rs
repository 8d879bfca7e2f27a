use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when caller input cannot describe a change-making problem.
///
/// These are detected at the call boundary, before any computation starts.
/// An amount that simply cannot be formed from the coins is *not* an error:
/// it shows up as an empty solution set or a non-zero greedy remainder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("amount must be non-negative, got {amount}")]
    NegativeAmount { amount: i64 },
    #[error("denominations must be positive, got {value}")]
    NonPositiveDenomination { value: i64 },
    #[error("denomination set must not be empty")]
    EmptyDenominationSet,
    #[error("could not parse '{input}' as a coin value")]
    Unparseable { input: String },
}

/// The coin face values available for a computation.
///
/// Stored ascending with duplicates collapsed. Every value is strictly
/// positive and the set is never empty, so the algorithms never have to
/// re-check their input.
///
/// # Examples
///
/// ```
/// use coin_change::core::denomination::DenominationSet;
///
/// let coins = DenominationSet::new([25, 1, 10, 5, 10]).unwrap();
/// assert_eq!(coins.len(), 4);
/// assert_eq!(coins.descending().collect::<Vec<_>>(), vec![25, 10, 5, 1]);
/// assert!(DenominationSet::new([1, 0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u64>")]
pub struct DenominationSet(BTreeSet<u64>);

impl DenominationSet {
    /// Validate and collect raw coin values.
    pub fn new(values: impl IntoIterator<Item = i64>) -> Result<Self, InvalidArgument> {
        let mut coins = BTreeSet::new();
        for value in values {
            if value <= 0 {
                return Err(InvalidArgument::NonPositiveDenomination { value });
            }
            coins.insert(value as u64);
        }
        if coins.is_empty() {
            return Err(InvalidArgument::EmptyDenominationSet);
        }
        Ok(Self(coins))
    }

    /// Build from values already known to be positive, e.g. drawn from `1..=max`.
    pub(crate) fn from_positive(values: BTreeSet<u64>) -> Self {
        debug_assert!(!values.is_empty() && !values.contains(&0));
        Self(values)
    }

    /// Ascending iteration.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u64> + '_ {
        self.0.iter().copied()
    }

    /// Largest coin first, the order the greedy heuristic consumes.
    pub fn descending(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().rev().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn smallest(&self) -> u64 {
        self.0.first().copied().unwrap_or(1)
    }

    pub fn largest(&self) -> u64 {
        self.0.last().copied().unwrap_or(1)
    }

    pub fn contains(&self, value: u64) -> bool {
        self.0.contains(&value)
    }

    /// With a coin of value 1 every amount is representable.
    pub fn has_unit_coin(&self) -> bool {
        self.contains(1)
    }
}

impl fmt::Display for DenominationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", values.join(", "))
    }
}

impl FromStr for DenominationSet {
    type Err = InvalidArgument;

    /// Parse a comma-separated list such as `"1,2,5,10"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let value = part.parse::<i64>().map_err(|_| InvalidArgument::Unparseable {
                input: part.to_string(),
            })?;
            values.push(value);
        }
        Self::new(values)
    }
}

impl TryFrom<Vec<i64>> for DenominationSet {
    type Error = InvalidArgument;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<DenominationSet> for Vec<u64> {
    fn from(set: DenominationSet) -> Self {
        set.0.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let coins = DenominationSet::new([5, 1, 5, 1]).unwrap();
        assert_eq!(coins.len(), 2);
        assert_eq!(coins.iter().collect::<Vec<_>>(), vec![1, 5]);
    }

    #[test]
    fn test_descending_order() {
        let coins = DenominationSet::new([1, 50, 10, 25, 2, 5]).unwrap();
        assert_eq!(
            coins.descending().collect::<Vec<_>>(),
            vec![50, 25, 10, 5, 2, 1]
        );
        assert_eq!(coins.smallest(), 1);
        assert_eq!(coins.largest(), 50);
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            DenominationSet::new(Vec::<i64>::new()),
            Err(InvalidArgument::EmptyDenominationSet)
        );
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(
            DenominationSet::new([1, 0, 5]),
            Err(InvalidArgument::NonPositiveDenomination { value: 0 })
        );
        assert_eq!(
            DenominationSet::new([-3]),
            Err(InvalidArgument::NonPositiveDenomination { value: -3 })
        );
    }

    #[test]
    fn test_unit_coin() {
        assert!(DenominationSet::new([1, 3, 4]).unwrap().has_unit_coin());
        assert!(!DenominationSet::new([2, 4]).unwrap().has_unit_coin());
    }

    #[test]
    fn test_parse_list() {
        let coins: DenominationSet = " 1, 3,4 ,".parse().unwrap();
        assert_eq!(coins.to_string(), "1, 3, 4");

        let err = "1,x".parse::<DenominationSet>().unwrap_err();
        assert_eq!(
            err,
            InvalidArgument::Unparseable {
                input: "x".to_string()
            }
        );
    }

    #[test]
    fn test_serde_validates() {
        let coins: DenominationSet = serde_json::from_str("[10, 1, 5]").unwrap();
        assert_eq!(serde_json::to_string(&coins).unwrap(), "[1,5,10]");
        assert!(serde_json::from_str::<DenominationSet>("[1, -2]").is_err());
        assert!(serde_json::from_str::<DenominationSet>("[]").is_err());
    }
}
