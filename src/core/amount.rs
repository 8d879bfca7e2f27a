use crate::core::denomination::InvalidArgument;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative target value to be paid out in coins.
///
/// # Examples
///
/// ```
/// use coin_change::core::amount::Amount;
///
/// let amount = Amount::new(93).unwrap();
/// assert_eq!(amount.value(), 93);
/// assert!(Amount::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Validate a raw caller-supplied amount.
    pub fn new(amount: i64) -> Result<Self, InvalidArgument> {
        u64::try_from(amount)
            .map(Self)
            .map_err(|_| InvalidArgument::NegativeAmount { amount })
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Index into per-sub-amount tables.
    pub(crate) fn as_index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
