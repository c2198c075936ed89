//! Signed period lengths used to roll dates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use crate::error::KuduError;

/// Unit of a [`Tenor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenorUnit {
    /// Calendar days
    Days,
    /// Weeks of seven calendar days
    Weeks,
    /// Calendar months
    Months,
    /// Calendar years
    Years,
}

impl TenorUnit {
    /// Single-letter suffix used in tenor strings.
    #[must_use]
    pub fn suffix(&self) -> char {
        match self {
            TenorUnit::Days => 'D',
            TenorUnit::Weeks => 'W',
            TenorUnit::Months => 'M',
            TenorUnit::Years => 'Y',
        }
    }

    fn from_suffix(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'D' => Some(TenorUnit::Days),
            'W' => Some(TenorUnit::Weeks),
            'M' => Some(TenorUnit::Months),
            'Y' => Some(TenorUnit::Years),
            _ => None,
        }
    }
}

/// A signed period such as `3M`, `-6M` or `1Y`.
///
/// ```rust
/// use kudu_core::types::{Tenor, TenorUnit};
///
/// let t: Tenor = "3M".parse().unwrap();
/// assert_eq!(t.unit(), TenorUnit::Months);
/// assert_eq!(t.times(-2).to_string(), "-6M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tenor {
    amount: i32,
    unit: TenorUnit,
}

impl Tenor {
    /// Creates a tenor from a magnitude and unit.
    #[must_use]
    pub const fn new(amount: i32, unit: TenorUnit) -> Self {
        Self { amount, unit }
    }

    /// A tenor of `n` days.
    #[must_use]
    pub const fn days(n: i32) -> Self {
        Self::new(n, TenorUnit::Days)
    }

    /// A tenor of `n` weeks.
    #[must_use]
    pub const fn weeks(n: i32) -> Self {
        Self::new(n, TenorUnit::Weeks)
    }

    /// A tenor of `n` months.
    #[must_use]
    pub const fn months(n: i32) -> Self {
        Self::new(n, TenorUnit::Months)
    }

    /// A tenor of `n` years.
    #[must_use]
    pub const fn years(n: i32) -> Self {
        Self::new(n, TenorUnit::Years)
    }

    /// Signed magnitude.
    #[must_use]
    pub const fn amount(&self) -> i32 {
        self.amount
    }

    /// Period unit.
    #[must_use]
    pub const fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Scales the magnitude by `k`, keeping the unit.
    #[must_use]
    pub const fn times(&self, k: i32) -> Self {
        Self::new(self.amount * k, self.unit)
    }

    /// True for a zero-length tenor.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

impl Neg for Tenor {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.times(-1)
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.suffix())
    }
}

impl FromStr for Tenor {
    type Err = KuduError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let unit = chars
            .next_back()
            .and_then(TenorUnit::from_suffix)
            .ok_or_else(|| KuduError::invalid_tenor(s))?;
        let amount = chars
            .as_str()
            .parse::<i32>()
            .map_err(|_| KuduError::invalid_tenor(s))?;
        Ok(Self::new(amount, unit))
    }
}

impl TryFrom<String> for Tenor {
    type Error = KuduError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tenor> for String {
    fn from(tenor: Tenor) -> Self {
        tenor.to_string()
    }
}
