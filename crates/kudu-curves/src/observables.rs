//! Market observables: the identities of things a product needs fixings for.

use kudu_core::types::{Currency, Tenor};
use kudu_core::KuduError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A floating rate index such as `ZAR.JIBAR.3M`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloatRateIndex {
    name: String,
    currency: Currency,
    tenor: Tenor,
}

impl FloatRateIndex {
    /// Creates a new index.
    pub fn new(name: impl Into<String>, currency: Currency, tenor: Tenor) -> Self {
        Self {
            name: name.into(),
            currency,
            tenor,
        }
    }

    /// Three-month JIBAR.
    #[must_use]
    pub fn jibar_3m() -> Self {
        Self::new("JIBAR", Currency::ZAR, Tenor::months(3))
    }

    /// Index name without currency or tenor.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currency of the index.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Tenor of the rate.
    #[must_use]
    pub fn tenor(&self) -> Tenor {
        self.tenor
    }
}

impl fmt::Display for FloatRateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.currency, self.name, self.tenor)
    }
}

impl FromStr for FloatRateIndex {
    type Err = KuduError;

    /// Parses `CCY.NAME.TENOR`, e.g. `ZAR.JIBAR.3M`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        match parts.as_slice() {
            [ccy, name, tenor] if !name.is_empty() => Ok(Self::new(
                name.to_uppercase(),
                ccy.parse()?,
                tenor.parse()?,
            )),
            _ => Err(KuduError::InvalidIndex {
                input: s.to_string(),
            }),
        }
    }
}

/// An equity share whose price can be observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    name: String,
    currency: Currency,
}

impl Share {
    /// Creates a new share.
    pub fn new(name: impl Into<String>, currency: Currency) -> Self {
        Self {
            name: name.into(),
            currency,
        }
    }

    /// Ticker or name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currency the share trades in.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.currency, self.name)
    }
}

/// Anything a product may need a value for on a date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketObservable {
    /// A floating interest rate fixing.
    Rate(FloatRateIndex),
    /// A share price.
    Share(Share),
}

impl MarketObservable {
    /// Currency the observable is quoted in.
    #[must_use]
    pub fn currency(&self) -> Currency {
        match self {
            MarketObservable::Rate(index) => index.currency(),
            MarketObservable::Share(share) => share.currency(),
        }
    }
}

impl fmt::Display for MarketObservable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketObservable::Rate(index) => index.fmt(f),
            MarketObservable::Share(share) => share.fmt(f),
        }
    }
}

impl From<FloatRateIndex> for MarketObservable {
    fn from(index: FloatRateIndex) -> Self {
        MarketObservable::Rate(index)
    }
}

impl From<Share> for MarketObservable {
    fn from(share: Share) -> Self {
        MarketObservable::Share(share)
    }
}
