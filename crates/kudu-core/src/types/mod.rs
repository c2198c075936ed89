//! Domain value types.
//!
//! - [`Date`]: calendar date with tenor arithmetic
//! - [`Tenor`]: signed period such as `3M`
//! - [`Currency`]: ISO currency codes
//! - [`CashFlow`]: dated amount in a currency

mod cashflow;
mod currency;
mod date;
mod tenor;

pub use cashflow::CashFlow;
pub use currency::Currency;
pub use date::Date;
pub use tenor::{Tenor, TenorUnit};
