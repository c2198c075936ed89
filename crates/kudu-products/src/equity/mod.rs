//! Equity derivatives.

mod european_option;

pub use european_option::{EuropeanOption, PutOrCall};
