//! South African market contract terms: JSE bonds and bond futures.

mod bond_future;
mod jse_bond;

pub use bond_future::JseBondFuture;
pub use jse_bond::{JseBond, DEFAULT_BOOKS_CLOSE_DAYS};
