//! Interest rate instruments.

mod asset_swap;

pub use asset_swap::{AssetSwap, AssetSwapTerms, SwapDirection};
