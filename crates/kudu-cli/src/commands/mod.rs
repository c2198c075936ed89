//! CLI command implementations.

pub mod asset_swap;
pub mod forward_price;
pub mod spot;

pub use asset_swap::AssetSwapArgs;
pub use forward_price::ForwardPriceArgs;
pub use spot::SpotArgs;
