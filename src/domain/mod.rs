//! Validated parameter types for splitting and recovery:
//! - [`Threshold`] - shares required for reconstruction (k >= 1)
//! - [`ShareCount`] - total shares to deal (n >= 1)
//! - [`ShareIndex`] - a share's x-coordinate (1..=n)
//! - [`SplitConfig`] - validated threshold and share count pair (k <= n)

mod config;
mod share_count;
mod share_index;
mod threshold;

pub use config::SplitConfig;
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;
