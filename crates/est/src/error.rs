//! Error types for the estimation library.

use thiserror::Error;

/// Type alias for a Soroban contract address identifying an asset
pub type AssetId = String;

/// Errors that can occur during estimation
///
/// Expected missing-data conditions surface as `Err` values so callers can
/// render a placeholder; they are never panics and never silently become 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstError {
    /// An auction or valuation referenced an asset the pool snapshot does
    /// not contain. The snapshot and the record disagree, so the whole
    /// estimate is unusable.
    #[error("reserve {asset} is not part of the pool snapshot")]
    MissingReserve { asset: AssetId },

    /// A required price was absent or non-positive
    #[error("required price is unavailable")]
    UnknownPrice,

    /// An AMM estimate was requested against a pool with no outstanding
    /// shares or an empty balance
    #[error("pool has no shares or balance to estimate against")]
    EmptyPool,
}
