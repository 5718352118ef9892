//! Blend Estimation SDK
//!
//! This crate provides the financial estimation layer for Blend lending
//! pools: pure calculations over ledger snapshots, producing the derived
//! figures a front end displays or uses to build transaction limits.
//!
//! # Overview
//!
//! The estimation SDK allows you to:
//! - Evaluate a reserve's piecewise-linear interest rate curve
//! - Convert collateral/debt shares to underlying amounts and derive
//!   supply/borrow APRs
//! - Value in-progress auctions (bad debt, interest, liquidation)
//! - Estimate backstop LP (Comet pool) joins, exits, and single-sided
//!   deposits with slippage bounds
//! - Convert emission rates into an annualized reward APR
//!
//! Every function here is stateless and side-effect free: the caller
//! fetches a consistent snapshot (pool reserves, oracle prices, backstop
//! pool state, auction records) and passes it in per evaluation. Nothing is
//! cached between calls, so concurrent evaluation over many reserves is
//! safe by construction. Missing upstream data surfaces as [`EstError`]
//! values, never as a silent 0.
//!
//! # Example
//!
//! ```rust
//! use blend_rs_est::{estimate_interest_rate, InterestCurve};
//!
//! let curve = InterestCurve {
//!     base_rate: 0.01,
//!     slope_low: 0.05,
//!     slope_high: 0.5,
//!     target_util: 0.75,
//!     max_util: 0.95,
//! };
//!
//! // At target utilization the gentle segment tops out
//! let rate = estimate_interest_rate(0.75, &curve, 1.0);
//! assert!((rate - 0.06).abs() < 1e-12);
//! ```

pub mod auction;
pub mod comet;
pub mod display;
pub mod emissions;
pub mod error;
pub mod fixed_math;
pub mod irm;
pub mod pool;
pub mod reserve;

// Re-export commonly used types
pub use error::{AssetId, EstError};

// Fixed-point exports
pub use fixed_math::{to_fixed, to_float, FixedAmount, SCALAR_7, SCALAR_9};

// Interest rate model exports
pub use irm::{
    curve_points, estimate_interest_rate, CurvePoint, InterestCurve, BASE_RATE_MODIFIER,
};

// Reserve exports
pub use reserve::{apr_to_apy, Reserve, ReserveConfig, ReserveData};

// Pool exports
pub use pool::{Pool, PoolOracle};

// Emissions exports
pub use emissions::estimate_emissions_apr;

// Auction exports
pub use auction::{estimate_auction, AuctionData, AuctionEstimate, AuctionQuote, AuctionType};

// Comet exports
pub use comet::{
    estimate_exit_pool, estimate_join_pool, estimate_lp_from_join,
    estimate_single_sided_deposit, lp_token_price, spot_price, BackstopToken, CometConfig,
    CometToken, TokenAmounts,
};
