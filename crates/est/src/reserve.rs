//! Reserve valuation for a single pool asset.
//!
//! A reserve tracks one asset in a lending pool. Lender positions are held
//! as bTokens (collateral shares) and borrower debt as dTokens (debt
//! shares); both convert to underlying asset amounts through an exchange
//! rate that grows as interest accrues. This module converts between shares
//! and underlying, and derives the display yield figures (borrow APR,
//! supply APR, APY) from the reserve's rate curve.
//!
//! Everything here is a pure function of a [`ReserveConfig`] and
//! [`ReserveData`] snapshot; the caller re-fetches fresh snapshots per
//! evaluation.

use serde::{Deserialize, Serialize};

use crate::error::AssetId;
use crate::fixed_math::{to_float, SCALAR_9};
use crate::irm::{estimate_interest_rate, InterestCurve, BASE_RATE_MODIFIER};

/// Compounding periods per year used to derive APY from APR (weekly)
pub const COMPOUNDING_PERIODS: f64 = 52.0;

/// Static configuration of a reserve, set at pool deployment.
///
/// Rates and factors are 7-decimal fixed-point. Valid configurations have
/// `0 < util <= max_util <= 1.0` in fixed-point terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveConfig {
    /// The reserve's slot in the pool's reserve list
    pub index: u32,
    /// Decimals of the underlying token
    pub decimals: u32,
    /// Collateral factor (fixed-7)
    pub c_factor: i128,
    /// Liability factor (fixed-7)
    pub l_factor: i128,
    /// Target utilization (fixed-7)
    pub util: i128,
    /// Maximum utilization (fixed-7)
    pub max_util: i128,
    /// Base interest rate (fixed-7)
    pub r_base: i128,
    /// Rate slope below target utilization (fixed-7)
    pub r_one: i128,
    /// Rate slope above target utilization (fixed-7)
    pub r_two: i128,
}

/// Live state of a reserve at a ledger snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveData {
    /// Rate modifier scaling the base curve (fixed-9, 1e9 = unmodified)
    pub ir_modifier: i128,
    /// Collateral share exchange rate, underlying per bToken (fixed-9)
    pub b_rate: i128,
    /// Debt share exchange rate, underlying per dToken (fixed-9)
    pub d_rate: i128,
    /// Total underlying supplied, in the token's native decimals
    pub total_supply: i128,
    /// Total underlying borrowed, in the token's native decimals
    pub total_liabilities: i128,
}

/// A pool reserve: one asset's configuration and live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reserve {
    /// Contract address of the underlying asset
    pub asset: AssetId,
    pub config: ReserveConfig,
    pub data: ReserveData,
}

impl Reserve {
    /// The reserve's rate curve, decoded to floats.
    pub fn curve(&self) -> InterestCurve {
        InterestCurve {
            base_rate: to_float(self.config.r_base, 7),
            slope_low: to_float(self.config.r_one, 7),
            slope_high: to_float(self.config.r_two, 7),
            target_util: to_float(self.config.util, 7),
            max_util: to_float(self.config.max_util, 7),
        }
    }

    /// The reserve's rate modifier as a float (1.0 = unmodified curve).
    pub fn ir_modifier(&self) -> f64 {
        to_float(self.data.ir_modifier, 9)
    }

    /// Current utilization (borrowed / supplied), bounded to [0, 1].
    pub fn utilization(&self) -> f64 {
        if self.data.total_supply <= 0 {
            return 0.0;
        }
        let util = (self.data.total_liabilities as f64) / (self.data.total_supply as f64);
        util.clamp(0.0, 1.0)
    }

    /// Convert bTokens (collateral shares) to an underlying asset amount.
    pub fn to_asset_from_b_token(&self, b_tokens: i128) -> i128 {
        b_tokens * self.data.b_rate / SCALAR_9
    }

    /// Convert bTokens to a float underlying asset amount.
    pub fn to_asset_from_b_token_float(&self, b_tokens: i128) -> f64 {
        to_float(self.to_asset_from_b_token(b_tokens), self.config.decimals)
    }

    /// Convert dTokens (debt shares) to an underlying asset amount.
    pub fn to_asset_from_d_token(&self, d_tokens: i128) -> i128 {
        d_tokens * self.data.d_rate / SCALAR_9
    }

    /// Convert dTokens to a float underlying asset amount.
    pub fn to_asset_from_d_token_float(&self, d_tokens: i128) -> f64 {
        to_float(self.to_asset_from_d_token(d_tokens), self.config.decimals)
    }

    /// Convert an underlying asset amount to bTokens.
    pub fn to_b_token_from_asset(&self, amount: i128) -> i128 {
        if self.data.b_rate == 0 {
            return 0;
        }
        amount * SCALAR_9 / self.data.b_rate
    }

    /// Convert an underlying asset amount to dTokens.
    pub fn to_d_token_from_asset(&self, amount: i128) -> i128 {
        if self.data.d_rate == 0 {
            return 0;
        }
        amount * SCALAR_9 / self.data.d_rate
    }

    /// Borrow APR at current utilization with the live rate modifier.
    pub fn borrow_apr(&self) -> f64 {
        estimate_interest_rate(self.utilization(), &self.curve(), self.ir_modifier())
    }

    /// Borrow APR at current utilization with the modifier reset to 1.0.
    ///
    /// Shown next to [`Reserve::borrow_apr`] to isolate the modifier's
    /// effect on the rate.
    pub fn base_borrow_apr(&self) -> f64 {
        estimate_interest_rate(self.utilization(), &self.curve(), BASE_RATE_MODIFIER)
    }

    /// Supply APR: the borrow rate earned pro rata by suppliers, net of the
    /// backstop take rate.
    ///
    /// `supply_apr = borrow_apr * utilization * (1 - backstop_take_rate)`
    pub fn supply_apr(&self, backstop_take_rate: f64) -> f64 {
        self.borrow_apr() * self.utilization() * (1.0 - backstop_take_rate)
    }

    /// Collateral factor as a float.
    pub fn c_factor_float(&self) -> f64 {
        to_float(self.config.c_factor, 7)
    }

    /// Liability factor as a float.
    pub fn l_factor_float(&self) -> f64 {
        to_float(self.config.l_factor, 7)
    }
}

/// Convert an APR to an APY assuming weekly compounding.
pub fn apr_to_apy(apr: f64) -> f64 {
    (1.0 + apr / COMPOUNDING_PERIODS).powf(COMPOUNDING_PERIODS) - 1.0
}
