//! Backstop token (Comet weighted pool) estimation.
//!
//! The backstop token is an LP share of a two-asset weighted AMM holding
//! BLND and USDC at 80/20 weights. These estimators predict the outcome of
//! pool operations before they are submitted: how much of each token a join
//! or exit moves, and how many LP shares a deposit mints. Weights and the
//! swap fee are protocol configuration, passed in via [`CometConfig`]
//! rather than baked into the formulas.
//!
//! Shares and balances are 7-decimal fixed-point throughout; each quantity
//! crosses into floating point exactly once, so rounding error is bounded
//! to a single conversion per input.

use serde::{Deserialize, Serialize};

use crate::error::EstError;
use crate::fixed_math::to_float;

/// State of the backstop token's liquidity pool, all 7-decimal fixed-point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackstopToken {
    /// Total LP shares outstanding
    pub shares: i128,
    /// BLND balance held by the pool
    pub blnd: i128,
    /// USDC balance held by the pool
    pub usdc: i128,
}

/// Weighted-pool parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CometConfig {
    /// BLND weight, in (0, 1); the USDC weight is the complement
    pub blnd_weight: f64,
    /// Swap fee charged on the traded portion of a single-sided deposit
    pub swap_fee: f64,
}

impl CometConfig {
    /// The USDC weight.
    pub fn usdc_weight(&self) -> f64 {
        1.0 - self.blnd_weight
    }
}

impl Default for CometConfig {
    /// The deployed backstop pool: 80/20 BLND/USDC with a 3% swap fee.
    fn default() -> Self {
        Self {
            blnd_weight: 0.8,
            swap_fee: 0.03,
        }
    }
}

/// One of the pool's constituent tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CometToken {
    Blnd,
    Usdc,
}

/// Token amounts produced by a join or exit estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TokenAmounts {
    pub blnd: f64,
    pub usdc: f64,
}

/// Estimate the BLND and USDC deposited by a proportional join.
///
/// Minting `to_mint` shares against a total of `S` requires each balance to
/// grow by `(S + to_mint) / S - 1`; `max_slippage` pads the amounts upward
/// to form transaction limits that tolerate pool movement.
pub fn estimate_join_pool(
    pool: &BackstopToken,
    to_mint: i128,
    max_slippage: f64,
) -> Result<TokenAmounts, EstError> {
    if pool.shares <= 0 {
        return Err(EstError::EmptyPool);
    }
    let ratio = ((pool.shares + to_mint) as f64) / (pool.shares as f64) - 1.0;
    Ok(TokenAmounts {
        blnd: to_float(pool.blnd, 7) * ratio * (1.0 + max_slippage),
        usdc: to_float(pool.usdc, 7) * ratio * (1.0 + max_slippage),
    })
}

/// Estimate the BLND and USDC withdrawn by a proportional exit.
///
/// `max_slippage` pads the amounts downward to form minimum-out limits.
pub fn estimate_exit_pool(
    pool: &BackstopToken,
    to_burn: i128,
    max_slippage: f64,
) -> Result<TokenAmounts, EstError> {
    if pool.shares <= 0 {
        return Err(EstError::EmptyPool);
    }
    let ratio = 1.0 - ((pool.shares - to_burn) as f64) / (pool.shares as f64);
    Ok(TokenAmounts {
        blnd: to_float(pool.blnd, 7) * ratio * (1.0 - max_slippage),
        usdc: to_float(pool.usdc, 7) * ratio * (1.0 - max_slippage),
    })
}

/// Estimate the LP shares minted by depositing a single token.
///
/// Weighted-pool bonding curve: a fee of `(1 - weight) * swap_fee` applies
/// to the implicitly traded portion, then
/// `shares = S * ((1 + net / balance)^weight - 1)`.
pub fn estimate_single_sided_deposit(
    pool: &BackstopToken,
    config: &CometConfig,
    token: CometToken,
    amount: i128,
) -> Result<f64, EstError> {
    let (balance, weight) = match token {
        CometToken::Blnd => (pool.blnd, config.blnd_weight),
        CometToken::Usdc => (pool.usdc, config.usdc_weight()),
    };
    if pool.shares <= 0 || balance <= 0 {
        return Err(EstError::EmptyPool);
    }
    let weighted_fee = (1.0 - weight) * config.swap_fee;
    let amount_net_fees = to_float(amount, 7) * (1.0 - weighted_fee);
    let ratio = 1.0 + amount_net_fees / to_float(balance, 7);
    Ok(to_float(pool.shares, 7) * (ratio.powf(weight) - 1.0))
}

/// Estimate the LP shares minted by a proportional join funded with fixed
/// BLND and USDC budgets.
///
/// Each budget alone supports some join size; the smaller of the two is the
/// binding constraint, since a proportional join draws both tokens at the
/// pool's ratio. `max_slippage` discounts both budgets first.
pub fn estimate_lp_from_join(
    pool: &BackstopToken,
    blnd: i128,
    usdc: i128,
    max_slippage: f64,
) -> Result<f64, EstError> {
    if pool.shares <= 0 || pool.blnd <= 0 || pool.usdc <= 0 {
        return Err(EstError::EmptyPool);
    }
    let shares = to_float(pool.shares, 7);
    let blnd_ratio = to_float(blnd, 7) * (1.0 - max_slippage) / to_float(pool.blnd, 7);
    let usdc_ratio = to_float(usdc, 7) * (1.0 - max_slippage) / to_float(pool.usdc, 7);
    Ok((blnd_ratio * shares).min(usdc_ratio * shares))
}

/// The pool's spot price of BLND, in USDC.
///
/// Weighted-pool spot formula: `(usdc / w_usdc) / (blnd / w_blnd)`.
pub fn spot_price(pool: &BackstopToken, config: &CometConfig) -> Result<f64, EstError> {
    if pool.blnd <= 0 || pool.usdc <= 0 {
        return Err(EstError::EmptyPool);
    }
    let blnd_per_weight = to_float(pool.blnd, 7) / config.blnd_weight;
    let usdc_per_weight = to_float(pool.usdc, 7) / config.usdc_weight();
    Ok(usdc_per_weight / blnd_per_weight)
}

/// The USD value of one LP share, given USD prices for both tokens.
pub fn lp_token_price(
    pool: &BackstopToken,
    blnd_price: f64,
    usdc_price: f64,
) -> Result<f64, EstError> {
    if pool.shares <= 0 {
        return Err(EstError::EmptyPool);
    }
    let value = to_float(pool.blnd, 7) * blnd_price + to_float(pool.usdc, 7) * usdc_price;
    Ok(value / to_float(pool.shares, 7))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed_math::SCALAR_7;

    fn test_pool() -> BackstopToken {
        BackstopToken {
            shares: 1_000 * SCALAR_7,
            blnd: 800 * SCALAR_7,
            usdc: 200 * SCALAR_7,
        }
    }

    #[test]
    fn test_join_pool_proportional() {
        // Minting 10% more shares takes 10% of each balance
        let amounts = estimate_join_pool(&test_pool(), 100 * SCALAR_7, 0.0).unwrap();
        assert!((amounts.blnd - 80.0).abs() < 1e-9);
        assert!((amounts.usdc - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_join_pool_slippage_pads_up() {
        let amounts = estimate_join_pool(&test_pool(), 100 * SCALAR_7, 0.01).unwrap();
        assert!((amounts.blnd - 80.8).abs() < 1e-9);
        assert!((amounts.usdc - 20.2).abs() < 1e-9);
    }

    #[test]
    fn test_exit_pool_proportional() {
        let amounts = estimate_exit_pool(&test_pool(), 100 * SCALAR_7, 0.0).unwrap();
        assert!((amounts.blnd - 80.0).abs() < 1e-9);
        assert!((amounts.usdc - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_exit_pool_slippage_pads_down() {
        let amounts = estimate_exit_pool(&test_pool(), 100 * SCALAR_7, 0.01).unwrap();
        assert!((amounts.blnd - 79.2).abs() < 1e-9);
        assert!((amounts.usdc - 19.8).abs() < 1e-9);
    }

    #[test]
    fn test_empty_pool_is_an_error() {
        let empty = BackstopToken {
            shares: 0,
            blnd: 0,
            usdc: 0,
        };
        assert_eq!(
            estimate_join_pool(&empty, SCALAR_7, 0.0),
            Err(EstError::EmptyPool)
        );
        assert_eq!(
            estimate_exit_pool(&empty, SCALAR_7, 0.0),
            Err(EstError::EmptyPool)
        );
        assert_eq!(
            estimate_single_sided_deposit(&empty, &CometConfig::default(), CometToken::Blnd, 1),
            Err(EstError::EmptyPool)
        );
        assert_eq!(
            estimate_lp_from_join(&empty, 1, 1, 0.0),
            Err(EstError::EmptyPool)
        );
    }

    #[test]
    fn test_single_sided_deposit_no_fee_formula() {
        // With zero fee: shares = S * ((1 + a/B)^w - 1)
        let pool = test_pool();
        let config = CometConfig {
            blnd_weight: 0.8,
            swap_fee: 0.0,
        };
        let shares =
            estimate_single_sided_deposit(&pool, &config, CometToken::Blnd, 80 * SCALAR_7)
                .unwrap();
        let expected = 1_000.0 * ((1.0 + 80.0 / 800.0_f64).powf(0.8) - 1.0);
        assert!((shares - expected).abs() < 1e-9);
    }

    #[test]
    fn test_single_sided_deposit_small_amount_is_near_linear() {
        // As a/B -> 0, shares -> S * w * a/B
        let pool = test_pool();
        let config = CometConfig {
            blnd_weight: 0.8,
            swap_fee: 0.0,
        };
        let amount = SCALAR_7 / 1_000; // 0.001 BLND against 800
        let shares =
            estimate_single_sided_deposit(&pool, &config, CometToken::Blnd, amount).unwrap();
        let linear = 1_000.0 * 0.8 * (0.001 / 800.0);
        assert!((shares - linear).abs() / linear < 1e-4);
    }

    #[test]
    fn test_single_sided_deposit_fee_reduces_shares() {
        let pool = test_pool();
        let with_fee = estimate_single_sided_deposit(
            &pool,
            &CometConfig::default(),
            CometToken::Usdc,
            50 * SCALAR_7,
        )
        .unwrap();
        let no_fee = estimate_single_sided_deposit(
            &pool,
            &CometConfig {
                swap_fee: 0.0,
                ..CometConfig::default()
            },
            CometToken::Usdc,
            50 * SCALAR_7,
        )
        .unwrap();
        assert!(with_fee < no_fee);
        assert!(with_fee > 0.0);
    }

    #[test]
    fn test_lp_from_join_takes_binding_constraint() {
        // 80 BLND supports a 10% join (100 shares); 200 USDC would support
        // 100%. BLND binds.
        let shares = estimate_lp_from_join(&test_pool(), 80 * SCALAR_7, 200 * SCALAR_7, 0.0)
            .unwrap();
        assert!((shares - 100.0).abs() < 1e-9);

        // Flip the binding side
        let shares = estimate_lp_from_join(&test_pool(), 800 * SCALAR_7, 10 * SCALAR_7, 0.0)
            .unwrap();
        assert!((shares - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_spot_price() {
        // 800 BLND / 0.8 and 200 USDC / 0.2 balance exactly: 1 BLND = 1 USDC
        let price = spot_price(&test_pool(), &CometConfig::default()).unwrap();
        assert!((price - 1.0).abs() < 1e-12);

        // Halving the USDC side halves the BLND price
        let pool = BackstopToken {
            usdc: 100 * SCALAR_7,
            ..test_pool()
        };
        let price = spot_price(&pool, &CometConfig::default()).unwrap();
        assert!((price - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_lp_token_price() {
        // (800 * $0.05 + 200 * $1.00) / 1000 shares = $0.24
        let price = lp_token_price(&test_pool(), 0.05, 1.0).unwrap();
        assert!((price - 0.24).abs() < 1e-12);
    }

    #[test]
    fn test_estimates_are_idempotent() {
        let pool = test_pool();
        let a = estimate_join_pool(&pool, 123 * SCALAR_7, 0.005).unwrap();
        let b = estimate_join_pool(&pool, 123 * SCALAR_7, 0.005).unwrap();
        assert_eq!(a.blnd.to_bits(), b.blnd.to_bits());
        assert_eq!(a.usdc.to_bits(), b.usdc.to_bits());
    }
}
