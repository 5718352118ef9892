//! Interest rate model for Blend pool reserves.
//!
//! Blend prices borrowing with a piecewise-linear curve over utilization.
//! Below the target utilization the rate climbs gently from the base rate;
//! above it, a steeper slope pushes the rate up toward the maximum
//! utilization. The whole curve is then scaled by the reserve's rate
//! modifier, a multiplier the protocol adjusts over time to steer
//! utilization back toward its target.
//!
//! ```text
//! If utilization <= target:
//!     rate = base + (utilization / target) * slope_low
//! Else:
//!     rate = base + slope_low
//!            + ((utilization - target) / (max - target)) * slope_high
//!
//! borrow_rate = rate * modifier
//! ```
//!
//! The two segments meet exactly at the target utilization, so the curve is
//! continuous. Callers typically evaluate it twice: once with the reserve's
//! live modifier and once with a baseline modifier of 1.0, to show the
//! isolated effect of the modifier.

use serde::{Deserialize, Serialize};

/// Rate modifier that leaves the base curve unscaled
pub const BASE_RATE_MODIFIER: f64 = 1.0;

/// Parameters of a reserve's utilization-to-rate curve.
///
/// All fields are plain decimals (a rate of 5% is `0.05`), decoded from the
/// reserve's 7-decimal fixed-point configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestCurve {
    /// Rate at zero utilization
    pub base_rate: f64,
    /// Rate increase from zero to target utilization
    pub slope_low: f64,
    /// Rate increase from target to max utilization
    pub slope_high: f64,
    /// Utilization the protocol steers toward, in (0, 1]
    pub target_util: f64,
    /// Utilization at which the steep segment tops out, in [target, 1]
    pub max_util: f64,
}

/// Evaluate the borrow rate at a given utilization.
///
/// # Arguments
///
/// * `utilization` - Current utilization in [0, 1]
/// * `curve` - The reserve's rate curve parameters
/// * `modifier` - The reserve's rate modifier (1.0 for the base curve)
///
/// # Edge cases
///
/// At exactly the target utilization both segments agree, so the result is
/// the same whichever branch evaluates it. A degenerate curve with
/// `max_util == target_util` has no width for the steep segment; beyond the
/// target it is treated as the constant `base_rate + slope_low`.
pub fn estimate_interest_rate(utilization: f64, curve: &InterestCurve, modifier: f64) -> f64 {
    let rate = if utilization <= curve.target_util {
        curve.base_rate + (utilization / curve.target_util) * curve.slope_low
    } else if curve.max_util > curve.target_util {
        let excess = (utilization - curve.target_util) / (curve.max_util - curve.target_util);
        curve.base_rate + curve.slope_low + excess * curve.slope_high
    } else {
        // Degenerate config: the steep segment has zero width
        curve.base_rate + curve.slope_low
    };
    rate * modifier
}

/// A sampled point on the interest rate curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Utilization in [0, 1]
    pub utilization: f64,
    /// Borrow rate at that utilization
    pub rate: f64,
}

/// Sample the rate curve for charting.
///
/// Produces `steps + 1` evenly spaced samples over `[0, to_util]`, plus the
/// current and target utilization so those exact points appear in the
/// series, sorted by utilization.
pub fn curve_points(
    curve: &InterestCurve,
    modifier: f64,
    current_util: f64,
    to_util: f64,
    steps: usize,
) -> Vec<CurvePoint> {
    let steps = steps.max(1);
    let mut utils: Vec<f64> = (0..=steps)
        .map(|i| to_util * (i as f64) / (steps as f64))
        .collect();
    utils.push(current_util);
    utils.push(curve.target_util);
    utils.sort_by(f64::total_cmp);
    utils
        .into_iter()
        .map(|utilization| CurvePoint {
            utilization,
            rate: estimate_interest_rate(utilization, curve, modifier),
        })
        .collect()
}
