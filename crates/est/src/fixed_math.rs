//! Fixed-point conversion primitives.
//!
//! All on-chain amounts arrive as `i128` integers scaled by a power of ten:
//! token amounts use the token's native decimals, rates and percentages use
//! 7 decimals, and exchange rates / rate modifiers use 9 decimals. This
//! module is the only place fixed-point values cross into floating point.
//!
//! Conversion divides by `10^scale` in a single step from a full-precision
//! integer, so chained conversions do not accumulate drift the way repeated
//! float division would.

use serde::{Deserialize, Serialize};

/// Scalar for 7-decimal fixed-point values (rates, percentages, LP shares)
pub const SCALAR_7: i128 = 10_000_000;

/// Scalar for 9-decimal fixed-point values (exchange rates, rate modifiers)
pub const SCALAR_9: i128 = 1_000_000_000;

/// Convert a fixed-point integer to a float.
///
/// `scale` is protocol configuration and is always in `0..=18`; values
/// outside that range are a broken caller contract.
pub fn to_float(raw: i128, scale: u32) -> f64 {
    debug_assert!(scale <= 18, "fixed-point scale out of range: {scale}");
    (raw as f64) / (10_i128.pow(scale) as f64)
}

/// Convert a float to a fixed-point integer, rounding to nearest.
pub fn to_fixed(value: f64, scale: u32) -> i128 {
    debug_assert!(scale <= 18, "fixed-point scale out of range: {scale}");
    (value * 10_i128.pow(scale) as f64).round() as i128
}

/// A fixed-point amount carrying its own decimal scale.
///
/// Keeping the scale on the value prevents silently mixing amounts of
/// different precisions: arithmetic between two amounts requires aligning
/// scales first via [`FixedAmount::rescale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedAmount {
    /// Integer magnitude, scaled by `10^scale`
    pub raw: i128,
    /// Decimal exponent, in `0..=18`
    pub scale: u32,
}

impl FixedAmount {
    /// Create a fixed amount from a raw integer and scale.
    pub fn new(raw: i128, scale: u32) -> Self {
        debug_assert!(scale <= 18, "fixed-point scale out of range: {scale}");
        Self { raw, scale }
    }

    /// Create a fixed amount from a float, rounding to nearest.
    pub fn from_float(value: f64, scale: u32) -> Self {
        Self::new(to_fixed(value, scale), scale)
    }

    /// The float value of this amount.
    pub fn to_float(self) -> f64 {
        to_float(self.raw, self.scale)
    }

    /// Re-express this amount at a different scale.
    ///
    /// Scaling down truncates toward zero, matching on-chain integer
    /// division.
    pub fn rescale(self, scale: u32) -> Self {
        debug_assert!(scale <= 18, "fixed-point scale out of range: {scale}");
        if scale == self.scale {
            self
        } else if scale > self.scale {
            Self {
                raw: self.raw * 10_i128.pow(scale - self.scale),
                scale,
            }
        } else {
            Self {
                raw: self.raw / 10_i128.pow(self.scale - scale),
                scale,
            }
        }
    }

    /// Add another amount, aligning it to this amount's scale first.
    pub fn add(self, other: Self) -> Self {
        Self {
            raw: self.raw + other.rescale(self.scale).raw,
            scale: self.scale,
        }
    }

    /// Subtract another amount, aligning it to this amount's scale first.
    pub fn sub(self, other: Self) -> Self {
        Self {
            raw: self.raw - other.rescale(self.scale).raw,
            scale: self.scale,
        }
    }
}
