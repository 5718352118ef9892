//! Emissions APR estimation.
//!
//! Blend pools stream BLND rewards to suppliers and borrowers. The display
//! layer shows those emissions as an APR on top of the base rate: the USD
//! value of a year of rewards per unit of position, relative to the USD
//! value of that unit.
//!
//! A missing or non-positive underlying price makes the figure undefined.
//! That is reported as an error, never as 0%: "cannot compute" and "zero
//! rewards" are different answers to a user weighing a position.

use crate::error::EstError;

/// Estimate the emissions APR for a position.
///
/// # Arguments
///
/// * `emissions_per_year_per_unit` - Reward tokens emitted per year per
///   unit of supplied or borrowed asset
/// * `reward_token_price` - USD price of the reward token
/// * `underlying_price` - USD price of the position's asset
///
/// # Returns
///
/// `(emissions * reward_price) / underlying_price`, or
/// [`EstError::UnknownPrice`] when `underlying_price` is not positive.
/// Returns `Ok(0.0)` only for a genuinely zero emission rate.
pub fn estimate_emissions_apr(
    emissions_per_year_per_unit: f64,
    reward_token_price: f64,
    underlying_price: f64,
) -> Result<f64, EstError> {
    if underlying_price <= 0.0 || !underlying_price.is_finite() {
        return Err(EstError::UnknownPrice);
    }
    Ok(emissions_per_year_per_unit * reward_token_price / underlying_price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emissions_apr() {
        // 10 BLND/year/unit at $0.05 on a $2 asset -> 25%
        let apr = estimate_emissions_apr(10.0, 0.05, 2.0).unwrap();
        assert!((apr - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_zero_price_is_unavailable_not_zero() {
        assert_eq!(
            estimate_emissions_apr(10.0, 0.05, 0.0),
            Err(EstError::UnknownPrice)
        );
        assert_eq!(
            estimate_emissions_apr(10.0, 0.05, -1.0),
            Err(EstError::UnknownPrice)
        );
        assert_eq!(
            estimate_emissions_apr(10.0, 0.05, f64::NAN),
            Err(EstError::UnknownPrice)
        );
    }

    #[test]
    fn test_zero_emissions_with_price_is_zero() {
        // Zero APR is a real answer when the emission rate itself is zero
        assert_eq!(estimate_emissions_apr(0.0, 0.05, 2.0), Ok(0.0));
    }
}
