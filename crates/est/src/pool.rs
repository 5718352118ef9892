//! Pool and oracle snapshots.
//!
//! A [`Pool`] is the per-evaluation context for the estimators: the set of
//! reserves keyed by asset, plus the pool-level backstop take rate. A
//! [`PoolOracle`] carries the matching USD price map. Both are value
//! snapshots assembled by the data-fetching layer; the estimators never
//! refresh or repair them, and a missing oracle entry means "no price
//! available", not zero.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AssetId;
use crate::fixed_math::to_float;
use crate::reserve::Reserve;

/// A snapshot of a lending pool's reserves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    /// Contract address of the pool
    pub id: AssetId,
    /// Share of borrow interest routed to the backstop (fixed-7)
    pub backstop_take_rate: i128,
    /// Reserves keyed by underlying asset address
    pub reserves: HashMap<AssetId, Reserve>,
}

impl Pool {
    /// Look up a reserve by asset address.
    pub fn reserve(&self, asset: &str) -> Option<&Reserve> {
        self.reserves.get(asset)
    }

    /// The backstop take rate as a float.
    pub fn backstop_take_rate_float(&self) -> f64 {
        to_float(self.backstop_take_rate, 7)
    }
}

/// USD prices for a pool's assets, keyed by asset address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PoolOracle {
    pub prices: HashMap<AssetId, f64>,
}

impl PoolOracle {
    /// The USD price of an asset, or `None` if the oracle has no entry.
    pub fn price(&self, asset: &str) -> Option<f64> {
        self.prices.get(asset).copied()
    }
}
