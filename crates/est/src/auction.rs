//! Auction estimation.
//!
//! Pool auctions settle bad debt, skimmed interest, and liquidations. An
//! auction record carries a lot (what the filler receives) and a bid (what
//! the filler pays), both maps of asset address to a fixed-point share
//! amount. This module normalizes those entries into underlying amounts and
//! USD values for display.
//!
//! How an entry converts depends on the auction category:
//!
//! - BadDebt lots and Interest bids are backstop LP shares, valued at the
//!   backstop token price.
//! - Everything else resolves through the pool snapshot: lot amounts are
//!   collateral shares (bTokens), bid amounts are debt shares (dTokens),
//!   each converted through its reserve's exchange rate and valued at the
//!   asset's oracle price.
//!
//! A reserve missing from the snapshot fails the whole estimate - the
//! record and the snapshot disagree about what the pool holds. A missing
//! price is softer: the underlying amount is still reported, the USD value
//! is `None`, and the totals treat it as 0.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AssetId, EstError};
use crate::fixed_math::to_float;
use crate::pool::{Pool, PoolOracle};
use crate::reserve::Reserve;

/// Auction category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionType {
    /// Backstop LP shares auctioned off against a pool's bad debt
    BadDebt,
    /// Accrued interest auctioned off for backstop LP shares
    Interest,
    /// An unhealthy position's collateral auctioned against its debt
    Liquidation,
}

/// An on-chain auction record.
///
/// Amounts are fixed-point share quantities; entry order carries no
/// meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionData {
    /// Assets owed to the filler
    pub lot: HashMap<AssetId, i128>,
    /// Assets owed by the filler
    pub bid: HashMap<AssetId, i128>,
}

/// One asset's normalized entry in an auction estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AuctionQuote {
    /// Underlying (or LP share) amount as a float
    pub amount: f64,
    /// USD value, or `None` when no price was available
    pub value: Option<f64>,
}

/// A fully normalized auction: per-asset quotes and USD totals.
///
/// Built fresh per evaluation; prices and exchange rates move between
/// ledgers, so estimates are never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionEstimate {
    pub lot: HashMap<AssetId, AuctionQuote>,
    pub bid: HashMap<AssetId, AuctionQuote>,
    /// Sum of priced lot values; unpriced entries contribute 0
    pub total_lot_value: f64,
    /// Sum of priced bid values; unpriced entries contribute 0
    pub total_bid_value: f64,
}

/// Which exchange rate converts a reserve-backed entry
#[derive(Clone, Copy)]
enum Side {
    /// Lot entries are collateral shares
    Lot,
    /// Bid entries are debt shares
    Bid,
}

fn backstop_quote(raw: i128, backstop_token_price: Option<f64>) -> AuctionQuote {
    let amount = to_float(raw, 7);
    AuctionQuote {
        amount,
        value: backstop_token_price.map(|price| amount * price),
    }
}

fn reserve_quote(
    reserve: &Reserve,
    side: Side,
    raw: i128,
    oracle: &PoolOracle,
) -> AuctionQuote {
    let amount = match side {
        Side::Lot => reserve.to_asset_from_b_token_float(raw),
        Side::Bid => reserve.to_asset_from_d_token_float(raw),
    };
    AuctionQuote {
        amount,
        value: oracle.price(&reserve.asset).map(|price| amount * price),
    }
}

/// Normalize an auction into underlying amounts and USD values.
///
/// # Arguments
///
/// * `auction` - The on-chain auction record
/// * `auction_type` - The auction's category
/// * `pool` - Snapshot of the pool the auction belongs to
/// * `oracle` - USD prices for the pool's assets
/// * `backstop_token_price` - USD price of one backstop LP share, if known
///
/// # Errors
///
/// [`EstError::MissingReserve`] when a reserve-backed entry references an
/// asset the pool snapshot does not contain.
pub fn estimate_auction(
    auction: &AuctionData,
    auction_type: AuctionType,
    pool: &Pool,
    oracle: &PoolOracle,
    backstop_token_price: Option<f64>,
) -> Result<AuctionEstimate, EstError> {
    let mut lot = HashMap::with_capacity(auction.lot.len());
    let mut total_lot_value = 0.0;
    for (asset, &raw) in &auction.lot {
        let quote = match auction_type {
            AuctionType::BadDebt => backstop_quote(raw, backstop_token_price),
            _ => {
                let reserve = pool.reserve(asset).ok_or_else(|| EstError::MissingReserve {
                    asset: asset.clone(),
                })?;
                reserve_quote(reserve, Side::Lot, raw, oracle)
            }
        };
        total_lot_value += quote.value.unwrap_or(0.0);
        lot.insert(asset.clone(), quote);
    }

    let mut bid = HashMap::with_capacity(auction.bid.len());
    let mut total_bid_value = 0.0;
    for (asset, &raw) in &auction.bid {
        let quote = match auction_type {
            AuctionType::Interest => backstop_quote(raw, backstop_token_price),
            _ => {
                let reserve = pool.reserve(asset).ok_or_else(|| EstError::MissingReserve {
                    asset: asset.clone(),
                })?;
                reserve_quote(reserve, Side::Bid, raw, oracle)
            }
        };
        total_bid_value += quote.value.unwrap_or(0.0);
        bid.insert(asset.clone(), quote);
    }

    Ok(AuctionEstimate {
        lot,
        bid,
        total_lot_value,
        total_bid_value,
    })
}
