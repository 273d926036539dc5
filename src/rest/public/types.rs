//! Request types for public REST API endpoints.

use crate::rest::query::QueryParams;
use crate::types::{CandlePeriod, OrderType};

/// Default number of book entries per side.
pub const DEFAULT_ORDER_BOOK_DEPTH: u32 = 20;
/// Default number of trades returned by the market history endpoint.
pub const DEFAULT_MARKET_HISTORY_COUNT: i64 = 20;
/// Largest market history count the API serves.
pub const MAX_MARKET_HISTORY_COUNT: i64 = 200;
/// Default number of candles.
pub const DEFAULT_CANDLE_COUNT: i64 = 1000;
/// Largest candle count the API serves.
pub const MAX_CANDLE_COUNT: i64 = 999_999;
/// Default look-back window for candles, in hours.
pub const DEFAULT_CANDLE_LAST_HOURS: i64 = 24;
/// Longest look-back window for candles, in hours.
pub const MAX_CANDLE_LAST_HOURS: i64 = 720;

/// Request parameters for the order book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBookRequest {
    /// Market name (e.g. "BTC_DOGE").
    pub market: String,
    /// Side of the book to load.
    pub order_type: OrderType,
    /// Entries per side. The API defines no maximum.
    pub depth: u32,
}

impl OrderBookRequest {
    /// Both sides of `market`, 20 entries deep.
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            order_type: OrderType::All,
            depth: DEFAULT_ORDER_BOOK_DEPTH,
        }
    }

    /// Restrict the book to one side.
    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    /// Set the number of entries per side.
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .push("market", &self.market)
            .push("type", self.order_type)
            .push("depth", self.depth)
    }
}

/// Request parameters for the market history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketHistoryRequest {
    /// Market name (e.g. "BTC_DOGE").
    pub market: String,
    /// Number of trades; values above 200 are sent as 200.
    pub count: i64,
}

impl MarketHistoryRequest {
    /// The last 20 trades of `market`.
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            count: DEFAULT_MARKET_HISTORY_COUNT,
        }
    }

    /// Set the number of trades.
    pub fn count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        // Only the upper bound is enforced.
        QueryParams::new()
            .push("market", &self.market)
            .push("count", self.count.min(MAX_MARKET_HISTORY_COUNT))
    }
}

/// Request parameters for candles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandlesRequest {
    /// Market name (e.g. "BTC_DOGE").
    pub market: String,
    /// Candle width.
    pub period: CandlePeriod,
    /// Number of candles; sent clamped to `[0, 999999]`.
    pub count: i64,
    /// Look-back window in hours; sent clamped to `[0, 720]`.
    pub last_hours: i64,
}

impl CandlesRequest {
    /// Daily candles for `market`: 1000 of them over the last 24 hours.
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            period: CandlePeriod::default(),
            count: DEFAULT_CANDLE_COUNT,
            last_hours: DEFAULT_CANDLE_LAST_HOURS,
        }
    }

    /// Set the candle width.
    pub fn period(mut self, period: CandlePeriod) -> Self {
        self.period = period;
        self
    }

    /// Set the number of candles.
    pub fn count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Set the look-back window in hours.
    pub fn last_hours(mut self, last_hours: i64) -> Self {
        self.last_hours = last_hours;
        self
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .push("market", &self.market)
            .push("period", self.period)
            .push("count", self.count.clamp(0, MAX_CANDLE_COUNT))
            .push("lasthours", self.last_hours.clamp(0, MAX_CANDLE_LAST_HOURS))
    }
}
