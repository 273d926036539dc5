//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::BleutradeError;
use crate::rest::BleutradeRestClient;
use crate::rest::endpoints::public;
use crate::rest::query::QueryParams;

impl BleutradeRestClient {
    /// Get the list of all coins traded.
    pub async fn get_currencies(&self) -> Result<Value, BleutradeError> {
        self.public_get(public::CURRENCIES, &QueryParams::new()).await
    }

    /// Get the list of all pairs traded.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bleutrade_api_client::rest::BleutradeRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BleutradeRestClient::new();
    ///     let markets = client.get_markets().await?;
    ///     for market in markets.as_array().into_iter().flatten() {
    ///         println!("{}", market["MarketName"]);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_markets(&self) -> Result<Value, BleutradeError> {
        self.public_get(public::MARKETS, &QueryParams::new()).await
    }

    /// Get the current tick values for a market.
    ///
    /// # Arguments
    ///
    /// * `market` - Market name (e.g., "BTC_DOGE").
    pub async fn get_ticker(&self, market: &str) -> Result<Value, BleutradeError> {
        let params = QueryParams::new().push("market", market);
        self.public_get(public::TICKER, &params).await
    }

    /// Get the last 24 hour summary of all active markets.
    pub async fn get_market_summaries(&self) -> Result<Value, BleutradeError> {
        self.public_get(public::MARKET_SUMMARIES, &QueryParams::new())
            .await
    }

    /// Get the last 24 hour summary of one market.
    pub async fn get_market_summary(&self, market: &str) -> Result<Value, BleutradeError> {
        let params = QueryParams::new().push("market", market);
        self.public_get(public::MARKET_SUMMARY, &params).await
    }

    /// Load the book offers of a market.
    pub async fn get_order_book(
        &self,
        request: &OrderBookRequest,
    ) -> Result<Value, BleutradeError> {
        self.public_get(public::ORDER_BOOK, &request.to_params())
            .await
    }

    /// Get historical trades of a market.
    ///
    /// `MarketHistoryRequest::new(market)` asks for the last 20 trades;
    /// counts above 200 are sent as 200.
    pub async fn get_market_history(
        &self,
        request: &MarketHistoryRequest,
    ) -> Result<Value, BleutradeError> {
        self.public_get(public::MARKET_HISTORY, &request.to_params())
            .await
    }

    /// Get historical trades of a market as candles.
    pub async fn get_candles(&self, request: &CandlesRequest) -> Result<Value, BleutradeError> {
        self.public_get(public::CANDLES, &request.to_params()).await
    }
}
