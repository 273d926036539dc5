//! Trait definition for the Bleutrade REST API client.
//!
//! [`BleutradeApi`] abstracts every endpoint operation, enabling:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., a caching or retrying wrapper)
//!
//! # Example
//!
//! ```rust,ignore
//! use bleutrade_api_client::rest::{BleutradeApi, BleutradeRestClient};
//!
//! async fn print_markets<C: BleutradeApi>(client: &C) -> Result<(), bleutrade_api_client::BleutradeError> {
//!     let markets = client.get_markets().await?;
//!     println!("{markets}");
//!     Ok(())
//! }
//! ```

use std::future::Future;

use serde_json::Value;

use crate::error::BleutradeError;
use crate::rest::BleutradeRestClient;
use crate::rest::private::{OrdersRequest, TransferRequest, WithdrawRequest};
use crate::rest::public::{CandlesRequest, MarketHistoryRequest, OrderBookRequest};
use crate::types::Currencies;

/// Trait defining all Bleutrade REST API operations.
///
/// Every method resolves to the `result` payload of the response envelope.
pub trait BleutradeApi: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get the list of all coins traded.
    fn get_currencies(&self) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Get the list of all pairs traded.
    fn get_markets(&self) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Get the current tick values for a market.
    fn get_ticker(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Get the last 24 hour summary of all active markets.
    fn get_market_summaries(&self)
    -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Get the last 24 hour summary of one market.
    fn get_market_summary(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Load the book offers of a market.
    fn get_order_book(
        &self,
        request: &OrderBookRequest,
    ) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Get historical trades of a market, at most 200.
    fn get_market_history(
        &self,
        request: &MarketHistoryRequest,
    ) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Get historical trades of a market as candles.
    fn get_candles(
        &self,
        request: &CandlesRequest,
    ) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    // ========== Private Endpoints - Account ==========

    /// Get the balance of the selected coins.
    fn get_balances(
        &self,
        currencies: Currencies,
    ) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Get the deposit address of a coin.
    fn get_deposit_address(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Withdraw coins to another wallet.
    fn withdraw(
        &self,
        request: &WithdrawRequest,
    ) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Transfer coins to another user.
    fn transfer(
        &self,
        request: &TransferRequest,
    ) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Get the data of one order.
    fn get_order(
        &self,
        order_id: u64,
    ) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Get the trades that filled an order.
    fn get_order_history(
        &self,
        order_id: u64,
    ) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// List orders by market, status and side.
    fn get_orders(
        &self,
        request: &OrdersRequest,
    ) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Get deposits and received direct transfers.
    fn get_deposit_history(&self) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Get withdrawals and sent direct transfers.
    fn get_withdraw_history(&self)
    -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Send a message to the chat.
    fn chat_send(&self, text: &str) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    // ========== Private Endpoints - Market ==========

    /// List the account's open orders.
    fn get_open_orders(&self) -> impl Future<Output = Result<Value, BleutradeError>> + Send;

    /// Cancel an order.
    fn cancel_order(
        &self,
        order_id: u64,
    ) -> impl Future<Output = Result<Value, BleutradeError>> + Send;
}

impl BleutradeApi for BleutradeRestClient {
    // ========== Public Endpoints ==========

    async fn get_currencies(&self) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_currencies(self).await
    }

    async fn get_markets(&self) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_markets(self).await
    }

    async fn get_ticker(&self, market: &str) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_ticker(self, market).await
    }

    async fn get_market_summaries(&self) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_market_summaries(self).await
    }

    async fn get_market_summary(&self, market: &str) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_market_summary(self, market).await
    }

    async fn get_order_book(&self, request: &OrderBookRequest) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_order_book(self, request).await
    }

    async fn get_market_history(
        &self,
        request: &MarketHistoryRequest,
    ) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_market_history(self, request).await
    }

    async fn get_candles(&self, request: &CandlesRequest) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_candles(self, request).await
    }

    // ========== Private Endpoints - Account ==========

    async fn get_balances(&self, currencies: Currencies) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_balances(self, currencies).await
    }

    async fn get_deposit_address(&self, currency: &str) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_deposit_address(self, currency).await
    }

    async fn withdraw(&self, request: &WithdrawRequest) -> Result<Value, BleutradeError> {
        BleutradeRestClient::withdraw(self, request).await
    }

    async fn transfer(&self, request: &TransferRequest) -> Result<Value, BleutradeError> {
        BleutradeRestClient::transfer(self, request).await
    }

    async fn get_order(&self, order_id: u64) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_order(self, order_id).await
    }

    async fn get_order_history(&self, order_id: u64) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_order_history(self, order_id).await
    }

    async fn get_orders(&self, request: &OrdersRequest) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_orders(self, request).await
    }

    async fn get_deposit_history(&self) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_deposit_history(self).await
    }

    async fn get_withdraw_history(&self) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_withdraw_history(self).await
    }

    async fn chat_send(&self, text: &str) -> Result<Value, BleutradeError> {
        BleutradeRestClient::chat_send(self, text).await
    }

    // ========== Private Endpoints - Market ==========

    async fn get_open_orders(&self) -> Result<Value, BleutradeError> {
        BleutradeRestClient::get_open_orders(self).await
    }

    async fn cancel_order(&self, order_id: u64) -> Result<Value, BleutradeError> {
        BleutradeRestClient::cancel_order(self, order_id).await
    }
}
