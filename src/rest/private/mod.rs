//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.
//! Calling them without a key and secret fails with
//! [`BleutradeError::Configuration`] before any request is sent.

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::BleutradeError;
use crate::rest::BleutradeRestClient;
use crate::rest::endpoints::private;
use crate::rest::query::QueryParams;
use crate::types::Currencies;

impl BleutradeRestClient {
    // ========== Account Endpoints ==========

    /// Get the balance of the account's coins.
    ///
    /// `currencies` is either a `;`-joined string (`"DOGE;BTC"`), a list of
    /// codes, or [`Currencies::all()`].
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bleutrade_api_client::rest::BleutradeRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BleutradeRestClient::with_credentials("key", "secret");
    ///
    ///     let balances = client.get_balances(vec!["DOGE", "BTC"]).await?;
    ///     println!("{balances}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_balances(
        &self,
        currencies: impl Into<Currencies>,
    ) -> Result<Value, BleutradeError> {
        let params = QueryParams::new().push("currencies", currencies.into());
        self.private_get(private::BALANCES, &params).await
    }

    /// Get the deposit address of a coin.
    pub async fn get_deposit_address(&self, currency: &str) -> Result<Value, BleutradeError> {
        let params = QueryParams::new().push("currency", currency);
        self.private_get(private::DEPOSIT_ADDRESS, &params).await
    }

    /// Withdraw coins to another wallet.
    pub async fn withdraw(&self, request: &WithdrawRequest) -> Result<Value, BleutradeError> {
        self.private_get(private::WITHDRAW, &request.to_params())
            .await
    }

    /// Transfer coins to another user, without fees.
    pub async fn transfer(&self, request: &TransferRequest) -> Result<Value, BleutradeError> {
        self.private_get(private::TRANSFER, &request.to_params())
            .await
    }

    /// Get the data of one order.
    pub async fn get_order(&self, order_id: u64) -> Result<Value, BleutradeError> {
        let params = QueryParams::new().push("orderid", order_id);
        self.private_get(private::ORDER, &params).await
    }

    /// Get the trades that filled an order.
    pub async fn get_order_history(&self, order_id: u64) -> Result<Value, BleutradeError> {
        let params = QueryParams::new().push("orderid", order_id);
        self.private_get(private::ORDER_HISTORY, &params).await
    }

    /// List orders by market, status and side.
    pub async fn get_orders(&self, request: &OrdersRequest) -> Result<Value, BleutradeError> {
        self.private_get(private::ORDERS, &request.to_params()).await
    }

    /// Get deposits and received direct transfers.
    pub async fn get_deposit_history(&self) -> Result<Value, BleutradeError> {
        self.private_get(private::DEPOSIT_HISTORY, &QueryParams::new())
            .await
    }

    /// Get withdrawals and sent direct transfers.
    pub async fn get_withdraw_history(&self) -> Result<Value, BleutradeError> {
        self.private_get(private::WITHDRAW_HISTORY, &QueryParams::new())
            .await
    }

    /// Send a message to the chat.
    pub async fn chat_send(&self, text: &str) -> Result<Value, BleutradeError> {
        let params = QueryParams::new().push("text", text);
        self.private_get(private::CHAT_SEND, &params).await
    }

    // ========== Market Endpoints ==========

    /// List the account's open orders.
    pub async fn get_open_orders(&self) -> Result<Value, BleutradeError> {
        self.private_get(private::OPEN_ORDERS, &QueryParams::new())
            .await
    }

    /// Cancel an order.
    pub async fn cancel_order(&self, order_id: u64) -> Result<Value, BleutradeError> {
        let params = QueryParams::new().push("orderid", order_id);
        self.private_get(private::CANCEL, &params).await
    }
}
