//! Request types for private REST API endpoints.

use rust_decimal::Decimal;

use crate::rest::query::QueryParams;
use crate::types::{OrderStatus, OrderType};

/// Request parameters for listing orders.
///
/// `status` and `order_type` are required; `market` defaults to `ALL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersRequest {
    /// Market name (e.g. "BTC_DOGE") or "ALL".
    pub market: String,
    /// Order status filter.
    pub status: OrderStatus,
    /// Order side filter.
    pub order_type: OrderType,
}

impl OrdersRequest {
    /// Orders across all markets matching `status` and `order_type`.
    pub fn new(status: OrderStatus, order_type: OrderType) -> Self {
        Self {
            market: "ALL".to_string(),
            status,
            order_type,
        }
    }

    /// Restrict the listing to one market.
    pub fn market(mut self, market: impl Into<String>) -> Self {
        self.market = market.into();
        self
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .push("market", &self.market)
            .push("status", self.status)
            .push("type", self.order_type)
    }
}

/// Request parameters for a withdrawal to an external wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawRequest {
    /// Currency code (e.g. "BTC").
    pub currency: String,
    /// Amount of coins to withdraw.
    pub quantity: Decimal,
    /// Destination address.
    pub address: String,
}

impl WithdrawRequest {
    /// Create a withdrawal request.
    pub fn new(currency: impl Into<String>, quantity: Decimal, address: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            quantity,
            address: address.into(),
        }
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .push("currency", &self.currency)
            .push("quantity", self.quantity)
            .push("address", &self.address)
    }
}

/// Request parameters for a fee-free transfer to another Bleutrade user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Currency code (e.g. "DOGE").
    pub currency: String,
    /// Amount of coins to transfer.
    pub quantity: Decimal,
    /// Receiving user.
    pub to_user: String,
}

impl TransferRequest {
    /// Create a transfer request.
    pub fn new(currency: impl Into<String>, quantity: Decimal, to_user: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            quantity,
            to_user: to_user.into(),
        }
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .push("currency", &self.currency)
            .push("quantity", self.quantity)
            .push("touser", &self.to_user)
    }
}
