//! Bleutrade REST API endpoint constants.

/// Base URL for the Bleutrade v2 REST API.
pub const BLEUTRADE_BASE_URL: &str = "https://bleutrade.com/api/v2/";

/// Header carrying the request signature.
pub const API_SIGN_HEADER: &str = "apisign";

/// Public endpoints (no authentication required).
pub mod public {
    /// List all traded currencies.
    pub const CURRENCIES: &str = "public/getcurrencies";
    /// List all traded pairs.
    pub const MARKETS: &str = "public/getmarkets";
    /// Current tick values for a market.
    pub const TICKER: &str = "public/getticker";
    /// 24 hour summary of all active markets.
    pub const MARKET_SUMMARIES: &str = "public/getmarketsummaries";
    /// 24 hour summary of one market.
    pub const MARKET_SUMMARY: &str = "public/getmarketsummary";
    /// Book offers of a market.
    pub const ORDER_BOOK: &str = "public/getorderbook";
    /// Historical trades of a market.
    pub const MARKET_HISTORY: &str = "public/getmarkethistory";
    /// Historical trades of a market in candle format.
    pub const CANDLES: &str = "public/getcandles";
}

/// Private endpoints (API key and signature required).
pub mod private {
    // Account endpoints
    /// Balances of the account's coins.
    pub const BALANCES: &str = "account/getbalances";
    /// Deposit address of a coin.
    pub const DEPOSIT_ADDRESS: &str = "account/getdepositaddress";
    /// Withdraw to an external wallet.
    pub const WITHDRAW: &str = "account/withdraw";
    /// Fee-free transfer to another Bleutrade user.
    pub const TRANSFER: &str = "account/transfer";
    /// Details of one order.
    pub const ORDER: &str = "account/getorder";
    /// Trades that filled an order.
    pub const ORDER_HISTORY: &str = "account/getorderhistory";
    /// List orders by market, status and side.
    pub const ORDERS: &str = "account/getorders";
    /// Deposits and received direct transfers.
    pub const DEPOSIT_HISTORY: &str = "account/getdeposithistory";
    /// Withdrawals and sent direct transfers.
    pub const WITHDRAW_HISTORY: &str = "account/getwithdrawhistory";
    /// Post a chat message.
    pub const CHAT_SEND: &str = "account/chatsend";

    // Market endpoints
    /// Open orders of the account.
    pub const OPEN_ORDERS: &str = "market/getopenorders";
    /// Cancel an order.
    pub const CANCEL: &str = "market/cancel";
}
