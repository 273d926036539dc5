//! # Bleutrade Client
//!
//! An async Rust client library for the Bleutrade exchange REST API.
//!
//! ## Features
//!
//! - Every public market data and private account endpoint of API v2
//! - HMAC-SHA512 request signing with an injectable nonce source
//! - Closed enums for order types, order statuses and candle periods
//! - Typed errors separating configuration, validation, transport,
//!   protocol and API failures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bleutrade_api_client::rest::BleutradeRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BleutradeRestClient::new();
//!     let ticker = client.get_ticker("BTC_DOGE").await?;
//!     println!("Ticker: {}", ticker);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::BleutradeError;
pub use rest::{BleutradeApi, BleutradeRestClient};
pub use types::common::{CandlePeriod, Currencies, OrderStatus, OrderType};

/// Result type alias using BleutradeError
pub type Result<T> = std::result::Result<T, BleutradeError>;
