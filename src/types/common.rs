//! Common domain types for the Bleutrade API.
//!
//! Enumerated query parameters are closed enums. Parsing one from a string
//! is where validation happens: anything outside the allowed set becomes a
//! [`BleutradeError::Validation`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BleutradeError;

/// Order side filter used by the order book and order listing endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Both sides
    #[default]
    All,
    /// Buy orders only
    Buy,
    /// Sell orders only
    Sell,
}

impl OrderType {
    /// Accepted wire values.
    pub const VALUES: [&'static str; 3] = ["ALL", "BUY", "SELL"];

    /// The wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::All => "ALL",
            OrderType::Buy => "BUY",
            OrderType::Sell => "SELL",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = BleutradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(OrderType::All),
            "BUY" => Ok(OrderType::Buy),
            "SELL" => Ok(OrderType::Sell),
            _ => Err(BleutradeError::invalid_value("type", s, &Self::VALUES)),
        }
    }
}

/// Order status filter for `account/getorders`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Any status
    #[default]
    All,
    /// Executed orders
    Ok,
    /// Orders still on the book
    Open,
    /// Canceled orders
    Canceled,
}

impl OrderStatus {
    /// Accepted wire values.
    pub const VALUES: [&'static str; 4] = ["ALL", "OK", "OPEN", "CANCELED"];

    /// The wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::All => "ALL",
            OrderStatus::Ok => "OK",
            OrderStatus::Open => "OPEN",
            OrderStatus::Canceled => "CANCELED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = BleutradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(OrderStatus::All),
            "OK" => Ok(OrderStatus::Ok),
            "OPEN" => Ok(OrderStatus::Open),
            "CANCELED" => Ok(OrderStatus::Canceled),
            _ => Err(BleutradeError::invalid_value("status", s, &Self::VALUES)),
        }
    }
}

/// Candle width for `public/getcandles`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandlePeriod {
    #[serde(rename = "1m")]
    Min1,
    #[serde(rename = "2m")]
    Min2,
    #[serde(rename = "3m")]
    Min3,
    #[serde(rename = "4m")]
    Min4,
    #[serde(rename = "5m")]
    Min5,
    #[serde(rename = "6m")]
    Min6,
    #[serde(rename = "10m")]
    Min10,
    #[serde(rename = "12m")]
    Min12,
    #[serde(rename = "15m")]
    Min15,
    #[serde(rename = "20m")]
    Min20,
    #[serde(rename = "30m")]
    Min30,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "2h")]
    Hour2,
    #[serde(rename = "3h")]
    Hour3,
    #[serde(rename = "4h")]
    Hour4,
    #[serde(rename = "6h")]
    Hour6,
    #[serde(rename = "8h")]
    Hour8,
    #[serde(rename = "12h")]
    Hour12,
    #[default]
    #[serde(rename = "1d")]
    Day1,
}

impl CandlePeriod {
    /// Every period, in ascending order.
    pub const ALL: [CandlePeriod; 19] = [
        CandlePeriod::Min1,
        CandlePeriod::Min2,
        CandlePeriod::Min3,
        CandlePeriod::Min4,
        CandlePeriod::Min5,
        CandlePeriod::Min6,
        CandlePeriod::Min10,
        CandlePeriod::Min12,
        CandlePeriod::Min15,
        CandlePeriod::Min20,
        CandlePeriod::Min30,
        CandlePeriod::Hour1,
        CandlePeriod::Hour2,
        CandlePeriod::Hour3,
        CandlePeriod::Hour4,
        CandlePeriod::Hour6,
        CandlePeriod::Hour8,
        CandlePeriod::Hour12,
        CandlePeriod::Day1,
    ];

    /// Accepted wire values.
    pub const VALUES: [&'static str; 19] = [
        "1m", "2m", "3m", "4m", "5m", "6m", "10m", "12m", "15m", "20m", "30m", "1h", "2h", "3h",
        "4h", "6h", "8h", "12h", "1d",
    ];

    /// The wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CandlePeriod::Min1 => "1m",
            CandlePeriod::Min2 => "2m",
            CandlePeriod::Min3 => "3m",
            CandlePeriod::Min4 => "4m",
            CandlePeriod::Min5 => "5m",
            CandlePeriod::Min6 => "6m",
            CandlePeriod::Min10 => "10m",
            CandlePeriod::Min12 => "12m",
            CandlePeriod::Min15 => "15m",
            CandlePeriod::Min20 => "20m",
            CandlePeriod::Min30 => "30m",
            CandlePeriod::Hour1 => "1h",
            CandlePeriod::Hour2 => "2h",
            CandlePeriod::Hour3 => "3h",
            CandlePeriod::Hour4 => "4h",
            CandlePeriod::Hour6 => "6h",
            CandlePeriod::Hour8 => "8h",
            CandlePeriod::Hour12 => "12h",
            CandlePeriod::Day1 => "1d",
        }
    }
}

impl fmt::Display for CandlePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandlePeriod {
    type Err = BleutradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| BleutradeError::invalid_value("period", s, &Self::VALUES))
    }
}

/// Currency selection for `account/getbalances`.
///
/// Holds the `;`-joined list that goes on the wire. Build it from a
/// pre-joined string (`"DOGE;BTC"`) or from a list of currency codes;
/// both forms produce the same request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currencies(String);

impl Currencies {
    /// Every currency in the account.
    pub fn all() -> Self {
        Currencies("ALL".to_string())
    }

    /// Join individual currency codes with `;`.
    pub fn list<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = codes
            .into_iter()
            .map(|code| code.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(";");
        Currencies(joined)
    }

    /// The wire representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currencies {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for Currencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Currencies {
    fn from(joined: &str) -> Self {
        Currencies(joined.to_string())
    }
}

impl From<String> for Currencies {
    fn from(joined: String) -> Self {
        Currencies(joined)
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Currencies {
    fn from(codes: Vec<S>) -> Self {
        Self::list(codes)
    }
}

impl<S: AsRef<str>> From<&[S]> for Currencies {
    fn from(codes: &[S]) -> Self {
        Self::list(codes)
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Currencies {
    fn from(codes: [S; N]) -> Self {
        Self::list(codes)
    }
}
