//! Ticker domain types

use rust_decimal::Decimal;
use serde::de::{self, value::MapAccessDeserializer, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// A decimal value kept as the exact text the upstream API sent
///
/// Prices and percentages arrive as strings so no precision is lost in
/// transit. The text is stored verbatim and only parsed on request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DecimalText(String);

impl DecimalText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Verbatim upstream text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into a fixed-point decimal
    pub fn to_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(self.0.trim())
    }

    /// True when the value parses to a strictly negative decimal
    pub fn is_negative(&self) -> bool {
        self.to_decimal().map(|d| d.is_sign_negative() && !d.is_zero()).unwrap_or(false)
    }
}

impl fmt::Display for DecimalText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DecimalText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Accepts a JSON string or a bare JSON number
///
/// With serde_json's `arbitrary_precision`, numbers reach the visitor as a map
/// holding their original text, so no float conversion happens.
struct DecimalTextVisitor;

impl<'de> Visitor<'de> for DecimalTextVisitor {
    type Value = DecimalText;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal as a string or number")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(DecimalText::new(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(DecimalText(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(DecimalText(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(DecimalText(value.to_string()))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let number = serde_json::Number::deserialize(MapAccessDeserializer::new(map))?;
        Ok(DecimalText(number.to_string()))
    }
}

impl<'de> Deserialize<'de> for DecimalText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalTextVisitor)
    }
}

/// A single coin entry from the ticker listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerRecord {
    /// Opaque upstream identifier, unique per coin
    pub id: String,
    /// Short ticker code (e.g., "ETH")
    pub symbol: String,
    /// Human-readable coin name
    pub name: String,
    /// Market-cap rank
    pub rank: NonZeroU32,
    /// Price in USD
    pub price_usd: DecimalText,
    /// 24h change in percent, `None` when upstream did not send it
    #[serde(default)]
    pub percent_change_24h: Option<DecimalText>,
    #[serde(default)]
    pub percent_change_1h: Option<DecimalText>,
    #[serde(default)]
    pub percent_change_7d: Option<DecimalText>,
    /// Price in BTC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_btc: Option<DecimalText>,
    /// Market capitalisation in USD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap_usd: Option<DecimalText>,
}
