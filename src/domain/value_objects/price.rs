//! Price and product identifier value objects
//!
//! Catalog files are hand-edited, so `preco` shows up both as a JSON number
//! and as a numeric string. Both are coerced to a `Price` at load time.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Numeric product price.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawPrice")]
pub struct Price(f64);

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

impl Price {
    pub fn new(amount: f64) -> Result<Self, String> {
        if amount.is_finite() {
            Ok(Self(amount))
        } else {
            Err(format!("price must be a finite number, got {amount}"))
        }
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Total order over prices, used by every price sort.
    pub fn compare(&self, other: &Price) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::str::FromStr for Price {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let amount: f64 = trimmed
            .parse()
            .map_err(|_| format!("invalid price '{trimmed}'"))?;
        Self::new(amount)
    }
}

impl TryFrom<RawPrice> for Price {
    type Error = String;

    fn try_from(raw: RawPrice) -> Result<Self, Self::Error> {
        match raw {
            RawPrice::Number(n) => Price::new(n),
            RawPrice::Text(s) => s.parse(),
        }
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Product identifier as found in the catalog file (number or string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}
