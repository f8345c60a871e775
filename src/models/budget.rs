//! Budget model
//!
//! A saved split of the total amount across the three categories.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::Field;

/// One saved allocation
///
/// Serialized as `{"market": .., "development": .., "sell": ..}`. Budgets have
/// no identifier; a collection addresses them by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Budget {
    pub market: u64,
    pub development: u64,
    pub sell: u64,
}

impl Budget {
    pub fn new(market: u64, development: u64, sell: u64) -> Self {
        Self {
            market,
            development,
            sell,
        }
    }

    /// Sum of all three categories
    pub fn total(&self) -> u64 {
        self.market
            .saturating_add(self.development)
            .saturating_add(self.sell)
    }

    pub fn get(&self, field: Field) -> u64 {
        match field {
            Field::Market => self.market,
            Field::Development => self.development,
            Field::Sell => self.sell,
        }
    }

    pub fn set(&mut self, field: Field, value: u64) {
        match field {
            Field::Market => self.market = value,
            Field::Development => self.development = value,
            Field::Sell => self.sell = value,
        }
    }

    /// Sum of the two categories other than `field`
    pub fn others_sum(&self, field: Field) -> u64 {
        self.total() - self.get(field)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "market: {}, development: {}, sales: {}",
            self.market, self.development, self.sell
        )
    }
}

/// Parse a persisted collection (a JSON array of budgets)
pub fn parse_collection(text: &str) -> Result<Vec<Budget>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Serialize a collection for persistence
pub fn serialize_collection(budgets: &[Budget]) -> Result<String, serde_json::Error> {
    serde_json::to_string(budgets)
}
