use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::bag::BagEntry;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn generate() -> Self {
        Self(format!("ORD-{}", Uuid::new_v4().simple()))
    }
}

/// Local record of a confirmed bag. Nothing is submitted anywhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub id: OrderId,
    pub items: Vec<BagEntry>,
    pub total: Decimal,
    pub confirmed_at: DateTime<Utc>,
}

impl OrderReceipt {
    pub fn new(items: Vec<BagEntry>) -> Self {
        let total = items.iter().map(|item| item.price).sum();
        Self { id: OrderId::generate(), items, total, confirmed_at: Utc::now() }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
