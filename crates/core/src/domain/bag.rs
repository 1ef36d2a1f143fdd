use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Display fields copied out of a product when it is added to the bag.
///
/// Entries are matched by `name`, not by catalog id, so two products sharing
/// a name occupy the same bag line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagEntry {
    pub name: String,
    pub price: Decimal,
}

impl From<&Product> for BagEntry {
    fn from(product: &Product) -> Self {
        Self { name: product.name.clone(), price: product.price }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    Added,
    Removed,
}

/// Insertion-ordered selection. Toggle semantics keep names unique.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bag {
    entries: Vec<BagEntry>,
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[BagEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Removes the first entry named like `entry` if present, otherwise appends it.
    pub fn toggle(&mut self, entry: BagEntry) -> Toggle {
        match self.position(&entry.name) {
            Some(index) => {
                self.entries.remove(index);
                Toggle::Removed
            }
            None => {
                self.entries.push(entry);
                Toggle::Added
            }
        }
    }

    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|entry| entry.price).sum()
    }

    pub fn clear(&mut self) -> Vec<BagEntry> {
        std::mem::take(&mut self.entries)
    }
}
