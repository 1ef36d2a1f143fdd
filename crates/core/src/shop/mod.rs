//! Page-lifetime shop state and the three components that act on it.
//!
//! `ShopState` is built once at startup and handed to the catalog renderer,
//! the bag manager and the checkout presenter explicitly; none of them keep
//! their own copy of the bag.

pub mod bag;
pub mod catalog;
pub mod checkout;

use serde::{Deserialize, Serialize};

use crate::domain::bag::Bag;
use crate::domain::product::{Product, ProductId};
use crate::errors::DomainError;

pub use bag::BagManager;
pub use catalog::{Catalog, CatalogListing, CatalogRenderer};
pub use checkout::{CheckoutPresenter, CheckoutRow, CheckoutSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionState {
    Unselected,
    Selected,
}

#[derive(Clone, Debug, Default)]
pub struct ShopState {
    catalog: Catalog,
    bag: Bag,
}

impl ShopState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, bag: Bag::new() }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    pub(crate) fn bag_mut(&mut self) -> &mut Bag {
        &mut self.bag
    }

    pub fn product(&self, product_id: ProductId) -> Result<&Product, DomainError> {
        self.catalog.get(product_id).ok_or(DomainError::UnknownProduct(product_id))
    }

    pub fn selection(&self, product_id: ProductId) -> Result<SelectionState, DomainError> {
        let product = self.product(product_id)?;
        Ok(if self.bag.contains(&product.name) {
            SelectionState::Selected
        } else {
            SelectionState::Unselected
        })
    }

    /// Catalog ids whose name is currently in the bag, in catalog order.
    pub fn selected_products(&self) -> Vec<ProductId> {
        self.catalog
            .iter()
            .filter(|product| self.bag.contains(&product.name))
            .map(|product| product.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::bag::BagEntry;
    use crate::domain::product::ProductId;
    use crate::errors::DomainError;

    use super::{Catalog, SelectionState, ShopState};

    #[test]
    fn selection_follows_bag_membership() {
        let mut state = ShopState::new(Catalog::builtin());
        assert_eq!(state.selection(ProductId(3)), Ok(SelectionState::Unselected));

        state.bag_mut().toggle(BagEntry {
            name: "Gold flower earings".to_string(),
            price: Decimal::new(1599, 2),
        });

        assert_eq!(state.selection(ProductId(3)), Ok(SelectionState::Selected));
        assert_eq!(state.selected_products(), vec![ProductId(3)]);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let state = ShopState::new(Catalog::builtin());
        assert_eq!(state.selection(ProductId(99)), Err(DomainError::UnknownProduct(ProductId(99))));
    }
}
