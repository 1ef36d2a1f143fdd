use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::bag::{BagEntry, Toggle};
use crate::domain::product::ProductId;
use crate::errors::DomainError;
use crate::shop::ShopState;
use crate::view::{CardStyle, ViewHost};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    pub product_id: ProductId,
    pub toggle: Toggle,
    pub bag_size: usize,
}

/// Flips a product between unselected and selected on each card click.
#[derive(Clone, Copy, Debug, Default)]
pub struct BagManager;

impl BagManager {
    pub fn toggle(
        &self,
        state: &mut ShopState,
        product_id: ProductId,
        view: &mut dyn ViewHost,
    ) -> Result<ToggleOutcome, DomainError> {
        let entry = BagEntry::from(state.product(product_id)?);
        let name = entry.name.clone();
        let toggle = state.bag_mut().toggle(entry);
        let bag_size = state.bag().len();

        let style = match toggle {
            Toggle::Added => CardStyle::Selected,
            Toggle::Removed => CardStyle::Cleared,
        };
        // the bag is keyed by name, so every card carrying that name follows it
        for product in state.catalog().iter().filter(|product| product.name == name) {
            view.set_card_style(product.id, style);
        }
        view.set_item_count(bag_size);

        match toggle {
            Toggle::Added => info!(
                event_name = "storefront.bag.item_added",
                product_id = product_id.0,
                item_name = %name,
                bag_size,
                "item added to bag"
            ),
            Toggle::Removed => info!(
                event_name = "storefront.bag.item_removed",
                product_id = product_id.0,
                item_name = %name,
                bag_size,
                "item removed from bag"
            ),
        }

        Ok(ToggleOutcome { product_id, toggle, bag_size })
    }
}
