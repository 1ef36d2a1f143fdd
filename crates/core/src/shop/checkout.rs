use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::TotalDisplay;
use crate::domain::order::OrderReceipt;
use crate::errors::ApplicationError;
use crate::render::{money_label, Markup};
use crate::shop::ShopState;
use crate::view::{CardStyle, ViewHost};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRow {
    pub quantity: u32,
    pub name: String,
    pub price: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub item_count: usize,
    pub rows: Vec<CheckoutRow>,
    /// Sum of bag prices, independent of what the label shows.
    pub total: Decimal,
    pub total_label: String,
}

#[derive(Clone, Debug)]
pub struct CheckoutPresenter {
    markup: Arc<Markup>,
    total_display: TotalDisplay,
}

impl CheckoutPresenter {
    pub fn new(markup: Arc<Markup>, total_display: TotalDisplay) -> Self {
        Self { markup, total_display }
    }

    /// Rebuilds the checkout view from the current bag.
    pub fn open(
        &self,
        state: &ShopState,
        view: &mut dyn ViewHost,
    ) -> Result<CheckoutSummary, ApplicationError> {
        let bag = state.bag();
        view.set_item_count(bag.len());

        let html = self.markup.checkout_items(bag.entries())?;
        view.set_checkout_items(&html);

        let total = bag.total();
        let shown = match self.total_display {
            TotalDisplay::Computed => total,
            TotalDisplay::Zero => Decimal::ZERO,
        };
        let total_label = money_label(shown);
        view.set_total_label(&total_label);

        let rows = bag
            .entries()
            .iter()
            .map(|entry| CheckoutRow { quantity: 1, name: entry.name.clone(), price: entry.price })
            .collect();

        info!(
            event_name = "storefront.checkout.opened",
            item_count = bag.len(),
            total = %total,
            total_label = %total_label,
            "checkout summary rendered"
        );

        Ok(CheckoutSummary { item_count: bag.len(), rows, total, total_label })
    }

    /// Clears the bag and every card selection. Nothing leaves the process.
    pub fn confirm(&self, state: &mut ShopState, view: &mut dyn ViewHost) -> OrderReceipt {
        let receipt = OrderReceipt::new(state.bag_mut().clear());

        for product in state.catalog().iter() {
            view.set_card_style(product.id, CardStyle::Cleared);
        }
        view.set_item_count(0);

        if receipt.items.is_empty() {
            debug!(event_name = "storefront.order.empty", "order confirmed with an empty bag");
        }
        info!(
            event_name = "storefront.order.confirmed",
            order_id = %receipt.id.0,
            item_count = receipt.item_count(),
            total = %receipt.total,
            "order confirmed and bag cleared"
        );

        receipt
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use crate::config::TotalDisplay;
    use crate::domain::product::ProductId;
    use crate::render::{Markup, EMPTY_BAG_MESSAGE};
    use crate::shop::{BagManager, Catalog, ShopState};
    use crate::view::{CardStyle, MemoryView};

    use super::{CheckoutPresenter, CheckoutRow};

    fn presenter(total_display: TotalDisplay) -> CheckoutPresenter {
        CheckoutPresenter::new(Arc::new(Markup::embedded().expect("templates load")), total_display)
    }

    fn shop_with(ids: &[usize], view: &mut MemoryView) -> ShopState {
        let mut state = ShopState::new(Catalog::builtin());
        for id in ids {
            BagManager.toggle(&mut state, ProductId(*id), view).expect("toggle");
        }
        state
    }

    #[test]
    fn empty_bag_shows_message_and_no_rows() {
        let mut view = MemoryView::new();
        let state = shop_with(&[], &mut view);

        let summary = presenter(TotalDisplay::Computed).open(&state, &mut view).expect("open");

        assert!(summary.rows.is_empty());
        assert_eq!(summary.item_count, 0);
        assert!(view.checkout_markup.contains(EMPTY_BAG_MESSAGE));
        assert_eq!(view.checkout_markup.matches(r#"<div class="row">"#).count(), 0);
        assert_eq!(view.total_label, "$0.00");
        assert_eq!(view.item_count_label, "0");
    }

    #[test]
    fn rows_follow_insertion_order() {
        let mut view = MemoryView::new();
        let state = shop_with(&[6, 0, 3], &mut view);

        let summary = presenter(TotalDisplay::Computed).open(&state, &mut view).expect("open");

        let names: Vec<&str> = summary.rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Stanley Salmon 40oz edition",
                "H&M Relax fit short sleeve shirt",
                "Gold flower earings"
            ]
        );
        assert!(summary.rows.iter().all(|row| row.quantity == 1));
        assert_eq!(view.checkout_markup.matches(r#"<div class="row">"#).count(), 3);
        assert_eq!(view.item_count_label, "3");
    }

    #[test]
    fn computed_total_is_displayed_by_default() {
        let mut view = MemoryView::new();
        let state = shop_with(&[0, 3], &mut view);

        let summary = presenter(TotalDisplay::Computed).open(&state, &mut view).expect("open");

        assert_eq!(summary.total, Decimal::new(3598, 2));
        assert_eq!(summary.total_label, "$35.98");
        assert_eq!(view.total_label, "$35.98");
    }

    #[test]
    fn zero_display_mode_keeps_legacy_label_but_reports_sum() {
        let mut view = MemoryView::new();
        let state = shop_with(&[1, 4], &mut view);

        let summary = presenter(TotalDisplay::Zero).open(&state, &mut view).expect("open");

        assert_eq!(summary.total, Decimal::new(299998, 2));
        assert_eq!(view.total_label, "$0.00");
    }

    #[test]
    fn reopening_rebuilds_the_list() {
        let mut view = MemoryView::new();
        let mut state = shop_with(&[2, 5], &mut view);
        let checkout = presenter(TotalDisplay::Computed);
        checkout.open(&state, &mut view).expect("first open");

        BagManager.toggle(&mut state, ProductId(2), &mut view).expect("deselect hat");
        let summary = checkout.open(&state, &mut view).expect("second open");

        assert_eq!(
            summary.rows,
            vec![CheckoutRow {
                quantity: 1,
                name: "Women's olive green shorts".to_string(),
                price: Decimal::new(2499, 2),
            }]
        );
        assert_eq!(view.checkout_markup.matches(r#"<div class="row">"#).count(), 1);
        assert!(!view.checkout_markup.contains("Docker Small white unisex hat"));
    }

    #[test]
    fn confirm_clears_bag_styles_and_count() {
        let mut view = MemoryView::new();
        let mut state = shop_with(&[0, 1, 2], &mut view);

        let receipt = presenter(TotalDisplay::Computed).confirm(&mut state, &mut view);

        assert_eq!(receipt.item_count(), 3);
        assert_eq!(receipt.total, Decimal::new(61597, 2));
        assert!(state.bag().is_empty());
        assert!(view.selected_cards().is_empty());
        assert_eq!(view.card_style(ProductId(0)), CardStyle::Cleared);
        assert_eq!(view.item_count_label, "0");
        assert!(state.selected_products().is_empty());
    }

    #[test]
    fn confirm_on_empty_bag_still_resets() {
        let mut view = MemoryView::new();
        let mut state = shop_with(&[], &mut view);

        let receipt = presenter(TotalDisplay::Computed).confirm(&mut state, &mut view);

        assert_eq!(receipt.item_count(), 0);
        assert_eq!(view.item_count_label, "0");
        assert_eq!(view.card_styles.len(), 7);
        assert!(view.selected_cards().is_empty());
    }
}
