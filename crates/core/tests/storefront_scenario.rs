use storefront_core::{
    AppConfig, Catalog, ClickTarget, HandlerResult, MemoryView, ProductId, SelectionState,
    Storefront, Toggle,
};

const SHIRT: ProductId = ProductId(0);
const EARINGS: ProductId = ProductId(3);

fn mounted() -> (Storefront, MemoryView) {
    let mut view = MemoryView::new();
    let storefront =
        Storefront::start(&AppConfig::default(), Catalog::builtin(), &mut view).expect("start");
    (storefront, view)
}

#[test]
fn select_checkout_deselect_confirm_walkthrough() {
    let (mut storefront, mut view) = mounted();

    storefront.click(ClickTarget::Card(SHIRT), &mut view).expect("select shirt");
    assert_eq!(view.item_count_label, "1");

    storefront.click(ClickTarget::Card(EARINGS), &mut view).expect("select earings");
    assert_eq!(view.item_count_label, "2");

    let result = storefront.click(ClickTarget::CheckoutButton, &mut view).expect("checkout");
    let HandlerResult::CheckoutShown(summary) = result else {
        panic!("expected checkout summary, got {result:?}");
    };
    let names: Vec<&str> = summary.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["H&M Relax fit short sleeve shirt", "Gold flower earings"]);
    let shirt_row = view.checkout_markup.find("H&amp;M Relax fit short sleeve shirt").expect("row 1");
    let earings_row = view.checkout_markup.find("Gold flower earings").expect("row 2");
    assert!(shirt_row < earings_row);
    assert!(view.checkout_markup.contains("$19.99"));
    assert!(view.checkout_markup.contains("$15.99"));
    assert_eq!(view.total_label, "$35.98");

    let result = storefront.click(ClickTarget::Card(SHIRT), &mut view).expect("deselect shirt");
    assert!(matches!(result, HandlerResult::Toggled(ref outcome) if outcome.toggle == Toggle::Removed));
    assert_eq!(view.item_count_label, "1");
    assert_eq!(storefront.state().selection(SHIRT), Ok(SelectionState::Unselected));

    let result = storefront.click(ClickTarget::ConfirmOrderButton, &mut view).expect("confirm");
    let HandlerResult::OrderPlaced(receipt) = result else {
        panic!("expected order receipt, got {result:?}");
    };
    assert_eq!(receipt.item_count(), 1);
    assert_eq!(receipt.items[0].name, "Gold flower earings");
    assert_eq!(view.item_count_label, "0");
    assert!(view.selected_cards().is_empty());
    assert!(storefront.state().bag().is_empty());
}

#[test]
fn visual_selection_always_matches_bag_membership() {
    let (mut storefront, mut view) = mounted();

    for id in [1, 2, 5, 2, 6, 1, 4, 5, 0] {
        storefront.click(ClickTarget::Card(ProductId(id)), &mut view).expect("toggle");
        assert_eq!(view.selected_cards(), storefront.state().selected_products());
        assert_eq!(view.item_count_label, storefront.state().bag().len().to_string());
    }
}

#[test]
fn confirm_resets_regardless_of_prior_state() {
    let (mut storefront, mut view) = mounted();
    for id in 0..7 {
        storefront.click(ClickTarget::Card(ProductId(id)), &mut view).expect("select");
    }
    storefront.click(ClickTarget::CheckoutButton, &mut view).expect("checkout");

    storefront.click(ClickTarget::ConfirmOrderButton, &mut view).expect("confirm");
    storefront.click(ClickTarget::ConfirmOrderButton, &mut view).expect("confirm again");

    assert_eq!(view.item_count_label, "0");
    assert!(view.selected_cards().is_empty());
    assert!(storefront.state().bag().is_empty());

    storefront.click(ClickTarget::CheckoutButton, &mut view).expect("checkout after confirm");
    assert!(view.checkout_markup.contains("No items in bag."));
    assert_eq!(view.total_label, "$0.00");
}
