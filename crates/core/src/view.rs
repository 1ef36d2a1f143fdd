use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::product::ProductId;

/// Visual selection state of a catalog card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStyle {
    #[default]
    Cleared,
    Selected,
}

impl CardStyle {
    pub fn background_color(&self) -> &'static str {
        match self {
            Self::Cleared => "",
            Self::Selected => "var(--gray)",
        }
    }

    pub fn border(&self) -> &'static str {
        match self {
            Self::Cleared => "",
            Self::Selected => "solid 0.5px var(--primary)",
        }
    }
}

/// Inline style properties written onto a card element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CardCss {
    pub background_color: String,
    pub border: String,
}

impl From<CardStyle> for CardCss {
    fn from(style: CardStyle) -> Self {
        Self {
            background_color: style.background_color().to_string(),
            border: style.border().to_string(),
        }
    }
}

/// Elements the host must deliver click events for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "target", content = "product_id")]
pub enum ClickTarget {
    Card(ProductId),
    CheckoutButton,
    ConfirmOrderButton,
}

/// The render surface the storefront draws into.
pub trait ViewHost {
    fn mount_catalog(&mut self, markup: &str);
    fn register_target(&mut self, target: ClickTarget);
    fn set_item_count(&mut self, count: usize);
    fn set_checkout_items(&mut self, markup: &str);
    fn set_total_label(&mut self, label: &str);
    fn set_card_style(&mut self, product_id: ProductId, style: CardStyle);
}

/// Records every write so the state of the page can be inspected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemoryView {
    pub catalog_markup: String,
    pub item_count_label: String,
    pub checkout_markup: String,
    pub total_label: String,
    pub card_styles: BTreeMap<ProductId, CardStyle>,
    pub card_css: BTreeMap<ProductId, CardCss>,
    targets: Vec<ClickTarget>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card_style(&self, product_id: ProductId) -> CardStyle {
        self.card_styles.get(&product_id).copied().unwrap_or_default()
    }

    pub fn selected_cards(&self) -> Vec<ProductId> {
        self.card_styles
            .iter()
            .filter(|(_, style)| **style == CardStyle::Selected)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn registered_targets(&self) -> &[ClickTarget] {
        &self.targets
    }

    pub fn accepts(&self, target: ClickTarget) -> bool {
        self.targets.contains(&target)
    }
}

impl ViewHost for MemoryView {
    fn mount_catalog(&mut self, markup: &str) {
        self.catalog_markup.push_str(markup);
    }

    fn register_target(&mut self, target: ClickTarget) {
        if !self.targets.contains(&target) {
            self.targets.push(target);
        }
    }

    fn set_item_count(&mut self, count: usize) {
        self.item_count_label = count.to_string();
    }

    fn set_checkout_items(&mut self, markup: &str) {
        self.checkout_markup = markup.to_string();
    }

    fn set_total_label(&mut self, label: &str) {
        self.total_label = label.to_string();
    }

    fn set_card_style(&mut self, product_id: ProductId, style: CardStyle) {
        self.card_styles.insert(product_id, style);
        self.card_css.insert(product_id, CardCss::from(style));
    }
}
