use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use crate::domain::product::{Product, ProductId, ProductImage};
use crate::errors::ApplicationError;
use crate::render::Markup;
use crate::shop::ShopState;
use crate::view::{ClickTarget, ViewHost};

/// A catalog row before it is given its positional id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogListing {
    pub name: String,
    pub price: Decimal,
    pub image: ProductImage,
}

impl CatalogListing {
    pub fn new(name: &str, price: Decimal, src: &str, alt: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            image: ProductImage { src: src.to_string(), alt: alt.to_string() },
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn from_listings(listings: impl IntoIterator<Item = CatalogListing>) -> Self {
        let products = listings
            .into_iter()
            .enumerate()
            .map(|(position, listing)| Product {
                id: ProductId(position),
                name: listing.name,
                price: listing.price,
                image: listing.image,
            })
            .collect();
        Self { products }
    }

    /// The storefront's fixed product list.
    pub fn builtin() -> Self {
        Self::from_listings([
            CatalogListing::new(
                "H&M Relax fit short sleeve shirt",
                Decimal::new(1999, 2),
                "assets/images/sh-item-1.png",
                "A white short sleeve shirt.",
            ),
            CatalogListing::new(
                "Tissot Men's watch, azure silver",
                Decimal::new(54999, 2),
                "assets/images/sh-item-2.png",
                "A fancy looking watch with a metallic finish.",
            ),
            CatalogListing::new(
                "Docker Small white unisex hat",
                Decimal::new(4599, 2),
                "assets/images/sh-item-3.png",
                "A soft, small hat with a ribbon on the bucket.",
            ),
            CatalogListing::new(
                "Gold flower earings",
                Decimal::new(1599, 2),
                "assets/images/sh-item-4.png",
                "Small gold flower earings with jewels.",
            ),
            CatalogListing::new(
                "Gucci Leather handbag Noir edition",
                Decimal::new(244999, 2),
                "assets/images/sh-item-5.png",
                "Leathery hand bag.",
            ),
            CatalogListing::new(
                "Women's olive green shorts",
                Decimal::new(2499, 2),
                "assets/images/sh-item-6.png",
                "Women's summer shorts.",
            ),
            CatalogListing::new(
                "Stanley Salmon 40oz edition",
                Decimal::new(5499, 2),
                "assets/images/sh-item-7.png",
                "Overpriced sippie cup",
            ),
        ])
    }

    pub fn get(&self, product_id: ProductId) -> Option<&Product> {
        self.products.get(product_id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Renders the catalog grid once at startup and wires up click targets.
#[derive(Clone, Debug)]
pub struct CatalogRenderer {
    markup: Arc<Markup>,
}

impl CatalogRenderer {
    pub fn new(markup: Arc<Markup>) -> Self {
        Self { markup }
    }

    pub fn render(&self, state: &ShopState, view: &mut dyn ViewHost) -> Result<usize, ApplicationError> {
        let catalog = state.catalog();
        let html = self.markup.catalog(catalog.products())?;
        view.mount_catalog(&html);

        for product in catalog.iter() {
            view.register_target(ClickTarget::Card(product.id));
        }
        view.register_target(ClickTarget::CheckoutButton);
        view.register_target(ClickTarget::ConfirmOrderButton);
        view.set_item_count(state.bag().len());

        info!(
            event_name = "storefront.catalog.rendered",
            card_count = catalog.len(),
            "catalog rendered"
        );
        Ok(catalog.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use crate::domain::product::ProductId;
    use crate::render::Markup;
    use crate::shop::ShopState;
    use crate::view::{ClickTarget, MemoryView};

    use super::{Catalog, CatalogListing, CatalogRenderer};

    fn renderer() -> CatalogRenderer {
        CatalogRenderer::new(Arc::new(Markup::embedded().expect("templates load")))
    }

    #[test]
    fn builtin_catalog_assigns_positional_ids() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.len(), 7);
        for (position, product) in catalog.iter().enumerate() {
            assert_eq!(product.id, ProductId(position));
        }

        let shirt = catalog.get(ProductId(0)).expect("first product");
        assert_eq!(shirt.name, "H&M Relax fit short sleeve shirt");
        assert_eq!(shirt.price, Decimal::new(1999, 2));
        assert!(catalog.get(ProductId(7)).is_none());
    }

    #[test]
    fn render_mounts_every_card_and_registers_targets() {
        let state = ShopState::new(Catalog::builtin());
        let mut view = MemoryView::new();

        let rendered = renderer().render(&state, &mut view).expect("render");

        assert_eq!(rendered, 7);
        assert_eq!(view.catalog_markup.matches("sh-card-item").count(), 7);
        assert!(view.catalog_markup.contains(r#"id="sh-item-6""#));
        assert!(view.catalog_markup.contains("$2449.99"));
        assert_eq!(view.registered_targets().len(), 9);
        assert!(view.accepts(ClickTarget::Card(ProductId(4))));
        assert!(view.accepts(ClickTarget::CheckoutButton));
        assert!(view.accepts(ClickTarget::ConfirmOrderButton));
        assert_eq!(view.item_count_label, "0");
    }

    #[test]
    fn empty_catalog_renders_zero_cards() {
        let state = ShopState::new(Catalog::from_listings(Vec::<CatalogListing>::new()));
        let mut view = MemoryView::new();

        let rendered = renderer().render(&state, &mut view).expect("render");

        assert_eq!(rendered, 0);
        assert_eq!(view.catalog_markup.matches("sh-card-item").count(), 0);
        assert_eq!(view.registered_targets().len(), 2);
    }
}
