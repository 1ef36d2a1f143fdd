pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod render;
pub mod shop;
pub mod view;

pub use config::{AppConfig, LoadOptions, TotalDisplay};
pub use domain::bag::{Bag, BagEntry, Toggle};
pub use domain::order::{OrderId, OrderReceipt};
pub use domain::product::{Product, ProductId, ProductImage};
pub use errors::{ApplicationError, DomainError};
pub use events::{EventDispatcher, HandlerResult, Storefront, UiEvent, UiHandler};
pub use shop::{
    BagManager, Catalog, CatalogRenderer, CheckoutPresenter, CheckoutSummary, SelectionState,
    ShopState,
};
pub use view::{CardCss, CardStyle, ClickTarget, MemoryView, ViewHost};
