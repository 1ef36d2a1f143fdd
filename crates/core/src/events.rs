//! Click wiring between the host page and the shop components.
//!
//! Each handler is registered for one event type on an [`EventDispatcher`].
//! [`Storefront`] owns the shop state and the dispatcher, and threads the
//! state through every handler call.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{AppConfig, TotalDisplay};
use crate::domain::order::OrderReceipt;
use crate::domain::product::ProductId;
use crate::errors::ApplicationError;
use crate::render::Markup;
use crate::shop::bag::ToggleOutcome;
use crate::shop::{
    BagManager, Catalog, CatalogRenderer, CheckoutPresenter, CheckoutSummary, ShopState,
};
use crate::view::{ClickTarget, ViewHost};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event", content = "product_id")]
pub enum UiEvent {
    CardClicked(ProductId),
    CheckoutOpened,
    OrderConfirmed,
}

impl UiEvent {
    pub fn event_type(&self) -> UiEventType {
        match self {
            Self::CardClicked(_) => UiEventType::CardClicked,
            Self::CheckoutOpened => UiEventType::CheckoutOpened,
            Self::OrderConfirmed => UiEventType::OrderConfirmed,
        }
    }
}

impl From<ClickTarget> for UiEvent {
    fn from(target: ClickTarget) -> Self {
        match target {
            ClickTarget::Card(product_id) => Self::CardClicked(product_id),
            ClickTarget::CheckoutButton => Self::CheckoutOpened,
            ClickTarget::ConfirmOrderButton => Self::OrderConfirmed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UiEventType {
    CardClicked,
    CheckoutOpened,
    OrderConfirmed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum HandlerResult {
    Toggled(ToggleOutcome),
    CheckoutShown(CheckoutSummary),
    OrderPlaced(OrderReceipt),
    Ignored,
}

pub trait UiHandler {
    fn event_type(&self) -> UiEventType;
    fn handle(
        &self,
        event: &UiEvent,
        state: &mut ShopState,
        view: &mut dyn ViewHost,
    ) -> Result<HandlerResult, ApplicationError>;
}

#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<UiEventType, Box<dyn UiHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<H>(&mut self, handler: H)
    where
        H: UiHandler + 'static,
    {
        self.handlers.insert(handler.event_type(), Box::new(handler));
    }

    pub fn dispatch(
        &self,
        event: &UiEvent,
        state: &mut ShopState,
        view: &mut dyn ViewHost,
    ) -> Result<HandlerResult, ApplicationError> {
        let Some(handler) = self.handlers.get(&event.event_type()) else {
            debug!(
                event_name = "storefront.event.ignored",
                event = ?event,
                "no handler registered"
            );
            return Ok(HandlerResult::Ignored);
        };

        handler.handle(event, state, view)
    }
}

pub struct CardClickHandler {
    manager: BagManager,
}

impl CardClickHandler {
    pub fn new(manager: BagManager) -> Self {
        Self { manager }
    }
}

impl UiHandler for CardClickHandler {
    fn event_type(&self) -> UiEventType {
        UiEventType::CardClicked
    }

    fn handle(
        &self,
        event: &UiEvent,
        state: &mut ShopState,
        view: &mut dyn ViewHost,
    ) -> Result<HandlerResult, ApplicationError> {
        let UiEvent::CardClicked(product_id) = event else {
            return Ok(HandlerResult::Ignored);
        };

        let outcome = self.manager.toggle(state, *product_id, view)?;
        Ok(HandlerResult::Toggled(outcome))
    }
}

pub struct CheckoutOpenHandler {
    presenter: CheckoutPresenter,
}

impl CheckoutOpenHandler {
    pub fn new(presenter: CheckoutPresenter) -> Self {
        Self { presenter }
    }
}

impl UiHandler for CheckoutOpenHandler {
    fn event_type(&self) -> UiEventType {
        UiEventType::CheckoutOpened
    }

    fn handle(
        &self,
        _event: &UiEvent,
        state: &mut ShopState,
        view: &mut dyn ViewHost,
    ) -> Result<HandlerResult, ApplicationError> {
        let summary = self.presenter.open(state, view)?;
        Ok(HandlerResult::CheckoutShown(summary))
    }
}

pub struct ConfirmOrderHandler {
    presenter: CheckoutPresenter,
}

impl ConfirmOrderHandler {
    pub fn new(presenter: CheckoutPresenter) -> Self {
        Self { presenter }
    }
}

impl UiHandler for ConfirmOrderHandler {
    fn event_type(&self) -> UiEventType {
        UiEventType::OrderConfirmed
    }

    fn handle(
        &self,
        _event: &UiEvent,
        state: &mut ShopState,
        view: &mut dyn ViewHost,
    ) -> Result<HandlerResult, ApplicationError> {
        Ok(HandlerResult::OrderPlaced(self.presenter.confirm(state, view)))
    }
}

pub fn default_dispatcher(markup: Arc<Markup>, total_display: TotalDisplay) -> EventDispatcher {
    let presenter = CheckoutPresenter::new(markup, total_display);
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(CardClickHandler::new(BagManager));
    dispatcher.register(CheckoutOpenHandler::new(presenter.clone()));
    dispatcher.register(ConfirmOrderHandler::new(presenter));
    dispatcher
}

/// A mounted storefront: shop state plus the listeners wired at startup.
pub struct Storefront {
    state: ShopState,
    dispatcher: EventDispatcher,
}

impl Storefront {
    /// Renders the catalog into `view` and registers the click handlers.
    pub fn start(
        config: &AppConfig,
        catalog: Catalog,
        view: &mut dyn ViewHost,
    ) -> Result<Self, ApplicationError> {
        let markup = Arc::new(Markup::embedded()?);
        let state = ShopState::new(catalog);
        CatalogRenderer::new(Arc::clone(&markup)).render(&state, view)?;

        Ok(Self {
            state,
            dispatcher: default_dispatcher(markup, config.checkout.total_display),
        })
    }

    pub fn state(&self) -> &ShopState {
        &self.state
    }

    pub fn dispatch(
        &mut self,
        event: UiEvent,
        view: &mut dyn ViewHost,
    ) -> Result<HandlerResult, ApplicationError> {
        self.dispatcher.dispatch(&event, &mut self.state, view)
    }

    pub fn click(
        &mut self,
        target: ClickTarget,
        view: &mut dyn ViewHost,
    ) -> Result<HandlerResult, ApplicationError> {
        self.dispatch(UiEvent::from(target), view)
    }
}
