//! Markup generation for the catalog grid and the checkout item list.
//!
//! Templates are compiled into the binary and rendered with Tera. Names and
//! alt text are escaped explicitly in the templates; image paths come from
//! the compiled-in catalog and are emitted as-is.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use tera::{Context, Tera};

use crate::domain::bag::BagEntry;
use crate::domain::product::Product;
use crate::errors::ApplicationError;

pub const CATALOG_TEMPLATE: &str = "catalog.html.tera";
pub const CHECKOUT_ITEMS_TEMPLATE: &str = "checkout_items.html.tera";

pub const EMPTY_BAG_MESSAGE: &str = "No items in bag. Click on an item to add it to your bag!";

/// Register custom Tera filters used by storefront templates.
///
/// - `money`: two-decimal rendering of a price, e.g. `product.price | money`
pub fn register_template_filters(tera: &mut Tera) {
    tera.register_filter("money", tera_money_filter);
}

/// Accepts decimals serialized as strings as well as plain JSON numbers.
fn tera_money_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let raw = match value {
        tera::Value::String(raw) => raw.clone(),
        tera::Value::Number(number) => number.to_string(),
        other => {
            return Err(tera::Error::msg(format!("money filter expects a number, got {other}")))
        }
    };
    let amount = Decimal::from_str(raw.trim()).map_err(|error| {
        tera::Error::msg(format!("money filter could not parse `{raw}`: {error}"))
    })?;

    Ok(tera::Value::String(two_decimals(amount)))
}

fn two_decimals(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// `$` prefixed, two-decimal label text.
pub fn money_label(amount: Decimal) -> String {
    format!("${}", two_decimals(amount))
}

#[derive(Clone, Debug)]
pub struct Markup {
    tera: Tera,
}

impl Markup {
    pub fn embedded() -> Result<Self, ApplicationError> {
        let mut tera = Tera::default();
        register_template_filters(&mut tera);
        tera.add_raw_templates(vec![
            (CATALOG_TEMPLATE, include_str!("../templates/catalog.html.tera")),
            (CHECKOUT_ITEMS_TEMPLATE, include_str!("../templates/checkout_items.html.tera")),
        ])?;

        Ok(Self { tera })
    }

    pub fn catalog(&self, products: &[Product]) -> Result<String, ApplicationError> {
        let mut context = Context::new();
        context.insert("products", products);
        Ok(self.tera.render(CATALOG_TEMPLATE, &context)?)
    }

    pub fn checkout_items(&self, entries: &[BagEntry]) -> Result<String, ApplicationError> {
        let mut context = Context::new();
        context.insert("entries", entries);
        context.insert("empty_message", EMPTY_BAG_MESSAGE);
        Ok(self.tera.render(CHECKOUT_ITEMS_TEMPLATE, &context)?)
    }
}
