use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use storefront_core::{
    CardCss, Catalog, ClickTarget, HandlerResult, MemoryView, ProductId, Storefront,
};

use crate::commands::{escape_json, load_config, CommandResult};

/// One scripted click: `click:<id>`, `checkout`, or `confirm`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionStep(pub ClickTarget);

impl FromStr for SessionStep {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "checkout" => return Ok(Self(ClickTarget::CheckoutButton)),
            "confirm" => return Ok(Self(ClickTarget::ConfirmOrderButton)),
            _ => {}
        }

        let Some(raw_id) = value.strip_prefix("click:") else {
            return Err(format!(
                "unsupported step `{value}` (expected click:<id>|checkout|confirm)"
            ));
        };
        raw_id
            .parse::<usize>()
            .map(|id| Self(ClickTarget::Card(ProductId(id))))
            .map_err(|_| format!("invalid product id in step `{value}`"))
    }
}

impl fmt::Display for SessionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ClickTarget::Card(id) => write!(f, "click:{id}"),
            ClickTarget::CheckoutButton => write!(f, "checkout"),
            ClickTarget::ConfirmOrderButton => write!(f, "confirm"),
        }
    }
}

#[derive(Debug, Serialize)]
struct StepRecord {
    step: String,
    item_count_label: String,
    selected: Vec<usize>,
    selected_css: Vec<CardCss>,
    total_label: String,
    outcome: HandlerResult,
}

#[derive(Debug, Serialize)]
struct SessionReport {
    command: &'static str,
    status: &'static str,
    steps: Vec<StepRecord>,
}

pub fn run(raw_steps: &[String]) -> CommandResult {
    let parsed: Result<Vec<SessionStep>, String> =
        raw_steps.iter().map(|raw| raw.parse::<SessionStep>()).collect();
    let steps = match parsed {
        Ok(steps) => steps,
        Err(message) => return CommandResult::failure("session", "invalid_step", message, 4),
    };

    let config = match load_config() {
        Ok(config) => config,
        Err(error) => return CommandResult::config_failure("session", &error),
    };

    let mut view = MemoryView::new();
    let mut storefront = match Storefront::start(&config, Catalog::builtin(), &mut view) {
        Ok(storefront) => storefront,
        Err(error) => {
            return CommandResult::failure("session", error.error_class(), error.to_string(), 3)
        }
    };

    let mut records: Vec<StepRecord> = Vec::with_capacity(steps.len());
    for step in steps {
        let outcome = match storefront.click(step.0, &mut view) {
            Ok(outcome) => outcome,
            Err(error) => {
                return CommandResult::failure(
                    "session",
                    error.error_class(),
                    format!("step `{step}` failed: {error}"),
                    5,
                )
            }
        };

        let selected = view.selected_cards();
        let selected_css = selected
            .iter()
            .filter_map(|id| view.card_css.get(id).cloned())
            .collect();
        records.push(StepRecord {
            step: step.to_string(),
            item_count_label: view.item_count_label.clone(),
            selected: selected.into_iter().map(|id| id.0).collect(),
            selected_css,
            total_label: view.total_label.clone(),
            outcome,
        });
    }

    let report = SessionReport { command: "session", status: "ok", steps: records };
    let output = serde_json::to_string(&report).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"session\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            escape_json(&error.to_string())
        )
    });

    CommandResult { exit_code: 0, output }
}
