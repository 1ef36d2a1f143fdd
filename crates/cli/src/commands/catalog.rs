use storefront_core::{Catalog, MemoryView, Storefront};

use crate::commands::{load_config, CommandResult};

/// Mounts the storefront on an in-memory page and prints the catalog markup.
pub fn run() -> CommandResult {
    let config = match load_config() {
        Ok(config) => config,
        Err(error) => return CommandResult::config_failure("catalog", &error),
    };

    let mut view = MemoryView::new();
    match Storefront::start(&config, Catalog::builtin(), &mut view) {
        Ok(_) => CommandResult { exit_code: 0, output: view.catalog_markup.trim().to_string() },
        Err(error) => CommandResult::failure("catalog", error.error_class(), error.to_string(), 3),
    }
}
