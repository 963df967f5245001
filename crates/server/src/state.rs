use std::sync::Arc;

use secondturn_core::{Config, GameCatalog, LocalIndex, SanitizedConfig};

/// Shared application state. Built once in `main`, handed to handlers by
/// reference; no lazily-initialized globals.
pub struct AppState {
    config: Config,
    catalog: Arc<dyn GameCatalog>,
    local_index: Arc<LocalIndex>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<dyn GameCatalog>, local_index: Arc<LocalIndex>) -> Self {
        Self {
            config,
            catalog,
            local_index,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn catalog(&self) -> &dyn GameCatalog {
        self.catalog.as_ref()
    }

    pub fn local_index(&self) -> &LocalIndex {
        self.local_index.as_ref()
    }
}
