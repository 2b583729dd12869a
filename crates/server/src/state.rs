use std::sync::Arc;

use explorer_core::{Browser, Config, DetailsLoader, SanitizedConfig, SessionController};

/// Shared application state
pub struct AppState {
    config: Config,
    session: SessionController,
    browser: Browser,
    details: DetailsLoader,
}

impl AppState {
    pub fn new(
        config: Config,
        session: SessionController,
        browser: Browser,
        details: DetailsLoader,
    ) -> Self {
        Self {
            config,
            session,
            browser,
            details,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    pub fn details(&self) -> &DetailsLoader {
        &self.details
    }
}

pub type SharedState = Arc<AppState>;
