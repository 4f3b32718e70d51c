use std::sync::Arc;

use services::{AppServices, AuthService, PageRouter, QuizService};

/// Services shared with every view through the Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
}

impl AppContext {
    #[must_use]
    pub fn new(services: AppServices) -> Self {
        Self { services }
    }

    #[must_use]
    pub fn services(&self) -> &AppServices {
        &self.services
    }

    #[must_use]
    pub fn router(&self) -> &PageRouter {
        self.services.router()
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        self.services.quizzes()
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from assembled services.
#[must_use]
pub fn build_app_context(services: AppServices) -> AppContext {
    AppContext::new(services)
}
