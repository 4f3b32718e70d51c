use std::sync::{Arc, PoisonError, RwLock};

use learnpath_core::model::{Page, PageError, Transition};
use tracing::debug;

use crate::session::Session;

/// Page state machine: which single page is visible and what it must load.
#[derive(Clone)]
pub struct PageRouter {
    current: Arc<RwLock<Transition>>,
    session: Session,
}

impl PageRouter {
    /// Start on the dashboard when a token is present, on login otherwise.
    #[must_use]
    pub fn new(session: Session) -> Self {
        let initial = Transition::to(
            Page::initial(session.is_authenticated()),
            session.is_authenticated(),
        );
        Self {
            current: Arc::new(RwLock::new(initial)),
            session,
        }
    }

    /// The most recent transition (and so the visible page).
    #[must_use]
    pub fn current(&self) -> Transition {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.current().page
    }

    /// Make `page` the only visible page.
    ///
    /// The returned transition names the loader to run, if the page has one
    /// and the session holds a token right now.
    pub fn show(&self, page: Page) -> Transition {
        let transition = Transition::to(page, self.session.is_authenticated());
        debug!(page = %page, loader = ?transition.loader, "show page");
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = transition;
        transition
    }

    /// `show` by page id.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Unknown` for ids that name no page; the current
    /// page is left unchanged.
    pub fn show_page(&self, page_id: &str) -> Result<Transition, PageError> {
        let page = page_id.parse::<Page>()?;
        Ok(self.show(page))
    }

    /// Jump to the login page, e.g. after the server rejected the token.
    pub fn force_login(&self) -> Transition {
        self.show(Page::Login)
    }
}
