use learnpath_core::model::Page;

pub const LOGIN_BUTTON: &str = "Login";
pub const LOGIN_BUTTON_BUSY: &str = "Logging in...";
pub const SIGNUP_BUTTON: &str = "Sign Up";
pub const SIGNUP_BUTTON_BUSY: &str = "Creating account...";
pub const SIGNUP_SUCCESS: &str = "Account created successfully! Please login.";

/// Which form the auth page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Signup,
}

impl AuthTab {
    #[must_use]
    pub fn for_page(page: Page) -> Self {
        if page == Page::Signup {
            AuthTab::Signup
        } else {
            AuthTab::Login
        }
    }

    #[must_use]
    pub fn page(self) -> Page {
        match self {
            AuthTab::Login => Page::Login,
            AuthTab::Signup => Page::Signup,
        }
    }

    #[must_use]
    pub fn tab_class(self, active: AuthTab) -> &'static str {
        if self == active { "tab-btn active" } else { "tab-btn" }
    }
}

#[must_use]
pub fn login_button_label(busy: bool) -> &'static str {
    if busy { LOGIN_BUTTON_BUSY } else { LOGIN_BUTTON }
}

#[must_use]
pub fn signup_button_label(busy: bool) -> &'static str {
    if busy { SIGNUP_BUTTON_BUSY } else { SIGNUP_BUTTON }
}
