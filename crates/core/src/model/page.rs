use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Every view the client can show. Exactly one is current at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Login,
    Signup,
    Dashboard,
    Courses,
    TopicDetail,
    Quiz,
    Recommendations,
}

/// Data fetch attached to a page transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Loader {
    Dashboard,
    Courses,
    Recommendations,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PageError {
    #[error("unknown page: {0}")]
    Unknown(String),
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Login,
        Page::Signup,
        Page::Dashboard,
        Page::Courses,
        Page::TopicDetail,
        Page::Quiz,
        Page::Recommendations,
    ];

    /// Stable identifier used by `show_page`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Signup => "signup",
            Page::Dashboard => "dashboard",
            Page::Courses => "courses",
            Page::TopicDetail => "topic-detail",
            Page::Quiz => "quiz",
            Page::Recommendations => "recommendations",
        }
    }

    /// The loader a page triggers when activated, if any.
    #[must_use]
    pub const fn loader(self) -> Option<Loader> {
        match self {
            Page::Dashboard => Some(Loader::Dashboard),
            Page::Courses => Some(Loader::Courses),
            Page::Recommendations => Some(Loader::Recommendations),
            Page::Login | Page::Signup | Page::TopicDetail | Page::Quiz => None,
        }
    }

    /// Page shown on startup.
    #[must_use]
    pub const fn initial(has_token: bool) -> Self {
        if has_token { Page::Dashboard } else { Page::Login }
    }

    #[must_use]
    pub const fn is_auth(self) -> bool {
        matches!(self, Page::Login | Page::Signup)
    }
}

impl FromStr for Page {
    type Err = PageError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.id() == id)
            .ok_or_else(|| PageError::Unknown(id.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Result of switching pages: the page now visible and the load it requires.
///
/// `loader` is only set when the page needs data *and* a session token was
/// present at the moment of the switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub page: Page,
    pub loader: Option<Loader>,
}

impl Transition {
    #[must_use]
    pub fn to(page: Page, authenticated: bool) -> Self {
        let loader = if authenticated { page.loader() } else { None };
        Self { page, loader }
    }
}
