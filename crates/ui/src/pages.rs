//! Page switching for the single-window shell.
//!
//! `PageRouter` in services owns the page state machine. `Nav` mirrors the
//! router's current transition into a signal so the outlet re-renders, and
//! carries the topic and quiz attempt that the detail pages display.

use dioxus::prelude::*;
use learnpath_core::model::{Page, QuizAttempt, QuizAttemptError, Topic, Transition};
use services::{PageData, PageRouter};

use crate::context::AppContext;
use crate::views::{
    AuthForms, AuthView, CoursesView, DashboardView, QuizView, RecommendationsView, TopicView,
    use_auth_forms,
};

#[derive(Clone, Copy, PartialEq)]
pub struct Nav {
    transition: Signal<Transition>,
    topic: Signal<Option<Topic>>,
    quiz: Signal<Option<QuizAttempt>>,
}

/// Create the navigation state and provide it to descendants.
pub fn use_nav_provider(
    initial: Transition,
    topic: Option<Topic>,
    quiz: Option<QuizAttempt>,
) -> Nav {
    let transition = use_signal(|| initial);
    let topic = use_signal(|| topic);
    let quiz = use_signal(|| quiz);
    use_context_provider(|| Nav {
        transition,
        topic,
        quiz,
    })
}

#[must_use]
pub fn use_nav() -> Nav {
    use_context::<Nav>()
}

impl Nav {
    /// Current transition. Reading subscribes the caller.
    #[must_use]
    pub fn transition(&self) -> Transition {
        *self.transition.read()
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.transition().page
    }

    /// Switch pages through the router.
    pub fn go(mut self, router: &PageRouter, page: Page) {
        self.transition.set(router.show(page));
    }

    /// Pick up page changes made by services (login, logout, 401).
    pub fn sync(mut self, router: &PageRouter) {
        let current = router.current();
        if self.transition.peek().page != current.page {
            self.transition.set(current);
        }
    }

    #[must_use]
    pub fn topic(&self) -> Option<Topic> {
        self.topic.read().clone()
    }

    pub fn set_topic(mut self, topic: Topic) {
        self.topic.set(Some(topic));
    }

    #[must_use]
    pub fn quiz(&self) -> Option<QuizAttempt> {
        self.quiz.read().clone()
    }

    pub fn set_quiz(mut self, attempt: QuizAttempt) {
        self.quiz.set(Some(attempt));
    }

    /// Record an answer on the running attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizAttemptError` for an out-of-range question or option.
    pub fn select_answer(mut self, question: usize, option: usize) -> Result<(), QuizAttemptError> {
        match &mut *self.quiz.write() {
            Some(attempt) => attempt.select(question, option),
            None => Err(QuizAttemptError::UnknownQuestion(question)),
        }
    }

    pub fn finish_quiz(mut self) {
        self.quiz.set(None);
    }
}

/// Run the loader attached to `transition`, then follow any page change the
/// services made meanwhile (a 401 sends the session back to login).
pub async fn load_page(ctx: &AppContext, nav: Nav, transition: Transition) -> Option<PageData> {
    let data = match transition.loader {
        Some(loader) => Some(ctx.services().load(loader).await),
        None => None,
    };
    nav.sync(ctx.router());
    data
}

/// End the session and return to an empty login form.
pub async fn log_out(ctx: AppContext, nav: Nav, forms: AuthForms) {
    ctx.auth().logout().await;
    forms.reset();
    nav.finish_quiz();
    nav.sync(ctx.router());
}

/// Header navigation plus the single visible page.
#[component]
pub fn Shell() -> Element {
    let nav = use_nav();
    let page = nav.page();

    rsx! {
        div { class: "app",
            if !page.is_auth() {
                TopBar {}
            }
            main { class: "content",
                PageOutlet {}
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_nav();
    let forms = use_auth_forms();

    let links = [
        (Page::Dashboard, "Dashboard"),
        (Page::Courses, "Courses"),
        (Page::Recommendations, "Recommendations"),
    ];

    rsx! {
        nav { class: "navbar",
            h1 { class: "navbar-brand", "Learnpath" }
            ul { class: "nav-links",
                for (target, label) in links {
                    NavLink { key: "{target}", target, label }
                }
            }
            button {
                class: "btn btn-secondary logout",
                r#type: "button",
                onclick: move |_| {
                    spawn(log_out(ctx.clone(), nav, forms));
                },
                "Logout"
            }
        }
    }
}

#[component]
fn NavLink(target: Page, label: &'static str) -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_nav();
    let class = if nav.page() == target {
        "nav-link active"
    } else {
        "nav-link"
    };

    rsx! {
        li {
            button {
                class,
                r#type: "button",
                onclick: move |_| nav.go(ctx.router(), target),
                "{label}"
            }
        }
    }
}

#[component]
fn PageOutlet() -> Element {
    let nav = use_nav();

    match nav.page() {
        Page::Login | Page::Signup => rsx! { AuthView {} },
        Page::Dashboard => rsx! { DashboardView {} },
        Page::Courses => rsx! { CoursesView {} },
        Page::TopicDetail => rsx! { TopicView {} },
        Page::Quiz => rsx! { QuizView {} },
        Page::Recommendations => rsx! { RecommendationsView {} },
    }
}
