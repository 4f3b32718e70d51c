use dioxus::prelude::*;
use learnpath_core::model::{LoginDraft, SignupDraft};
use tracing::debug;

use crate::context::AppContext;
use crate::pages::{Nav, use_nav};
use crate::views::ViewError;
use crate::vm::{AuthTab, SIGNUP_SUCCESS, login_button_label, signup_button_label};

#[derive(Clone, Copy, PartialEq)]
pub struct LoginFields {
    pub username: Signal<String>,
    pub password: Signal<String>,
    pub error: Signal<Option<ViewError>>,
    pub busy: Signal<bool>,
}

#[derive(Clone, Copy, PartialEq)]
pub struct SignupFields {
    pub username: Signal<String>,
    pub email: Signal<String>,
    pub password: Signal<String>,
    pub full_name: Signal<String>,
    pub error: Signal<Option<ViewError>>,
    pub busy: Signal<bool>,
}

/// Form state for the auth page. Lives at the app root so logout can reset it.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthForms {
    pub login: LoginFields,
    pub signup: SignupFields,
    pub notice: Signal<Option<String>>,
}

pub fn use_auth_forms_provider() -> AuthForms {
    let login = LoginFields {
        username: use_signal(String::new),
        password: use_signal(String::new),
        error: use_signal(|| None),
        busy: use_signal(|| false),
    };
    let signup = SignupFields {
        username: use_signal(String::new),
        email: use_signal(String::new),
        password: use_signal(String::new),
        full_name: use_signal(String::new),
        error: use_signal(|| None),
        busy: use_signal(|| false),
    };
    let notice = use_signal(|| None);
    use_context_provider(|| AuthForms {
        login,
        signup,
        notice,
    })
}

#[must_use]
pub fn use_auth_forms() -> AuthForms {
    use_context::<AuthForms>()
}

impl LoginFields {
    fn clear(mut self) {
        self.username.set(String::new());
        self.password.set(String::new());
        self.error.set(None);
    }
}

impl SignupFields {
    fn clear(mut self) {
        self.username.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
        self.full_name.set(String::new());
        self.error.set(None);
    }
}

impl AuthForms {
    pub fn switch_tab(mut self, ctx: &AppContext, nav: Nav, tab: AuthTab) {
        self.notice.set(None);
        nav.go(ctx.router(), tab.page());
    }

    /// Empty both forms, e.g. after logout.
    pub fn reset(mut self) {
        self.login.clear();
        self.signup.clear();
        self.notice.set(None);
    }

    /// Log in with the current field values. Ignored while a login is in flight.
    pub async fn submit_login(self, ctx: AppContext, nav: Nav) {
        let mut fields = self.login;
        if *fields.busy.peek() {
            return;
        }
        let draft = LoginDraft::new(
            fields.username.peek().clone(),
            fields.password.peek().clone(),
        );
        fields.busy.set(true);
        fields.error.set(None);
        let result = ctx.auth().login(draft).await;
        fields.busy.set(false);
        match result {
            Ok(()) => {
                fields.clear();
                nav.sync(ctx.router());
            }
            Err(err) => {
                debug!(error = %err, "login rejected");
                fields.error.set(Some(err.into()));
                // A 401 has already reset the session; stay in step with it.
                nav.sync(ctx.router());
            }
        }
    }

    /// Create an account with the current field values, then switch to the
    /// login tab with a notice. Ignored while a signup is in flight.
    pub async fn submit_signup(self, ctx: AppContext, nav: Nav) {
        let mut fields = self.signup;
        if *fields.busy.peek() {
            return;
        }
        let draft = SignupDraft {
            username: fields.username.peek().clone(),
            email: fields.email.peek().clone(),
            password: fields.password.peek().clone(),
            full_name: fields.full_name.peek().clone(),
        };
        fields.busy.set(true);
        fields.error.set(None);
        let result = ctx.auth().signup(draft).await;
        fields.busy.set(false);
        match result {
            Ok(_) => {
                let mut notice = self.notice;
                fields.clear();
                notice.set(Some(SIGNUP_SUCCESS.to_string()));
                nav.go(ctx.router(), AuthTab::Login.page());
            }
            Err(err) => {
                debug!(error = %err, "signup rejected");
                fields.error.set(Some(err.into()));
            }
        }
    }
}

/// Login and signup forms behind two tabs.
#[component]
pub fn AuthView() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_nav();
    let forms = use_auth_forms();
    let tab = AuthTab::for_page(nav.page());
    let ctx_for_signup = ctx.clone();

    rsx! {
        div { class: "page auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Learnpath" }
                div { class: "tabs",
                    button {
                        class: AuthTab::Login.tab_class(tab),
                        r#type: "button",
                        onclick: move |_| forms.switch_tab(&ctx, nav, AuthTab::Login),
                        "Login"
                    }
                    button {
                        class: AuthTab::Signup.tab_class(tab),
                        r#type: "button",
                        onclick: move |_| forms.switch_tab(&ctx_for_signup, nav, AuthTab::Signup),
                        "Sign Up"
                    }
                }
                if let Some(message) = forms.notice.read().clone() {
                    p { class: "notice success", "{message}" }
                }
                match tab {
                    AuthTab::Login => rsx! { LoginPanel {} },
                    AuthTab::Signup => rsx! { SignupPanel {} },
                }
            }
        }
    }
}

#[component]
fn LoginPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_nav();
    let forms = use_auth_forms();
    let LoginFields {
        mut username,
        mut password,
        error,
        busy,
    } = forms.login;

    let submit = move |_: MouseEvent| {
        spawn(forms.submit_login(ctx.clone(), nav));
    };

    let button_label = login_button_label(busy());

    rsx! {
        div { class: "auth-form",
            label { r#for: "login-username", "Username" }
            input {
                id: "login-username",
                r#type: "text",
                value: "{username}",
                oninput: move |evt| username.set(evt.value()),
            }
            label { r#for: "login-password", "Password" }
            input {
                id: "login-password",
                r#type: "password",
                value: "{password}",
                oninput: move |evt| password.set(evt.value()),
            }
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: busy(),
                onclick: submit,
                if busy() {
                    span { class: "spinner" }
                }
                "{button_label}"
            }
        }
    }
}

#[component]
fn SignupPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_nav();
    let forms = use_auth_forms();
    let SignupFields {
        mut username,
        mut email,
        mut password,
        mut full_name,
        error,
        busy,
    } = forms.signup;

    let submit = move |_: MouseEvent| {
        spawn(forms.submit_signup(ctx.clone(), nav));
    };

    let button_label = signup_button_label(busy());

    rsx! {
        div { class: "auth-form",
            label { r#for: "signup-username", "Username" }
            input {
                id: "signup-username",
                r#type: "text",
                value: "{username}",
                oninput: move |evt| username.set(evt.value()),
            }
            label { r#for: "signup-email", "Email" }
            input {
                id: "signup-email",
                r#type: "email",
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            label { r#for: "signup-password", "Password" }
            input {
                id: "signup-password",
                r#type: "password",
                value: "{password}",
                oninput: move |evt| password.set(evt.value()),
            }
            label { r#for: "signup-full-name", "Full name (optional)" }
            input {
                id: "signup-full-name",
                r#type: "text",
                value: "{full_name}",
                oninput: move |evt| full_name.set(evt.value()),
            }
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: busy(),
                onclick: submit,
                if busy() {
                    span { class: "spinner" }
                }
                "{button_label}"
            }
        }
    }
}
