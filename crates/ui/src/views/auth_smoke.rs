use std::sync::Arc;
use dioxus::prelude::*;

use learnpath_core::model::Page;
use serde_json::json;
use services::{
    ApiRequest, ApiResponse, HttpTransport, Method, ScriptedTransport, TransportError,
};
use tokio::sync::Notify;

use crate::pages::log_out;
use crate::views::AuthForms;
use crate::vm::SIGNUP_SUCCESS;

use super::test_harness::{
    HarnessSetup, ViewHarness, drive_dom, setup_view_harness, setup_view_harness_over,
};

/// Holds requests to one endpoint until released, so in-flight UI state can
/// be rendered.
struct HeldTransport {
    script: ScriptedTransport,
    held: &'static str,
    release: Arc<Notify>,
}

#[async_trait::async_trait]
impl HttpTransport for HeldTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        if request.url.ends_with(self.held) {
            self.release.notified().await;
        }
        self.script.send(request).await
    }
}

async fn held_harness(
    script: ScriptedTransport,
    held: &'static str,
    page: Page,
) -> (ViewHarness, Arc<Notify>) {
    let release = Arc::new(Notify::new());
    let network = Arc::new(HeldTransport {
        script: script.clone(),
        held,
        release: Arc::clone(&release),
    });
    let setup = HarnessSetup {
        page: Some(page),
        ..HarnessSetup::default()
    };
    let mut harness = setup_view_harness_over(network, script, setup).await;
    harness.rebuild();
    (harness, release)
}

fn fill_signup(forms: AuthForms, username: &str, email: &str, password: &str, full_name: &str) {
    let mut signup = forms.signup;
    signup.username.set(username.to_string());
    signup.email.set(email.to_string());
    signup.password.set(password.to_string());
    signup.full_name.set(full_name.to_string());
}

fn fill_login(forms: AuthForms, username: &str, password: &str) {
    let mut login = forms.login;
    login.username.set(username.to_string());
    login.password.set(password.to_string());
}

#[tokio::test(flavor = "current_thread")]
async fn signup_shows_progress_then_returns_to_login_with_notice() {
    let script = ScriptedTransport::new().post_json(
        "/auth/signup",
        json!({"id": 9, "username": "ada", "email": "ada@example.com", "full_name": "Ada L"}),
    );
    let (mut harness, release) = held_harness(script, "/auth/signup", Page::Signup).await;
    let forms = harness.handles.forms();
    let nav = harness.handles.nav();

    fill_signup(forms, "ada", "ada@example.com", "secret", "Ada L");
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("ada@example.com"), "missing typed email in {html}");
    assert!(html.contains("Sign Up"), "missing idle label in {html}");
    assert!(!html.contains("spinner"), "unexpected spinner in {html}");

    let submit = forms.submit_signup(harness.ctx(), nav);
    let in_flight = async {
        tokio::task::yield_now().await;
        drive_dom(&mut harness.dom);
        let html = harness.render();
        assert!(*forms.signup.busy.peek());
        assert!(html.contains("Creating account..."), "missing busy label in {html}");
        assert!(html.contains("spinner"), "missing spinner in {html}");

        // A second click while the call is pending does nothing.
        forms.submit_signup(harness.ctx(), nav).await;
        release.notify_one();
    };
    tokio::join!(submit, in_flight);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains(SIGNUP_SUCCESS), "missing notice in {html}");
    assert!(html.contains("login-username"), "expected login form in {html}");
    assert!(!html.contains("signup-email"), "signup form still shown in {html}");
    assert!(!html.contains("ada@example.com"), "fields not cleared in {html}");
    assert_eq!(harness.services.router().page(), Page::Login);
    assert!(!*forms.signup.busy.peek());
    for field in [
        forms.signup.username,
        forms.signup.email,
        forms.signup.password,
        forms.signup.full_name,
    ] {
        assert!(field.peek().is_empty());
    }
    assert_eq!(harness.transport.requests_to("/auth/signup").len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn login_shows_progress_then_opens_dashboard() {
    let script = ScriptedTransport::new().post_json(
        "/auth/login",
        json!({"access_token": "tok-9", "token_type": "bearer"}),
    );
    let (mut harness, release) = held_harness(script, "/auth/login", Page::Login).await;
    let forms = harness.handles.forms();
    let nav = harness.handles.nav();

    fill_login(forms, "ada", "secret");
    let submit = forms.submit_login(harness.ctx(), nav);
    let in_flight = async {
        tokio::task::yield_now().await;
        drive_dom(&mut harness.dom);
        let html = harness.render();
        assert!(html.contains("Logging in..."), "missing busy label in {html}");
        assert!(html.contains("spinner"), "missing spinner in {html}");
        release.notify_one();
    };
    tokio::join!(submit, in_flight);
    harness.settle().await;

    assert_eq!(harness.services.router().page(), Page::Dashboard);
    assert!(harness.services.session().is_authenticated());
    assert!(!*forms.login.busy.peek());
    assert!(forms.login.username.peek().is_empty());
    assert!(forms.login.password.peek().is_empty());
    let html = harness.render();
    assert!(html.contains("Logout"), "expected signed-in shell in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_rejected_with_401_shows_unauthorized_inline() {
    let transport = ScriptedTransport::new().respond(
        Method::POST,
        "/auth/login",
        ApiResponse::json(401, &json!({"detail": "Incorrect username or password"})),
    );
    let setup = HarnessSetup {
        page: Some(Page::Login),
        ..HarnessSetup::default()
    };
    let mut harness = setup_view_harness(transport, setup).await;
    harness.rebuild();
    let forms = harness.handles.forms();

    fill_login(forms, "ada", "wrong");
    forms.submit_login(harness.ctx(), harness.handles.nav()).await;
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Unauthorized"), "missing error in {html}");
    assert!(!html.contains("Logging in..."), "button label not restored in {html}");
    assert!(!*forms.login.busy.peek());
    assert_eq!(harness.services.router().page(), Page::Login);
    assert_eq!(forms.login.username.peek().as_str(), "ada");
}

#[tokio::test(flavor = "current_thread")]
async fn signup_with_bad_email_stays_on_signup() {
    let setup = HarnessSetup {
        page: Some(Page::Signup),
        ..HarnessSetup::default()
    };
    let mut harness = setup_view_harness(ScriptedTransport::new(), setup).await;
    harness.rebuild();
    let forms = harness.handles.forms();

    fill_signup(forms, "ada", "not-an-email", "secret", "");
    forms.submit_signup(harness.ctx(), harness.handles.nav()).await;
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Please enter a valid email address"),
        "missing validation error in {html}"
    );
    assert!(!html.contains(SIGNUP_SUCCESS));
    assert_eq!(harness.services.router().page(), Page::Signup);
    assert_eq!(forms.signup.email.peek().as_str(), "not-an-email");
    assert!(harness.transport.requests().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn logout_returns_to_empty_login_form() {
    let transport = ScriptedTransport::new().get_json("/courses/", json!([]));
    let setup = HarnessSetup {
        token: Some("tok"),
        page: Some(Page::Courses),
        ..HarnessSetup::default()
    };
    let mut harness = setup_view_harness(transport, setup).await;
    harness.rebuild();
    harness.settle().await;
    assert!(harness.render().contains("Logout"));

    let forms = harness.handles.forms();
    fill_login(forms, "ada", "left-over");
    log_out(harness.ctx(), harness.handles.nav(), forms).await;
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("login-username"), "expected login form in {html}");
    assert!(!html.contains("Logout"), "nav bar should be hidden in {html}");
    assert!(!html.contains("left-over"), "password not cleared in {html}");
    assert!(forms.login.username.peek().is_empty());
    assert!(forms.login.password.peek().is_empty());
    assert_eq!(harness.services.router().page(), Page::Login);
    assert!(!harness.services.session().is_authenticated());
}
