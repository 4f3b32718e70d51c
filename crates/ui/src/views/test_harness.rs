use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use learnpath_core::model::{ApiConfig, AuthToken, Page, QuizAttempt, Topic};
use learnpath_core::time::fixed_clock;
use services::{AppServices, HttpTransport, ScriptedTransport};
use storage::repository::{InMemoryRepository, Storage};

use crate::context::{AppContext, build_app_context};
use crate::pages::{Nav, Shell, use_nav_provider};
use crate::views::{AuthForms, use_auth_forms_provider};

/// Root-level state captured on first render so tests can act on it.
#[derive(Clone, Default)]
pub struct HarnessHandles {
    nav: Rc<RefCell<Option<Nav>>>,
    forms: Rc<RefCell<Option<AuthForms>>>,
}

impl HarnessHandles {
    pub fn nav(&self) -> Nav {
        (*self.nav.borrow()).expect("nav registered")
    }

    pub fn forms(&self) -> AuthForms {
        (*self.forms.borrow()).expect("auth forms registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    ctx: AppContext,
    topic: Option<Topic>,
    quiz: Option<QuizAttempt>,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    let ctx = props.ctx.clone();
    use_context_provider(|| ctx.clone());
    let nav = use_nav_provider(ctx.router().current(), props.topic.clone(), props.quiz.clone());
    let forms = use_auth_forms_provider();
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.nav.borrow_mut() = Some(nav);
        *props.handles.forms.borrow_mut() = Some(forms);
    }
    rsx! { Shell {} }
}

/// Starting point for a rendered shell.
#[derive(Default)]
pub struct HarnessSetup {
    pub token: Option<&'static str>,
    pub page: Option<Page>,
    pub topic: Option<Topic>,
    pub quiz: Option<QuizAttempt>,
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
    pub transport: ScriptedTransport,
    pub handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Let spawned tasks and resources finish, re-rendering after each wake.
    pub async fn settle(&mut self) {
        for _ in 0..8 {
            let _ = tokio::time::timeout(Duration::from_millis(20), self.dom.wait_for_work()).await;
            drive_dom(&mut self.dom);
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn ctx(&self) -> AppContext {
        build_app_context(self.services.clone())
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(transport: ScriptedTransport, setup: HarnessSetup) -> ViewHarness {
    let network: Arc<dyn HttpTransport> = Arc::new(transport.clone());
    setup_view_harness_over(network, transport, setup).await
}

/// Like `setup_view_harness`, but requests go through `network`; `transport`
/// is the script it ends up consulting, kept for request assertions.
pub async fn setup_view_harness_over(
    network: Arc<dyn HttpTransport>,
    transport: ScriptedTransport,
    setup: HarnessSetup,
) -> ViewHarness {
    let repo = match setup.token {
        Some(token) => InMemoryRepository::with_token(AuthToken::new(token)),
        None => InMemoryRepository::new(),
    };
    let services = AppServices::new(
        ApiConfig::default(),
        Storage::from_repository(repo),
        network,
        fixed_clock(),
    )
    .await
    .expect("build services");
    if let Some(page) = setup.page {
        services.router().show(page);
    }

    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        HarnessRoot,
        HarnessProps {
            ctx: build_app_context(services.clone()),
            topic: setup.topic,
            quiz: setup.quiz,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        services,
        transport,
        handles,
    }
}
