use dioxus::prelude::*;
use learnpath_core::model::Page;

use crate::context::AppContext;
use crate::pages::use_nav;
use crate::views::ViewError;
use crate::vm::TopicDetailVm;

#[component]
pub fn TopicView() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_nav();
    let mut error = use_signal(|| None::<ViewError>);
    let mut busy = use_signal(|| false);

    let Some(topic) = nav.topic() else {
        return rsx! {
            div { class: "page topic-page",
                p { "No topic selected." }
            }
        };
    };
    let vm = TopicDetailVm::from(&topic);
    let topic_id = vm.id;

    let ctx_for_back = ctx.clone();
    let take_quiz = move |_: MouseEvent| {
        if busy() {
            return;
        }
        let ctx = ctx.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            let result = ctx.quizzes().start(topic_id).await;
            busy.set(false);
            match result {
                Ok(attempt) => {
                    nav.set_quiz(attempt);
                    nav.sync(ctx.router());
                }
                Err(err) => {
                    nav.sync(ctx.router());
                    error.set(Some(err.into()));
                }
            }
        });
    };

    rsx! {
        div { class: "page topic-page",
            button {
                class: "btn btn-secondary back",
                r#type: "button",
                onclick: move |_| nav.go(ctx_for_back.router(), Page::Courses),
                "Back to Courses"
            }
            div { class: "topic-detail",
                h2 { class: "view-title", "{vm.title}" }
                span { class: vm.badge.css(), "{vm.badge.label}" }
                p { class: "topic-description", "{vm.description}" }
                if let Some(err) = error() {
                    p { class: "error", "{err.message()}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy(),
                    onclick: take_quiz,
                    "Take Quiz"
                }
            }
        }
    }
}
