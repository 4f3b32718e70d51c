use dioxus::prelude::*;
use learnpath_core::model::Page;
use tracing::warn;

use crate::context::AppContext;
use crate::pages::use_nav;
use crate::views::ViewError;
use crate::vm::{QuestionVm, QuizVm, score_label};

#[derive(Clone, Debug, PartialEq)]
enum SubmitState {
    Answering,
    Submitting,
    Scored(String),
    Failed(ViewError),
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_nav();
    let mut submit_state = use_signal(|| SubmitState::Answering);

    let ctx_for_back = ctx.clone();
    let back = move |_: MouseEvent| {
        nav.finish_quiz();
        nav.go(ctx_for_back.router(), Page::Courses);
    };

    if let SubmitState::Scored(score) = submit_state() {
        return rsx! {
            div { class: "page quiz-page",
                div { class: "quiz-result",
                    h2 { "Quiz Complete" }
                    p { class: "score", "{score}" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: back,
                        "Back to Courses"
                    }
                }
            }
        };
    }

    let Some(attempt) = nav.quiz() else {
        return rsx! {
            div { class: "page quiz-page",
                p { "No quiz in progress." }
            }
        };
    };
    let vm = QuizVm::from(&attempt);
    let submitting = submit_state() == SubmitState::Submitting;

    let submit = move |_: MouseEvent| {
        if submitting {
            return;
        }
        let Some(attempt) = nav.quiz() else {
            return;
        };
        let ctx = ctx.clone();
        spawn(async move {
            submit_state.set(SubmitState::Submitting);
            match ctx.quizzes().submit(attempt).await {
                Ok(result) => {
                    nav.finish_quiz();
                    submit_state.set(SubmitState::Scored(score_label(result.score)));
                }
                Err(err) => submit_state.set(SubmitState::Failed(err.into())),
            }
            nav.sync(ctx.router());
        });
    };

    rsx! {
        div { class: "page quiz-page",
            h2 { class: "view-title", "{vm.title}" }
            for question in vm.questions {
                QuestionBlock { key: "{question.index}", question }
            }
            if let SubmitState::Failed(err) = submit_state() {
                p { class: "error", "{err.message()}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: submitting,
                onclick: submit,
                "Submit Quiz"
            }
        }
    }
}

#[component]
fn QuestionBlock(question: QuestionVm) -> Element {
    let nav = use_nav();
    let question_index = question.index;

    rsx! {
        div { class: "question",
            h3 { "{question.heading}" }
            div { class: "options",
                for option in question.options {
                    div {
                        key: "{option.index}",
                        class: option.class(),
                        onclick: move |_| {
                            if let Err(err) = nav.select_answer(question_index, option.index) {
                                warn!(error = %err, "ignored answer selection");
                            }
                        },
                        "{option.label}"
                    }
                }
            }
        }
    }
}
