use dioxus::prelude::*;
use learnpath_core::model::TopicId;
use services::PageData;

use crate::context::AppContext;
use crate::pages::{load_page, use_nav};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, TopicItemVm, map_course_cards};

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_nav();
    let mut open_error = use_signal(|| None::<ViewError>);

    let ctx_for_resource = ctx.clone();
    let resource = use_resource(move || {
        let ctx = ctx_for_resource.clone();
        let transition = nav.transition();
        async move {
            let cards: Result<Vec<CourseCardVm>, ViewError> =
                match load_page(&ctx, nav, transition).await {
                    Some(PageData::Courses(result)) => Ok(map_course_cards(&result?)),
                    _ => Ok(Vec::new()),
                };
            cards
        }
    });

    let open_topic = use_callback(move |topic_id: TopicId| {
        let ctx = ctx.clone();
        spawn(async move {
            open_error.set(None);
            match ctx.services().open_topic(topic_id).await {
                Ok(topic) => {
                    nav.set_topic(topic);
                    nav.sync(ctx.router());
                }
                Err(err) => {
                    nav.sync(ctx.router());
                    open_error.set(Some(err.into()));
                }
            }
        });
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page courses-page",
            header { class: "view-header",
                h2 { class: "view-title", "Courses" }
            }
            if let Some(err) = open_error() {
                p { class: "error", "{err.message()}" }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { "No courses yet." }
                    }
                    div { class: "course-list",
                        for (index, card) in cards.into_iter().enumerate() {
                            CourseCard { key: "{index}", card, on_open: open_topic }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "Error loading courses: {err.message()}" }
                },
            }
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm, on_open: EventHandler<TopicId>) -> Element {
    rsx! {
        div { class: "course-card",
            h3 { "{card.title}" }
            p { class: "course-description", "{card.description}" }
            ul { class: "topic-list",
                for (index, topic) in card.topics.into_iter().enumerate() {
                    TopicItem { key: "{index}", topic, on_open }
                }
            }
        }
    }
}

#[component]
fn TopicItem(topic: TopicItemVm, on_open: EventHandler<TopicId>) -> Element {
    let topic_id = topic.id;
    rsx! {
        li {
            class: "topic-item",
            onclick: move |_| on_open.call(topic_id),
            div { class: "topic-heading",
                span { class: "topic-title", "{topic.title}" }
                span { class: topic.badge.css(), "{topic.badge.label}" }
            }
            p { class: "topic-description", "{topic.description}" }
        }
    }
}
