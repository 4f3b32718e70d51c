use dioxus::prelude::*;
use services::{PageData, RecommendationsPanel};

use crate::context::AppContext;
use crate::pages::{load_page, use_nav};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{KnowledgeGapVm, RecommendationsVm, TopicRecommendationVm};

#[component]
pub fn RecommendationsView() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_nav();

    let resource = use_resource(move || {
        let ctx = ctx.clone();
        let transition = nav.transition();
        async move {
            let panel = match load_page(&ctx, nav, transition).await {
                Some(PageData::Recommendations(panel)) => panel,
                _ => RecommendationsPanel::default(),
            };
            Ok::<_, ViewError>(RecommendationsVm::from(&panel))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page recommendations-page",
            header { class: "view-header",
                h2 { class: "view-title", "Recommendations" }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(vm) => rsx! {
                    section { class: "recommendation-section",
                        h3 { "Recommended Topics" }
                        div { id: "recommended-topics",
                            for (index, item) in vm.topics.into_iter().enumerate() {
                                RecommendationItem { key: "{index}", item }
                            }
                        }
                    }
                    section { class: "recommendation-section",
                        h3 { "Knowledge Gaps" }
                        div { id: "knowledge-gaps",
                            for (index, gap) in vm.knowledge_gaps.into_iter().enumerate() {
                                GapItem { key: "{index}", gap }
                            }
                        }
                    }
                    section { class: "recommendation-section",
                        h3 { "Your Learning Path" }
                        div { id: "adaptive-path",
                            for (index, item) in vm.adaptive_path.into_iter().enumerate() {
                                RecommendationItem { key: "{index}", item }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn RecommendationItem(item: TopicRecommendationVm) -> Element {
    rsx! {
        div { class: "recommendation-item",
            div { class: "recommendation-heading",
                span { class: "topic-title", "{item.title}" }
                span { class: item.badge.css(), "{item.badge.label}" }
            }
            p { class: "recommendation-reason", "{item.reason}" }
            if let Some(confidence) = item.confidence.clone() {
                p { class: "confidence", "{confidence}" }
            }
        }
    }
}

#[component]
fn GapItem(gap: KnowledgeGapVm) -> Element {
    rsx! {
        div { class: "recommendation-item",
            div { class: "recommendation-heading",
                span { class: "topic-title", "{gap.title}" }
                span { class: gap.badge.css(), "{gap.badge.label}" }
            }
            p { class: "risk", "{gap.risk}" }
        }
    }
}
