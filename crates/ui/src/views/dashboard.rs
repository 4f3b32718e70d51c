use dioxus::prelude::*;
use services::{DashboardPanel, PageData};

use crate::context::AppContext;
use crate::pages::{load_page, use_nav};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{AttemptRowVm, DashboardVm};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_nav();

    let resource = use_resource(move || {
        let ctx = ctx.clone();
        let transition = nav.transition();
        async move {
            let panel = match load_page(&ctx, nav, transition).await {
                Some(PageData::Dashboard(panel)) => panel,
                _ => DashboardPanel::default(),
            };
            Ok::<_, ViewError>(DashboardVm::from(&panel))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page dashboard-page",
            header { class: "view-header",
                h2 { class: "view-title", "Dashboard" }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(vm) => rsx! {
                    DashboardBody { vm }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn DashboardBody(vm: DashboardVm) -> Element {
    rsx! {
        if let Some(greeting) = vm.greeting.clone() {
            p { class: "view-subtitle greeting", "{greeting}" }
        }
        div { class: "stats-grid",
            div { class: "stat-card",
                h3 { "Completion" }
                p { id: "completion-rate", class: "stat-value", "{vm.completion}" }
            }
            div { class: "stat-card",
                h3 { "Average Score" }
                p { id: "average-score", class: "stat-value", "{vm.average_score}" }
            }
            div { class: "stat-card",
                h3 { "Completed Topics" }
                p { id: "completed-topics", class: "stat-value", "{vm.completed_topics}" }
            }
            div { class: "stat-card",
                h3 { "Total Topics" }
                p { id: "total-topics", class: "stat-value", "{vm.total_topics}" }
            }
        }
        div { class: "charts",
            div { class: "chart-card",
                h3 { "Progress Over Time" }
                if let Some(src) = vm.progress_chart.clone() {
                    img { id: "progress-chart", src: "{src}", alt: "Progress chart" }
                }
            }
            div { class: "chart-card",
                h3 { "Topic Performance" }
                if let Some(src) = vm.performance_chart.clone() {
                    img { id: "performance-chart", src: "{src}", alt: "Topic performance chart" }
                }
            }
        }
        if !vm.recent_attempts.is_empty() {
            section { class: "recent-attempts",
                h3 { "Recent Quiz Attempts" }
                ul {
                    for (index, row) in vm.recent_attempts.iter().cloned().enumerate() {
                        AttemptRow { key: "{index}", row }
                    }
                }
            }
        }
    }
}

#[component]
fn AttemptRow(row: AttemptRowVm) -> Element {
    rsx! {
        li { class: "attempt-row",
            span { class: "attempt-score", "{row.score}" }
            span { class: "attempt-date", "{row.completed_at}" }
        }
    }
}
