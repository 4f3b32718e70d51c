use std::sync::Arc;

use learnpath_core::model::{ApiConfig, AuthToken, Loader, Page, PageError, TopicId};
use learnpath_core::time::fixed_clock;
use serde_json::json;
use services::{
    ApiError, ApiResponse, AppServices, Method, PageData, ScriptedTransport, TransportError,
};
use storage::repository::{InMemoryRepository, Storage, TokenRepository};

async fn signed_in(transport: &ScriptedTransport) -> (AppServices, InMemoryRepository) {
    let repo = InMemoryRepository::with_token(AuthToken::new("tok"));
    let app = AppServices::new(
        ApiConfig::default(),
        Storage::from_repository(repo.clone()),
        Arc::new(transport.clone()),
        fixed_clock(),
    )
    .await
    .unwrap();
    (app, repo)
}

#[tokio::test]
async fn restored_token_starts_on_dashboard() {
    let (app, _) = signed_in(&ScriptedTransport::new()).await;
    let current = app.router().current();
    assert_eq!(current.page, Page::Dashboard);
    assert_eq!(current.loader, Some(Loader::Dashboard));
}

#[tokio::test]
async fn dashboard_loads_every_section() {
    let transport = ScriptedTransport::new()
        .get_json(
            "/analytics/dashboard",
            json!({
                "completion_percentage": 75,
                "average_score": 82.5,
                "completed_topics": 3,
                "total_topics": 4
            }),
        )
        .get_json("/analytics/progress-chart", json!({"image": "data:image/png;base64,AAA"}))
        .get_json("/analytics/topic-performance-chart", json!({"image": ""}))
        .get_json("/auth/me", json!({"id": 1, "username": "ada", "full_name": "Ada L"}))
        .get_json(
            "/quizzes/attempts/user",
            json!([{"id": 1, "quiz_id": 3, "score": 66.67, "completed_at": "2024-02-01T10:00:00"}]),
        );
    let (app, _) = signed_in(&transport).await;

    let content = app.activate(Page::Dashboard).await;
    let Some(PageData::Dashboard(panel)) = content.data else {
        panic!("expected dashboard data, got {:?}", content.data);
    };
    let summary = panel.summary.unwrap();
    assert_eq!(summary.completion_percentage, 75.0);
    assert_eq!(summary.completed_topics, 3);
    assert_eq!(panel.progress_chart.as_deref(), Some("data:image/png;base64,AAA"));
    assert_eq!(panel.performance_chart, None);
    assert_eq!(panel.user.unwrap().display_name(), "Ada L");
    assert_eq!(panel.recent_attempts.len(), 1);
}

#[tokio::test]
async fn missing_chart_does_not_hide_summary() {
    let transport = ScriptedTransport::new()
        .get_json(
            "/analytics/dashboard",
            json!({
                "completion_percentage": 10,
                "average_score": 0,
                "completed_topics": 1,
                "total_topics": 10
            }),
        )
        .respond(
            Method::GET,
            "/analytics/progress-chart",
            ApiResponse::json(500, &json!({"detail": "matplotlib missing"})),
        );
    let (app, _) = signed_in(&transport).await;

    let Some(PageData::Dashboard(panel)) = app.activate(Page::Dashboard).await.data else {
        panic!("expected dashboard data");
    };
    assert!(panel.summary.is_some());
    assert_eq!(panel.progress_chart, None);
    assert_eq!(panel.user, None);
    assert!(panel.recent_attempts.is_empty());
}

#[tokio::test]
async fn unauthorized_anywhere_ends_the_session() {
    let transport = ScriptedTransport::new().respond(
        Method::GET,
        "/courses/",
        ApiResponse::json(401, &json!({"detail": "Not authenticated"})),
    );
    let (app, repo) = signed_in(&transport).await;

    let content = app.activate(Page::Courses).await;
    assert_eq!(content.data, Some(PageData::Courses(Err(ApiError::Unauthorized))));
    assert!(!app.session().is_authenticated());
    assert!(repo.load_token().await.unwrap().is_none());
    assert_eq!(app.router().page(), Page::Login);
}

#[tokio::test]
async fn pages_without_token_skip_their_loader() {
    let transport = ScriptedTransport::new();
    let app = AppServices::new(
        ApiConfig::default(),
        Storage::in_memory(),
        Arc::new(transport.clone()),
        fixed_clock(),
    )
    .await
    .unwrap();

    let content = app.activate(Page::Recommendations).await;
    assert_eq!(content.transition.page, Page::Recommendations);
    assert_eq!(content.data, None);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn unknown_page_id_is_rejected_without_switching() {
    let (app, _) = signed_in(&ScriptedTransport::new()).await;
    app.activate(Page::Courses).await;

    let err = app.show_page("settings").await.unwrap_err();
    assert_eq!(err, PageError::Unknown("settings".into()));
    assert_eq!(app.router().page(), Page::Courses);

    let content = app.show_page("topic-detail").await.unwrap();
    assert_eq!(content.transition.page, Page::TopicDetail);
    assert_eq!(content.data, None);
}

#[tokio::test]
async fn recommendations_are_independent_and_gaps_capped() {
    let gaps: Vec<_> = (1..=8)
        .map(|i| {
            json!({
                "topic_id": i,
                "topic_title": format!("Topic {i}"),
                "is_weak": i % 2 == 0,
                "risk_score": 0.5
            })
        })
        .collect();
    let transport = ScriptedTransport::new()
        .get_json(
            "/recommendations/topics?limit=5",
            json!([{
                "topic_id": 3,
                "topic_title": "Graphs",
                "difficulty_level": "Advanced",
                "recommendation_reason": "Next in path",
                "confidence_score": 0.873
            }]),
        )
        .get_json("/recommendations/knowledge-gaps", json!(gaps))
        .respond(
            Method::GET,
            "/recommendations/adaptive-path",
            ApiResponse::text(500, "Internal Server Error"),
        );
    let (app, _) = signed_in(&transport).await;

    let Some(PageData::Recommendations(panel)) = app.activate(Page::Recommendations).await.data
    else {
        panic!("expected recommendations");
    };
    assert_eq!(panel.topics.len(), 1);
    assert_eq!(panel.topics[0].confidence_score, 0.873);
    assert_eq!(panel.knowledge_gaps.len(), 5);
    assert!(panel.adaptive_path.is_empty());
}

#[tokio::test]
async fn open_topic_switches_only_on_success() {
    let transport = ScriptedTransport::new().get_json(
        "/courses/topics/4",
        json!({"id": 4, "title": "Sets", "description": "Basics", "difficulty_level": "Beginner"}),
    );
    let (app, _) = signed_in(&transport).await;
    app.activate(Page::Courses).await;

    let err = app.open_topic(TopicId::new(99)).await.unwrap_err();
    assert_eq!(err.to_string(), "Not Found");
    assert_eq!(app.router().page(), Page::Courses);

    let topic = app.open_topic(TopicId::new(4)).await.unwrap();
    assert_eq!(topic.title, "Sets");
    assert_eq!(app.router().page(), Page::TopicDetail);
}

#[tokio::test]
async fn unreachable_server_yields_cannot_connect() {
    let transport = ScriptedTransport::new()
        .fail_unscripted(TransportError::Connect("connection refused".into()));
    let (app, _) = signed_in(&transport).await;

    let Some(PageData::Courses(result)) = app.activate(Page::Courses).await.data else {
        panic!("expected courses data");
    };
    assert_eq!(
        result.unwrap_err().to_string(),
        "Cannot connect to server. Make sure the backend server is running on http://localhost:8000"
    );
    assert!(app.session().is_authenticated());
}
