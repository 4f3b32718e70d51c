use learnpath_core::model::{Page, Question, Quiz, QuizAttempt, QuizId, Topic, TopicId};
use learnpath_core::time::fixed_now;
use serde_json::json;
use services::{ApiResponse, Method, ScriptedTransport, TransportError};

use super::test_harness::{HarnessSetup, setup_view_harness};

fn signed_in(page: Page) -> HarnessSetup {
    HarnessSetup {
        token: Some("tok"),
        page: Some(page),
        ..HarnessSetup::default()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn login_form_shows_without_token() {
    let mut harness = setup_view_harness(ScriptedTransport::new(), HarnessSetup::default()).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Username"), "missing login form in {html}");
    assert!(html.contains("Login"), "missing login button in {html}");
    assert!(!html.contains("Logout"), "nav bar should be hidden in {html}");
    assert!(harness.transport.requests().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_summary_strings() {
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
        .get_json("/auth/me", json!({"id": 1, "username": "ada", "full_name": "Ada"}));
    let mut harness = setup_view_harness(transport, signed_in(Page::Dashboard)).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    for expected in ["75%", "82.5%", "Welcome back, Ada!", "Logout"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("progress-chart"), "chart should be absent in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_render_cards_with_badges() {
    let transport = ScriptedTransport::new().get_json(
        "/courses/",
        json!([{
            "id": 1,
            "title": "Algebra",
            "description": "Numbers and symbols",
            "topics": [{"id": 4, "title": "Linear equations", "difficulty_level": "Beginner"}]
        }]),
    );
    let mut harness = setup_view_harness(transport, signed_in(Page::Courses)).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    for expected in ["Algebra", "Linear equations", "badge badge-beginner", ">Beginner<"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn unauthorized_load_returns_to_login() {
    let transport = ScriptedTransport::new().respond(
        Method::GET,
        "/courses/",
        ApiResponse::json(401, &json!({"detail": "Not authenticated"})),
    );
    let mut harness = setup_view_harness(transport, signed_in(Page::Courses)).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Username"), "expected login form in {html}");
    assert!(!harness.services.session().is_authenticated());
}

#[tokio::test(flavor = "current_thread")]
async fn unreachable_server_is_shown_inline() {
    let transport = ScriptedTransport::new()
        .fail_unscripted(TransportError::Connect("connection refused".into()));
    let mut harness = setup_view_harness(transport, signed_in(Page::Courses)).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Cannot connect to server. Make sure the backend server is running on http://localhost:8000"),
        "missing connect error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn recommendations_render_each_section() {
    let transport = ScriptedTransport::new()
        .get_json(
            "/recommendations/topics?limit=5",
            json!([{
                "topic_id": 3,
                "topic_title": "Graphs",
                "difficulty_level": "Advanced",
                "recommendation_reason": "Next step",
                "confidence_score": 0.873
            }]),
        )
        .get_json(
            "/recommendations/knowledge-gaps",
            json!([{"topic_id": 2, "topic_title": "Sets", "is_weak": true, "risk_score": 0.5}]),
        );
    let mut harness = setup_view_harness(transport, signed_in(Page::Recommendations)).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    for expected in [
        "Confidence: 87.3%",
        "Weak Area",
        "badge badge-high",
        "Risk Score: 50.0%",
        "Your Learning Path",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn topic_detail_offers_quiz() {
    let setup = HarnessSetup {
        topic: Some(Topic {
            id: TopicId::new(4),
            title: "Linear equations".into(),
            description: None,
            difficulty_level: "Intermediate".into(),
            course_id: None,
            order_index: 1,
        }),
        ..signed_in(Page::TopicDetail)
    };
    let mut harness = setup_view_harness(ScriptedTransport::new(), setup).await;
    harness.rebuild();

    let html = harness.render();
    for expected in ["Linear equations", "badge badge-intermediate", "Take Quiz"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_marks_selected_options() {
    let mut attempt = QuizAttempt::new(
        TopicId::new(4),
        Quiz {
            id: QuizId::new(11),
            title: "Sets quiz".into(),
            questions: vec![
                Question {
                    question: "Pick b".into(),
                    options: vec!["a".into(), "b".into()],
                },
                Question {
                    question: "Pick any".into(),
                    options: vec!["x".into(), "y".into()],
                },
            ],
        },
        fixed_now(),
    );
    attempt.select(0, 1).unwrap();
    let setup = HarnessSetup {
        quiz: Some(attempt),
        ..signed_in(Page::Quiz)
    };
    let mut harness = setup_view_harness(ScriptedTransport::new(), setup).await;
    harness.rebuild();

    let html = harness.render();
    for expected in ["Sets quiz", "1. Pick b", "2. Pick any", "option selected", "Submit Quiz"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert_eq!(html.matches("option selected").count(), 1);
}
