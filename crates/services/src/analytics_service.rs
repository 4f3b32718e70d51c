use learnpath_core::model::{ChartImage, DashboardSummary, QuizAttemptRecord, UserProfile};
use tracing::debug;

use crate::error::ApiError;
use crate::gateway::ApiGateway;

/// Number of past attempts shown on the dashboard.
pub const RECENT_ATTEMPT_LIMIT: usize = 5;

/// Everything the dashboard shows. Each part is fetched on its own and is
/// simply absent when its request failed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardPanel {
    pub summary: Option<DashboardSummary>,
    pub progress_chart: Option<String>,
    pub performance_chart: Option<String>,
    pub user: Option<UserProfile>,
    pub recent_attempts: Vec<QuizAttemptRecord>,
}

/// Dashboard data (`/analytics/*`, `/auth/me`, `/quizzes/attempts/user`).
#[derive(Clone)]
pub struct AnalyticsService {
    gateway: ApiGateway,
}

impl AnalyticsService {
    #[must_use]
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Load the dashboard. Never fails; failed parts stay empty.
    pub async fn dashboard(&self) -> DashboardPanel {
        let (summary, progress, performance, user, attempts) = futures::join!(
            self.gateway.get::<DashboardSummary>("/analytics/dashboard"),
            self.gateway.get::<ChartImage>("/analytics/progress-chart"),
            self.gateway.get::<ChartImage>("/analytics/topic-performance-chart"),
            self.gateway.get::<UserProfile>("/auth/me"),
            self.gateway.get::<Vec<QuizAttemptRecord>>("/quizzes/attempts/user"),
        );

        DashboardPanel {
            summary: quiet("dashboard summary", summary),
            progress_chart: quiet("progress chart", progress).and_then(ChartImage::into_source),
            performance_chart: quiet("performance chart", performance)
                .and_then(ChartImage::into_source),
            user: quiet("current user", user),
            recent_attempts: quiet("recent attempts", attempts)
                .map(recent)
                .unwrap_or_default(),
        }
    }
}

/// Most recent first, at most `RECENT_ATTEMPT_LIMIT`.
fn recent(mut attempts: Vec<QuizAttemptRecord>) -> Vec<QuizAttemptRecord> {
    attempts.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    attempts.truncate(RECENT_ATTEMPT_LIMIT);
    attempts
}

pub(crate) fn quiet<T>(part: &str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(part, error = %err, "section left empty");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use learnpath_core::model::AttemptId;

    fn attempt(id: u64, minutes: i64) -> QuizAttemptRecord {
        QuizAttemptRecord {
            id: Some(AttemptId::new(id)),
            quiz_id: None,
            score: 50.0,
            completed_at: Some(
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes),
            ),
        }
    }

    #[test]
    fn recent_keeps_the_newest_five() {
        let attempts = (0..7).map(|i| attempt(i, i as i64)).collect();
        let kept: Vec<u64> = recent(attempts)
            .into_iter()
            .filter_map(|a| a.id.map(|id| id.value()))
            .collect();
        assert_eq!(kept, vec![6, 5, 4, 3, 2]);
    }

    #[test]
    fn undated_attempts_sort_last() {
        let mut undated = attempt(9, 0);
        undated.completed_at = None;
        let kept = recent(vec![undated, attempt(1, 1)]);
        assert_eq!(kept[0].id, Some(AttemptId::new(1)));
    }
}
