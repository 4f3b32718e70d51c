use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::ids::{AttemptId, QuizId, TopicId};

/// Body of `GET /analytics/dashboard`. Only the headline fields are consumed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DashboardSummary {
    pub completion_percentage: f64,
    pub average_score: f64,
    pub completed_topics: u32,
    pub total_topics: u32,
}

/// Body of the chart endpoints; `image` is a ready-to-use image source.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChartImage {
    #[serde(default)]
    pub image: Option<String>,
}

impl ChartImage {
    /// The image source, or `None` when the backend sent nothing usable.
    #[must_use]
    pub fn into_source(self) -> Option<String> {
        self.image.filter(|src| !src.is_empty())
    }
}

/// One entry of `GET /quizzes/attempts/user`, also the body of `POST /quizzes/submit`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QuizAttemptRecord {
    #[serde(default)]
    pub id: Option<AttemptId>,
    #[serde(default)]
    pub quiz_id: Option<QuizId>,
    pub score: f64,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub completed_at: Option<DateTime<Utc>>,
}

// The API emits naive ISO timestamps (no offset); those are UTC.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        DateTime::parse_from_rfc3339(&value)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|naive| naive.and_utc())
            })
    }))
}

/// Body of `POST /performance/track`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerformanceUpdate {
    pub topic_id: TopicId,
    pub time_spent_minutes: f64,
}
