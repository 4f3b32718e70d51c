use serde::Deserialize;

use super::ids::{CourseId, TopicId};

/// A topic inside a course (`/courses/` entries and `/courses/topics/{id}`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub difficulty_level: String,
    #[serde(default)]
    pub course_id: Option<CourseId>,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub id: Option<CourseId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// CSS modifier for a difficulty badge. The label itself is shown untouched.
#[must_use]
pub fn difficulty_class(level: &str) -> String {
    level.to_lowercase()
}
