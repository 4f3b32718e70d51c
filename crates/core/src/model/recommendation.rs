use serde::Deserialize;

use super::ids::TopicId;

/// Entry of `/recommendations/topics` and `/recommendations/adaptive-path`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TopicRecommendation {
    #[serde(default)]
    pub topic_id: Option<TopicId>,
    pub topic_title: String,
    pub difficulty_level: String,
    #[serde(default)]
    pub recommendation_reason: String,
    #[serde(default)]
    pub confidence_score: f64,
}

/// Entry of `/recommendations/knowledge-gaps`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct KnowledgeGap {
    #[serde(default)]
    pub topic_id: Option<TopicId>,
    pub topic_title: String,
    #[serde(default)]
    pub difficulty_level: Option<String>,
    pub is_weak: bool,
    pub risk_score: f64,
}

/// How many knowledge gaps the recommendations page shows.
pub const KNOWLEDGE_GAP_LIMIT: usize = 5;

/// How many topic recommendations are requested.
pub const TOPIC_RECOMMENDATION_LIMIT: u32 = 5;
