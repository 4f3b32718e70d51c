use learnpath_core::model::{
    KNOWLEDGE_GAP_LIMIT, KnowledgeGap, TOPIC_RECOMMENDATION_LIMIT, TopicRecommendation,
};

use crate::analytics_service::quiet;
use crate::gateway::ApiGateway;

/// The three recommendation sections. A failed section is empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecommendationsPanel {
    pub topics: Vec<TopicRecommendation>,
    pub knowledge_gaps: Vec<KnowledgeGap>,
    pub adaptive_path: Vec<TopicRecommendation>,
}

/// Personalised suggestions (`/recommendations/*`).
#[derive(Clone)]
pub struct RecommendationService {
    gateway: ApiGateway,
}

impl RecommendationService {
    #[must_use]
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Load all sections concurrently. Never fails.
    pub async fn recommendations(&self) -> RecommendationsPanel {
        let topics_endpoint = format!("/recommendations/topics?limit={TOPIC_RECOMMENDATION_LIMIT}");
        let (topics, gaps, path) = futures::join!(
            self.gateway.get::<Vec<TopicRecommendation>>(&topics_endpoint),
            self.gateway.get::<Vec<KnowledgeGap>>("/recommendations/knowledge-gaps"),
            self.gateway.get::<Vec<TopicRecommendation>>("/recommendations/adaptive-path"),
        );

        let mut knowledge_gaps = quiet("knowledge gaps", gaps).unwrap_or_default();
        knowledge_gaps.truncate(KNOWLEDGE_GAP_LIMIT);

        RecommendationsPanel {
            topics: quiet("recommended topics", topics).unwrap_or_default(),
            knowledge_gaps,
            adaptive_path: quiet("adaptive path", path).unwrap_or_default(),
        }
    }
}
