use learnpath_core::model::{KnowledgeGap, TopicRecommendation};
use services::RecommendationsPanel;

use crate::vm::badge::BadgeVm;
use crate::vm::number_fmt::to_fixed_1;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecommendationsVm {
    pub topics: Vec<TopicRecommendationVm>,
    pub knowledge_gaps: Vec<KnowledgeGapVm>,
    pub adaptive_path: Vec<TopicRecommendationVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRecommendationVm {
    pub title: String,
    pub badge: BadgeVm,
    pub reason: String,
    /// Only shown for recommended topics, not the adaptive path.
    pub confidence: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgeGapVm {
    pub title: String,
    pub badge: BadgeVm,
    pub risk: String,
}

impl TopicRecommendationVm {
    fn recommended(item: &TopicRecommendation) -> Self {
        Self {
            confidence: Some(confidence_label(item.confidence_score)),
            ..Self::on_path(item)
        }
    }

    fn on_path(item: &TopicRecommendation) -> Self {
        Self {
            title: item.topic_title.clone(),
            badge: BadgeVm::difficulty(&item.difficulty_level),
            reason: item.recommendation_reason.clone(),
            confidence: None,
        }
    }
}

impl From<&KnowledgeGap> for KnowledgeGapVm {
    fn from(gap: &KnowledgeGap) -> Self {
        Self {
            title: gap.topic_title.clone(),
            badge: BadgeVm::gap(gap.is_weak),
            risk: risk_label(gap.risk_score),
        }
    }
}

impl From<&RecommendationsPanel> for RecommendationsVm {
    fn from(panel: &RecommendationsPanel) -> Self {
        Self {
            topics: panel
                .topics
                .iter()
                .map(TopicRecommendationVm::recommended)
                .collect(),
            knowledge_gaps: panel.knowledge_gaps.iter().map(KnowledgeGapVm::from).collect(),
            adaptive_path: panel
                .adaptive_path
                .iter()
                .map(TopicRecommendationVm::on_path)
                .collect(),
        }
    }
}

/// `0.873` → `"Confidence: 87.3%"`.
#[must_use]
pub fn confidence_label(score: f64) -> String {
    format!("Confidence: {}%", to_fixed_1(score * 100.0))
}

/// `0.42` → `"Risk Score: 42.0%"`.
#[must_use]
pub fn risk_label(score: f64) -> String {
    format!("Risk Score: {}%", to_fixed_1(score * 100.0))
}
