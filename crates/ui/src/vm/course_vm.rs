use learnpath_core::model::{Course, Topic, TopicId};

use crate::vm::badge::BadgeVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub title: String,
    pub description: String,
    pub topics: Vec<TopicItemVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicItemVm {
    pub id: TopicId,
    pub title: String,
    pub description: String,
    pub badge: BadgeVm,
}

impl From<&Topic> for TopicItemVm {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title.clone(),
            description: topic.description.clone().unwrap_or_default(),
            badge: BadgeVm::difficulty(&topic.difficulty_level),
        }
    }
}

impl From<&Course> for CourseCardVm {
    fn from(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            description: course.description.clone().unwrap_or_default(),
            topics: course.topics.iter().map(TopicItemVm::from).collect(),
        }
    }
}

#[must_use]
pub fn map_course_cards(courses: &[Course]) -> Vec<CourseCardVm> {
    courses.iter().map(CourseCardVm::from).collect()
}

/// Topic detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicDetailVm {
    pub id: TopicId,
    pub title: String,
    pub description: String,
    pub badge: BadgeVm,
}

impl From<&Topic> for TopicDetailVm {
    fn from(topic: &Topic) -> Self {
        let item = TopicItemVm::from(topic);
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            badge: item.badge,
        }
    }
}
