use learnpath_core::model::{Course, Page, Topic, TopicId};

use crate::error::ApiError;
use crate::gateway::ApiGateway;
use crate::router::PageRouter;

/// Courses and topics (`/courses/*`).
#[derive(Clone)]
pub struct CatalogService {
    gateway: ApiGateway,
    router: PageRouter,
}

impl CatalogService {
    #[must_use]
    pub fn new(gateway: ApiGateway, router: PageRouter) -> Self {
        Self { gateway, router }
    }

    /// All courses with their topics.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the call fails.
    pub async fn courses(&self) -> Result<Vec<Course>, ApiError> {
        self.gateway.get("/courses/").await
    }

    /// A single topic.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the call fails.
    pub async fn topic(&self, topic_id: TopicId) -> Result<Topic, ApiError> {
        self.gateway.get(&format!("/courses/topics/{topic_id}")).await
    }

    /// Fetch a topic and switch to its detail page. The page does not change
    /// when the fetch fails.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the call fails.
    pub async fn open_topic(&self, topic_id: TopicId) -> Result<Topic, ApiError> {
        let topic = self.topic(topic_id).await?;
        self.router.show(Page::TopicDetail);
        Ok(topic)
    }
}
