use std::sync::Arc;

use learnpath_core::model::{ApiConfig, Course, Loader, Page, PageError, Topic, TopicId, Transition};
use storage::repository::Storage;

use crate::Clock;
use crate::analytics_service::{AnalyticsService, DashboardPanel};
use crate::auth_service::AuthService;
use crate::catalog_service::CatalogService;
use crate::error::{ApiError, AppServicesError};
use crate::gateway::ApiGateway;
use crate::quiz_service::QuizService;
use crate::recommendation_service::{RecommendationService, RecommendationsPanel};
use crate::router::PageRouter;
use crate::session::Session;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Data produced by a page loader.
#[derive(Clone, Debug, PartialEq)]
pub enum PageData {
    Dashboard(DashboardPanel),
    Courses(Result<Vec<Course>, ApiError>),
    Recommendations(RecommendationsPanel),
}

/// A completed page switch together with whatever its loader fetched.
#[derive(Clone, Debug, PartialEq)]
pub struct PageContent {
    pub transition: Transition,
    pub data: Option<PageData>,
}

/// Assembles app-facing services around one session and one router.
#[derive(Clone)]
pub struct AppServices {
    session: Session,
    router: PageRouter,
    gateway: ApiGateway,
    auth: Arc<AuthService>,
    catalog: Arc<CatalogService>,
    analytics: Arc<AnalyticsService>,
    quizzes: Arc<QuizService>,
    recommendations: Arc<RecommendationService>,
}

impl AppServices {
    /// Build services over the given storage and transport, restoring any
    /// persisted token.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Session` if the persisted token cannot be read.
    pub async fn new(
        config: ApiConfig,
        storage: Storage,
        transport: Arc<dyn HttpTransport>,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let session = Session::restore(Arc::clone(&storage.tokens)).await?;
        let router = PageRouter::new(session.clone());
        let gateway = ApiGateway::new(config, transport, session.clone(), router.clone());

        let auth = Arc::new(AuthService::new(
            gateway.clone(),
            session.clone(),
            router.clone(),
        ));
        let catalog = Arc::new(CatalogService::new(gateway.clone(), router.clone()));
        let analytics = Arc::new(AnalyticsService::new(gateway.clone()));
        let quizzes = Arc::new(QuizService::new(clock, gateway.clone(), router.clone()));
        let recommendations = Arc::new(RecommendationService::new(gateway.clone()));

        Ok(Self {
            session,
            router,
            gateway,
            auth,
            catalog,
            analytics,
            quizzes,
            recommendations,
        })
    }

    /// Build services backed by `SQLite` token storage and a `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or the token read fails.
    pub async fn new_sqlite(
        db_url: &str,
        config: ApiConfig,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::new(config, storage, Arc::new(ReqwestTransport::new()), clock).await
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn router(&self) -> &PageRouter {
        &self.router
    }

    #[must_use]
    pub fn gateway(&self) -> &ApiGateway {
        &self.gateway
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }

    /// Run the fetch belonging to `loader`.
    pub async fn load(&self, loader: Loader) -> PageData {
        match loader {
            Loader::Dashboard => PageData::Dashboard(self.analytics.dashboard().await),
            Loader::Courses => PageData::Courses(self.catalog.courses().await),
            Loader::Recommendations => {
                PageData::Recommendations(self.recommendations.recommendations().await)
            }
        }
    }

    /// Show `page` and run its loader, if any.
    pub async fn activate(&self, page: Page) -> PageContent {
        let transition = self.router.show(page);
        self.complete(transition).await
    }

    /// `activate` by page id.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Unknown` for ids that name no page; nothing is
    /// shown or loaded.
    pub async fn show_page(&self, page_id: &str) -> Result<PageContent, PageError> {
        let transition = self.router.show_page(page_id)?;
        Ok(self.complete(transition).await)
    }

    /// Fetch a topic and show its detail page.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the topic cannot be loaded.
    pub async fn open_topic(&self, topic_id: TopicId) -> Result<Topic, ApiError> {
        self.catalog.open_topic(topic_id).await
    }

    async fn complete(&self, transition: Transition) -> PageContent {
        let data = match transition.loader {
            Some(loader) => Some(self.load(loader).await),
            None => None,
        };
        PageContent { transition, data }
    }
}
