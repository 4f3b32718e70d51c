#![forbid(unsafe_code)]

pub mod analytics_service;
pub mod app_services;
pub mod auth_service;
pub mod catalog_service;
pub mod error;
pub mod gateway;
pub mod quiz_service;
pub mod recommendation_service;
pub mod router;
pub mod session;
pub mod transport;

pub use learnpath_core::Clock;

pub use analytics_service::{AnalyticsService, DashboardPanel, RECENT_ATTEMPT_LIMIT};
pub use app_services::{AppServices, PageContent, PageData};
pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use error::{ApiError, AppServicesError, AuthError, QuizFlowError, SessionError};
pub use gateway::{ApiGateway, CallOptions};
pub use quiz_service::QuizService;
pub use recommendation_service::{RecommendationService, RecommendationsPanel};
pub use router::PageRouter;
pub use session::Session;
pub use transport::{
    ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport, ScriptedTransport,
    TransportError,
};
