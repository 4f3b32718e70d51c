mod account;
mod analytics;
mod api_config;
mod catalog;
mod ids;
mod page;
mod quiz;
mod recommendation;

pub use account::{
    AuthToken, LoginDraft, LoginRequest, SignupDraft, SignupRequest, TokenResponse, UserProfile,
    ValidationError, is_email_valid,
};
pub use analytics::{ChartImage, DashboardSummary, PerformanceUpdate, QuizAttemptRecord};
pub use api_config::{ApiConfig, ApiConfigError, DEFAULT_API_BASE_URL};
pub use catalog::{Course, Topic, difficulty_class};
pub use ids::{AttemptId, CourseId, QuizId, TopicId, UserId};
pub use page::{Loader, Page, PageError, Transition};
pub use quiz::{Question, Quiz, QuizAttempt, QuizAttemptError, QuizRef, QuizSubmission};
pub use recommendation::{
    KNOWLEDGE_GAP_LIMIT, KnowledgeGap, TOPIC_RECOMMENDATION_LIMIT, TopicRecommendation,
};
