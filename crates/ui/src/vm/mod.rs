mod auth_vm;
mod badge;
mod course_vm;
mod dashboard_vm;
mod number_fmt;
mod quiz_vm;
mod recommendation_vm;
mod time_fmt;

pub use auth_vm::{
    AuthTab, LOGIN_BUTTON, LOGIN_BUTTON_BUSY, SIGNUP_BUTTON, SIGNUP_BUTTON_BUSY, SIGNUP_SUCCESS,
    login_button_label, signup_button_label,
};
pub use badge::BadgeVm;
pub use course_vm::{CourseCardVm, TopicDetailVm, TopicItemVm, map_course_cards};
pub use dashboard_vm::{AttemptRowVm, DashboardVm};
pub use number_fmt::{format_percent, to_fixed_1};
pub use quiz_vm::{OptionVm, QuestionVm, QuizVm, score_label};
pub use recommendation_vm::{
    KnowledgeGapVm, RecommendationsVm, TopicRecommendationVm, confidence_label, risk_label,
};
pub use time_fmt::format_datetime;
