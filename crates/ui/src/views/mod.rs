mod auth;
mod courses;
mod dashboard;
mod quiz;
mod recommendations;
mod state;
mod topic;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
#[cfg(test)]
mod auth_smoke;

pub use auth::{
    AuthForms, AuthView, LoginFields, SignupFields, use_auth_forms, use_auth_forms_provider,
};
pub use courses::CoursesView;
pub use dashboard::DashboardView;
pub use quiz::QuizView;
pub use recommendations::RecommendationsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use topic::TopicView;
