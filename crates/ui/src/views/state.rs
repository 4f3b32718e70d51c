use dioxus::prelude::*;
use services::{ApiError, AuthError, QuizFlowError};

/// A failure as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewError {
    message: String,
}

impl ViewError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ApiError> for ViewError {
    fn from(err: ApiError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<AuthError> for ViewError {
    fn from(err: AuthError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<QuizFlowError> for ViewError {
    fn from(err: QuizFlowError) -> Self {
        Self::new(err.to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::new("Unknown error")),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
