use learnpath_core::Clock;
use learnpath_core::model::{
    Page, PerformanceUpdate, Quiz, QuizAttempt, QuizAttemptRecord, QuizRef, TopicId,
};
use tracing::{debug, info, warn};

use crate::error::{ApiError, QuizFlowError};
use crate::gateway::ApiGateway;
use crate::router::PageRouter;

/// Starting and submitting topic quizzes (`/quizzes/*`).
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    gateway: ApiGateway,
    router: PageRouter,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, gateway: ApiGateway, router: PageRouter) -> Self {
        Self {
            clock,
            gateway,
            router,
        }
    }

    /// Load the first quiz of `topic_id` and switch to the quiz page.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::NoQuizAvailable` when the topic has no quiz and
    /// `QuizFlowError::Api` when either call fails. The page does not change
    /// on error.
    pub async fn start(&self, topic_id: TopicId) -> Result<QuizAttempt, QuizFlowError> {
        let quizzes: Vec<QuizRef> = self
            .gateway
            .get(&format!("/quizzes/topic/{topic_id}"))
            .await?;
        let Some(first) = quizzes.first() else {
            return Err(QuizFlowError::NoQuizAvailable);
        };

        let quiz: Quiz = self.gateway.get(&format!("/quizzes/{}", first.id)).await?;
        debug!(%topic_id, quiz_id = %quiz.id, questions = quiz.questions.len(), "quiz started");
        let attempt = QuizAttempt::new(topic_id, quiz, self.clock.now());
        self.router.show(Page::Quiz);
        Ok(attempt)
    }

    /// Submit the attempt, then report time spent on the topic.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the submission fails. Performance tracking
    /// failures are only logged.
    pub async fn submit(&self, attempt: QuizAttempt) -> Result<QuizAttemptRecord, ApiError> {
        let topic_id = attempt.topic_id();
        let started_at = attempt.started_at();
        let submission = attempt.into_submission();

        let result: QuizAttemptRecord = self.gateway.post("/quizzes/submit", &submission).await?;
        info!(quiz_id = %submission.quiz_id, score = result.score, "quiz submitted");

        let update = PerformanceUpdate {
            topic_id,
            time_spent_minutes: self.clock.minutes_since(started_at),
        };
        if let Err(err) = self
            .gateway
            .post::<_, serde_json::Value>("/performance/track", &update)
            .await
        {
            warn!(%topic_id, error = %err, "failed to track performance");
        }

        Ok(result)
    }
}
