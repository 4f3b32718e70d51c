use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::{QuizId, TopicId};

/// Entry of `GET /quizzes/topic/{id}`; only the id is needed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct QuizRef {
    pub id: QuizId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
}

/// Body of `GET /quizzes/{id}` (served without correct answers).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    #[serde(default)]
    pub title: String,
    pub questions: Vec<Question>,
}

/// Body of `POST /quizzes/submit`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizSubmission {
    pub quiz_id: QuizId,
    pub answers: Vec<usize>,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizAttemptError {
    #[error("question {0} does not exist")]
    UnknownQuestion(usize),
    #[error("question {question} has no option {option}")]
    UnknownOption { question: usize, option: usize },
}

/// In-progress answers to one quiz.
///
/// Selections are sparse; anything left unanswered is submitted as option 0.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizAttempt {
    topic_id: TopicId,
    quiz: Quiz,
    selections: BTreeMap<usize, usize>,
    started_at: DateTime<Utc>,
}

impl QuizAttempt {
    #[must_use]
    pub fn new(topic_id: TopicId, quiz: Quiz, started_at: DateTime<Utc>) -> Self {
        Self {
            topic_id,
            quiz,
            selections: BTreeMap::new(),
            started_at,
        }
    }

    #[must_use]
    pub fn quiz_id(&self) -> QuizId {
        self.quiz.id
    }

    #[must_use]
    pub fn topic_id(&self) -> TopicId {
        self.topic_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.quiz.title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.quiz.questions
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Select `option` for `question`, replacing any earlier choice for that question.
    ///
    /// # Errors
    ///
    /// Returns `QuizAttemptError` when either index is out of range.
    pub fn select(&mut self, question: usize, option: usize) -> Result<(), QuizAttemptError> {
        let entry = self
            .quiz
            .questions
            .get(question)
            .ok_or(QuizAttemptError::UnknownQuestion(question))?;
        if option >= entry.options.len() {
            return Err(QuizAttemptError::UnknownOption { question, option });
        }
        self.selections.insert(question, option);
        Ok(())
    }

    #[must_use]
    pub fn selected(&self, question: usize) -> Option<usize> {
        self.selections.get(&question).copied()
    }

    /// One answer per question, in order.
    #[must_use]
    pub fn answers(&self) -> Vec<usize> {
        (0..self.quiz.questions.len())
            .map(|index| self.selected(index).unwrap_or(0))
            .collect()
    }

    /// Consume the attempt into its submission body.
    #[must_use]
    pub fn into_submission(self) -> QuizSubmission {
        QuizSubmission {
            quiz_id: self.quiz.id,
            answers: self.answers(),
        }
    }
}
