use learnpath_core::model::QuizAttempt;

use crate::vm::number_fmt::to_fixed_1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub title: String,
    pub questions: Vec<QuestionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    /// "1. What is ...?"
    pub heading: String,
    pub options: Vec<OptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub selected: bool,
}

impl OptionVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.selected { "option selected" } else { "option" }
    }
}

impl From<&QuizAttempt> for QuizVm {
    fn from(attempt: &QuizAttempt) -> Self {
        let questions = attempt
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let selected = attempt.selected(index);
                QuestionVm {
                    index,
                    heading: format!("{}. {}", index + 1, question.question),
                    options: question
                        .options
                        .iter()
                        .enumerate()
                        .map(|(option, label)| OptionVm {
                            index: option,
                            label: label.clone(),
                            selected: selected == Some(option),
                        })
                        .collect(),
                }
            })
            .collect();
        Self {
            title: attempt.title().to_string(),
            questions,
        }
    }
}

#[must_use]
pub fn score_label(score: f64) -> String {
    format!("Your Score: {}%", to_fixed_1(score))
}
