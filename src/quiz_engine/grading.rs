//! Marking a completed quiz.
//!
//! Answers are raw user input keyed by the question's answer-box id
//! (`Q_0`, `Q_1`, ...), the same ids a renderer hands out via
//! [`Question::id`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{error::QuizError, models::AnswerStatus, question::Question};

/// Prefix of the answer-box id for each question.
pub const ANSWER_PREFIX: &str = "Q";
/// Prefix of the tick/cross marker id for each question.
pub const MARK_PREFIX: &str = "M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkReport {
    /// One status per question, in quiz order.
    pub statuses: Vec<AnswerStatus>,
    pub correct: usize,
    pub total: usize,
}

impl MarkReport {
    pub fn summary(&self) -> String {
        format!("You got {} out of {} questions right.", self.correct, self.total)
    }
}

fn raw_answer<'a>(question: &Question, answers: &'a HashMap<String, String>) -> Option<&'a str> {
    question
        .id(ANSWER_PREFIX)
        .and_then(|id| answers.get(&id))
        .map(String::as_str)
}

fn status_of(question: &Question, answers: &HashMap<String, String>) -> Result<AnswerStatus, QuizError> {
    match raw_answer(question, answers) {
        Some(input) => question.classify_input(input),
        None        => Ok(AnswerStatus::Unanswered),
    }
}

/// Grade every question. Unanswered questions count as wrong in the total.
pub fn mark(questions: &[Question], answers: &HashMap<String, String>) -> Result<MarkReport, QuizError> {
    let statuses = questions
        .iter()
        .map(|q| status_of(q, answers))
        .collect::<Result<Vec<_>, _>>()?;
    let correct = statuses.iter().filter(|s| **s == AnswerStatus::Correct).count();
    Ok(MarkReport {
        statuses,
        correct,
        total: questions.len(),
    })
}

/// True once every question has something that reads as a number.
pub fn all_answered(questions: &[Question], answers: &HashMap<String, String>) -> Result<bool, QuizError> {
    for q in questions {
        if status_of(q, answers)? == AnswerStatus::Unanswered {
            return Ok(false);
        }
    }
    Ok(true)
}
