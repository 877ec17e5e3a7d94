//! Quiz session state machine.
//!
//! A [`Session`] sequences questions, parses and scores submitted answers,
//! and produces the final report. It is deliberately free of any terminal
//! I/O: the interactive loop in the CLI drives it one step at a time, so
//! all scoring logic lives here where it can be tested directly.

use std::sync::Arc;

use serde::Serialize;

use crate::error::AnswerError;
use crate::model::{Question, Quiz};
use crate::report::ScoreReport;

/// One successfully submitted answer, in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    /// Index of the question this answers.
    pub question_index: usize,
    /// The user's input, trimmed.
    pub submitted: String,
    pub was_correct: bool,
}

/// Outcome of a successfully parsed answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub was_correct: bool,
    /// The canonical correct answer, rendered for display.
    pub correct_answer: String,
}

/// One attempt at a quiz.
///
/// The quiz itself is shared and read-only; each session exclusively owns
/// its mutable state. State changes only on a successfully parsed answer —
/// invalid input is a no-op, so the caller can re-prompt freely.
#[derive(Debug, Clone)]
pub struct Session {
    quiz: Arc<Quiz>,
    current_index: usize,
    score: usize,
    answers_given: Vec<AnswerRecord>,
}

impl Session {
    pub fn new(quiz: Arc<Quiz>) -> Self {
        Self {
            quiz,
            current_index: 0,
            score: 0,
            answers_given: Vec::new(),
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// The question awaiting an answer, or `None` once the session is
    /// complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.current_index)
    }

    /// 0-based index of the question awaiting an answer.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// True once every question has been answered; stays true thereafter.
    pub fn is_complete(&self) -> bool {
        self.current_index == self.quiz.questions.len()
    }

    /// Parse and score one answer for the current question.
    ///
    /// Multiple choice expects a 1-based choice number, matching the
    /// on-screen numbering. True/false accepts, case-insensitively:
    /// `true`, `t`, `yes`, `y`, `false`, `f`, `no`, `n`.
    ///
    /// On a parse failure nothing changes and the caller is expected to
    /// re-prompt. On success the answer is recorded, the score bumped if
    /// correct, and the session advances one question.
    pub fn submit_answer(&mut self, raw: &str) -> Result<AnswerResult, AnswerError> {
        let question = self
            .current_question()
            .ok_or(AnswerError::AlreadyComplete)?;
        let input = raw.trim();

        let was_correct = match question {
            Question::MultipleChoice { choices, answer, .. } => {
                let selection = parse_choice(input, choices.len())?;
                selection - 1 == *answer
            }
            Question::TrueFalse { answer, .. } => parse_bool_token(input)? == *answer,
        };

        let correct_answer = question.correct_answer_text();
        self.answers_given.push(AnswerRecord {
            question_index: self.current_index,
            submitted: input.to_string(),
            was_correct,
        });
        if was_correct {
            self.score += 1;
        }
        self.current_index += 1;

        Ok(AnswerResult {
            was_correct,
            correct_answer,
        })
    }

    /// Snapshot of the score so far. Partial until [`Session::is_complete`];
    /// final once the session is complete.
    pub fn report(&self) -> ScoreReport {
        let total = self.quiz.questions.len();
        ScoreReport {
            title: self.quiz.title.clone(),
            score: self.score,
            total,
            percentage: self.score as f64 / total as f64 * 100.0,
            breakdown: self.answers_given.clone(),
        }
    }
}

fn parse_choice(input: &str, max: usize) -> Result<usize, AnswerError> {
    let invalid = || AnswerError::InvalidSelection {
        hint: format!("enter a number between 1 and {max}"),
    };
    let selection: usize = input.parse().map_err(|_| invalid())?;
    if (1..=max).contains(&selection) {
        Ok(selection)
    } else {
        Err(invalid())
    }
}

fn parse_bool_token(input: &str) -> Result<bool, AnswerError> {
    match input.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" => Ok(true),
        "false" | "f" | "no" | "n" => Ok(false),
        _ => Err(AnswerError::InvalidSelection {
            hint: "enter true/false (or t/f, yes/no)".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_quiz() -> Arc<Quiz> {
        Arc::new(Quiz {
            title: "T".into(),
            questions: vec![
                Question::MultipleChoice {
                    text: "2+2?".into(),
                    choices: vec!["3".into(), "4".into(), "5".into()],
                    answer: 1,
                },
                Question::TrueFalse {
                    text: "Sky is blue".into(),
                    answer: true,
                },
            ],
        })
    }

    #[test]
    fn all_correct_scores_full() {
        let mut session = Session::new(example_quiz());

        let first = session.submit_answer("2").unwrap();
        assert!(first.was_correct);
        assert_eq!(first.correct_answer, "2. 4");

        let second = session.submit_answer("true").unwrap();
        assert!(second.was_correct);
        assert_eq!(second.correct_answer, "True");

        assert!(session.is_complete());
        let report = session.report();
        assert_eq!(report.score, 2);
        assert_eq!(report.total, 2);
        assert!((report.percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn all_wrong_scores_zero() {
        let mut session = Session::new(example_quiz());
        assert!(!session.submit_answer("1").unwrap().was_correct);
        assert!(!session.submit_answer("false").unwrap().was_correct);
        assert_eq!(session.report().score, 0);
    }

    #[test]
    fn completion_flips_after_last_answer() {
        let mut session = Session::new(example_quiz());
        assert!(!session.is_complete());
        session.submit_answer("1").unwrap();
        assert!(!session.is_complete());
        session.submit_answer("no").unwrap();
        assert!(session.is_complete());
        assert!(session.current_question().is_none());
    }

    #[test]
    fn invalid_input_is_a_no_op() {
        let mut session = Session::new(example_quiz());

        for bad in ["0", "4", "abc", "2.5", ""] {
            let err = session.submit_answer(bad).unwrap_err();
            assert!(matches!(err, AnswerError::InvalidSelection { .. }), "input {bad:?}");
        }

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.report().breakdown.is_empty());
    }

    #[test]
    fn invalid_boolean_token_is_a_no_op() {
        let mut session = Session::new(example_quiz());
        session.submit_answer("2").unwrap();

        let err = session.submit_answer("maybe").unwrap_err();
        assert!(matches!(err, AnswerError::InvalidSelection { .. }));
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn boolean_tokens_accepted_case_insensitively() {
        for (token, expected) in [
            ("TRUE", true),
            ("t", true),
            ("Yes", true),
            ("y", true),
            ("False", false),
            ("F", false),
            ("NO", false),
            ("n", false),
        ] {
            assert_eq!(parse_bool_token(token).unwrap(), expected, "token {token:?}");
        }
        assert!(parse_bool_token("maybe").is_err());
        assert!(parse_bool_token("1").is_err());
    }

    #[test]
    fn submit_after_completion_fails() {
        let mut session = Session::new(example_quiz());
        session.submit_answer("2").unwrap();
        session.submit_answer("t").unwrap();
        assert_eq!(session.submit_answer("2"), Err(AnswerError::AlreadyComplete));
    }

    #[test]
    fn fresh_session_report_is_empty() {
        let session = Session::new(example_quiz());
        let report = session.report();
        assert_eq!(report.score, 0);
        assert_eq!(report.total, 2);
        assert!(report.breakdown.is_empty());
    }

    #[test]
    fn abandoned_session_reports_partial_score() {
        let mut session = Session::new(example_quiz());
        session.submit_answer("2").unwrap();

        let report = session.report();
        assert_eq!(report.score, 1);
        assert_eq!(report.total, 2);
        assert!((report.percentage - 50.0).abs() < f64::EPSILON);
        assert_eq!(report.breakdown.len(), 1);
    }

    #[test]
    fn quiz_shared_across_sessions() {
        let quiz = example_quiz();
        let mut first = Session::new(Arc::clone(&quiz));
        let mut second = Session::new(Arc::clone(&quiz));

        first.submit_answer("2").unwrap();
        second.submit_answer("1").unwrap();

        assert_eq!(first.score(), 1);
        assert_eq!(second.score(), 0);
    }

    #[test]
    fn breakdown_records_submissions_in_order() {
        let mut session = Session::new(example_quiz());
        session.submit_answer(" 2 ").unwrap();
        session.submit_answer("false").unwrap();

        let report = session.report();
        assert_eq!(
            report.breakdown,
            vec![
                AnswerRecord {
                    question_index: 0,
                    submitted: "2".into(),
                    was_correct: true,
                },
                AnswerRecord {
                    question_index: 1,
                    submitted: "false".into(),
                    was_correct: false,
                },
            ]
        );
    }
}
