//! Core data model types for quizdeck.
//!
//! A [`Quiz`] is immutable once loaded and may be shared across any number
//! of sessions. All schema-shape uncertainty is resolved by the loader, so
//! these types carry only validated data.

use serde::{Deserialize, Serialize};

/// An ordered set of questions under a title.
///
/// Invariant (enforced by the loader): `questions` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    /// The title/topic of the quiz.
    pub title: String,
    /// The questions, in presentation order.
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Number of questions in the quiz.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// One quiz item. The serialized form matches the quiz file schema, with
/// `answer` holding a 0-based choice index for multiple choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    MultipleChoice {
        #[serde(rename = "question")]
        text: String,
        /// At least two non-empty choices.
        choices: Vec<String>,
        /// 0-based index of the correct choice.
        answer: usize,
    },
    TrueFalse {
        #[serde(rename = "question")]
        text: String,
        answer: bool,
    },
}

impl Question {
    /// The question text shown to the user.
    pub fn text(&self) -> &str {
        match self {
            Question::MultipleChoice { text, .. } | Question::TrueFalse { text, .. } => text,
        }
    }

    /// The canonical correct answer, rendered the way it is numbered on
    /// screen: `"2. Paris"` for multiple choice, `"True"`/`"False"` for
    /// true/false.
    pub fn correct_answer_text(&self) -> String {
        match self {
            Question::MultipleChoice { choices, answer, .. } => {
                format!("{}. {}", answer + 1, choices[*answer])
            }
            Question::TrueFalse { answer, .. } => {
                if *answer { "True" } else { "False" }.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capitals() -> Question {
        Question::MultipleChoice {
            text: "Capital of France?".into(),
            choices: vec!["Berlin".into(), "Paris".into(), "Rome".into()],
            answer: 1,
        }
    }

    #[test]
    fn correct_answer_text_is_one_based() {
        assert_eq!(capitals().correct_answer_text(), "2. Paris");
    }

    #[test]
    fn true_false_answer_text() {
        let q = Question::TrueFalse {
            text: "Sky is blue".into(),
            answer: true,
        };
        assert_eq!(q.correct_answer_text(), "True");
    }

    #[test]
    fn question_serde_matches_file_schema() {
        let json = serde_json::to_value(capitals()).unwrap();
        assert_eq!(json["type"], "multiple_choice");
        assert_eq!(json["question"], "Capital of France?");
        assert_eq!(json["answer"], 1);

        let back: Question = serde_json::from_value(json).unwrap();
        assert_eq!(back, capitals());
    }
}
