//! Loader and session error types.
//!
//! Loader errors are fatal to the load attempt: no partial quiz is ever
//! returned. `AnswerError` is the one recoverable condition — the owning
//! interactive loop re-prompts and the session state is untouched.

use thiserror::Error;

/// Errors produced while loading and validating a quiz file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The source could not be read, or is not valid JSON at all.
    #[error("malformed quiz source: {0}")]
    MalformedInput(String),

    /// Structurally valid JSON that violates the quiz schema.
    ///
    /// `field` is a path into the document, e.g. `title` or
    /// `questions[2].answer`.
    #[error("schema error at `{field}`: {message}")]
    Schema { field: String, message: String },

    /// A question declared a `type` the runner does not support.
    #[error("question {index} has unknown type {found} (expected \"multiple_choice\" or \"true_false\")")]
    UnknownQuestionType { index: usize, found: String },
}

impl LoadError {
    pub(crate) fn schema(field: impl Into<String>, message: impl Into<String>) -> Self {
        LoadError::Schema {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors produced by [`Session::submit_answer`](crate::session::Session::submit_answer).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    /// The input does not parse to an in-domain answer for the current
    /// question. Recoverable: re-prompt and retry.
    #[error("invalid selection: {hint}")]
    InvalidSelection { hint: String },

    /// The session already answered its last question.
    #[error("quiz is already complete")]
    AlreadyComplete,
}
