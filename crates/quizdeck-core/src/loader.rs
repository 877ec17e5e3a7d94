//! Quiz file loader.
//!
//! Turns raw JSON quiz files into validated [`Quiz`] values, and discovers
//! quiz files in a directory. Validation is eager and fail-fast: the first
//! violation is reported with the offending field path or question index,
//! and no partial quiz is ever returned.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::LoadError;
use crate::model::{Question, Quiz};

/// Load and validate a quiz from a JSON file.
pub fn load_quiz(path: &Path) -> Result<Quiz, LoadError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| LoadError::MalformedInput(format!("cannot read {}: {e}", path.display())))?;
    parse_quiz_str(&content)
}

/// Parse and validate a quiz from a JSON string (useful for testing).
pub fn parse_quiz_str(content: &str) -> Result<Quiz, LoadError> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| LoadError::MalformedInput(format!("invalid JSON: {e}")))?;
    validate_quiz(&value)
}

fn validate_quiz(value: &Value) -> Result<Quiz, LoadError> {
    let root = value
        .as_object()
        .ok_or_else(|| LoadError::schema("$", "quiz file must be a JSON object"))?;

    let title = match root.get("title") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::String(_)) => return Err(LoadError::schema("title", "must not be empty")),
        Some(_) => return Err(LoadError::schema("title", "must be a string")),
        None => return Err(LoadError::schema("title", "missing required field")),
    };

    let questions = match root.get("questions") {
        Some(Value::Array(qs)) if !qs.is_empty() => qs,
        Some(Value::Array(_)) => {
            return Err(LoadError::schema("questions", "must contain at least one question"))
        }
        Some(_) => return Err(LoadError::schema("questions", "must be an array")),
        None => return Err(LoadError::schema("questions", "missing required field")),
    };

    let questions = questions
        .iter()
        .enumerate()
        .map(|(idx, q)| validate_question(idx, q))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Quiz { title, questions })
}

fn validate_question(index: usize, value: &Value) -> Result<Question, LoadError> {
    let field = |name: &str| format!("questions[{index}].{name}");

    let record = value
        .as_object()
        .ok_or_else(|| LoadError::schema(format!("questions[{index}]"), "must be an object"))?;

    let kind = match record.get("type") {
        Some(Value::String(s)) => s.as_str(),
        Some(other) => {
            return Err(LoadError::UnknownQuestionType {
                index,
                found: other.to_string(),
            })
        }
        None => {
            return Err(LoadError::UnknownQuestionType {
                index,
                found: "(missing)".into(),
            })
        }
    };
    if kind != "multiple_choice" && kind != "true_false" {
        return Err(LoadError::UnknownQuestionType {
            index,
            found: format!("\"{kind}\""),
        });
    }

    let text = match record.get("question") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => {
            return Err(LoadError::schema(
                field("question"),
                "must be a non-empty string",
            ))
        }
    };

    if kind == "true_false" {
        let answer = record
            .get("answer")
            .and_then(Value::as_bool)
            .ok_or_else(|| LoadError::schema(field("answer"), "must be a boolean"))?;
        return Ok(Question::TrueFalse { text, answer });
    }

    let choices = match record.get("choices") {
        Some(Value::Array(cs)) => cs,
        _ => return Err(LoadError::schema(field("choices"), "must be an array")),
    };
    if choices.len() < 2 {
        return Err(LoadError::schema(
            field("choices"),
            "must contain at least two choices",
        ));
    }
    let choices = choices
        .iter()
        .map(|c| match c {
            Value::String(s) if !s.trim().is_empty() => Ok(s.clone()),
            _ => Err(LoadError::schema(
                field("choices"),
                "every choice must be a non-empty string",
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let answer = record
        .get("answer")
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            LoadError::schema(field("answer"), "must be a non-negative integer choice index")
        })? as usize;
    if answer >= choices.len() {
        return Err(LoadError::schema(
            field("answer"),
            format!("index {answer} is out of range for {} choices", choices.len()),
        ));
    }

    Ok(Question::MultipleChoice {
        text,
        choices,
        answer,
    })
}

/// A quiz together with the file it was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedQuiz {
    pub path: PathBuf,
    pub quiz: Quiz,
}

/// Discover and load all `.json` quiz files directly under a directory.
///
/// Files that fail to load are skipped with a warning so one bad file never
/// hides the rest. Results are sorted by file name for a stable menu order.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<LoadedQuiz>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut quizzes = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        match load_quiz(&path) {
            Ok(quiz) => quizzes.push(LoadedQuiz { path, quiz }),
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
            }
        }
    }

    quizzes.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(quizzes)
}
