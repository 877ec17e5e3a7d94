//! The `quizdeck run` command.
//!
//! The interactive loop is written against generic `BufRead`/`Write`
//! handles so it can be driven by in-memory buffers in tests. All scoring
//! decisions live in `quizdeck_core::session`; this module only renders
//! and re-prompts.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

use quizdeck_core::error::AnswerError;
use quizdeck_core::loader::{self, LoadedQuiz};
use quizdeck_core::model::{Question, Quiz};
use quizdeck_core::report::ScoreReport;
use quizdeck_core::session::Session;

use crate::config;

pub fn execute(
    quiz: Option<PathBuf>,
    quiz_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    if let Some(path) = quiz {
        let quiz = loader::load_quiz(&path)
            .with_context(|| format!("failed to load quiz {}", path.display()))?;
        run_session(&Arc::new(quiz), &mut input, &mut out)?;
        return Ok(());
    }

    let cfg = config::load_config_from(config_path.as_deref())?;
    let dir = quiz_dir.unwrap_or(cfg.quiz_dir);
    let quizzes = loader::load_quiz_directory(&dir)?;
    if quizzes.is_empty() {
        anyhow::bail!("no quiz files found in {}", dir.display());
    }

    run_menu(&quizzes, &mut input, &mut out)
}

/// Topic menu: pick a quiz, run it, offer a retake, repeat until exit.
fn run_menu(
    quizzes: &[LoadedQuiz],
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    loop {
        writeln!(out, "=== QUIZDECK ===\n")?;
        writeln!(out, "Available quiz topics:")?;
        for (i, loaded) in quizzes.iter().enumerate() {
            writeln!(
                out,
                "{}. {} ({} questions)",
                i + 1,
                loaded.quiz.title,
                loaded.quiz.len()
            )?;
        }
        let exit_option = quizzes.len() + 1;
        writeln!(out, "{exit_option}. Exit")?;

        let selection = loop {
            let Some(line) = prompt(input, out, "\nSelect a topic (number): ")? else {
                return Ok(());
            };
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=exit_option).contains(&n) => break n,
                _ => writeln!(out, "Enter a number between 1 and {exit_option}.")?,
            }
        };
        if selection == exit_option {
            writeln!(out, "Thanks for playing!")?;
            return Ok(());
        }

        let quiz = Arc::new(quizzes[selection - 1].quiz.clone());
        run_session(&quiz, input, out)?;

        loop {
            let Some(line) = prompt(input, out, "\nTake another quiz? (y/n): ")? else {
                return Ok(());
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => break,
                "n" | "no" => {
                    writeln!(out, "Thanks for playing!")?;
                    return Ok(());
                }
                _ => writeln!(out, "Enter y or n.")?,
            }
        }
    }
}

/// Drive one session to completion, re-prompting on invalid input.
fn run_session(
    quiz: &Arc<Quiz>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<ScoreReport> {
    let mut session = Session::new(Arc::clone(quiz));
    writeln!(out, "\n=== {} ===", quiz.title)?;

    while let Some(question) = session.current_question().cloned() {
        writeln!(out, "\nQuestion {}/{}", session.current_index() + 1, quiz.len())?;
        writeln!(out, "{}", question.text())?;
        match &question {
            Question::MultipleChoice { choices, .. } => {
                for (i, choice) in choices.iter().enumerate() {
                    writeln!(out, "  {}. {}", i + 1, choice)?;
                }
            }
            Question::TrueFalse { .. } => writeln!(out, "  (true/false)")?,
        }

        let result = loop {
            let Some(line) = prompt(input, out, "\nYour answer: ")? else {
                anyhow::bail!("input ended before the quiz was complete");
            };
            match session.submit_answer(&line) {
                Ok(result) => break result,
                Err(AnswerError::InvalidSelection { hint }) => writeln!(out, "{hint}")?,
                Err(e) => return Err(e.into()),
            }
        };

        if result.was_correct {
            writeln!(out, "✓ Correct!")?;
        } else {
            writeln!(
                out,
                "✗ Incorrect. The correct answer is: {}",
                result.correct_answer
            )?;
        }
    }

    let report = session.report();
    writeln!(out, "\n=== Quiz complete: {} ===", report.title)?;
    writeln!(
        out,
        "Score: {}/{} ({:.1}%)",
        report.score, report.total, report.percentage
    )?;
    writeln!(out, "{}", report.grade().remark())?;
    writeln!(out, "\n{}", breakdown_table(quiz, &report))?;

    Ok(report)
}

fn breakdown_table(quiz: &Quiz, report: &ScoreReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Question", "Your answer", "Result"]);
    for record in &report.breakdown {
        table.add_row(vec![
            Cell::new(record.question_index + 1),
            Cell::new(quiz.questions[record.question_index].text()),
            Cell::new(&record.submitted),
            Cell::new(if record.was_correct { "✓" } else { "✗" }),
        ]);
    }
    table
}

/// Print a prompt and read one line. `None` means end of input.
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    text: &str,
) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
