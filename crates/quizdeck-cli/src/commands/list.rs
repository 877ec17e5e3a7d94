//! The `quizdeck list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

use crate::config;

pub fn execute(quiz_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let cfg = config::load_config_from(config_path.as_deref())?;
    let dir = quiz_dir.unwrap_or(cfg.quiz_dir);

    let quizzes = quizdeck_core::loader::load_quiz_directory(&dir)?;
    if quizzes.is_empty() {
        println!("No quiz files found in {}.", dir.display());
        println!("Run `quizdeck init` to create sample quizzes.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Title", "Questions", "File"]);
    for loaded in &quizzes {
        let file = loaded
            .path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(&loaded.quiz.title),
            Cell::new(loaded.quiz.len()),
            Cell::new(file),
        ]);
    }
    println!("{table}");

    Ok(())
}
