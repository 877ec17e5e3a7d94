//! The `quizdeck validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizdeck_core::loader;

pub fn execute(path: PathBuf) -> Result<()> {
    if !path.is_dir() {
        let quiz = loader::load_quiz(&path)
            .with_context(|| format!("invalid quiz file {}", path.display()))?;
        println!("OK: {} ({} questions)", quiz.title, quiz.len());
        return Ok(());
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(&path)
        .with_context(|| format!("failed to read directory: {}", path.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("no quiz files found in {}", path.display());
    }

    let mut invalid = 0;
    for file in &files {
        let name = file.file_name().unwrap_or_default().to_string_lossy();
        match loader::load_quiz(file) {
            Ok(quiz) => println!("OK    {name}: {} ({} questions)", quiz.title, quiz.len()),
            Err(e) => {
                println!("ERROR {name}: {e}");
                invalid += 1;
            }
        }
    }

    println!("\n{} of {} quiz file(s) valid.", files.len() - invalid, files.len());
    if invalid > 0 {
        anyhow::bail!("{invalid} invalid quiz file(s)");
    }
    Ok(())
}
