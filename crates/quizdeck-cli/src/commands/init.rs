//! The `quizdeck init` command.

use std::path::Path;

use anyhow::Result;

use quizdeck_core::model::{Question, Quiz};

pub fn execute() -> Result<()> {
    if Path::new("quizdeck.toml").exists() {
        println!("quizdeck.toml already exists, skipping.");
    } else {
        std::fs::write("quizdeck.toml", SAMPLE_CONFIG)?;
        println!("Created quizdeck.toml");
    }

    std::fs::create_dir_all("quizzes")?;
    for quiz in sample_quizzes() {
        let file_name = format!("{}.json", quiz.title.to_lowercase().replace(' ', "_"));
        let path = Path::new("quizzes").join(file_name);
        if path.exists() {
            println!("{} already exists, skipping.", path.display());
            continue;
        }
        std::fs::write(&path, serde_json::to_string_pretty(&quiz)?)?;
        println!("Created {}", path.display());
    }

    println!("\nNext steps:");
    println!("  1. Add your own quiz files to quizzes/");
    println!("  2. Run: quizdeck validate --quiz quizzes");
    println!("  3. Run: quizdeck run");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizdeck configuration

# Directory holding quiz JSON files.
quiz_dir = "quizzes"
"#;

fn sample_quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            title: "World Geography".into(),
            questions: vec![
                Question::MultipleChoice {
                    text: "What is the capital of France?".into(),
                    choices: vec!["Berlin".into(), "London".into(), "Paris".into(), "Rome".into()],
                    answer: 2,
                },
                Question::TrueFalse {
                    text: "The Nile is the longest river in the world.".into(),
                    answer: true,
                },
                Question::TrueFalse {
                    text: "Australia is both a country and a continent.".into(),
                    answer: true,
                },
            ],
        },
        Quiz {
            title: "Science Basics".into(),
            questions: vec![
                Question::TrueFalse {
                    text: "Water boils at 100 degrees Celsius at sea level.".into(),
                    answer: true,
                },
                Question::TrueFalse {
                    text: "Diamonds are made of carbon.".into(),
                    answer: true,
                },
                Question::MultipleChoice {
                    text: "What is the chemical symbol for gold?".into(),
                    choices: vec!["Go".into(), "Gd".into(), "Au".into(), "Ag".into()],
                    answer: 2,
                },
            ],
        },
    ]
}
