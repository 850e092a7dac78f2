use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Parser;
use flag_quiz::{FlagQuiz, QuizError};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the countries from (defaults to the built-in list)
    #[arg(short, long)]
    countries: Option<PathBuf>,

    /// Seed for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write logs to this file; nothing is logged without it
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level used with --log-file
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path, args.log_level) {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let quiz = match load_quiz(&args) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn load_quiz(args: &Args) -> Result<FlagQuiz, QuizError> {
    match &args.countries {
        Some(path) => FlagQuiz::from_json(path, args.seed),
        None => FlagQuiz::builtin(args.seed),
    }
}

// stdout and stderr belong to the TUI; logs only ever go to a file.
fn init_logging(path: &Path, level: LevelFilter) -> std::io::Result<()> {
    let file = File::create(path)?;
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
