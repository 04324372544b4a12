mod app;

use app::QuizApp;
use clap::{CommandFactory, Parser};
use flashcard_quiz::import::json::import_questions;
use log::error;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "flashcard-quiz",
    about = "Multiple-choice quiz from a term/definition JSON export",
    version
)]
struct Cli {
    /// JSON export: an array of {"term": ..., "definition": ...} objects
    path: PathBuf,

    /// Seed every shuffle and random pick, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // usage errors exit 1, --help and --version exit 0
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let questions = match import_questions(&cli.path, &mut rng) {
        Ok(questions) => questions,
        Err(e) => {
            error!("{e}");
            eprintln!("{}", Cli::command().render_usage());
            return ExitCode::FAILURE;
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app::WINDOW_TITLE)
            .with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    let result = eframe::run_native(
        app::WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(QuizApp::new(questions, cli.path, rng)))
        }),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
