//! Main application UI.
//! Shows one question at a time, the feedback for the chosen answer and the final score.

use eframe::egui::{self, Color32, RichText};
use flashcard_quiz::import::json::import_questions;
use flashcard_quiz::{Question, QuizSession};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

pub const WINDOW_TITLE: &str = "Quiz Learning Tool";

const FG_MUTED: Color32 = Color32::from_rgb(0xaa, 0xaa, 0xaa);
const BG_BUTTON: Color32 = Color32::from_rgb(0x2c, 0x2c, 0x2c);
const BG_CORRECT: Color32 = Color32::from_rgb(0x1b, 0x5e, 0x20);
const BG_WRONG: Color32 = Color32::from_rgb(0xb7, 0x1c, 0x1c);
const BG_SPENT: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
const ACCENT_GREEN: Color32 = Color32::from_rgb(0x66, 0xbb, 0x6a);
const ACCENT_RED: Color32 = Color32::from_rgb(0xef, 0x53, 0x50);
const BG_NEXT: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50);

const CHOICE_KEYS: [egui::Key; 9] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
    egui::Key::Num8,
    egui::Key::Num9,
];

/// Main application state
pub struct QuizApp {
    session: QuizSession,
    source: PathBuf,
    rng: StdRng,
    load_error: Option<String>,
}

impl eframe::App for QuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.is_complete() {
            self.render_results_screen(ctx);
        } else {
            self.render_question_screen(ctx);
        }

        let mut dismiss = false;
        if let Some(message) = &self.load_error {
            egui::Window::new("Open Failed")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        dismiss = true;
                    }
                });
        }
        if dismiss {
            self.load_error = None;
        }
    }
}

impl QuizApp {
    /// Creates the application with a fresh session over `questions`
    pub fn new(questions: Vec<Question>, source: PathBuf, mut rng: StdRng) -> Self {
        Self {
            session: new_session(questions, &mut rng),
            source,
            rng,
            load_error: None,
        }
    }

    /// Renders the current question, its choices and the feedback once answered
    fn render_question_screen(&mut self, ctx: &egui::Context) {
        let pressed_choice = ctx.input(|i| CHOICE_KEYS.iter().position(|key| i.key_pressed(*key)));
        let pressed_enter = ctx.input(|i| i.key_pressed(egui::Key::Enter));

        // Store actions to execute after UI rendering
        let mut action_choice: Option<String> = None;
        let mut action_next = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let Ok(question) = self.session.current_question() else {
                    return;
                };
                let feedback = self.session.feedback();
                let position = self.session.position();

                ui.label(
                    RichText::new(format!(
                        "Question {} of {} | Score: {}/{}",
                        position + 1,
                        self.session.total(),
                        self.session.score(),
                        position
                    ))
                    .size(12.0)
                    .color(FG_MUTED),
                );

                ui.add_space(10.0);

                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.add_space(20.0);
                    ui.label(RichText::new(&question.prompt).size(18.0).strong());
                    ui.add_space(20.0);
                });

                ui.add_space(10.0);

                match feedback {
                    Some(outcome) if outcome.correct => {
                        ui.label(RichText::new("Correct!").size(14.0).strong().color(ACCENT_GREEN));
                    }
                    Some(outcome) => {
                        ui.label(
                            RichText::new(format!("Incorrect. Correct: {}", outcome.correct_answer))
                                .size(14.0)
                                .strong()
                                .color(ACCENT_RED),
                        );
                    }
                    None => {
                        ui.label("");
                    }
                }

                ui.add_space(10.0);

                for (i, choice) in question.choices.iter().enumerate() {
                    let fill = match feedback {
                        None => BG_BUTTON,
                        Some(outcome) if *choice == outcome.correct_answer => BG_CORRECT,
                        Some(outcome) if *choice == outcome.selected && !outcome.correct => BG_WRONG,
                        Some(_) => BG_SPENT,
                    };
                    let button = egui::Button::new(RichText::new(choice).size(14.0))
                        .fill(fill)
                        .min_size(egui::vec2(ui.available_width(), 36.0));

                    if ui.add_enabled(feedback.is_none(), button).clicked() {
                        action_choice = Some(choice.clone());
                    }
                    ui.add_space(8.0);

                    if feedback.is_none() && pressed_choice == Some(i) {
                        action_choice = Some(choice.clone());
                    }
                }

                if feedback.is_some() {
                    ui.add_space(20.0);
                    let next = egui::Button::new(
                        RichText::new("Next Question").size(14.0).strong().color(Color32::WHITE),
                    )
                    .fill(BG_NEXT)
                    .min_size(egui::vec2(200.0, 40.0));

                    if ui.add(next).clicked() || pressed_enter {
                        action_next = true;
                    }
                }
            });
        });

        // Execute deferred actions
        if let Some(choice) = action_choice {
            if let Err(e) = self.session.submit_answer(&choice) {
                warn!("Answer '{choice}' not accepted: {e}");
            }
        }
        if action_next {
            if let Err(e) = self.session.advance() {
                warn!("Cannot advance: {e}");
            }
        }
    }

    /// Renders the final score with the option to retry or load another set
    fn render_results_screen(&mut self, ctx: &egui::Context) {
        let results = self.session.results();
        let mut action_restart = false;
        let mut action_open = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading(RichText::new("Quiz Complete!").size(32.0).strong());

                ui.add_space(20.0);
                ui.label(
                    RichText::new(format!("{}%", results.percentage))
                        .size(72.0)
                        .strong()
                        .color(ACCENT_GREEN),
                );

                ui.add_space(20.0);
                ui.label(
                    RichText::new(format!("{} out of {} correct", results.score, results.total))
                        .size(18.0)
                        .color(FG_MUTED),
                );
                ui.label(RichText::new(display_name(&self.source)).color(FG_MUTED));

                ui.add_space(40.0);
                let retry = egui::Button::new(
                    RichText::new("Try Again").size(16.0).strong().color(Color32::WHITE),
                )
                .fill(BG_NEXT)
                .min_size(egui::vec2(160.0, 44.0));
                if ui.add(retry).clicked() {
                    action_restart = true;
                }

                ui.add_space(10.0);
                if ui.button("Open Another Set…").clicked() {
                    action_open = true;
                }
            });
        });

        if action_restart {
            self.session.restart();
        }
        if action_open {
            self.handle_open();
        }
    }

    /// Loads another JSON export picked from a file dialog and starts over with it
    fn handle_open(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };

        match import_questions(&path, &mut self.rng) {
            Ok(questions) => {
                info!("Switched to '{}'", path.display());
                self.session = new_session(questions, &mut self.rng);
                self.source = path;
            }
            Err(e) => {
                warn!("{e}");
                self.load_error = Some(format!(
                    "{e}\n\nThe file must hold a list of records:\n[\n  {{ \"term\": \"...\", \"definition\": \"...\" }}\n]"
                ));
            }
        }
    }
}

/// Sessions get their own generator so a seeded run replays the same shuffles
fn new_session(questions: Vec<Question>, rng: &mut StdRng) -> QuizSession {
    QuizSession::with_rng(questions, StdRng::seed_from_u64(rng.r#gen()))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
