//! Dashboard: AI synthesis of recent discoveries.
//!
//! The summary runs on the tokio runtime and delivers its result over a
//! channel so the frame loop never blocks; the view polls the channel each
//! frame, exactly like the app's other pending work.

use std::sync::mpsc::{channel, Receiver};

use eframe::egui;
use tokio::runtime::Handle;

use crate::ai::{FieldNotesAssistant, SummaryGenerator};
use crate::data::MineralAnalysis;
use crate::Result;

/// Action reported back to the app.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Save the generated summary as a text download
    DownloadSummary(String),
    /// Copy the generated summary to the clipboard
    CopySummary(String),
}

/// Caller-owned dashboard state.
#[derive(Default)]
pub struct DashboardView {
    summary: Option<String>,
    error: Option<String>,
    pending: Option<Receiver<Result<String>>>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kick off summary generation on the runtime.
    fn generate(&mut self, ctx: &egui::Context, runtime: &Handle, analyses: &[MineralAnalysis]) {
        self.summary = None;
        self.error = None;

        let (tx, rx) = channel();
        self.pending = Some(rx);

        let analyses = analyses.to_vec();
        let ctx = ctx.clone();
        runtime.spawn(async move {
            let assistant = FieldNotesAssistant::new();
            let result = assistant.generate_summary(&analyses);
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Collect a finished generation, if one arrived.
    fn check_pending(&mut self) {
        if let Some(rx) = &self.pending {
            if let Ok(result) = rx.try_recv() {
                match result {
                    Ok(summary) => self.summary = Some(summary),
                    Err(e) => {
                        tracing::error!("Summary generation failed: {}", e);
                        self.error = Some(e.to_string());
                    }
                }
                self.pending = None;
            }
        }
    }

    /// Render the dashboard. Returns a download action when requested.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        runtime: &Handle,
        analyses: &[MineralAnalysis],
    ) -> Option<DashboardAction> {
        self.check_pending();
        let mut action = None;

        ui.horizontal(|ui| {
            ui.heading("Field dashboard");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let generating = self.pending.is_some();
                let generate = ui.add_enabled(
                    !generating,
                    egui::Button::new(if generating {
                        "Generating..."
                    } else {
                        "Generate AI summary"
                    }),
                );
                if generate.clicked() {
                    self.generate(ctx, runtime, analyses);
                }

                if let Some(summary) = &self.summary {
                    if ui.button("Download").clicked() {
                        action = Some(DashboardAction::DownloadSummary(summary.clone()));
                    }
                    if ui.button("Copy").clicked() {
                        action = Some(DashboardAction::CopySummary(summary.clone()));
                    }
                }
            });
        });
        ui.label("Synthesis of recent geological findings.");
        ui.separator();

        if self.pending.is_some() {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.label("The consulting geologist is reviewing the data...");
            });
        } else if let Some(error) = &self.error {
            ui.colored_label(ui.visuals().error_fg_color, format!("Generation failed: {}", error));
        } else if let Some(summary) = &self.summary {
            let text = summary.clone();
            egui::ScrollArea::vertical().show(ui, |ui| {
                render_markdown(ui, &text);
            });
        } else {
            ui.add_space(20.0);
            ui.weak("Use \"Generate AI summary\" for an overview of recent discoveries.");
        }

        action
    }
}

/// Minimal markdown rendering: headings, bullets, paragraphs.
fn render_markdown(ui: &mut egui::Ui, content: &str) {
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix("### ") {
            ui.strong(rest);
        } else if let Some(rest) = line.strip_prefix("## ") {
            ui.strong(rest);
        } else if let Some(rest) = line.strip_prefix("# ") {
            ui.heading(rest);
        } else if let Some(rest) = line.strip_prefix("* ") {
            ui.label(format!("\u{2022} {}", rest));
        } else {
            ui.label(line);
        }
    }
}
