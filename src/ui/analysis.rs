//! Mineral analysis browser.
//!
//! Shows the recent rock analyses with their identified minerals and
//! offers the flattened per-mineral CSV export.

use eframe::egui;

use crate::data::MineralAnalysis;
use crate::record::Record;

/// Action reported back to the app.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisAction {
    /// Download one analysis flattened to per-mineral rows
    Download(Vec<Record>),
}

/// Render the analysis list. Returns a download action when requested.
pub fn show(ui: &mut egui::Ui, analyses: &[MineralAnalysis]) -> Option<AnalysisAction> {
    let mut action = None;

    ui.heading("Mineral analysis");
    ui.label("Rock sample analyses from the identification assistant.");
    ui.add_space(8.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        for analysis in analyses {
            egui::CollapsingHeader::new(analysis.rock_name)
                .default_open(false)
                .show(ui, |ui| {
                    ui.label(analysis.description);
                    ui.add_space(4.0);

                    egui::Grid::new(("minerals", analysis.rock_name))
                        .num_columns(3)
                        .striped(true)
                        .show(ui, |ui| {
                            ui.strong("Mineral");
                            ui.strong("Share");
                            ui.strong("Description");
                            ui.end_row();
                            for mineral in &analysis.minerals {
                                ui.label(mineral.name);
                                ui.label(format!("{}%", mineral.percentage));
                                ui.label(mineral.description);
                                ui.end_row();
                            }
                        });

                    ui.add_space(4.0);
                    ui.label(format!("Economic potential: {}", analysis.economic_potential));
                    ui.add_space(4.0);

                    if ui.button("Download results (CSV)").clicked() {
                        action = Some(AnalysisAction::Download(analysis.to_records()));
                    }
                });
        }
    });

    action
}
