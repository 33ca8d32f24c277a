//! Parameterized form rendering.
//!
//! One renderer for every data-entry screen, configured by the screen's
//! [`FormSpec`]. Every sheet gets the same Submit / Reset / Download
//! button row, emitted once here.

use eframe::egui;

use crate::forms::{FieldKind, FormState};

/// What the operator asked the form to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Submit the entered values
    Submit,
    /// Reset every field to its default
    Reset,
    /// Download the form's records as CSV
    Download,
}

/// Render a form and return the requested action, if any.
pub fn show(ui: &mut egui::Ui, state: &mut FormState) -> Option<FormAction> {
    let mut action = None;

    let spec = state.spec;
    ui.heading(spec.title);
    ui.add_space(6.0);

    egui::Grid::new(spec.id)
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for (field, value) in spec.fields.iter().zip(state.values.iter_mut()) {
                ui.label(field.label);
                match field.kind {
                    FieldKind::Text | FieldKind::Number | FieldKind::Date | FieldKind::Time => {
                        ui.add(
                            egui::TextEdit::singleline(value)
                                .hint_text(hint_for(field.kind))
                                .desired_width(260.0),
                        );
                    }
                    FieldKind::Multiline => {
                        ui.add(
                            egui::TextEdit::multiline(value)
                                .desired_rows(3)
                                .desired_width(260.0),
                        );
                    }
                    FieldKind::Select(options) => {
                        egui::ComboBox::from_id_salt((spec.id, field.name))
                            .selected_text(value.clone())
                            .show_ui(ui, |ui| {
                                for option in options {
                                    ui.selectable_value(value, option.to_string(), *option);
                                }
                            });
                    }
                }
                ui.end_row();
            }
        });

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        if ui.button("Download (CSV)").clicked() {
            action = Some(FormAction::Download);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Save entry").clicked() {
                action = Some(FormAction::Submit);
            }
            if ui.button("Reset").clicked() {
                action = Some(FormAction::Reset);
            }
        });
    });

    action
}

fn hint_for(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Number => "0.0",
        FieldKind::Date => "YYYY-MM-DD",
        FieldKind::Time => "HH:MM",
        _ => "",
    }
}
