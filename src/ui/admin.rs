//! User administration view (admin accounts only).
//!
//! Read-only table over the mock user list plus a timestamped CSV export
//! of the user journal.

use eframe::egui;

use crate::data::{AccountStatus, UserAccount};

/// Action reported back to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    /// Export the user journal with a timestamped filename
    DownloadJournal,
}

fn status_color(status: AccountStatus) -> egui::Color32 {
    match status {
        AccountStatus::Admin => egui::Color32::from_rgb(245, 158, 11),
        AccountStatus::Paid => egui::Color32::from_rgb(34, 197, 94),
        AccountStatus::Pending => egui::Color32::from_rgb(234, 179, 8),
    }
}

/// Render the user table. Returns an export action when requested.
pub fn show(ui: &mut egui::Ui, users: &[UserAccount]) -> Option<AdminAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.heading("User administration");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Download journal (CSV)").clicked() {
                action = Some(AdminAction::DownloadJournal);
            }
        });
    });
    ui.label("Review and manage application users.");
    ui.add_space(8.0);

    egui::Grid::new("users")
        .num_columns(4)
        .striped(true)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.strong("Full name");
            ui.strong("Email");
            ui.strong("Phone");
            ui.strong("Status");
            ui.end_row();

            for user in users {
                ui.label(format!("{} {}", user.first_name, user.last_name));
                ui.label(user.email);
                ui.label(user.phone);
                ui.colored_label(status_color(user.status), user.status.label());
                ui.end_row();
            }
        });

    action
}
