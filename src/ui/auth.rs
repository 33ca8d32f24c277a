//! Login and request-access views.
//!
//! A hardcoded-email stub, not a security design: the admin account and
//! paid accounts from the mock user list may sign in, everyone else is
//! told to contact the administrator. Sign-up only records a confirmation
//! message.

use eframe::egui;

use crate::data::{self, AccountStatus, ADMIN_EMAIL};

/// Outcome of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Signed-in account email
    pub email: String,
    /// Whether the account is the administrator
    pub is_admin: bool,
}

/// State of the authentication gate.
pub struct AuthView {
    login_view: bool,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    phone: String,
    error: Option<String>,
    success: Option<String>,
}

impl Default for AuthView {
    fn default() -> Self {
        Self {
            login_view: true,
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            error: None,
            success: None,
        }
    }
}

impl AuthView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a login attempt against the stub account list.
    fn try_login(email: &str) -> Result<Session, String> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err("The email field cannot be empty.".to_string());
        }
        if email == ADMIN_EMAIL {
            return Ok(Session { email, is_admin: true });
        }
        let allowed = data::users()
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&email) && u.status == AccountStatus::Paid);
        if allowed {
            Ok(Session { email, is_admin: false })
        } else {
            Err(
                "This account has no active subscription or is not authorized. \
                 Please contact the administrator."
                    .to_string(),
            )
        }
    }

    fn switch_view(&mut self) {
        self.login_view = !self.login_view;
        self.error = None;
        self.success = None;
    }

    /// Render the gate. Returns a session on successful login.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<Session> {
        let mut session = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.heading("GeoField");
                ui.add_space(20.0);

                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(320.0);
                    if self.login_view {
                        session = self.show_login(ui);
                    } else {
                        self.show_signup(ui);
                    }
                });
            });
        });

        session
    }

    fn show_login(&mut self, ui: &mut egui::Ui) -> Option<Session> {
        let mut session = None;

        ui.label("Sign in");
        ui.add_space(8.0);
        ui.label("Email");
        ui.add(egui::TextEdit::singleline(&mut self.email).hint_text("you@company.com"));
        ui.label("Password");
        ui.add(egui::TextEdit::singleline(&mut self.password).password(true));
        ui.add_space(8.0);

        if ui.button("Sign in").clicked() {
            match Self::try_login(&self.email) {
                Ok(s) => {
                    tracing::info!("User signed in: {}", s.email);
                    self.error = None;
                    session = Some(s);
                }
                Err(message) => self.error = Some(message),
            }
        }

        if let Some(error) = &self.error {
            ui.colored_label(ui.visuals().error_fg_color, error);
        }

        ui.add_space(8.0);
        if ui.link("No account yet? Request access").clicked() {
            self.switch_view();
        }

        session
    }

    fn show_signup(&mut self, ui: &mut egui::Ui) {
        if let Some(success) = self.success.clone() {
            ui.label("Request sent");
            ui.add_space(8.0);
            ui.label(success);
            ui.add_space(8.0);
            if ui.link("Back to sign-in").clicked() {
                self.switch_view();
            }
            return;
        }

        ui.label("Request access");
        ui.add_space(8.0);
        ui.label("Last name");
        ui.text_edit_singleline(&mut self.last_name);
        ui.label("First name");
        ui.text_edit_singleline(&mut self.first_name);
        ui.label("Email");
        ui.text_edit_singleline(&mut self.email);
        ui.label("Phone");
        ui.text_edit_singleline(&mut self.phone);
        ui.label("Password");
        ui.add(egui::TextEdit::singleline(&mut self.password).password(true));
        ui.add_space(8.0);

        if ui.button("Send request").clicked() {
            let email = self.email.trim().to_lowercase();
            if email.is_empty() {
                self.error = Some("The email field cannot be empty.".to_string());
            } else if email == ADMIN_EMAIL {
                self.error = Some(
                    "An administrator account with this email already exists. Please sign in."
                        .to_string(),
                );
            } else {
                tracing::info!("Access requested for {}", email);
                self.error = None;
                self.success = Some(
                    "Your request has been sent. The administrator must approve \
                     your account before you can sign in."
                        .to_string(),
                );
            }
        }

        if let Some(error) = &self.error {
            ui.colored_label(ui.visuals().error_fg_color, error);
        }

        ui.add_space(8.0);
        if ui.link("Already have an account? Sign in").clicked() {
            self.switch_view();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_email_logs_in_as_admin() {
        let session = AuthView::try_login(ADMIN_EMAIL).unwrap();
        assert!(session.is_admin);
    }

    #[test]
    fn test_login_is_case_insensitive_and_trimmed() {
        let session = AuthView::try_login("  Admin@GeoField.example ").unwrap();
        assert!(session.is_admin);
        assert_eq!(session.email, ADMIN_EMAIL);
    }

    #[test]
    fn test_paid_account_logs_in_without_admin() {
        let session = AuthView::try_login("john.doe@geofield.example").unwrap();
        assert!(!session.is_admin);
    }

    #[test]
    fn test_pending_account_is_rejected() {
        assert!(AuthView::try_login("m.traore@geofield.example").is_err());
    }

    #[test]
    fn test_unknown_account_is_rejected() {
        assert!(AuthView::try_login("nobody@example.com").is_err());
    }

    #[test]
    fn test_empty_email_is_rejected() {
        assert!(AuthView::try_login("   ").is_err());
    }
}
