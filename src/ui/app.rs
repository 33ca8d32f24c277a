//! Main application window.
//!
//! `GeoFieldApp` owns all view state: the signed-in session, the active
//! view, per-form input state, the compilation-sheet query selections and
//! the session's submitted records. Views are pure renderers over this
//! state; every mutation happens here in response to a reported action.

use std::path::PathBuf;

use eframe::egui;
use tokio::runtime::Handle;

use crate::config::AppConfig;
use crate::data::{self, MineralAnalysis, UserAccount};
use crate::export;
use crate::forms::{catalog, FormSpec, FormState};
use crate::record::Record;
use crate::ui::actions;
use crate::ui::admin::{self, AdminAction};
use crate::ui::analysis::{self, AnalysisAction};
use crate::ui::auth::{AuthView, Session};
use crate::ui::dashboard::{DashboardAction, DashboardView};
use crate::ui::form::{self, FormAction};
use crate::ui::table::{TableAction, TableView};

/// Top-level views reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Dashboard,
    CompilationSheet,
    Mapping,
    Database,
    Exploration,
    Analysis,
    Hse,
    Profile,
    Admin,
}

impl View {
    fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::CompilationSheet => "Compilation sheet",
            View::Mapping => "Mapping & GIS",
            View::Database => "Geological database",
            View::Exploration => "Exploration",
            View::Analysis => "Mineral analysis",
            View::Hse => "HSE & reporting",
            View::Profile => "User profile",
            View::Admin => "Administration",
        }
    }

    /// Sidebar entries in display order; Admin is appended for admins.
    const NAV: &'static [View] = &[
        View::Dashboard,
        View::CompilationSheet,
        View::Mapping,
        View::Database,
        View::Exploration,
        View::Analysis,
        View::Hse,
    ];
}

/// Tabs of the geological database view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DatabaseTab {
    #[default]
    Geochemistry,
    RcDrilling,
    DdDrilling,
    Operations,
}

/// Sub-sheets of a drill-hole database tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DrillTab {
    #[default]
    Collar,
    Survey,
    Assay,
    Geology,
    Geotech,
}

/// Operational tracking sub-sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum OperationsTab {
    #[default]
    DailyReport,
    SampleDispatch,
    SafetyMeeting,
    FuelTracking,
    MachineryLog,
}

/// Exploration view tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ExplorationTab {
    #[default]
    GeologicalMapping,
    TrenchLog,
}

/// HSE view tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum HseTab {
    #[default]
    IncidentReport,
    SiteInspection,
    EnvironmentalObservation,
}

/// The main application.
pub struct GeoFieldApp {
    config: AppConfig,
    runtime: Handle,
    auth: AuthView,
    session: Option<Session>,
    active_view: View,
    database_tab: DatabaseTab,
    rc_tab: DrillTab,
    dd_tab: DrillTab,
    operations_tab: OperationsTab,
    exploration_tab: ExplorationTab,
    hse_tab: HseTab,
    /// Lazily created input state, one entry per visited form
    forms: Vec<FormState>,
    table: TableView,
    dashboard: DashboardView,
    /// Records submitted this session, tagged with their form id
    submissions: Vec<(&'static str, Record)>,
    points: Vec<Record>,
    users: Vec<UserAccount>,
    analyses: Vec<MineralAnalysis>,
    status: String,
    last_export: Option<PathBuf>,
}

impl GeoFieldApp {
    /// Create the application.
    pub fn new(_cc: &eframe::CreationContext<'_>, runtime: Handle, config: AppConfig) -> Self {
        Self {
            config,
            runtime,
            auth: AuthView::new(),
            session: None,
            active_view: View::Dashboard,
            database_tab: DatabaseTab::default(),
            rc_tab: DrillTab::default(),
            dd_tab: DrillTab::default(),
            operations_tab: OperationsTab::default(),
            exploration_tab: ExplorationTab::default(),
            hse_tab: HseTab::default(),
            forms: Vec::new(),
            table: TableView::new(),
            dashboard: DashboardView::new(),
            submissions: Vec::new(),
            points: data::compilation_points(),
            users: data::users(),
            analyses: data::recent_analyses(),
            status: "Ready".to_string(),
            last_export: None,
        }
    }

    /// Index of the input state for `spec`, creating it on first visit.
    fn form_index(&mut self, spec: &'static FormSpec) -> usize {
        if let Some(index) = self.forms.iter().position(|f| f.spec.id == spec.id) {
            return index;
        }
        let mut state = FormState::new(spec);
        // Pre-fill the configured operator name into geologist fields.
        if let Some(operator) = &self.config.operator {
            if let Some(value) = state.value_mut("geologist") {
                if value.is_empty() {
                    *value = operator.clone();
                }
            }
        }
        self.forms.push(state);
        self.forms.len() - 1
    }

    /// Records submitted this session for one form.
    fn submissions_for(&self, form_id: &str) -> Vec<Record> {
        self.submissions
            .iter()
            .filter(|(id, _)| *id == form_id)
            .map(|(_, record)| record.clone())
            .collect()
    }

    /// Save a CSV download, honoring the configured export directory.
    fn export_records(&mut self, records: &[Record], filename: &str) {
        let saved = match self.config.export_dir.clone() {
            Some(dir) => match export::export_csv_to(&dir, records, filename) {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::error!("CSV export of {} failed: {}", filename, e);
                    None
                }
            },
            None => export::export_csv(records, filename),
        };
        self.finish_export(saved, filename);
    }

    /// Save a text download, honoring the configured export directory.
    fn export_text(&mut self, content: &str, filename: &str) {
        let saved = match self.config.export_dir.clone() {
            Some(dir) => match export::export_text_to(&dir, content, filename) {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::error!("Text export of {} failed: {}", filename, e);
                    None
                }
            },
            None => export::export_text(content, filename),
        };
        self.finish_export(saved, filename);
    }

    fn finish_export(&mut self, saved: Option<PathBuf>, filename: &str) {
        match saved {
            Some(path) => {
                self.status = format!("Saved {}", path.display());
                self.last_export = Some(path);
            }
            None => {
                self.status = format!("Could not save {} (no download location)", filename);
            }
        }
    }

    /// Render one form and apply whatever it requests.
    fn show_form(&mut self, ui: &mut egui::Ui, spec: &'static FormSpec) {
        let index = self.form_index(spec);
        let action = form::show(ui, &mut self.forms[index]);
        match action {
            Some(FormAction::Submit) => {
                let record = self.forms[index].submit();
                self.submissions.push((spec.id, record));
                self.status = format!("{} entry saved", spec.title);
            }
            Some(FormAction::Reset) => self.forms[index].reset(),
            Some(FormAction::Download) => {
                // Download the session's submissions for this form; with
                // none yet, download the entry being edited.
                let mut records = self.submissions_for(spec.id);
                if records.is_empty() {
                    records.push(self.forms[index].to_record());
                }
                self.export_records(&records, spec.download_name);
            }
            None => {}
        }
    }

    fn show_tab_row<T: Copy + PartialEq>(
        ui: &mut egui::Ui,
        current: &mut T,
        tabs: &[(T, &str)],
    ) {
        ui.horizontal(|ui| {
            for (tab, label) in tabs {
                if ui.selectable_label(*current == *tab, *label).clicked() {
                    *current = *tab;
                }
            }
        });
        ui.separator();
    }

    fn show_database(&mut self, ui: &mut egui::Ui) {
        ui.heading("Geological database");
        ui.label("Field data entry and review.");
        ui.add_space(6.0);
        let mut tab = self.database_tab;
        Self::show_tab_row(
            ui,
            &mut tab,
            &[
                (DatabaseTab::Geochemistry, "1. Geochemistry"),
                (DatabaseTab::RcDrilling, "2. RC drilling"),
                (DatabaseTab::DdDrilling, "3. DD drilling"),
                (DatabaseTab::Operations, "4. Operational tracking"),
            ],
        );
        self.database_tab = tab;

        match self.database_tab {
            DatabaseTab::Geochemistry => self.show_form(ui, &catalog::GEOCHEMISTRY),
            DatabaseTab::RcDrilling => {
                let mut tab = self.rc_tab;
                Self::show_tab_row(
                    ui,
                    &mut tab,
                    &[
                        (DrillTab::Collar, "Collar"),
                        (DrillTab::Survey, "Survey"),
                        (DrillTab::Assay, "Assay"),
                        (DrillTab::Geology, "Geology"),
                    ],
                );
                self.rc_tab = tab;
                match self.rc_tab {
                    DrillTab::Collar => self.show_form(ui, &catalog::RC_COLLAR),
                    DrillTab::Survey => self.show_form(ui, &catalog::RC_SURVEY),
                    DrillTab::Assay => self.show_form(ui, &catalog::RC_ASSAY),
                    // RC holes have no geotechnical sheet; fall back to geology.
                    DrillTab::Geology | DrillTab::Geotech => {
                        self.show_form(ui, &catalog::RC_GEOLOGY)
                    }
                }
            }
            DatabaseTab::DdDrilling => {
                let mut tab = self.dd_tab;
                Self::show_tab_row(
                    ui,
                    &mut tab,
                    &[
                        (DrillTab::Collar, "Collar"),
                        (DrillTab::Survey, "Survey"),
                        (DrillTab::Assay, "Assay"),
                        (DrillTab::Geology, "Geology"),
                        (DrillTab::Geotech, "Geotechnical"),
                    ],
                );
                self.dd_tab = tab;
                match self.dd_tab {
                    DrillTab::Collar => self.show_form(ui, &catalog::DD_COLLAR),
                    DrillTab::Survey => self.show_form(ui, &catalog::DD_SURVEY),
                    DrillTab::Assay => self.show_form(ui, &catalog::DD_ASSAY),
                    DrillTab::Geology => self.show_form(ui, &catalog::DD_GEOLOGY),
                    DrillTab::Geotech => self.show_form(ui, &catalog::DD_GEOTECH),
                }
            }
            DatabaseTab::Operations => {
                let mut tab = self.operations_tab;
                Self::show_tab_row(
                    ui,
                    &mut tab,
                    &[
                        (OperationsTab::DailyReport, "Daily report"),
                        (OperationsTab::SampleDispatch, "Sample dispatch"),
                        (OperationsTab::SafetyMeeting, "Safety meeting"),
                        (OperationsTab::FuelTracking, "Fuel tracking"),
                        (OperationsTab::MachineryLog, "Machinery log"),
                    ],
                );
                self.operations_tab = tab;
                match self.operations_tab {
                    OperationsTab::DailyReport => self.show_form(ui, &catalog::DAILY_REPORT),
                    OperationsTab::SampleDispatch => self.show_form(ui, &catalog::SAMPLE_DISPATCH),
                    OperationsTab::SafetyMeeting => self.show_form(ui, &catalog::SAFETY_MEETING),
                    OperationsTab::FuelTracking => self.show_form(ui, &catalog::FUEL_TRACKING),
                    OperationsTab::MachineryLog => self.show_form(ui, &catalog::MACHINERY_LOG),
                }
            }
        }
    }

    fn show_exploration(&mut self, ui: &mut egui::Ui) {
        ui.heading("Exploration data");
        ui.label("Mapping, trench and pit data entry.");
        ui.add_space(6.0);
        let mut tab = self.exploration_tab;
        Self::show_tab_row(
            ui,
            &mut tab,
            &[
                (ExplorationTab::GeologicalMapping, "Geological mapping"),
                (ExplorationTab::TrenchLog, "Trench / pit log"),
            ],
        );
        self.exploration_tab = tab;
        match self.exploration_tab {
            ExplorationTab::GeologicalMapping => self.show_form(ui, &catalog::GEOLOGICAL_MAPPING),
            ExplorationTab::TrenchLog => self.show_form(ui, &catalog::TRENCH_LOG),
        }
    }

    fn show_hse(&mut self, ui: &mut egui::Ui) {
        ui.heading("HSE & reporting");
        ui.label("Health, safety and environment reports.");
        ui.add_space(6.0);
        let mut tab = self.hse_tab;
        Self::show_tab_row(
            ui,
            &mut tab,
            &[
                (HseTab::IncidentReport, "Incident report"),
                (HseTab::SiteInspection, "Site inspection"),
                (HseTab::EnvironmentalObservation, "Environmental observation"),
            ],
        );
        self.hse_tab = tab;
        match self.hse_tab {
            HseTab::IncidentReport => self.show_form(ui, &catalog::INCIDENT_REPORT),
            HseTab::SiteInspection => self.show_form(ui, &catalog::SITE_INSPECTION),
            HseTab::EnvironmentalObservation => {
                self.show_form(ui, &catalog::ENVIRONMENTAL_OBSERVATION)
            }
        }
    }

    fn show_profile(&self, ui: &mut egui::Ui) {
        ui.heading("User profile");
        ui.add_space(8.0);
        egui::Grid::new("profile").num_columns(2).show(ui, |ui| {
            ui.strong("Email");
            ui.label(
                self.session
                    .as_ref()
                    .map(|s| s.email.as_str())
                    .unwrap_or_default(),
            );
            ui.end_row();
            ui.strong("Role");
            ui.label("Senior exploration geologist");
            ui.end_row();
            ui.strong("Team");
            ui.label("West exploration");
            ui.end_row();
        });
    }

    fn show_central(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        match self.active_view {
            View::Dashboard => {
                let action = self
                    .dashboard
                    .show(ui, ctx, &self.runtime, &self.analyses);
                match action {
                    Some(DashboardAction::DownloadSummary(summary)) => {
                        self.export_text(&summary, "dashboard_summary.txt");
                    }
                    Some(DashboardAction::CopySummary(summary)) => {
                        match actions::copy_text_to_clipboard(&summary) {
                            Ok(()) => {
                                self.status = "Summary copied to clipboard".to_string();
                            }
                            Err(e) => self.status = format!("Copy failed: {}", e),
                        }
                    }
                    None => {}
                }
            }
            View::CompilationSheet => {
                let page_size = self.config.page_size;
                let action = self.table.show(ui, &self.points, page_size);
                if let Some(TableAction::Download(records)) = action {
                    self.export_records(&records, "compilation_sheet.csv");
                }
            }
            View::Mapping => {
                ui.heading("Mapping & GIS");
                ui.label("Field point entry. Map display is handled by the GIS package.");
                ui.add_space(6.0);
                self.show_form(ui, &catalog::MAPPING_POINT);
            }
            View::Database => self.show_database(ui),
            View::Exploration => self.show_exploration(ui),
            View::Analysis => {
                let action = analysis::show(ui, &self.analyses);
                if let Some(AnalysisAction::Download(records)) = action {
                    self.export_records(&records, "mineral_analysis.csv");
                }
            }
            View::Hse => self.show_hse(ui),
            View::Profile => self.show_profile(ui),
            View::Admin => {
                let action = admin::show(ui, &self.users);
                if let Some(AdminAction::DownloadJournal) = action {
                    let records: Vec<Record> =
                        self.users.iter().map(UserAccount::to_record).collect();
                    let filename =
                        format!("user_journal_{}.csv", export::filename_timestamp());
                    self.export_records(&records, &filename);
                }
            }
        }
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status);
                if let Some(path) = self.last_export.clone() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Copy path").clicked() {
                            if let Err(e) = actions::copy_path_to_clipboard(&path) {
                                self.status = format!("Copy failed: {}", e);
                            } else {
                                self.status = "Export path copied to clipboard".to_string();
                            }
                        }
                        if ui.small_button("Reveal").clicked() {
                            if let Err(e) = actions::reveal_in_file_manager(&path) {
                                self.status = format!("Reveal failed: {}", e);
                            }
                        }
                    });
                }
            });
        });
    }
}

impl eframe::App for GeoFieldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let Some(session) = self.session.clone() else {
            if let Some(session) = self.auth.show(ctx) {
                self.session = Some(session);
            }
            return;
        };

        let mut logout = false;
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("GeoField");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Sign out").clicked() {
                        logout = true;
                    }
                    if ui.button("Profile").clicked() {
                        self.active_view = View::Profile;
                    }
                    ui.weak(&session.email);
                });
            });
        });

        egui::SidePanel::left("sidebar").show(ctx, |ui| {
            ui.add_space(8.0);
            for view in View::NAV {
                if ui
                    .selectable_label(self.active_view == *view, view.label())
                    .clicked()
                {
                    self.active_view = *view;
                }
            }
            if session.is_admin
                && ui
                    .selectable_label(self.active_view == View::Admin, View::Admin.label())
                    .clicked()
            {
                self.active_view = View::Admin;
            }
        });

        self.show_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_central(ui, ctx);
            });
        });

        if logout {
            tracing::info!("User signed out: {}", session.email);
            self.session = None;
            self.auth = AuthView::new();
            self.active_view = View::Dashboard;
        }
    }
}
