//! Compilation sheet: the consolidated, queryable table of field points.
//!
//! Holds the filter/sort/page selections and re-runs the query engine on
//! every frame over the caller's record collection. Filter edits reset to
//! page one; Previous/Next are disabled on the first/last page, which is
//! why out-of-range pages never need clamping here.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::query::{self, FilterSet, Predicate, QueryState, SortDirection};
use crate::record::Record;

/// Columns offered for sorting, in display order.
const COLUMNS: &[(&str, &str)] = &[
    ("id", "Point ID"),
    ("type", "Type"),
    ("date", "Date"),
    ("coord_x", "Coord X / UTM E"),
    ("coord_y", "Coord Y / UTM N"),
    ("coord_z", "Coord Z / Alt"),
    ("project", "Project"),
    ("description", "Description"),
];

/// Point-type options for the equality filter; empty means all types.
const TYPE_OPTIONS: &[&str] = &["", "Mapping", "Geochemistry", "RC hole", "Trench", "Outcrop"];

/// Action reported back to the app.
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    /// Download the whole filtered+sorted set (not just the visible page)
    Download(Vec<Record>),
}

/// Caller-owned view state for the compilation sheet.
pub struct TableView {
    id_filter: String,
    type_filter: String,
    project_filter: String,
    sort_key: Option<String>,
    sort_direction: SortDirection,
    page: usize,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            id_filter: String::new(),
            type_filter: String::new(),
            project_filter: String::new(),
            // The sheet opens newest-first.
            sort_key: Some("date".to_string()),
            sort_direction: SortDirection::Descending,
            page: 1,
        }
    }
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The filter set for the current inputs.
    fn filters(&self) -> FilterSet {
        FilterSet::new()
            .with("id", Predicate::Contains(self.id_filter.clone()))
            .with("type", Predicate::Equals(self.type_filter.clone()))
            .with("project", Predicate::Contains(self.project_filter.clone()))
    }

    /// Toggle sorting on a column: new column sorts ascending, clicking
    /// the active column flips the direction.
    fn request_sort(&mut self, key: &str) {
        if self.sort_key.as_deref() == Some(key) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = Some(key.to_string());
            self.sort_direction = SortDirection::Ascending;
        }
    }

    fn sort_indicator(&self, key: &str) -> &'static str {
        if self.sort_key.as_deref() == Some(key) {
            self.sort_direction.indicator()
        } else {
            "\u{2195}"
        }
    }

    /// Render the sheet over `records`. Returns a download action when the
    /// operator asks for the CSV.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        records: &[Record],
        page_size: usize,
    ) -> Option<TableAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.heading("Compilation sheet");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Download (CSV)").clicked() {
                    let full = query::filter_and_sort(
                        records,
                        &self.filters(),
                        self.sort_key.as_deref(),
                        self.sort_direction,
                    );
                    action = Some(TableAction::Download(full));
                }
            });
        });
        ui.label("Consolidated view of all recorded data points.");
        ui.add_space(8.0);

        // Filter row; any edit resets to the first page.
        let mut filters_changed = false;
        ui.horizontal(|ui| {
            filters_changed |= ui
                .add(
                    egui::TextEdit::singleline(&mut self.id_filter)
                        .hint_text("Filter by point ID...")
                        .desired_width(160.0),
                )
                .changed();

            let before = self.type_filter.clone();
            egui::ComboBox::from_id_salt("type_filter")
                .selected_text(if self.type_filter.is_empty() {
                    "All types".to_string()
                } else {
                    self.type_filter.clone()
                })
                .show_ui(ui, |ui| {
                    for option in TYPE_OPTIONS {
                        let label = if option.is_empty() { "All types" } else { *option };
                        ui.selectable_value(&mut self.type_filter, option.to_string(), label);
                    }
                });
            filters_changed |= before != self.type_filter;

            filters_changed |= ui
                .add(
                    egui::TextEdit::singleline(&mut self.project_filter)
                        .hint_text("Filter by project...")
                        .desired_width(160.0),
                )
                .changed();
        });
        if filters_changed {
            self.page = 1;
        }

        let state = QueryState {
            filters: self.filters(),
            sort_key: self.sort_key.clone(),
            sort_direction: self.sort_direction,
            page: self.page,
            page_size,
        };
        let result = query::run_query(records, &state);

        ui.add_space(8.0);
        let mut sort_request = None;
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().resizable(true), COLUMNS.len())
            .header(22.0, |mut header| {
                for (key, label) in COLUMNS {
                    header.col(|ui| {
                        let text = format!("{} {}", label, self.sort_indicator(key));
                        if ui.button(text).clicked() {
                            sort_request = Some(*key);
                        }
                    });
                }
            })
            .body(|mut body| {
                for record in &result.records {
                    body.row(20.0, |mut row| {
                        for (key, _) in COLUMNS {
                            row.col(|ui| {
                                let text = record
                                    .get(key)
                                    .map(|v| v.to_string())
                                    .unwrap_or_default();
                                ui.label(text);
                            });
                        }
                    });
                }
            });
        if let Some(key) = sort_request {
            self.request_sort(key);
        }

        if result.records.is_empty() {
            ui.add_space(8.0);
            ui.weak("No data points match the current filters.");
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(format!(
                "Page {} of {} ({} results)",
                self.page, result.total_pages, result.total_filtered
            ));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let next = ui.add_enabled(
                    self.page < result.total_pages,
                    egui::Button::new("Next"),
                );
                let previous =
                    ui.add_enabled(self.page > 1, egui::Button::new("Previous"));
                if next.clicked() {
                    self.page = (self.page + 1).min(result.total_pages);
                }
                if previous.clicked() {
                    self.page = self.page.saturating_sub(1).max(1);
                }
            });
        });

        action
    }
}
