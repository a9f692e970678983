use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::FILTER_COLUMNS;
use crate::data::summary::Summary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone what we need so we can mutate state inside the loop.
    let unique = dataset.unique_values.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Age range sliders ----
            if let (Some((lo, hi)), Some((domain_lo, domain_hi))) =
                (state.criteria.age_range, state.age_domain)
            {
                ui.strong("Age Range");
                let mut new_lo = lo;
                let mut new_hi = hi;
                let mut changed = false;
                changed |= ui
                    .add(egui::Slider::new(&mut new_lo, domain_lo..=domain_hi).text("Min"))
                    .changed();
                changed |= ui
                    .add(egui::Slider::new(&mut new_hi, domain_lo..=domain_hi).text("Max"))
                    .changed();
                if changed {
                    state.set_age_range(new_lo, new_hi);
                }
                ui.separator();
            }

            // ---- Per-column multiselects (collapsible) ----
            for col in FILTER_COLUMNS {
                let Some(all_values) = unique.get(*col) else {
                    continue;
                };

                let selected = state
                    .criteria
                    .selections
                    .entry(col.to_string())
                    .or_default();

                // Show count of selected / total in the header
                let n_selected = selected.len();
                let n_total = all_values.len();
                let header_text = format!("{col}  ({n_selected}/{n_total})");

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(col)
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        // Select all / none buttons
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                state.select_all(col);
                            }
                            if ui.small_button("None").clicked() {
                                state.select_none(col);
                            }
                        });

                        // Re-borrow after potential mutation from All/None
                        let selected = state
                            .criteria
                            .selections
                            .entry(col.to_string())
                            .or_default();

                        for val in all_values {
                            let mut checked = selected.contains(val);
                            if ui.checkbox(&mut checked, val.to_string()).changed() {
                                if checked {
                                    selected.insert(val.clone());
                                } else {
                                    selected.remove(val);
                                }
                            }
                        }
                    });
            }
        });

    // Recompute the view after any checkbox changes.
    state.refilter();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(view)) = (&state.dataset, &state.view) {
            ui.label(format!(
                "{} records loaded, {} visible",
                ds.len(),
                view.visible.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Summary metrics row
// ---------------------------------------------------------------------------

/// The four headline metrics above the preview table.
pub fn summary_metrics(ui: &mut Ui, summary: &Summary) {
    let mean_age = summary
        .mean_age
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "N/A".to_string());
    let rate = summary
        .conversion_rate
        .map(|v| format!("{v:.1}%"))
        .unwrap_or_else(|| "N/A".to_string());
    let conversions = summary
        .conversions
        .map(|v| v.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    ui.horizontal(|ui: &mut Ui| {
        metric(ui, "Total Customers", &summary.total.to_string());
        metric(ui, "Average Age", &mean_age);
        metric(ui, "Conversion Rate", &rate);
        metric(ui, "Conversions", &conversions);
    });
}

fn metric(ui: &mut Ui, label: &str, value: &str) {
    ui.group(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label(RichText::new(label).weak().size(12.0));
            ui.label(RichText::new(value).strong().size(20.0));
        });
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open bank-marketing data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records with columns {:?}",
                    dataset.len(),
                    dataset.column_names
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
                state.loading = false;
            }
        }
    }
}
