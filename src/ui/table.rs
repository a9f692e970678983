use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::{CellValue, Dataset};
use crate::data::view::PREVIEW_ROWS;

// ---------------------------------------------------------------------------
// Data preview – first rows of the filtered view
// ---------------------------------------------------------------------------

/// Render the first [`PREVIEW_ROWS`] visible rows as a table.
pub fn preview_table(ui: &mut Ui, dataset: &Dataset, visible: &[usize]) {
    if visible.is_empty() {
        ui.label("No rows match the current filters.");
        return;
    }

    let preview = &visible[..visible.len().min(PREVIEW_ROWS)];

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true), dataset.column_names.len())
        .header(20.0, |mut header| {
            for col in &dataset.column_names {
                header.col(|ui| {
                    ui.strong(col.as_str());
                });
            }
        })
        .body(|mut body| {
            for &idx in preview {
                let row_data = &dataset.rows[idx];
                body.row(18.0, |mut row| {
                    for col in &dataset.column_names {
                        let text = match row_data.get(col) {
                            Some(CellValue::Null) | None => String::new(),
                            Some(v) => v.to_string(),
                        };
                        row.col(|ui| {
                            ui.label(text);
                        });
                    }
                });
            }
        });
}
