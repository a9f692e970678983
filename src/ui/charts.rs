use eframe::egui::{self, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color;
use crate::data::summary::{CorrelationMatrix, Histogram};

// ---------------------------------------------------------------------------
// Age histogram
// ---------------------------------------------------------------------------

/// Render the age distribution as a bar chart; a placeholder when the
/// filtered view holds no ages.
pub fn age_histogram(ui: &mut Ui, histogram: Option<&Histogram>) {
    let Some(h) = histogram else {
        ui.label("No age data in the current selection.");
        return;
    };

    let bars: Vec<Bar> = h
        .bars
        .iter()
        .map(|&(center, count)| Bar::new(center, count as f64).width(h.bin_width))
        .collect();

    let chart = BarChart::new(bars)
        .name("Age Distribution")
        .color(color::sequential(0.35))
        .element_formatter(Box::new(|bar, _| {
            format!("Age: {:.0}\nCount: {}", bar.argument, bar.value)
        }));

    Plot::new("age_histogram")
        .legend(Legend::default())
        .x_axis_label("age")
        .y_axis_label("count")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .height(220.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

// ---------------------------------------------------------------------------
// Job frequency bar chart
// ---------------------------------------------------------------------------

/// Render the (job, count) table as a bar chart, bars shaded by count.
pub fn job_bar_chart(ui: &mut Ui, counts: &[(String, usize)]) {
    if counts.is_empty() {
        ui.label("No rows to count.");
        return;
    }

    let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1);

    let charts: Vec<BarChart> = counts
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            // One single-bar chart per category so each gets its own colour.
            let bar = Bar::new(i as f64, *count as f64).width(0.8).name(label);
            BarChart::new(vec![bar])
                .name(label)
                .color(color::sequential(*count as f64 / max_count as f64))
                .element_formatter(Box::new(|bar, _| {
                    format!("{}\nCount: {}", bar.name, bar.value)
                }))
        })
        .collect();

    let labels: Vec<String> = counts.iter().map(|(label, _)| label.clone()).collect();

    Plot::new("job_bar_chart")
        .y_axis_label("count")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 0.25 || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .height(220.0)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

const CELL_SIZE: f32 = 42.0;
const LABEL_WIDTH: f32 = 120.0;
const HEADER_HEIGHT: f32 = 90.0;

/// Paint the correlation matrix as a coloured grid, or the insufficient-data
/// message when there is nothing to correlate.
pub fn correlation_heatmap(ui: &mut Ui, matrix: Option<&CorrelationMatrix>) {
    let Some(matrix) = matrix else {
        ui.label("Not enough numeric data to compute correlation.");
        return;
    };

    let n = matrix.columns.len();

    egui::ScrollArea::horizontal()
        .id_salt("correlation_heatmap_scroll")
        .show(ui, |ui: &mut Ui| {
            let (rect, _response) = ui.allocate_exact_size(
                egui::vec2(
                    LABEL_WIDTH + n as f32 * CELL_SIZE + 20.0,
                    HEADER_HEIGHT + n as f32 * CELL_SIZE + 20.0,
                ),
                egui::Sense::hover(),
            );

            let painter = ui.painter();

            // Column labels along the top
            for (j, name) in matrix.columns.iter().enumerate() {
                let pos = rect.min
                    + egui::vec2(
                        LABEL_WIDTH + j as f32 * CELL_SIZE + CELL_SIZE / 2.0,
                        HEADER_HEIGHT - 8.0,
                    );
                painter.text(
                    pos,
                    egui::Align2::CENTER_BOTTOM,
                    name.chars().take(16).collect::<String>(),
                    egui::FontId::proportional(10.0),
                    ui.visuals().text_color(),
                );
            }

            for (i, row_name) in matrix.columns.iter().enumerate() {
                // Row label
                painter.text(
                    rect.min
                        + egui::vec2(
                            LABEL_WIDTH - 8.0,
                            HEADER_HEIGHT + i as f32 * CELL_SIZE + CELL_SIZE / 2.0,
                        ),
                    egui::Align2::RIGHT_CENTER,
                    row_name.chars().take(20).collect::<String>(),
                    egui::FontId::proportional(11.0),
                    ui.visuals().text_color(),
                );

                let Some(row) = matrix.data.get(i) else {
                    continue;
                };
                for (j, &val) in row.iter().enumerate() {
                    let cell_rect = egui::Rect::from_min_size(
                        rect.min
                            + egui::vec2(
                                LABEL_WIDTH + j as f32 * CELL_SIZE,
                                HEADER_HEIGHT + i as f32 * CELL_SIZE,
                            ),
                        egui::vec2(CELL_SIZE, CELL_SIZE),
                    );

                    painter.rect_filled(cell_rect.shrink(1.0), 3.0, color::diverging(val));

                    // NaN cells (zero-variance columns) stay blank.
                    if !val.is_nan() {
                        painter.text(
                            cell_rect.center(),
                            egui::Align2::CENTER_CENTER,
                            format!("{val:.2}"),
                            egui::FontId::proportional(11.0),
                            ui.visuals().strong_text_color(),
                        );
                    }
                }
            }
        });
}
