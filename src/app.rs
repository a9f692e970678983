use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BankDashApp {
    pub state: AppState,
}

impl Default for BankDashApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for BankDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, preview, charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let (Some(dataset), Some(view)) = (&self.state.dataset, &self.state.view) else {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("Open a bank-marketing CSV to begin  (File → Open…)");
                });
                return;
            };

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut egui::Ui| {
                    panels::summary_metrics(ui, &view.summary);
                    ui.separator();

                    ui.heading("Filtered Data (first 10 rows)");
                    table::preview_table(ui, dataset, &view.visible);
                    ui.separator();

                    ui.heading("Age Distribution");
                    charts::age_histogram(ui, view.age_histogram.as_ref());
                    ui.separator();

                    ui.heading("Job Frequency");
                    charts::job_bar_chart(ui, &view.job_counts);
                    ui.separator();

                    ui.heading("Correlation Heatmap (Numeric Columns)");
                    charts::correlation_heatmap(ui, view.correlation.as_ref());
                });
        });
    }
}
