use eframe::egui;

use crate::chart::Chart;
use crate::state::ChartState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChartApp {
    pub state: ChartState,
}

impl ChartApp {
    pub fn new(chart: Chart) -> Self {
        Self {
            state: ChartState::new(chart),
        }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: body toggles ----
        egui::SidePanel::left("body_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_plot(ui, &self.state);
        });
    }
}

/// Open a window for `chart` and block until it is closed.
pub fn show_chart(chart: Chart) -> anyhow::Result<()> {
    let title = chart.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartApp::new(chart)))),
    )
    .map_err(|e| anyhow::anyhow!("chart window '{title}' failed: {e}"))
}
