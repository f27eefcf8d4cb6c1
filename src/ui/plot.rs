use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::ChartState;

// ---------------------------------------------------------------------------
// Series plot (central panel)
// ---------------------------------------------------------------------------

/// Render the visible lines of the chart against step index.
pub fn chart_plot(ui: &mut Ui, state: &ChartState) {
    let chart = &state.chart;
    if chart.lines.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No bodies configured");
        });
        return;
    }

    Plot::new("planet_plot")
        .legend(Legend::default())
        .x_axis_label(&chart.x_label)
        .y_axis_label(&chart.y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for line in state.visible_lines() {
                let points: PlotPoints = line.points.iter().copied().collect();
                plot_ui.line(
                    Line::new(points)
                        .name(&line.name)
                        .color(line.color)
                        .width(1.5),
                );
            }
        });
}
