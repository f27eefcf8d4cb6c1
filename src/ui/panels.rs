use eframe::egui::{self, RichText, ScrollArea, Ui, ViewportCommand};

use crate::state::ChartState;

// ---------------------------------------------------------------------------
// Left side panel – body toggles
// ---------------------------------------------------------------------------

/// Render one coloured checkbox per body.
pub fn side_panel(ui: &mut Ui, state: &mut ChartState) {
    ui.heading("Bodies");
    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    let mut toggled = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (i, line) in state.chart.lines.iter().enumerate() {
                let mut checked = state.visible[i];
                let label = format!("{}  ({} steps)", line.name, line.points.len());
                let text = RichText::new(label).color(line.color);
                if ui.checkbox(&mut checked, text).changed() {
                    toggled = Some(i);
                }
            }
        });

    if let Some(i) = toggled {
        state.toggle(i);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the chart title, counts and a close button.
pub fn top_bar(ui: &mut Ui, state: &ChartState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong(&state.chart.title);
        ui.separator();
        ui.label(format!(
            "{} of {} bodies shown, {} points",
            state.visible_count(),
            state.chart.lines.len(),
            state.chart.point_count()
        ));
        ui.separator();
        if ui.button("Close").clicked() {
            ui.ctx().send_viewport_cmd(ViewportCommand::Close);
        }
    });
}
