use crate::chart::{Chart, ChartLine};

// ---------------------------------------------------------------------------
// Window state
// ---------------------------------------------------------------------------

/// The state of one chart window, independent of rendering.
pub struct ChartState {
    pub chart: Chart,

    /// One flag per line of `chart`: whether it is drawn.
    pub visible: Vec<bool>,
}

impl ChartState {
    /// All lines start visible.
    pub fn new(chart: Chart) -> Self {
        let visible = vec![true; chart.lines.len()];
        Self { chart, visible }
    }

    /// Lines currently drawn, in legend order.
    pub fn visible_lines(&self) -> impl Iterator<Item = &ChartLine> {
        self.chart
            .lines
            .iter()
            .zip(&self.visible)
            .filter(|(_, shown)| **shown)
            .map(|(line, _)| line)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Toggle a single line.
    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.visible.get_mut(index) {
            *flag = !*flag;
        }
    }

    pub fn select_all(&mut self) {
        self.visible.fill(true);
    }

    pub fn select_none(&mut self) {
        self.visible.fill(false);
    }
}
