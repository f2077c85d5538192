//! Boundary line collection (`table.hline` / `table.vline`)

use std::collections::BTreeMap;

use super::format::format_points;
use crate::core::model::{StrokeValue, TableModel};

/// A line drawn along one boundary
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryLine {
    /// Boundary index: 0 is before the first row/column, `n` after the last
    pub index: usize,
    /// Stroke width in pt
    pub stroke: f64,
}

impl BoundaryLine {
    pub fn to_hline(&self) -> String {
        format!("table.hline(y: {}, stroke: {})", self.index, format_points(self.stroke))
    }

    pub fn to_vline(&self) -> String {
        format!("table.vline(x: {}, stroke: {})", self.index, format_points(self.stroke))
    }
}

/// Horizontal and vertical lines, each sorted by boundary index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeCommands {
    pub hlines: Vec<BoundaryLine>,
    pub vlines: Vec<BoundaryLine>,
}

/// Flatten per-row and per-column strokes into boundary lines
///
/// Row `r`'s top maps to boundary `r` and its bottom to `r + 1` (columns
/// likewise with left/right). When two entries hit the same boundary the one
/// considered later wins. `"none"` draws nothing.
pub fn collect_stroke_commands(model: &TableModel) -> StrokeCommands {
    let mut horizontal = BTreeMap::new();
    for (row, stroke) in model.row_strokes().unwrap_or_default().iter().enumerate() {
        set_boundary(&mut horizontal, row, stroke.top);
        set_boundary(&mut horizontal, row + 1, stroke.bottom);
    }

    let mut vertical = BTreeMap::new();
    for (column, stroke) in model.column_strokes().unwrap_or_default().iter().enumerate() {
        set_boundary(&mut vertical, column, stroke.left);
        set_boundary(&mut vertical, column + 1, stroke.right);
    }

    StrokeCommands {
        hlines: into_lines(horizontal),
        vlines: into_lines(vertical),
    }
}

fn set_boundary(lines: &mut BTreeMap<usize, f64>, index: usize, value: Option<StrokeValue>) {
    if let Some(pt) = value.and_then(|v| v.points()).filter(|pt| *pt > 0.0) {
        if let Some(previous) = lines.insert(index, pt) {
            log::trace!("boundary {index}: stroke {pt} replaces {previous}");
        }
    }
}

fn into_lines(lines: BTreeMap<usize, f64>) -> Vec<BoundaryLine> {
    lines
        .into_iter()
        .map(|(index, stroke)| BoundaryLine { index, stroke })
        .collect()
}
