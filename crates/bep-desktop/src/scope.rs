//! Oscilloscope-style canvas: paper grid plus a stroked trace

use bep_core::{catalog, trace, Point};
use egui::{Color32, Painter, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};
use serde::{Deserialize, Serialize};

const PAPER_COLOR: Color32 = Color32::WHITE;
const GRID_COLOR: Color32 = Color32::RED;
const CURVE_COLOR: Color32 = Color32::BLACK;

/// Layout and stroke parameters for the scope canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeConfig {
    /// Canvas width in px; also the wraparound threshold for playback
    pub width: f32,
    /// Canvas height in px
    pub height: f32,
    /// Coarse grid cell size; the fine sub-grid uses a fifth of it
    pub cell: f32,
    pub grid_stroke_width: f32,
    pub curve_stroke_width: f32,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        ScopeConfig {
            width: catalog::X_SPAN,
            height: 140.0,
            cell: 30.0,
            grid_stroke_width: 0.2,
            curve_stroke_width: 1.2,
        }
    }
}

/// Grid line offsets across an extent: starting at 1 px, one per cell,
/// up to and including the extent
pub fn grid_offsets(extent: f32, cell: f32) -> Vec<f32> {
    let mut offsets = Vec::new();
    let mut pos = 1.0;
    while pos <= extent {
        offsets.push(pos);
        pos += cell;
    }
    offsets
}

fn paint_grid(painter: &Painter, rect: Rect, cell: f32, stroke: Stroke) {
    for x in grid_offsets(rect.width(), cell) {
        let x = rect.min.x + x;
        painter.line_segment(
            [Pos2::new(x, rect.min.y + 1.0), Pos2::new(x, rect.max.y)],
            stroke,
        );
    }
    for y in grid_offsets(rect.height(), cell) {
        let y = rect.min.y + y;
        painter.line_segment(
            [Pos2::new(rect.min.x + 1.0, y), Pos2::new(rect.max.x, y)],
            stroke,
        );
    }
}

fn paint_curve(painter: &Painter, rect: Rect, points: &[Point], scale: Vec2, stroke: Stroke) {
    // One polyline per forward run; single points have nothing to stroke
    for run in trace::forward_runs(points) {
        if run.len() < 2 {
            continue;
        }
        let line: Vec<Pos2> = run
            .iter()
            .map(|p| Pos2::new(rect.min.x + p.x * scale.x, rect.min.y + p.y * scale.y))
            .collect();
        painter.add(egui::Shape::line(line, stroke));
    }
}

/// Paint grid and trace into an already-allocated rect, scaled to fit.
/// Used for the front-screen tile previews and the detail-screen portrait.
pub fn paint_fitted(painter: &Painter, rect: Rect, points: &[Point], config: &ScopeConfig) {
    let scale = Vec2::new(rect.width() / config.width, rect.height() / config.height);
    painter.rect_filled(rect, Rounding::same(4.0), PAPER_COLOR);
    // Only the coarse grid; the fine sub-grid is illegible at tile scale
    paint_grid(
        painter,
        rect,
        config.cell * scale.x,
        Stroke::new(config.grid_stroke_width, GRID_COLOR),
    );
    paint_curve(
        painter,
        rect,
        points,
        scale,
        Stroke::new(config.curve_stroke_width, CURVE_COLOR),
    );
}

/// Allocate a full-size canvas and paint the given trace at 1:1.
/// The caller decides what the trace is: the live drawn buffer for the
/// animated scope, or a whole catalog sequence for a static portrait.
pub fn show(ui: &mut Ui, config: &ScopeConfig, points: &[Point]) -> egui::Response {
    let (response, painter) =
        ui.allocate_painter(Vec2::new(config.width, config.height), Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, Rounding::ZERO, PAPER_COLOR);

    // Coarse paper grid, then the fine sub-grid at a fifth of the cell
    let grid_stroke = Stroke::new(config.grid_stroke_width, GRID_COLOR);
    paint_grid(&painter, rect, config.cell, grid_stroke);
    paint_grid(&painter, rect, config.cell / 5.0, grid_stroke);

    paint_curve(
        &painter,
        rect,
        points,
        Vec2::splat(1.0),
        Stroke::new(config.curve_stroke_width, CURVE_COLOR),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_offsets_span_the_extent() {
        let offsets = grid_offsets(380.0, 30.0);
        assert_eq!(offsets.first(), Some(&1.0));
        assert_eq!(offsets.len(), 13); // 1, 31, ..., 361
        for pair in offsets.windows(2) {
            assert_eq!(pair[1] - pair[0], 30.0);
        }
        assert!(offsets.iter().all(|&pos| pos <= 380.0));
    }

    #[test]
    fn test_fine_grid_is_denser() {
        let config = ScopeConfig::default();
        let coarse = grid_offsets(config.width, config.cell);
        let fine = grid_offsets(config.width, config.cell / 5.0);
        assert!(fine.len() > coarse.len() * 4);
    }

    #[test]
    fn test_default_config_matches_canvas() {
        let config = ScopeConfig::default();
        assert_eq!(config.width, 380.0);
        assert_eq!(config.height, 140.0);
        assert_eq!(config.cell, 30.0);
    }
}
