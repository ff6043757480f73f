//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 228, 212);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 50, 40);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(200, 60, 60);
pub const O_MARK: Color32 = Color32::from_rgb(50, 100, 190);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 180, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

// Panel colors - dark modern theme
pub const PANEL_HEADER: Color32 = Color32::from_rgb(42, 44, 48);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_WIN: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Node chart series
pub const CHART_PRUNED: Color32 = Color32::from_rgb(80, 200, 120);
pub const CHART_UNPRUNED: Color32 = Color32::from_rgb(255, 110, 90);
pub const CHART_AXIS: Color32 = Color32::from_rgb(100, 104, 112);

// Sizes
pub const BOARD_MARGIN: f32 = 20.0;
pub const MARK_RATIO: f32 = 0.32;
pub const MARK_WIDTH_RATIO: f32 = 0.08;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const CHART_HEIGHT: f32 = 140.0;
