//! GUI-specific constants for layout, colors and widget sizes

use egui;

/// Main window dimensions
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 860.0;
pub const WINDOW_MIN_WIDTH: f32 = 900.0;
pub const WINDOW_MIN_HEIGHT: f32 = 600.0;

/// Editor side panel
pub const EDITOR_WIDTH: f32 = 380.0;

/// Layout spacing
pub const PADDING: f32 = 12.0;
pub const SECTION_SPACING: f32 = 14.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Input widths
pub const NUMBER_INPUT_WIDTH: f32 = 84.0;
pub const HEX_INPUT_WIDTH: f32 = 96.0;
pub const SELECT_WIDTH: f32 = 150.0;

/// Backdrop behind the preview
pub const CANVAS_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xf3, 0xf4, 0xf6);

/// Preview filler colors that are not part of the theme
pub const IMAGE_WELL: egui::Color32 = egui::Color32::from_rgb(0xfb, 0xfb, 0xfb);
pub const MEDIA_TILE: egui::Color32 = egui::Color32::from_rgb(0xf3, 0xf4, 0xf6);
pub const MEDIA_BLOCK: egui::Color32 = egui::Color32::from_rgb(0xf8, 0xfa, 0xfc);
pub const MEDIA_LABEL: egui::Color32 = egui::Color32::from_rgb(0x9c, 0xa3, 0xaf);

/// Status colors
pub const STATUS_OK: egui::Color32 = egui::Color32::from_rgb(0, 160, 0);
pub const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);
pub const TIP_COLOR: egui::Color32 = egui::Color32::from_rgb(0x6b, 0x72, 0x80);
