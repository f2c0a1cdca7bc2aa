//! UI components for the editor window

pub mod controls;
pub mod editor_panel;
pub mod preview_pane;
