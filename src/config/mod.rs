//! Theme configuration for Theme Studio
//!
//! This module provides the configuration model and its update rules:
//! - **theme**: ThemeConfig, the nested style tree edited by the panel and drawn by the preview
//! - **update**: ThemeUpdate, the typed single-field edits applied to a ThemeConfig

pub mod theme;
pub mod update;

// Re-export commonly used types
pub use theme::{Alignment, Bounds, Device, Shadow, ThemeConfig, Variant};
pub use update::{ColorField, NumericField, ThemeUpdate};
