//! Theme configuration model
//!
//! A fixed tree describing layout, typography, button, gallery, general and
//! stroke styling. Every field is always present; documents missing a field
//! pick up the default value for it when decoded.

use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;
use tracing::warn;

use crate::constants::{bounds, gallery};

/// Inclusive range of a bounded numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp into range, then round to 2 decimal places
    pub fn apply(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        (clamped * 100.0).round() / 100.0
    }
}

/// Device the preview is framed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Desktop,
    Mobile,
}

impl Device {
    pub const ALL: [Device; 2] = [Device::Desktop, Device::Mobile];

    pub fn label(self) -> &'static str {
        match self {
            Device::Desktop => "Desktop",
            Device::Mobile => "Mobile",
        }
    }
}

/// Which of the two product card layouts is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Variant {
    #[default]
    LayoutA,
    LayoutB,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::LayoutA, Variant::LayoutB];

    pub fn label(self) -> &'static str {
        match self {
            Variant::LayoutA => "Layout A",
            Variant::LayoutB => "Layout B",
        }
    }
}

/// Button shadow preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shadow {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

impl Shadow {
    pub const ALL: [Shadow; 4] = [Shadow::None, Shadow::Small, Shadow::Medium, Shadow::Large];

    pub fn label(self) -> &'static str {
        match self {
            Shadow::None => "none",
            Shadow::Small => "small",
            Shadow::Medium => "medium",
            Shadow::Large => "large",
        }
    }
}

/// Horizontal alignment shared by the button and the gallery strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

    pub fn label(self) -> &'static str {
        match self {
            Alignment::Left => "Left",
            Alignment::Center => "Center",
            Alignment::Right => "Right",
        }
    }
}

/// Whole numbers are written as JSON integers so exported files read `16`, not `16.0`
fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub family: String,
    pub weight: u16,
    #[serde(serialize_with = "serialize_number")]
    pub size: f64,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            family: "Inter".to_string(),
            weight: 500,
            size: 16.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonSettings {
    #[serde(serialize_with = "serialize_number")]
    pub radius: f64,
    pub shadow: Shadow,
    pub align: Alignment,
    pub bg: String,
    pub text: String,
}

impl Default for ButtonSettings {
    fn default() -> Self {
        Self {
            radius: 8.0,
            shadow: Shadow::Medium,
            align: Alignment::Right,
            bg: "#D86D53".to_string(),
            text: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GallerySettings {
    pub alignment: Alignment,
    #[serde(serialize_with = "serialize_number")]
    pub spacing: f64,
    #[serde(serialize_with = "serialize_number")]
    pub border_radius: f64,
    /// Image references for this session; shared so clones stay cheap and
    /// the preview can memoize on identity
    pub images: Arc<[String]>,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            alignment: Alignment::Left,
            spacing: 8.0,
            border_radius: 6.0,
            images: Arc::from(Vec::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneralSettings {
    #[serde(serialize_with = "serialize_number")]
    pub card_radius: f64,
    #[serde(serialize_with = "serialize_number")]
    pub container_padding: f64,
    pub section_bg: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            card_radius: 12.0,
            container_padding: 24.0,
            section_bg: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeSettings {
    pub color: String,
    #[serde(serialize_with = "serialize_number")]
    pub weight: f64,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self {
            color: "#e6e6e6".to_string(),
            weight: 1.0,
        }
    }
}

/// The complete theme tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub layout: Device,
    pub variant: Variant,
    pub typography: Typography,
    pub button: ButtonSettings,
    pub gallery: GallerySettings,
    pub general: GeneralSettings,
    pub stroke: StrokeSettings,
}

impl ThemeConfig {
    /// Bring every bounded field back into range and cap the gallery.
    /// Applied to documents that did not come through the editor controls.
    pub fn sanitized(mut self) -> Self {
        self.typography.size = bounds::FONT_SIZE.apply(self.typography.size);
        self.button.radius = bounds::BUTTON_RADIUS.apply(self.button.radius);
        self.gallery.spacing = bounds::GALLERY_SPACING.apply(self.gallery.spacing);
        self.gallery.border_radius = bounds::GALLERY_RADIUS.apply(self.gallery.border_radius);
        self.general.card_radius = bounds::CARD_RADIUS.apply(self.general.card_radius);
        self.general.container_padding =
            bounds::CONTAINER_PADDING.apply(self.general.container_padding);
        self.stroke.weight = bounds::STROKE_WEIGHT.apply(self.stroke.weight);

        if self.gallery.images.len() > gallery::MAX_IMAGES {
            warn!(
                count = self.gallery.images.len(),
                max = gallery::MAX_IMAGES,
                "Gallery holds too many images, truncating"
            );
            self.gallery.images = Arc::from(&self.gallery.images[..gallery::MAX_IMAGES]);
        }

        self
    }
}
