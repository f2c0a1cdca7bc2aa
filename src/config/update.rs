//! Typed single-field edits of a ThemeConfig
//!
//! Each editor control produces one `ThemeUpdate`. Applying it yields a new
//! configuration; the one it was applied to is left untouched.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use super::theme::{Alignment, Bounds, Device, Shadow, ThemeConfig, Variant};
use crate::constants::{bounds, gallery};

/// Every bounded numeric field of the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    FontSize,
    ButtonRadius,
    GallerySpacing,
    GalleryRadius,
    CardRadius,
    ContainerPadding,
    StrokeWeight,
}

impl NumericField {
    pub fn bounds(self) -> Bounds {
        match self {
            NumericField::FontSize => bounds::FONT_SIZE,
            NumericField::ButtonRadius => bounds::BUTTON_RADIUS,
            NumericField::GallerySpacing => bounds::GALLERY_SPACING,
            NumericField::GalleryRadius => bounds::GALLERY_RADIUS,
            NumericField::CardRadius => bounds::CARD_RADIUS,
            NumericField::ContainerPadding => bounds::CONTAINER_PADDING,
            NumericField::StrokeWeight => bounds::STROKE_WEIGHT,
        }
    }

    pub fn get(self, config: &ThemeConfig) -> f64 {
        match self {
            NumericField::FontSize => config.typography.size,
            NumericField::ButtonRadius => config.button.radius,
            NumericField::GallerySpacing => config.gallery.spacing,
            NumericField::GalleryRadius => config.gallery.border_radius,
            NumericField::CardRadius => config.general.card_radius,
            NumericField::ContainerPadding => config.general.container_padding,
            NumericField::StrokeWeight => config.stroke.weight,
        }
    }

    fn slot(self, config: &mut ThemeConfig) -> &mut f64 {
        match self {
            NumericField::FontSize => &mut config.typography.size,
            NumericField::ButtonRadius => &mut config.button.radius,
            NumericField::GallerySpacing => &mut config.gallery.spacing,
            NumericField::GalleryRadius => &mut config.gallery.border_radius,
            NumericField::CardRadius => &mut config.general.card_radius,
            NumericField::ContainerPadding => &mut config.general.container_padding,
            NumericField::StrokeWeight => &mut config.stroke.weight,
        }
    }
}

/// Every free-form color field of the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorField {
    ButtonBackground,
    ButtonText,
    SectionBackground,
    Stroke,
}

impl ColorField {
    pub fn get(self, config: &ThemeConfig) -> &str {
        match self {
            ColorField::ButtonBackground => &config.button.bg,
            ColorField::ButtonText => &config.button.text,
            ColorField::SectionBackground => &config.general.section_bg,
            ColorField::Stroke => &config.stroke.color,
        }
    }

    fn slot(self, config: &mut ThemeConfig) -> &mut String {
        match self {
            ColorField::ButtonBackground => &mut config.button.bg,
            ColorField::ButtonText => &mut config.button.text,
            ColorField::SectionBackground => &mut config.general.section_bg,
            ColorField::Stroke => &mut config.stroke.color,
        }
    }
}

/// A single-field edit of the theme
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeUpdate {
    Device(Device),
    Variant(Variant),
    FontFamily(String),
    FontWeight(u16),
    /// Value is clamped to the field's bounds when applied
    Numeric(NumericField, f64),
    Color(ColorField, String),
    ButtonShadow(Shadow),
    ButtonAlign(Alignment),
    GalleryAlignment(Alignment),
    /// Replaces the whole image list; anything past the gallery limit is dropped
    GalleryImages(Vec<String>),
    ClearGallery,
}

impl ThemeUpdate {
    /// Build the update for a batch of user-selected image files
    pub fn upload_images(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let references = paths
            .into_iter()
            .take(gallery::MAX_IMAGES)
            .map(|path| format!("file://{}", path.display()))
            .collect();
        ThemeUpdate::GalleryImages(references)
    }
}

impl ThemeConfig {
    /// Return a new configuration with `update` applied
    pub fn apply(&self, update: ThemeUpdate) -> ThemeConfig {
        debug!(update = ?update, "Applying theme update");
        let mut next = self.clone();

        match update {
            ThemeUpdate::Device(device) => next.layout = device,
            ThemeUpdate::Variant(variant) => next.variant = variant,
            ThemeUpdate::FontFamily(family) => next.typography.family = family,
            ThemeUpdate::FontWeight(weight) => next.typography.weight = weight,
            ThemeUpdate::Numeric(field, value) => {
                if value.is_nan() {
                    return next;
                }
                *field.slot(&mut next) = field.bounds().apply(value);
            }
            ThemeUpdate::Color(field, value) => *field.slot(&mut next) = value,
            ThemeUpdate::ButtonShadow(shadow) => next.button.shadow = shadow,
            ThemeUpdate::ButtonAlign(align) => next.button.align = align,
            ThemeUpdate::GalleryAlignment(align) => next.gallery.alignment = align,
            ThemeUpdate::GalleryImages(mut images) => {
                images.truncate(gallery::MAX_IMAGES);
                next.gallery.images = Arc::from(images);
            }
            ThemeUpdate::ClearGallery => next.gallery.images = Arc::from(Vec::new()),
        }

        next
    }
}

/// Interpret free-text numeric input for a bounded field.
///
/// Empty input snaps to the minimum, anything that is not a number is
/// rejected with `None`, everything else is clamped and rounded.
pub fn parse_numeric_input(raw: &str, bounds: Bounds) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(bounds.min);
    }

    let value: f64 = trimmed.parse().ok()?;
    if value.is_nan() {
        return None;
    }
    Some(bounds.apply(value))
}

/// Whether text typed into a hex color box may be stored.
///
/// Accepts any prefix of a hex color (`#`, `#1`, `#12ab`) so the user can
/// type progressively; completeness is not checked.
pub fn accepts_hex_input(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    match text.strip_prefix('#') {
        Some(digits) => digits.len() <= 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Format a color the way a native color picker reports it (`#rrggbb`)
pub fn format_hex_color(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}
