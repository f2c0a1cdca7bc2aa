//! Application-wide constants
//!
//! This module contains the magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Durable storage constants
pub mod storage {
    /// Application directory under the platform config dir
    pub const APP_DIR: &str = "theme-studio";

    /// Key of the slot holding the serialized theme (versioned)
    pub const THEME_KEY: &str = "ui-editor-config-v1";

    /// Extension used for each key-value slot on disk
    pub const SLOT_EXTENSION: &str = "json";
}

/// Export/import constants
pub mod transfer {
    /// Suggested filename for exported themes
    pub const EXPORT_FILENAME: &str = "ui-config.json";

    /// The one field an imported document must carry
    pub const REQUIRED_FIELD: &str = "typography";
}

/// Typography option sets
pub mod typography {
    /// Font families offered in the editor
    pub const FONT_OPTIONS: &[&str] = &["Inter", "Roboto", "Poppins", "system-ui"];

    /// Font weights offered in the editor
    pub const FONT_WEIGHTS: &[u16] = &[300, 400, 500, 600, 700];

    /// Sentinel family meaning "platform default font", never loaded
    pub const SYSTEM_FONT: &str = "system-ui";

    /// Weights at or above this render as strong text
    pub const STRONG_WEIGHT: u16 = 600;
}

/// Gallery constants
pub mod gallery {
    /// Maximum number of images kept from one upload
    pub const MAX_IMAGES: usize = 8;

    /// Number of placeholder images generated when nothing is uploaded
    pub const PLACEHOLDER_COUNT: usize = 5;

    /// Image file extensions accepted by the upload dialog
    pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];
}

/// Inclusive bounds of every numeric theme field
pub mod bounds {
    use crate::config::Bounds;

    pub const FONT_SIZE: Bounds = Bounds::new(10.0, 60.0);
    pub const BUTTON_RADIUS: Bounds = Bounds::new(0.0, 40.0);
    pub const GALLERY_SPACING: Bounds = Bounds::new(0.0, 40.0);
    pub const GALLERY_RADIUS: Bounds = Bounds::new(0.0, 40.0);
    pub const CARD_RADIUS: Bounds = Bounds::new(0.0, 48.0);
    pub const CONTAINER_PADDING: Bounds = Bounds::new(0.0, 80.0);
    pub const STROKE_WEIGHT: Bounds = Bounds::new(0.0, 8.0);
}

/// Fixed content of the mock product card
pub mod product {
    pub const TITLE: &str = "Cozy Lounge Chair";
    pub const SUBTITLE: &str = "Customize your chair";
    pub const PRICE: &str = "$200";
    pub const ACTION_LABEL: &str = "Add to cart";
    pub const MATERIAL_LABEL: &str = "Material";
    pub const MEDIA_LABEL: &str = "Image / Media";

    /// Material swatch colors shown in layout A
    pub const SWATCHES: &[&str] = &["#7B3F00", "#B85C50", "#5B6D5B", "#2D8A6A", "#8B5E83"];

    /// Color of body text on the card
    pub const TEXT_COLOR: &str = "#111827";

    /// Color of secondary text (subtitle, price label)
    pub const MUTED_COLOR: &str = "#6b7280";
}
