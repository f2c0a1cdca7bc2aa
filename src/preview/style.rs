//! Style derivation for the preview
//!
//! Every theme field maps to a presentation value here. Nothing in this
//! module fails: malformed colors become `Paint::Invalid` and paint nothing.

use crate::config::{Alignment, Device, Shadow, ThemeConfig};
use crate::constants::typography::{STRONG_WEIGHT, SYSTEM_FONT};

/// A color as drawn by the preview
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Unmultiplied RGBA
    Solid([u8; 4]),
    /// Text that did not parse as a color, kept as typed
    Invalid(String),
}

impl Paint {
    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
    pub fn parse(text: &str) -> Paint {
        match parse_css_hex(text) {
            Some(rgba) => Paint::Solid(rgba),
            None => Paint::Invalid(text.to_string()),
        }
    }

    pub fn rgba(&self) -> Option<[u8; 4]> {
        match self {
            Paint::Solid(rgba) => Some(*rgba),
            Paint::Invalid(_) => None,
        }
    }
}

fn parse_css_hex(text: &str) -> Option<[u8; 4]> {
    let digits = text.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let nibbles: Vec<u8> = digits
        .chars()
        .filter_map(|c| c.to_digit(16).map(|d| d as u8))
        .collect();

    match nibbles.len() {
        3 | 4 => {
            let mut rgba = [255u8; 4];
            for (slot, nibble) in rgba.iter_mut().zip(&nibbles) {
                *slot = nibble * 17;
            }
            Some(rgba)
        }
        6 | 8 => {
            let mut rgba = [255u8; 4];
            for (slot, pair) in rgba.iter_mut().zip(nibbles.chunks(2)) {
                *slot = pair[0] * 16 + pair[1];
            }
            Some(rgba)
        }
        _ => None,
    }
}

/// Main-axis placement of a row's content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Start,
    Center,
    End,
}

impl From<Alignment> for Justify {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Left => Justify::Start,
            Alignment::Center => Justify::Center,
            Alignment::Right => Justify::End,
        }
    }
}

/// Drop shadow below an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowStyle {
    pub offset_y: f32,
    pub blur: f32,
    /// Opacity of the black shadow color, 0..1
    pub alpha: f32,
}

impl ShadowStyle {
    pub fn for_preset(shadow: Shadow) -> Option<ShadowStyle> {
        match shadow {
            Shadow::None => None,
            Shadow::Small => Some(ShadowStyle { offset_y: 1.0, blur: 3.0, alpha: 0.08 }),
            Shadow::Medium => Some(ShadowStyle { offset_y: 6.0, blur: 18.0, alpha: 0.12 }),
            Shadow::Large => Some(ShadowStyle { offset_y: 14.0, blur: 40.0, alpha: 0.16 }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Paint,
}

impl Border {
    /// One-pixel line in the theme's stroke color
    pub fn hairline(config: &ThemeConfig) -> Border {
        Border {
            width: 1.0,
            color: Paint::parse(&config.stroke.color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontChoice {
    /// The platform's default proportional font
    System,
    Named(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: FontChoice,
    pub weight: u16,
    pub size: f32,
}

impl TextStyle {
    pub fn from_config(config: &ThemeConfig) -> TextStyle {
        let family = config.typography.family.trim();
        let font = if family.is_empty() || family == SYSTEM_FONT {
            FontChoice::System
        } else {
            FontChoice::Named(family.to_string())
        };
        TextStyle {
            font,
            weight: config.typography.weight,
            size: config.typography.size as f32,
        }
    }

    pub fn is_strong(&self) -> bool {
        self.weight >= STRONG_WEIGHT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub background: Paint,
    pub text: Paint,
    pub radius: f32,
    pub shadow: Option<ShadowStyle>,
}

impl ButtonStyle {
    pub fn from_config(config: &ThemeConfig) -> ButtonStyle {
        ButtonStyle {
            background: Paint::parse(&config.button.bg),
            text: Paint::parse(&config.button.text),
            radius: config.button.radius as f32,
            shadow: ShadowStyle::for_preset(config.button.shadow),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub background: Paint,
    pub radius: f32,
    pub padding: f32,
    pub border: Border,
}

impl CardStyle {
    pub fn from_config(config: &ThemeConfig) -> CardStyle {
        CardStyle {
            background: Paint::parse(&config.general.section_bg),
            radius: config.general.card_radius as f32,
            padding: config.general.container_padding as f32,
            border: Border {
                width: config.stroke.weight as f32,
                color: Paint::parse(&config.stroke.color),
            },
        }
    }
}

/// Outer box simulating the target device
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceFrame {
    pub max_width: f32,
    pub height: f32,
    pub radius: f32,
    pub padding: f32,
}

impl DeviceFrame {
    pub fn for_device(device: Device) -> DeviceFrame {
        match device {
            Device::Desktop => DeviceFrame { max_width: 1500.0, height: 720.0, radius: 14.0, padding: 20.0 },
            Device::Mobile => DeviceFrame { max_width: 360.0, height: 780.0, radius: 22.0, padding: 12.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_parses_hex_forms() {
        assert_eq!(Paint::parse("#ffffff"), Paint::Solid([255, 255, 255, 255]));
        assert_eq!(Paint::parse("#D86D53"), Paint::Solid([0xD8, 0x6D, 0x53, 255]));
        assert_eq!(Paint::parse("#f0a"), Paint::Solid([255, 0, 170, 255]));
        assert_eq!(Paint::parse("#00000080"), Paint::Solid([0, 0, 0, 0x80]));
    }

    #[test]
    fn test_paint_keeps_malformed_text() {
        assert_eq!(Paint::parse("#1"), Paint::Invalid("#1".to_string()));
        assert_eq!(Paint::parse(""), Paint::Invalid(String::new()));
        assert_eq!(Paint::parse("tomato").rgba(), None);
        assert_eq!(Paint::parse("#zzzzzz").rgba(), None);
    }

    #[test]
    fn test_shadow_presets() {
        assert_eq!(ShadowStyle::for_preset(Shadow::None), None);
        let small = ShadowStyle::for_preset(Shadow::Small).unwrap();
        let large = ShadowStyle::for_preset(Shadow::Large).unwrap();
        assert!(small.blur < large.blur);
        assert!(small.offset_y < large.offset_y);
    }

    #[test]
    fn test_system_font_maps_to_platform_default() {
        let mut config = ThemeConfig::default();
        assert_eq!(TextStyle::from_config(&config).font, FontChoice::Named("Inter".to_string()));
        config.typography.family = "system-ui".to_string();
        assert_eq!(TextStyle::from_config(&config).font, FontChoice::System);
    }

    #[test]
    fn test_strong_weight_threshold() {
        let mut config = ThemeConfig::default();
        config.typography.weight = 500;
        assert!(!TextStyle::from_config(&config).is_strong());
        config.typography.weight = 600;
        assert!(TextStyle::from_config(&config).is_strong());
    }

    #[test]
    fn test_card_style_follows_general_and_stroke() {
        let mut config = ThemeConfig::default();
        config.stroke.weight = 3.0;
        config.stroke.color = "#000".to_string();
        let card = CardStyle::from_config(&config);
        assert_eq!(card.radius, 12.0);
        assert_eq!(card.padding, 24.0);
        assert_eq!(card.border.width, 3.0);
        assert_eq!(card.border.color, Paint::Solid([0, 0, 0, 255]));
    }

    #[test]
    fn test_device_frames_differ() {
        let desktop = DeviceFrame::for_device(Device::Desktop);
        let mobile = DeviceFrame::for_device(Device::Mobile);
        assert!(desktop.max_width > mobile.max_width);
        assert_eq!(mobile.max_width, 360.0);
    }
}
