//! Preview renderer - derives the mock product card from a theme
//!
//! `render` is a pure function of the theme and the resolved image list.
//! The GUI paints the resulting tree; nothing here touches egui.

pub mod style;

use std::sync::Arc;
use tracing::trace;

use crate::config::{ThemeConfig, Variant};
use crate::constants::{gallery, product};

pub use style::{Border, ButtonStyle, CardStyle, DeviceFrame, FontChoice, Justify, Paint, ShadowStyle, TextStyle};

/// Width of a fixed-size column, or the room left beside its siblings
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    Fixed(f32),
    Fill { min: f32, reserve: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Card {
        style: CardStyle,
        children: Vec<Node>,
    },
    Row {
        gap: f32,
        justify: Justify,
        wrap: bool,
        children: Vec<Node>,
    },
    Column {
        gap: f32,
        width: ColumnWidth,
        children: Vec<Node>,
    },
    Image {
        source: String,
        /// `None` stretches to the available width
        width: Option<f32>,
        height: f32,
        radius: f32,
        border: Option<Border>,
    },
    Heading {
        text: String,
        style: TextStyle,
    },
    Text {
        text: String,
        color: Paint,
        size: Option<f32>,
        strong: bool,
    },
    Swatches {
        label: String,
        colors: Vec<Paint>,
        border: Border,
    },
    Button {
        label: String,
        style: ButtonStyle,
        justify: Justify,
    },
    MediaPlaceholder {
        label: String,
        border: Border,
    },
}

/// Complete visual output for one theme
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewTree {
    pub frame: DeviceFrame,
    pub root: Node,
}

/// Deterministic placeholder images, seeded by position
pub fn placeholder_images() -> Vec<String> {
    (1..=gallery::PLACEHOLDER_COUNT)
        .map(|seed| format!("https://picsum.photos/seed/{seed}/600/400"))
        .collect()
}

/// Resolves the gallery to image sources, memoized on the identity of the
/// theme's image list so unrelated edits reuse the previous result
#[derive(Default)]
pub struct ImageResolver {
    key: Option<Arc<[String]>>,
    resolved: Option<Arc<[String]>>,
}

impl ImageResolver {
    pub fn resolve(&mut self, images: &Arc<[String]>) -> Arc<[String]> {
        if let (Some(key), Some(resolved)) = (&self.key, &self.resolved) {
            if Arc::ptr_eq(key, images) {
                return Arc::clone(resolved);
            }
        }

        trace!(uploaded = images.len(), "Resolving gallery images");
        let resolved: Arc<[String]> = if images.is_empty() {
            Arc::from(placeholder_images())
        } else {
            Arc::clone(images)
        };

        self.key = Some(Arc::clone(images));
        self.resolved = Some(Arc::clone(&resolved));
        resolved
    }
}

pub fn render(config: &ThemeConfig, images: &[String]) -> PreviewTree {
    let root = match config.variant {
        Variant::LayoutA => layout_a(config, images),
        Variant::LayoutB => layout_b(config, images),
    };
    PreviewTree {
        frame: DeviceFrame::for_device(config.layout),
        root,
    }
}

fn title_block(config: &ThemeConfig) -> Vec<Node> {
    vec![
        Node::Heading {
            text: product::TITLE.to_string(),
            style: TextStyle::from_config(config),
        },
        Node::Text {
            text: product::SUBTITLE.to_string(),
            color: Paint::parse(product::MUTED_COLOR),
            size: None,
            strong: false,
        },
    ]
}

fn action_button(config: &ThemeConfig) -> Node {
    Node::Button {
        label: product::ACTION_LABEL.to_string(),
        style: ButtonStyle::from_config(config),
        justify: config.button.align.into(),
    }
}

/// One card: large image with a thumbnail strip, details beside it
fn layout_a(config: &ThemeConfig, images: &[String]) -> Node {
    let radius = config.gallery.border_radius as f32;

    let mut media = Vec::new();
    if let Some(primary) = images.first() {
        media.push(Node::Image {
            source: primary.clone(),
            width: None,
            height: 320.0,
            radius,
            border: None,
        });
    }
    media.push(Node::Row {
        gap: config.gallery.spacing as f32,
        justify: config.gallery.alignment.into(),
        wrap: false,
        children: images
            .iter()
            .skip(1)
            .map(|source| Node::Image {
                source: source.clone(),
                width: Some(64.0),
                height: 64.0,
                radius,
                border: Some(Border::hairline(config)),
            })
            .collect(),
    });

    let mut details = title_block(config);
    details.push(Node::Swatches {
        label: product::MATERIAL_LABEL.to_string(),
        colors: product::SWATCHES.iter().map(|c| Paint::parse(c)).collect(),
        border: Border::hairline(config),
    });
    details.push(action_button(config));
    details.push(Node::Row {
        gap: 6.0,
        justify: Justify::Start,
        wrap: false,
        children: vec![
            Node::Text {
                text: "Price:".to_string(),
                color: Paint::parse(product::MUTED_COLOR),
                size: Some(14.0),
                strong: false,
            },
            Node::Text {
                text: product::PRICE.to_string(),
                color: Paint::parse(product::TEXT_COLOR),
                size: Some(14.0),
                strong: true,
            },
        ],
    });

    Node::Card {
        style: CardStyle::from_config(config),
        children: vec![Node::Row {
            gap: 16.0,
            justify: Justify::Start,
            wrap: true,
            children: vec![
                Node::Column {
                    gap: 12.0,
                    width: ColumnWidth::Fill { min: 280.0, reserve: 356.0 },
                    children: media,
                },
                Node::Column {
                    gap: 12.0,
                    width: ColumnWidth::Fixed(340.0),
                    children: details,
                },
            ],
        }],
    }
}

/// A vertical stack of gallery images beside the details card
fn layout_b(config: &ThemeConfig, images: &[String]) -> Node {
    let radius = config.gallery.border_radius as f32;
    let stack = images
        .iter()
        .map(|source| Node::Image {
            source: source.clone(),
            width: None,
            height: 120.0,
            radius,
            border: None,
        })
        .collect();

    let mut card = title_block(config);
    card.push(Node::MediaPlaceholder {
        label: product::MEDIA_LABEL.to_string(),
        border: Border::hairline(config),
    });
    card.push(action_button(config));

    Node::Row {
        gap: 20.0,
        justify: Justify::Start,
        wrap: true,
        children: vec![
            Node::Column {
                gap: 8.0,
                width: ColumnWidth::Fixed(240.0),
                children: stack,
            },
            Node::Column {
                gap: 0.0,
                width: ColumnWidth::Fill { min: 320.0, reserve: 260.0 },
                children: vec![Node::Card {
                    style: CardStyle::from_config(config),
                    children: card,
                }],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Alignment, ColorField, Device, ThemeUpdate};

    fn collect_images<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
        match node {
            Node::Image { .. } => out.push(node),
            Node::Card { children, .. } | Node::Row { children, .. } | Node::Column { children, .. } => {
                for child in children {
                    collect_images(child, out);
                }
            }
            _ => {}
        }
    }

    fn image_sources(tree: &PreviewTree) -> Vec<String> {
        let mut nodes = Vec::new();
        collect_images(&tree.root, &mut nodes);
        nodes
            .into_iter()
            .filter_map(|node| match node {
                Node::Image { source, .. } => Some(source.clone()),
                _ => None,
            })
            .collect()
    }

    fn find_button(node: &Node) -> Option<&Node> {
        match node {
            Node::Button { .. } => Some(node),
            Node::Card { children, .. } | Node::Row { children, .. } | Node::Column { children, .. } => {
                children.iter().find_map(find_button)
            }
            _ => None,
        }
    }

    #[test]
    fn test_placeholders_are_deterministic() {
        let first = placeholder_images();
        let second = placeholder_images();
        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
        assert_eq!(first[0], "https://picsum.photos/seed/1/600/400");
        assert_eq!(first[4], "https://picsum.photos/seed/5/600/400");
    }

    #[test]
    fn test_resolver_uses_placeholders_for_empty_gallery() {
        let mut resolver = ImageResolver::default();
        let config = ThemeConfig::default();
        let resolved = resolver.resolve(&config.gallery.images);
        assert_eq!(resolved.to_vec(), placeholder_images());
    }

    #[test]
    fn test_resolver_memoizes_on_identity() {
        let mut resolver = ImageResolver::default();
        let config = ThemeConfig::default();
        let first = resolver.resolve(&config.gallery.images);

        let unrelated = config.apply(ThemeUpdate::ButtonAlign(Alignment::Left));
        let second = resolver.resolve(&unrelated.gallery.images);
        assert!(Arc::ptr_eq(&first, &second));

        let uploaded = unrelated.apply(ThemeUpdate::GalleryImages(vec!["file:///a.png".to_string()]));
        let third = resolver.resolve(&uploaded.gallery.images);
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(third.as_ref(), ["file:///a.png".to_string()]);
    }

    #[test]
    fn test_layout_a_uses_primary_and_thumbnails_in_order() {
        let images: Vec<String> = (0..4).map(|i| format!("file:///img{i}.png")).collect();
        let tree = render(&ThemeConfig::default(), &images);
        assert_eq!(image_sources(&tree), images);
        assert!(matches!(tree.root, Node::Card { .. }));
    }

    fn collect_texts<'a>(node: &'a Node, out: &mut Vec<(&'a str, bool)>) {
        match node {
            Node::Text { text, strong, .. } => out.push((text.as_str(), *strong)),
            Node::Card { children, .. } | Node::Row { children, .. } | Node::Column { children, .. } => {
                for child in children {
                    collect_texts(child, out);
                }
            }
            _ => {}
        }
    }

    #[test]
    fn test_price_value_is_strong() {
        let tree = render(&ThemeConfig::default(), &placeholder_images());
        let mut texts = Vec::new();
        collect_texts(&tree.root, &mut texts);
        assert!(texts.contains(&("Price:", false)));
        assert!(texts.contains(&(product::PRICE, true)));
    }

    #[test]
    fn test_layout_b_stacks_every_image() {
        let config = ThemeConfig::default().apply(ThemeUpdate::Variant(Variant::LayoutB));
        let images = placeholder_images();
        let tree = render(&config, &images);
        assert_eq!(image_sources(&tree), images);
        assert!(matches!(tree.root, Node::Row { .. }));
    }

    #[test]
    fn test_button_follows_alignment() {
        for (align, justify) in [
            (Alignment::Left, Justify::Start),
            (Alignment::Center, Justify::Center),
            (Alignment::Right, Justify::End),
        ] {
            let config = ThemeConfig::default().apply(ThemeUpdate::ButtonAlign(align));
            let tree = render(&config, &placeholder_images());
            match find_button(&tree.root) {
                Some(Node::Button { justify: actual, .. }) => assert_eq!(*actual, justify),
                other => panic!("expected a button, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_colors_render_without_error() {
        let config = ThemeConfig::default()
            .apply(ThemeUpdate::Color(ColorField::ButtonBackground, "#1".to_string()))
            .apply(ThemeUpdate::Color(ColorField::SectionBackground, String::new()));
        let tree = render(&config, &placeholder_images());

        match find_button(&tree.root) {
            Some(Node::Button { style, .. }) => assert_eq!(style.background, Paint::Invalid("#1".to_string())),
            other => panic!("expected a button, got {other:?}"),
        }
        match &tree.root {
            Node::Card { style, .. } => assert_eq!(style.background.rgba(), None),
            other => panic!("expected a card, got {other:?}"),
        }
    }

    #[test]
    fn test_render_is_pure() {
        let config = ThemeConfig::default().apply(ThemeUpdate::Device(Device::Mobile));
        let images = placeholder_images();
        assert_eq!(render(&config, &images), render(&config, &images));
        assert_eq!(render(&config, &images).frame, DeviceFrame::for_device(Device::Mobile));
    }
}
