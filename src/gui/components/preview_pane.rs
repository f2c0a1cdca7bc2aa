//! Paints a `PreviewTree` with egui widgets

use crate::constants::product;
use crate::font::FontLoader;
use crate::gui::constants::*;
use crate::preview::{
    Border, ButtonStyle, CardStyle, ColumnWidth, DeviceFrame, FontChoice, Justify, Node, Paint, PreviewTree,
    ShadowStyle, TextStyle,
};

const SWATCH_SIZE: f32 = 28.0;
const MEDIA_TILE_SIZE: f32 = 48.0;
const MEDIA_BLOCK_HEIGHT: f32 = 120.0;
const MEDIA_RADIUS: u8 = 8;

fn color(paint: &Paint) -> Option<egui::Color32> {
    paint
        .rgba()
        .map(|[r, g, b, a]| egui::Color32::from_rgba_unmultiplied(r, g, b, a))
}

fn fill(paint: &Paint) -> egui::Color32 {
    color(paint).unwrap_or(egui::Color32::TRANSPARENT)
}

fn stroke(border: &Border) -> egui::Stroke {
    match color(&border.color) {
        Some(color) if border.width > 0.0 => egui::Stroke::new(border.width, color),
        _ => egui::Stroke::NONE,
    }
}

fn radius(value: f32) -> egui::CornerRadius {
    egui::CornerRadius::same(value.round().clamp(0.0, u8::MAX as f32) as u8)
}

fn margin(value: f32) -> egui::Margin {
    egui::Margin::same(value.round().clamp(0.0, i8::MAX as f32) as i8)
}

fn shadow(style: &ShadowStyle) -> egui::Shadow {
    egui::Shadow {
        offset: [0, style.offset_y.round() as i8],
        blur: style.blur.round() as u8,
        spread: 0,
        color: egui::Color32::from_black_alpha((style.alpha * 255.0).round() as u8),
    }
}

fn body_color() -> egui::Color32 {
    fill(&Paint::parse(product::TEXT_COLOR))
}

/// Paint the device frame and everything inside it
pub fn ui(ui: &mut egui::Ui, tree: &PreviewTree, fonts: &FontLoader) {
    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(PADDING);
            ui.vertical_centered(|ui| device_frame(ui, &tree.frame, &tree.root, fonts));
            ui.add_space(PADDING);
        });
}

fn device_frame(ui: &mut egui::Ui, frame: &DeviceFrame, root: &Node, fonts: &FontLoader) {
    let outer = frame.max_width.min(ui.available_width() - 2.0 * PADDING).max(0.0);
    let inner = (outer - 2.0 * frame.padding).max(0.0);

    egui::Frame::new()
        .fill(egui::Color32::WHITE)
        .corner_radius(radius(frame.radius))
        .inner_margin(margin(frame.padding))
        .shadow(egui::Shadow {
            offset: [0, 6],
            blur: 24,
            spread: 0,
            color: egui::Color32::from_black_alpha(20),
        })
        .show(ui, |ui| {
            ui.set_width(inner);
            ui.set_min_height((frame.height - 2.0 * frame.padding).max(0.0));
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                draw(ui, root, fonts);
            });
        });
}

fn draw(ui: &mut egui::Ui, node: &Node, fonts: &FontLoader) {
    match node {
        Node::Card { style, children } => card(ui, style, children, fonts),
        Node::Row { gap, justify, wrap, children } => row(ui, *gap, *justify, *wrap, children, fonts),
        Node::Column { gap, width, children } => column(ui, *gap, *width, children, fonts),
        Node::Image { source, width, height, radius: r, border } => {
            image(ui, source, *width, *height, *r, border.as_ref());
        }
        Node::Heading { text, style } => heading(ui, text, style, fonts),
        Node::Text { text, color: paint, size, strong } => {
            let mut rich = egui::RichText::new(text).color(fill(paint));
            if let Some(size) = size {
                rich = rich.size(*size);
            }
            if *strong {
                rich = rich.strong();
            }
            ui.label(rich);
        }
        Node::Swatches { label, colors, border } => swatches(ui, label, colors, border),
        Node::Button { label, style, justify } => button(ui, label, style, *justify),
        Node::MediaPlaceholder { label, border } => media_placeholder(ui, label, border),
    }
}

fn card(ui: &mut egui::Ui, style: &CardStyle, children: &[Node], fonts: &FontLoader) {
    egui::Frame::new()
        .fill(fill(&style.background))
        .corner_radius(radius(style.radius))
        .inner_margin(margin(style.padding))
        .stroke(stroke(&style.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            for child in children {
                draw(ui, child, fonts);
            }
        });
}

/// Width of a row whose children all have a fixed size
fn fixed_content_width(gap: f32, children: &[Node]) -> Option<f32> {
    let mut total = 0.0;
    for child in children {
        total += match child {
            Node::Image { width: Some(width), .. } => *width,
            Node::Column { width: ColumnWidth::Fixed(width), .. } => *width,
            _ => return None,
        };
    }
    Some(total + gap * children.len().saturating_sub(1) as f32)
}

fn row(ui: &mut egui::Ui, gap: f32, justify: Justify, wrap: bool, children: &[Node], fonts: &FontLoader) {
    let add_children = |ui: &mut egui::Ui| {
        ui.spacing_mut().item_spacing = egui::vec2(gap, gap);

        let leading = match (justify, fixed_content_width(gap, children)) {
            (Justify::Start, _) | (_, None) => 0.0,
            (Justify::Center, Some(width)) => ((ui.available_width() - width) / 2.0).max(0.0),
            (Justify::End, Some(width)) => (ui.available_width() - width).max(0.0),
        };
        if leading > 0.0 {
            ui.add_space(leading);
        }

        for child in children {
            draw(ui, child, fonts);
        }
    };

    if wrap {
        ui.horizontal_wrapped(add_children);
    } else {
        ui.horizontal(add_children);
    }
}

fn column(ui: &mut egui::Ui, gap: f32, width: ColumnWidth, children: &[Node], fonts: &FontLoader) {
    let width = match width {
        ColumnWidth::Fixed(width) => width,
        ColumnWidth::Fill { min, reserve } => (ui.available_width() - reserve).max(min),
    };

    ui.allocate_ui_with_layout(
        egui::vec2(width, 0.0),
        egui::Layout::top_down(egui::Align::Min),
        |ui| {
            ui.set_width(width);
            ui.spacing_mut().item_spacing.y = gap;
            for child in children {
                draw(ui, child, fonts);
            }
        },
    );
}

fn image(ui: &mut egui::Ui, source: &str, width: Option<f32>, height: f32, r: f32, border: Option<&Border>) {
    let width = width.unwrap_or_else(|| ui.available_width());
    let frame_stroke = border.map(stroke).unwrap_or(egui::Stroke::NONE);

    egui::Frame::new()
        .fill(IMAGE_WELL)
        .corner_radius(radius(r))
        .stroke(frame_stroke)
        .show(ui, |ui| {
            ui.add(
                egui::Image::new(source.to_string())
                    .fit_to_exact_size(egui::vec2(width, height))
                    .maintain_aspect_ratio(false)
                    .corner_radius(radius(r)),
            );
        });
}

fn heading(ui: &mut egui::Ui, text: &str, style: &TextStyle, fonts: &FontLoader) {
    let mut rich = egui::RichText::new(text).size(style.size).color(body_color());
    if let FontChoice::Named(family) = &style.font {
        // Not yet loaded (or unavailable): the default font stands in
        if fonts.is_active(family) {
            rich = rich.family(egui::FontFamily::Name(family.as_str().into()));
        }
    }
    if style.is_strong() {
        rich = rich.strong();
    }
    ui.label(rich);
}

fn swatches(ui: &mut egui::Ui, label: &str, colors: &[Paint], border: &Border) {
    ui.label(egui::RichText::new(label).color(body_color()));
    ui.horizontal(|ui| {
        for paint in colors {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::hover());
            ui.painter()
                .circle(rect.center(), SWATCH_SIZE / 2.0, fill(paint), stroke(border));
        }
    });
}

fn button(ui: &mut egui::Ui, label: &str, style: &ButtonStyle, justify: Justify) {
    let align = match justify {
        Justify::Start => egui::Align::Min,
        Justify::Center => egui::Align::Center,
        Justify::End => egui::Align::Max,
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        let mut frame = egui::Frame::new().corner_radius(radius(style.radius));
        if let Some(preset) = &style.shadow {
            frame = frame.shadow(shadow(preset));
        }
        frame.show(ui, |ui| {
            let text = egui::RichText::new(label).color(fill(&style.text));
            ui.add(
                egui::Button::new(text)
                    .fill(fill(&style.background))
                    .corner_radius(radius(style.radius))
                    .min_size(egui::vec2(0.0, 36.0)),
            );
        });
    });
}

fn media_placeholder(ui: &mut egui::Ui, label: &str, border: &Border) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(MEDIA_TILE_SIZE, MEDIA_TILE_SIZE), egui::Sense::hover());
    ui.painter()
        .rect(rect, radius(MEDIA_RADIUS as f32), MEDIA_TILE, stroke(border), egui::StrokeKind::Inside);

    egui::Frame::new()
        .fill(MEDIA_BLOCK)
        .corner_radius(egui::CornerRadius::same(MEDIA_RADIUS))
        .stroke(stroke(border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_height(MEDIA_BLOCK_HEIGHT);
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new(label).color(MEDIA_LABEL));
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run one headless frame and collect the text of every painted label
    fn painted_texts(mut add: impl FnMut(&mut egui::Ui)) -> Vec<String> {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add(ui));
        });
        output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                egui::Shape::Text(text) => Some(text.galley.text().to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_media_placeholder_labels_the_block_once() {
        let border = Border {
            width: 1.0,
            color: Paint::parse("#e6e6e6"),
        };
        let texts = painted_texts(|ui| media_placeholder(ui, product::MEDIA_LABEL, &border));
        assert_eq!(texts.iter().filter(|text| *text == product::MEDIA_LABEL).count(), 1);
    }

    fn thumb(width: f32) -> Node {
        Node::Image {
            source: String::new(),
            width: Some(width),
            height: width,
            radius: 0.0,
            border: None,
        }
    }

    #[test]
    fn test_fixed_content_width_counts_gaps() {
        let children = vec![thumb(64.0), thumb(64.0), thumb(64.0)];
        assert_eq!(fixed_content_width(10.0, &children), Some(212.0));
        assert_eq!(fixed_content_width(10.0, &[]), Some(0.0));
    }

    #[test]
    fn test_fixed_content_width_ignores_stretching_children() {
        let children = vec![
            thumb(64.0),
            Node::Image {
                source: String::new(),
                width: None,
                height: 100.0,
                radius: 0.0,
                border: None,
            },
        ];
        assert_eq!(fixed_content_width(10.0, &children), None);
    }

    #[test]
    fn test_invalid_paint_is_transparent() {
        assert_eq!(fill(&Paint::parse("#1")), egui::Color32::TRANSPARENT);
        assert_eq!(fill(&Paint::parse("#ff0000")), egui::Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_stroke_needs_width_and_color() {
        let solid = Paint::parse("#000000");
        assert_eq!(stroke(&Border { width: 0.0, color: solid.clone() }), egui::Stroke::NONE);
        assert_eq!(stroke(&Border { width: 2.0, color: Paint::parse("") }), egui::Stroke::NONE);
        assert_eq!(
            stroke(&Border { width: 2.0, color: solid }),
            egui::Stroke::new(2.0, egui::Color32::BLACK)
        );
    }
}
