//! Bound input controls shared by the editor panel

use std::collections::HashMap;

use crate::config::update::{accepts_hex_input, format_hex_color, parse_numeric_input};
use crate::config::{ColorField, NumericField, ThemeConfig, ThemeUpdate};
use crate::gui::constants::{HEX_INPUT_WIDTH, NUMBER_INPUT_WIDTH};
use crate::preview::Paint;

/// Text typed into numeric inputs that have focus
#[derive(Default)]
pub struct NumericDrafts {
    drafts: HashMap<NumericField, String>,
}

/// Free-text numeric input. Accepted text is clamped and written on every
/// keystroke; rejected text stays in the box while it has focus.
pub fn number_input(
    ui: &mut egui::Ui,
    config: &ThemeConfig,
    field: NumericField,
    drafts: &mut NumericDrafts,
) -> Option<ThemeUpdate> {
    let mut text = drafts
        .drafts
        .get(&field)
        .cloned()
        .unwrap_or_else(|| field.get(config).to_string());

    let response = ui.add(egui::TextEdit::singleline(&mut text).desired_width(NUMBER_INPUT_WIDTH));
    let range = field.bounds();
    let response = response.on_hover_text(format!("{} to {}", range.min, range.max));

    let update = if response.changed() {
        parse_numeric_input(&text, range).map(|value| ThemeUpdate::Numeric(field, value))
    } else {
        None
    };

    if response.has_focus() {
        drafts.drafts.insert(field, text);
    } else {
        drafts.drafts.remove(&field);
    }

    update
}

/// Color shown by the native picker; anything that is not a color shows black
fn picker_rgb(value: &str) -> [u8; 3] {
    match Paint::parse(value).rgba() {
        Some([r, g, b, _]) => [r, g, b],
        None => [0, 0, 0],
    }
}

/// Native color picker plus a hex text box, both writing the same field
pub fn color_input(ui: &mut egui::Ui, config: &ThemeConfig, field: ColorField) -> Option<ThemeUpdate> {
    let value = field.get(config);
    let mut update = None;

    ui.horizontal(|ui| {
        let mut rgb = picker_rgb(value);
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            update = Some(ThemeUpdate::Color(field, format_hex_color(rgb)));
        }

        let mut text = value.to_string();
        let response = ui.add(egui::TextEdit::singleline(&mut text).desired_width(HEX_INPUT_WIDTH));
        if response.changed() && accepts_hex_input(&text) {
            update = Some(ThemeUpdate::Color(field, text));
        }
    });

    update
}

/// Select list over a fixed option set. Returns the newly chosen option.
pub fn select<T: PartialEq + Copy>(
    ui: &mut egui::Ui,
    id_salt: &str,
    current: T,
    options: &[T],
    label: impl Fn(T) -> String,
    width: f32,
) -> Option<T> {
    let mut chosen = None;

    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(label(current))
        .width(width)
        .show_ui(ui, |ui| {
            for &option in options {
                if ui.selectable_label(option == current, label(option)).clicked() && option != current {
                    chosen = Some(option);
                }
            }
        });

    chosen
}
