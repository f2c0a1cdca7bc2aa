//! Editor panel: one bound control per theme field

use super::controls::{self, NumericDrafts};
use crate::config::{Alignment, ColorField, Device, NumericField, Shadow, ThemeConfig, ThemeUpdate, Variant};
use crate::constants::typography::{FONT_OPTIONS, FONT_WEIGHTS};
use crate::gui::constants::*;

/// What the user asked for this frame
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    Update(ThemeUpdate),
    UploadImages,
    Export,
    Import,
    Reset,
}

/// State for the editor panel UI
#[derive(Default)]
pub struct EditorPanelState {
    drafts: NumericDrafts,
}

fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(ITEM_SPACING);
    ui.label(egui::RichText::new(title).strong());
    ui.add_space(ITEM_SPACING / 2.0);
}

fn record(actions: &mut Vec<PanelAction>, update: Option<ThemeUpdate>) {
    if let Some(update) = update {
        actions.push(PanelAction::Update(update));
    }
}

/// Renders the editor and returns every action the user took
pub fn ui(ui: &mut egui::Ui, config: &ThemeConfig, state: &mut EditorPanelState) -> Vec<PanelAction> {
    let mut actions = Vec::new();

    ui.heading("UI Editor");

    // Layout & Variant
    ui.group(|ui| {
        section_heading(ui, "Layout & Variant");
        ui.horizontal(|ui| {
            ui.label("Device:");
            record(
                &mut actions,
                controls::select(ui, "layout_device", config.layout, &Device::ALL, |d| d.label().to_string(), SELECT_WIDTH / 1.5)
                    .map(ThemeUpdate::Device),
            );
            ui.label("Variant:");
            record(
                &mut actions,
                controls::select(ui, "design_variant", config.variant, &Variant::ALL, |v| v.label().to_string(), SELECT_WIDTH / 1.5)
                    .map(ThemeUpdate::Variant),
            );
        });
    });

    ui.add_space(SECTION_SPACING);

    // Typography
    ui.group(|ui| {
        section_heading(ui, "Typography");
        ui.horizontal(|ui| {
            ui.label("Font Family:");
            record(
                &mut actions,
                controls::select(ui, "font_family", config.typography.family.as_str(), FONT_OPTIONS, |f| f.to_string(), SELECT_WIDTH)
                    .map(|family| ThemeUpdate::FontFamily(family.to_string())),
            );
        });
        ui.horizontal(|ui| {
            ui.label("Weight:");
            record(
                &mut actions,
                controls::select(ui, "font_weight", config.typography.weight, FONT_WEIGHTS, |w| w.to_string(), SELECT_WIDTH / 2.0)
                    .map(ThemeUpdate::FontWeight),
            );
            ui.label("Size (px):");
            record(&mut actions, controls::number_input(ui, config, NumericField::FontSize, &mut state.drafts));
        });
    });

    ui.add_space(SECTION_SPACING);

    // Button
    ui.group(|ui| {
        section_heading(ui, "Button");
        ui.horizontal(|ui| {
            ui.label("Radius:");
            record(&mut actions, controls::number_input(ui, config, NumericField::ButtonRadius, &mut state.drafts));
            ui.label("Shadow:");
            record(
                &mut actions,
                controls::select(ui, "button_shadow", config.button.shadow, &Shadow::ALL, |s| s.label().to_string(), SELECT_WIDTH / 1.5)
                    .map(ThemeUpdate::ButtonShadow),
            );
        });
        ui.horizontal(|ui| {
            ui.label("Align:");
            record(
                &mut actions,
                controls::select(ui, "button_align", config.button.align, &Alignment::ALL, |a| a.label().to_string(), SELECT_WIDTH / 1.5)
                    .map(ThemeUpdate::ButtonAlign),
            );
        });
        ui.horizontal(|ui| {
            ui.label("BG:");
            record(&mut actions, controls::color_input(ui, config, ColorField::ButtonBackground));
        });
        ui.horizontal(|ui| {
            ui.label("Text:");
            record(&mut actions, controls::color_input(ui, config, ColorField::ButtonText));
        });
    });

    ui.add_space(SECTION_SPACING);

    // Gallery / Images
    ui.group(|ui| {
        section_heading(ui, "Gallery / Images");
        ui.horizontal(|ui| {
            ui.label("Alignment:");
            record(
                &mut actions,
                controls::select(ui, "gallery_alignment", config.gallery.alignment, &Alignment::ALL, |a| a.label().to_string(), SELECT_WIDTH / 1.5)
                    .map(ThemeUpdate::GalleryAlignment),
            );
        });
        ui.horizontal(|ui| {
            ui.label("Spacing:");
            record(&mut actions, controls::number_input(ui, config, NumericField::GallerySpacing, &mut state.drafts));
            ui.label("Image Radius:");
            record(&mut actions, controls::number_input(ui, config, NumericField::GalleryRadius, &mut state.drafts));
        });
        ui.add_space(ITEM_SPACING / 2.0);
        ui.horizontal(|ui| {
            if ui.button("Upload Images").clicked() {
                actions.push(PanelAction::UploadImages);
            }
            if ui.button("Clear Images").clicked() {
                actions.push(PanelAction::Update(ThemeUpdate::ClearGallery));
            }
            ui.weak(format!("{} uploaded", config.gallery.images.len()));
        });
    });

    ui.add_space(SECTION_SPACING);

    // General / Stroke
    ui.group(|ui| {
        section_heading(ui, "General / Stroke");
        ui.horizontal(|ui| {
            ui.label("Card Radius:");
            record(&mut actions, controls::number_input(ui, config, NumericField::CardRadius, &mut state.drafts));
            ui.label("Padding:");
            record(&mut actions, controls::number_input(ui, config, NumericField::ContainerPadding, &mut state.drafts));
        });
        ui.horizontal(|ui| {
            ui.label("Section BG:");
            record(&mut actions, controls::color_input(ui, config, ColorField::SectionBackground));
        });
        ui.horizontal(|ui| {
            ui.label("Stroke:");
            record(&mut actions, controls::number_input(ui, config, NumericField::StrokeWeight, &mut state.drafts));
            record(&mut actions, controls::color_input(ui, config, ColorField::Stroke));
        });
    });

    ui.add_space(SECTION_SPACING);

    ui.horizontal(|ui| {
        if ui.button("Export JSON").clicked() {
            actions.push(PanelAction::Export);
        }
        if ui.button("Import JSON").clicked() {
            actions.push(PanelAction::Import);
        }
        if ui.button("Reset").clicked() {
            actions.push(PanelAction::Reset);
        }
    });

    ui.add_space(ITEM_SPACING);
    ui.label(
        egui::RichText::new(
            "Tip: Upload up to 8 images for the gallery. They appear in the preview immediately. \
             Export saves your current config including the uploaded image references \
             (note: those only resolve on this machine).",
        )
        .small()
        .color(TIP_COLOR),
    );

    actions
}
