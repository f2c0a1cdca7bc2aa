//! Editor window: the controls on the right, the live preview on the left

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use tracing::{error, info};

use super::components::editor_panel::{self, EditorPanelState, PanelAction};
use super::components::preview_pane;
use super::constants::*;
use crate::config::ThemeUpdate;
use crate::constants::{gallery, transfer as transfer_constants};
use crate::controller::ThemeController;
use crate::preview::{self, ImageResolver};
use crate::transfer;

struct StatusMessage {
    text: String,
    color: egui::Color32,
}

/// Modal message the user must dismiss before editing again
struct Notice {
    title: String,
    message: String,
}

struct StudioApp {
    controller: ThemeController,
    panel: EditorPanelState,
    images: ImageResolver,
    notice: Option<Notice>,
    status_message: Option<StatusMessage>,
}

impl StudioApp {
    fn new(cc: &CreationContext<'_>, controller: ThemeController) -> Self {
        info!("Initializing theme studio window");
        egui_extras::install_image_loaders(&cc.egui_ctx);

        Self {
            controller,
            panel: EditorPanelState::default(),
            images: ImageResolver::default(),
            notice: None,
            status_message: None,
        }
    }

    fn handle(&mut self, action: PanelAction) {
        match action {
            PanelAction::Update(update) => {
                self.controller.apply(update);
            }
            PanelAction::UploadImages => self.upload_images(),
            PanelAction::Export => self.export(),
            PanelAction::Import => self.import(),
            PanelAction::Reset => {
                self.controller.reset_to_default();
                self.status_message = Some(StatusMessage {
                    text: "Theme reset to defaults".to_string(),
                    color: STATUS_OK,
                });
            }
        }
    }

    fn upload_images(&mut self) {
        let Some(paths) = rfd::FileDialog::new()
            .add_filter("Images", gallery::IMAGE_EXTENSIONS)
            .pick_files()
        else {
            return;
        };

        info!(selected = paths.len(), "Uploading gallery images");
        self.controller.apply(ThemeUpdate::upload_images(paths));
    }

    fn export(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(transfer_constants::EXPORT_FILENAME)
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };

        self.status_message = Some(match transfer::export_config(self.controller.config(), &path) {
            Ok(()) => StatusMessage {
                text: format!("Exported to {}", path.display()),
                color: STATUS_OK,
            },
            Err(err) => {
                error!(error = ?err, "Export failed");
                StatusMessage {
                    text: format!("Export failed: {err:#}"),
                    color: STATUS_ERROR,
                }
            }
        });
    }

    fn import(&mut self) {
        let Some(path) = rfd::FileDialog::new().add_filter("JSON", &["json"]).pick_file() else {
            return;
        };

        if let Err(err) = self.import_from(&path) {
            self.notice = Some(Notice {
                title: "Import failed".to_string(),
                message: format!("{err:#}"),
            });
        } else {
            self.status_message = Some(StatusMessage {
                text: format!("Imported {}", path.display()),
                color: STATUS_OK,
            });
        }
    }

    fn import_from(&mut self, path: &Path) -> Result<()> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        self.controller.import_config(&raw)?;
        Ok(())
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(notice.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&notice.message);
                ui.add_space(ITEM_SPACING);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.notice = None;
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let fonts = self.controller.fonts_mut();
        fonts.begin_frame();
        if let Some(definitions) = fonts.take_pending() {
            ctx.set_fonts(definitions);
        }

        let editable = self.notice.is_none();
        let actions = egui::SidePanel::right("editor")
            .exact_width(EDITOR_WIDTH)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| {
                        ui.add_space(PADDING);
                        let actions = ui
                            .add_enabled_ui(editable, |ui| {
                                editor_panel::ui(ui, self.controller.config(), &mut self.panel)
                            })
                            .inner;

                        ui.add_space(SECTION_SPACING);
                        ui.separator();
                        ui.weak(format!(
                            "Revision {} | {} font families loaded",
                            self.controller.revision(),
                            self.controller.fonts().registered_count()
                        ));
                        if let Some(message) = &self.status_message {
                            ui.colored_label(message.color, &message.text);
                        }
                        actions
                    })
                    .inner
            })
            .inner;

        for action in actions {
            self.handle(action);
        }

        let images = self.images.resolve(&self.controller.config().gallery.images);
        let tree = preview::render(self.controller.config(), &images);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(CANVAS_BACKGROUND))
            .show(ctx, |ui| {
                preview_pane::ui(ui, &tree, self.controller.fonts());
            });

        self.show_notice(ctx);
    }
}

pub fn run_gui(controller: ThemeController) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Theme Studio"),
        ..Default::default()
    };

    eframe::run_native(
        "Theme Studio",
        options,
        Box::new(move |cc| Ok(Box::new(StudioApp::new(cc, controller)))),
    )
    .map_err(|err| anyhow!("Failed to launch theme studio: {err}"))
}
