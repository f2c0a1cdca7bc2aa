//! egui front end of the theme studio

mod app;
mod components;
mod constants;

pub use app::run_gui;
