mod config;

pub use config::UiConfig;

use egui::{FontId, TextStyle};
use std::collections::BTreeMap;


pub fn setup_ui(ctx: &egui::Context, cfg: &UiConfig) {
    // UI Scale
    if let Some(scale) = cfg.scale {
        ctx.set_pixels_per_point(scale);
    }

    ctx.set_theme(if cfg.dark_mode {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });

    // Font Size
    let font_size = cfg.font_size;
    let text_styles: BTreeMap<_, _> = [
        (TextStyle::Small, FontId::proportional(font_size * 0.85)),
        (TextStyle::Body, FontId::proportional(font_size)),
        (TextStyle::Heading, FontId::proportional(font_size * 1.4)),
        (TextStyle::Monospace, FontId::monospace(font_size)),
        (TextStyle::Button, FontId::proportional(font_size)),
    ].into();

    ctx.style_mut(|style| style.text_styles = text_styles.clone());
}
