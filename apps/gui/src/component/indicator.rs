pub fn loading(ui: &mut egui::Ui, message: &str) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.spinner();
        ui.label(egui::RichText::new(message).weak());
    });
}

pub fn error_message(ui: &mut egui::Ui, message: Option<&str>) {
    let Some(message) = message else {
        return;
    };

    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, ui.visuals().error_fg_color))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(ui.visuals().error_fg_color, message);
        });
    ui.add_space(8.0);
}
