use super::ContextComponent;
use crate::constants;
use session::Route;

#[derive(Default)]
pub struct Header;

pub struct HeaderProps<'a> {
    pub route: &'a Route,
    /// Shown as a banner under the title when the backend is unusable
    pub backend_error: Option<&'a str>,
}

impl ContextComponent for Header {
    type Props<'a> = HeaderProps<'a>;
    type Output = ();

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output {
        egui::TopBottomPanel::top(constants::ID_PANEL_HEADER)
            .frame(
                egui::Frame::NONE
                    .inner_margin(egui::vec2(12.0, 8.0))
                    .fill(ctx.style().visuals.panel_fill),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new(constants::APP_NAME).strong());
                });

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(props.route.to_string()).small().weak());
                });

                if let Some(error) = props.backend_error {
                    ui.colored_label(ui.visuals().error_fg_color, error);
                }
            });
    }
}
