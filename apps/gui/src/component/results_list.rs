use api::search::{DocId, SearchResultItem};
use session::SearchSessionStore;

/// Draw the visible page of results. Returns the document whose title was
/// clicked, if any.
pub fn render(ui: &mut egui::Ui, store: &SearchSessionStore) -> Option<DocId> {
    let mut opened = None;

    if let Some(summary) = store.summary() {
        ui.label(egui::RichText::new(summary).weak());
        ui.add_space(4.0);
    }

    for hit in store.visible_results() {
        if render_hit(ui, hit) {
            opened = Some(hit.doc_id.clone());
        }
        ui.add_space(6.0);
    }

    opened
}

fn render_hit(ui: &mut egui::Ui, hit: &SearchResultItem) -> bool {
    let mut clicked = false;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.label(
            egui::RichText::new(format!("DOC ID: {} (Score: {:.4})", hit.doc_id, hit.score))
                .small()
                .color(ui.visuals().hyperlink_color),
        );

        clicked = ui
            .link(egui::RichText::new(&hit.title).strong().size(18.0))
            .on_hover_text(format!("Open document {}", hit.doc_id))
            .clicked();

        ui.label(&hit.snippet);
    });

    clicked
}
