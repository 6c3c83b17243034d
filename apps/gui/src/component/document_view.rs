use super::{StatefulComponent, indicator};
use crate::constants;
use api::search::DocumentRecord;
use session::{DocumentFetchController, DocumentFetchState};

/// The detail view. It keeps nothing between visits; everything it shows
/// comes from the controller of the current visit.
#[derive(Default)]
pub struct DocumentView;

pub struct DocumentViewProps<'a> {
    pub controller: &'a DocumentFetchController,
}

pub struct DocumentViewOutput {
    pub events: Vec<DocumentViewEvent>,
}

pub enum DocumentViewEvent {
    BackToResults,
}

impl StatefulComponent for DocumentView {
    type Props<'a> = DocumentViewProps<'a>;
    type Output = DocumentViewOutput;

    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output {
        let mut events = vec![];

        if ui.button(constants::BACK_TO_RESULTS).clicked() {
            events.push(DocumentViewEvent::BackToResults);
        }
        ui.add_space(8.0);

        match props.controller.state() {
            DocumentFetchState::Idle => {}
            DocumentFetchState::Loading => {
                indicator::loading(ui, constants::LOADING_DOCUMENT_MESSAGE)
            }
            DocumentFetchState::Error(message) => {
                indicator::error_message(ui, Some(message.as_str()))
            }
            DocumentFetchState::Success(record) => render_record(ui, record),
        }

        DocumentViewOutput { events }
    }
}

fn render_record(ui: &mut egui::Ui, record: &DocumentRecord) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(&record.title)
                    .strong()
                    .size(22.0),
            );

            if let Some(metadata) = &record.metadata {
                let byline = [metadata.author.trim(), metadata.bib.trim()]
                    .into_iter()
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(" · ");
                ui.label(egui::RichText::new(byline).small().weak());
            }

            ui.add_space(8.0);
            ui.label(&record.text);
        });
}
