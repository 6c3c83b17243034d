use super::search_bar::{SearchBar, SearchBarEvent, SearchBarProps};
use super::{StatefulComponent, indicator, pagination, results_list};
use crate::constants;
use api::search::DocId;
use session::{SearchSessionStore, SearchStatus};

/// The root view: search bar, results and pagination, all read from the
/// application's session store.
#[derive(Default)]
pub struct SearchView {
    search_bar: SearchBar,
}

pub struct SearchViewProps<'a> {
    pub store: &'a SearchSessionStore,
}

pub struct SearchViewOutput {
    pub events: Vec<SearchViewEvent>,
}

pub enum SearchViewEvent {
    StartSearch(String),
    ChangePage(usize),
    OpenDocument(DocId),
}

impl SearchView {
    pub fn request_focus(&mut self) {
        self.search_bar.request_focus();
    }
}

impl StatefulComponent for SearchView {
    type Props<'a> = SearchViewProps<'a>;
    type Output = SearchViewOutput;

    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output {
        let store = props.store;
        let session = store.session();
        let mut events = vec![];

        indicator::error_message(ui, session.error_message());

        let output = self.search_bar.render(
            ui,
            SearchBarProps {
                loading: store.is_loading(),
            },
        );
        for event in output.events {
            match event {
                SearchBarEvent::StartSearch(query) => {
                    events.push(SearchViewEvent::StartSearch(query))
                }
            }
        }
        ui.add_space(12.0);

        if session.status() == SearchStatus::Loading {
            indicator::loading(ui, constants::SEARCHING_MESSAGE);
            return SearchViewOutput { events };
        }

        if session.results().is_empty() {
            return SearchViewOutput { events };
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                if let Some(doc_id) = results_list::render(ui, store) {
                    events.push(SearchViewEvent::OpenDocument(doc_id));
                }

                ui.add_space(8.0);
                if let Some(page) =
                    pagination::render(ui, session.current_page(), store.page_count())
                {
                    events.push(SearchViewEvent::ChangePage(page));
                }
            });

        SearchViewOutput { events }
    }
}
