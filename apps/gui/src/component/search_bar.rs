use super::StatefulComponent;
use crate::constants;

/// Query input plus submit button. The typed text lives here, so it is kept
/// while the user is looking at a document.
#[derive(Default)]
pub struct SearchBar {
    raw_search_query: String,
    request_focus: bool,
}

pub struct SearchBarProps {
    /// A search is in flight; the button is disabled but Enter still submits
    pub loading: bool,
}

pub struct SearchBarOutput {
    pub events: Vec<SearchBarEvent>,
}

pub enum SearchBarEvent {
    /// Start search with raw query string
    StartSearch(String),
}

impl SearchBar {
    pub fn request_focus(&mut self) {
        self.request_focus = true;
    }
}

impl StatefulComponent for SearchBar {
    type Props<'a> = SearchBarProps;
    type Output = SearchBarOutput;

    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output {
        let mut events = vec![];

        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let button_text = if props.loading { "..." } else { "Search" };
                let clicked = ui
                    .add_enabled(!props.loading, egui::Button::new(button_text))
                    .clicked();

                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.raw_search_query)
                        .id_salt(constants::ID_SEARCH_BAR_INPUT)
                        .hint_text(constants::SEARCH_BAR_HINT)
                        .desired_width(f32::INFINITY),
                );

                if self.request_focus {
                    resp.request_focus();
                    self.request_focus = false;
                }

                let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if clicked || submitted {
                    events.push(SearchBarEvent::StartSearch(self.raw_search_query.clone()));
                }
            });
        });

        SearchBarOutput { events }
    }
}
