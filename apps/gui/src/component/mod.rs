mod document_view;
mod header;
mod indicator;
mod pagination;
mod results_list;
mod search_bar;
mod search_view;

pub use document_view::{DocumentView, DocumentViewEvent, DocumentViewProps};
pub use header::{Header, HeaderProps};
pub use search_view::{SearchView, SearchViewEvent, SearchViewProps};

pub mod prelude {
    pub use super::{ContextComponent, StatefulComponent};
}

/// A component drawn inside a `Ui` owned by someone else
pub trait StatefulComponent {
    type Props<'a>;
    type Output;

    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output;
}

/// A component that owns a whole panel of the window
pub trait ContextComponent {
    type Props<'a>;
    type Output;

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output;
}
