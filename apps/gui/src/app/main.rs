use crate::backend::{self, BackendEvent, BackendThread};
use crate::component::{
    DocumentView, DocumentViewEvent, DocumentViewProps, Header, HeaderProps, SearchView,
    SearchViewEvent, SearchViewProps, prelude::*,
};
use crate::config::Config;
use crate::constants;
use crate::ui;
use api::HttpSearchService;
use session::{BoundView, ClientState, DocumentFetchState, Request};
use std::sync::{Arc, mpsc};
use tracing::{debug, error, info};

pub struct App {
    state: ClientState,

    header: Header,
    search_view: SearchView,
    document_view: DocumentView,

    tx_request: mpsc::Sender<Request>,
    rx_event: mpsc::Receiver<BackendEvent>,

    /// Set once the backend is unusable; nothing can be fetched after that
    backend_error: Option<String>,
    window_title: String,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, service: HttpSearchService) -> Self {
        let (tx_request, rx_request) = mpsc::channel();
        let (tx_event, rx_event) = mpsc::channel();

        BackendThread::new(Arc::new(service), rx_request, tx_event, cc.egui_ctx.clone()).spawn();

        ui::setup_ui(&cc.egui_ctx, &config.ui);

        #[cfg(debug_assertions)]
        Self::setup_debug_options(&cc.egui_ctx);

        let mut search_view = SearchView::default();
        search_view.request_focus();

        Self {
            state: ClientState::new(config.service.session_settings()),
            header: Header,
            search_view,
            document_view: DocumentView,
            tx_request,
            rx_event,
            backend_error: None,
            window_title: constants::APP_NAME.to_string(),
        }
    }

    #[cfg(debug_assertions)]
    fn setup_debug_options(ctx: &egui::Context) {
        ctx.style_mut(|style| style.debug.debug_on_hover_with_all_modifiers = true);
    }

    fn dispatch(&mut self, request: Option<Request>) {
        let Some(request) = request else {
            return;
        };

        debug!("Dispatching {:?}", request);
        if !backend::dispatch(&self.tx_request, &mut self.state, request) {
            self.backend_error
                .get_or_insert_with(|| "The backend stopped working.".to_string());
        }
    }

    pub fn handle_backend_event(&mut self) {
        while let Ok(event) = self.rx_event.try_recv() {
            match event {
                BackendEvent::Finished(response) => {
                    if !self.state.apply(response) {
                        debug!("Dropped an outdated response");
                    }
                }
                BackendEvent::RuntimeFailed(e) => {
                    error!("Backend failed to start: {e}");
                    self.backend_error = Some(format!("Backend failed to start: {e}"));
                }
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let back = ctx.input_mut(|i| i.consume_key(egui::Modifiers::ALT, egui::Key::ArrowLeft));
        if back && self.state.navigator().can_go_back() {
            let request = self.state.back();
            self.dispatch(request);
            self.on_route_changed();
        }
    }

    fn on_route_changed(&mut self) {
        info!("Now at {}", self.state.route());
        if self.state.navigator().document().is_none() {
            self.search_view.request_focus();
        }
    }

    pub fn update_window_title(&mut self, ctx: &egui::Context) {
        let title = match self.state.navigator().document() {
            None => constants::APP_NAME.to_string(),
            Some(controller) => match controller.state() {
                DocumentFetchState::Success(record) if !record.title.is_empty() => {
                    format!("{} - {}", record.title, constants::APP_NAME)
                }
                _ => format!("{} - {}", controller.doc_id(), constants::APP_NAME),
            },
        };

        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }

    pub fn render_header(&mut self, ctx: &egui::Context) {
        let route = self.state.route();
        let props = HeaderProps {
            route: &route,
            backend_error: self.backend_error.as_deref(),
        };
        self.header.render(ctx, props);
    }

    pub fn render_view(&mut self, ctx: &egui::Context) {
        let mut search_events = vec![];
        let mut document_events = vec![];

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .inner_margin(egui::vec2(16.0, 12.0))
                    .fill(ctx.style().visuals.panel_fill),
            )
            .show(ctx, |ui| match self.state.view() {
                BoundView::Search(store) => {
                    let props = SearchViewProps { store: &*store };
                    search_events = self.search_view.render(ui, props).events;
                }
                BoundView::Document(controller) => {
                    let props = DocumentViewProps {
                        controller: &*controller,
                    };
                    document_events = self.document_view.render(ui, props).events;
                }
            });

        for event in search_events {
            match event {
                SearchViewEvent::StartSearch(query) => {
                    let request = self.state.submit_search(&query);
                    self.dispatch(request);
                }
                SearchViewEvent::ChangePage(page) => {
                    self.state.set_page(page);
                }
                SearchViewEvent::OpenDocument(doc_id) => {
                    let request = self.state.open_document(&doc_id);
                    self.dispatch(request);
                    self.on_route_changed();
                }
            }
        }

        for event in document_events {
            match event {
                DocumentViewEvent::BackToResults => {
                    let request = self.state.back_to_results();
                    self.dispatch(request);
                    self.on_route_changed();
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_backend_event();

        self.handle_shortcuts(ctx);

        self.update_window_title(ctx);

        self.render_header(ctx);

        self.render_view(ctx);
    }
}
