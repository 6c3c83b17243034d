use api::{SearchService, ServiceError};
use session::{ClientState, Request, Response};
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use tracing::{debug, error};

#[derive(Debug)]
pub enum BackendEvent {
    /// A request ran to completion, successfully or not
    Finished(Response),
    /// The backend could not start its runtime (fatal error)
    RuntimeFailed(String),
}

/// Runs requests from the UI thread on a tokio runtime of its own and sends
/// the results back, waking the UI for each one.
pub struct BackendThread {
    service: Arc<dyn SearchService>,
    rx_request: mpsc::Receiver<Request>,
    tx_event: mpsc::Sender<BackendEvent>,
    egui_ctx: egui::Context,
}

impl BackendThread {
    pub fn new(
        service: Arc<dyn SearchService>,
        rx_request: mpsc::Receiver<Request>,
        tx_event: mpsc::Sender<BackendEvent>,
        egui_ctx: egui::Context,
    ) -> Self {
        Self {
            service,
            rx_request,
            tx_event,
            egui_ctx,
        }
    }

    pub fn spawn(self) -> thread::JoinHandle<()> {
        let Self {
            service,
            rx_request,
            tx_event,
            egui_ctx,
        } = self;

        thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to create Tokio runtime: {}", e);
                    let reason = e.to_string();
                    let _ = tx_event.send(BackendEvent::RuntimeFailed(reason.clone()));
                    egui_ctx.request_repaint();
                    reject_all(rx_request, tx_event, egui_ctx, &reason);
                    return;
                }
            };

            rt.block_on(async move {
                // Ends once the UI drops its sender
                while let Ok(request) = rx_request.recv() {
                    let service = service.clone();
                    let tx_event = tx_event.clone();
                    let egui_ctx = egui_ctx.clone();

                    tokio::spawn(async move {
                        debug!("Running {:?}", request);
                        let response = request.run(service.as_ref()).await;
                        let _ = tx_event.send(BackendEvent::Finished(response));
                        egui_ctx.request_repaint();
                    });
                }
            });
        })
    }
}

/// Answer every request with a transport error until the UI hangs up.
fn reject_all(
    rx_request: mpsc::Receiver<Request>,
    tx_event: mpsc::Sender<BackendEvent>,
    egui_ctx: egui::Context,
    reason: &str,
) {
    while let Ok(request) = rx_request.recv() {
        let response = request.fail(ServiceError::transport(reason));
        let _ = tx_event.send(BackendEvent::Finished(response));
        egui_ctx.request_repaint();
    }
}

/// Hand `request` to the backend thread. When the thread is gone the request
/// is failed in place so `state` does not keep waiting for it. Returns
/// whether the request was handed over.
pub fn dispatch(
    tx_request: &mpsc::Sender<Request>,
    state: &mut ClientState,
    request: Request,
) -> bool {
    match tx_request.send(request) {
        Ok(()) => true,
        Err(mpsc::SendError(request)) => {
            error!("Backend thread is gone, failing {:?}", request);
            state.apply(request.fail(ServiceError::transport("the backend thread stopped")));
            false
        }
    }
}
