use std::{
    sync::{
        mpsc::{
            channel,
            Receiver,
            Sender,
        },
        Arc,
    },
    thread,
};

use eframe::egui;
use reqwest::Client;
use tokio::runtime::Runtime;

use super::api::{
    self,
    Payload,
};
use crate::core::{
    errors::PrawncastError,
    form::FieldSet,
};

/// Raw outcome of a background task. Prediction settlements carry the
/// generation of the submission that started them.
enum ServiceEvent {
    Prediction {
        generation: u64,
        result: Result<f64, PrawncastError>,
    },
    Online(bool),
}

/// What [`PredictionService::poll`] hands the app once stale settlements
/// have been filtered out.
#[derive(Debug)]
pub enum ServiceUpdate {
    Prediction(Result<f64, PrawncastError>),
    Online(bool),
}

/// Owns the HTTP side of the app: a shared tokio runtime, a reqwest client,
/// and a channel the UI thread drains once per frame.
///
/// Requests are never cancelled once dispatched. Instead every submission
/// attempt bumps a generation counter, and settlements tagged with an older
/// generation are dropped at the poll boundary. The UI therefore only ever
/// sees the outcome of the latest submission.
pub struct PredictionService {
    runtime: Arc<Runtime>,
    client: Client,
    sender: Sender<ServiceEvent>,
    receiver: Receiver<ServiceEvent>,
    generation: u64,
}

impl PredictionService {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create prediction runtime"));
        let (sender, receiver) = channel();

        PredictionService {
            runtime,
            client: Client::new(),
            sender,
            receiver,
            generation: 0,
        }
    }

    /// Starts one prediction request from the current form text.
    ///
    /// The generation is bumped before validation, so even a submission that
    /// fails to parse supersedes whatever was still in flight. A validation
    /// error is returned synchronously and nothing is dispatched.
    pub fn submit(&mut self, fields: &FieldSet, ctx: &egui::Context) -> Result<(), PrawncastError> {
        self.generation += 1;
        let payload = Payload::from_fields(fields)?;

        let generation = self.generation;
        let sender = self.sender.clone();
        let runtime = self.runtime.clone();
        let client = self.client.clone();
        let ctx = ctx.clone();

        thread::spawn(move || {
            let result = runtime.block_on(api::request_prediction(&client, &payload));
            let _ = sender.send(ServiceEvent::Prediction { generation, result });
            ctx.request_repaint();
        });

        Ok(())
    }

    /// Pings the service root off-thread and reports the result through the
    /// same channel as predictions.
    pub fn check_service(&self, ctx: &egui::Context) {
        let sender = self.sender.clone();
        let ctx = ctx.clone();

        thread::spawn(move || {
            let online = api::ping_service();
            let _ = sender.send(ServiceEvent::Online(online));
            ctx.request_repaint();
        });
    }

    /// Drains every settled task. Called once per frame by the app.
    pub fn poll(&mut self) -> Vec<ServiceUpdate> {
        let mut updates = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            if let Some(update) = self.accept(event) {
                updates.push(update);
            }
        }
        updates
    }

    fn accept(&self, event: ServiceEvent) -> Option<ServiceUpdate> {
        match event {
            ServiceEvent::Prediction { generation, result } => {
                if generation != self.generation {
                    println!(
                        "[Predict] Dropping response from superseded submission {} (current is {})",
                        generation, self.generation
                    );
                    return None;
                }
                Some(ServiceUpdate::Prediction(result))
            }
            ServiceEvent::Online(online) => Some(ServiceUpdate::Online(online)),
        }
    }
}

impl Default for PredictionService {
    fn default() -> Self {
        Self::new()
    }
}
