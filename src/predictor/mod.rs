pub mod api;
pub mod service;

pub use api::Payload;
pub use service::{ PredictionService, ServiceUpdate };
