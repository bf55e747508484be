pub mod core;
pub mod gui;
pub mod predictor;
