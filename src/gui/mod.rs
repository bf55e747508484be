pub mod app;
pub mod form_panel;
pub mod side_panel;
pub mod theme;
pub mod top_bar;

pub use app::PrawncastApp;
