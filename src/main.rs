use eframe::egui;
use prawncast::gui::PrawncastApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Prawncast")
            .with_inner_size([1120.0, 780.0])
            .with_min_inner_size([900.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        "prawncast",
        options,
        Box::new(|cc| Ok(Box::new(PrawncastApp::new(cc)))),
    )
}
