use eframe::egui::{
    self,
    RichText,
};

use super::theme::Theme;

const TIPS: [&str; 3] = [
    "Maintain DO towards the upper range to support high stocking densities.",
    "Keep ammonia and nitrite as low as possible for healthier shrimp.",
    "Use consistent measurement methods for all inputs for reliable results.",
];

/// Static reference material next to the form: what the model is, how well
/// it fits, and how to feed it good inputs.
pub struct SidePanel;

impl SidePanel {
    pub fn show(ui: &mut egui::Ui, theme: &Theme) {
        Self::model_info_card(ui, theme);
        ui.add_space(12.0);
        Self::tips_card(ui, theme);
    }

    fn model_info_card(ui: &mut egui::Ui, theme: &Theme) {
        egui::Frame::group(ui.style()).inner_margin(16.0).show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.heading("Model Info");
            ui.label(
                RichText::new("Current configuration").color(theme.muted(ui.ctx())).small(),
            );
            ui.add_space(6.0);
            ui.separator();
            ui.add_space(6.0);

            Self::metric_row(ui, theme, "Algorithm", "Random Forest Regressor");
            Self::metric_row(ui, theme, "Train R²", "≈ 0.96");
            Self::metric_row(ui, theme, "Test R²", "≈ 0.84");
            Self::metric_row(ui, theme, "Test MAE", "≈ 7.8");

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                let cyan = theme.cyan(ui.ctx());
                ui.label(RichText::new("●").color(cyan).small());
                ui.label(RichText::new("Major drivers: density, DO, ammonia").color(cyan).small());
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(
                    "Note: This tool is for decision support only, not a substitute for on-farm trials.",
                )
                .color(theme.muted(ui.ctx()))
                .small()
                .italics(),
            );
        });
    }

    fn metric_row(ui: &mut egui::Ui, theme: &Theme, label: &str, value: &str) {
        let muted = theme.muted(ui.ctx());
        egui::Sides::new().show(
            ui,
            |ui| {
                ui.label(RichText::new(label).color(muted));
            },
            |ui| {
                ui.strong(value);
            },
        );
    }

    fn tips_card(ui: &mut egui::Ui, theme: &Theme) {
        egui::Frame::group(ui.style()).inner_margin(16.0).show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.heading("Tips for Better Predictions");
            ui.label(
                RichText::new("Keep values within recommended ranges")
                    .color(theme.muted(ui.ctx()))
                    .small(),
            );
            ui.add_space(6.0);
            ui.separator();
            ui.add_space(6.0);

            for tip in TIPS {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 6.0;
                    ui.label(RichText::new("•").color(theme.cyan(ui.ctx())));
                    ui.label(tip);
                });
                ui.add_space(4.0);
            }
        });
    }
}
