use eframe::egui::{self, containers};

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, service_online: bool) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, service_online);
                });
            });
        });
    }

    fn show_status_indicator(ui: &mut egui::Ui, service_online: bool) {
        let service_color = if service_online {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let service_tooltip = if service_online {
            "Connected to the predictor service"
        } else {
            "Not Connected to the predictor service"
        };
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("predictor").on_hover_text(service_tooltip);
            ui.small(egui::RichText::new("●").color(service_color))
                .on_hover_text(service_tooltip);
        });
    }
}
