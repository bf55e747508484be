use std::time::Instant;

use eframe::egui::{
    self,
    RichText,
};
use egui_extras::{
    Size,
    StripBuilder,
};

use super::{
    form_panel::{
        FormAction,
        FormPanel,
    },
    side_panel::SidePanel,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::form::FormState,
    predictor::service::{
        PredictionService,
        ServiceUpdate,
    },
};

/// How often the service root is pinged for the status indicator.
const SERVICE_CHECK_INTERVAL_SECS: u64 = 30;

pub struct PrawncastApp {
    // Form State
    pub form: FormState,

    // UI State
    pub theme: Theme,

    // External Services
    service: PredictionService,
    service_online: bool,
    last_service_check: Option<Instant>,
}

impl PrawncastApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = Self {
            // Form State
            form: FormState::new(),

            // UI State
            theme: Theme::lagoon(),

            // External Services
            service: PredictionService::new(),
            service_online: false,
            last_service_check: None,
        };

        app.setup_theme(cc);

        app
    }

    fn setup_theme(&self, cc: &eframe::CreationContext<'_>) {
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.1);
        set_theme(&cc.egui_ctx, self.theme.clone());

        // The palette is designed dark-first; the switch in the top bar
        // still exposes the light variant.
        cc.egui_ctx.set_theme(egui::Theme::Dark);
    }

    /// Runs one submission attempt from the current form text. The status
    /// always passes through Loading first, so a previous prediction or
    /// error never lingers next to a newer request.
    fn submit(&mut self, ctx: &egui::Context) {
        self.form.begin_submission();

        if let Err(error) = self.service.submit(&self.form.fields, ctx) {
            eprintln!("[Predict] Submission rejected: {}", error);
            self.form.complete_with_error(error.user_message());
        }
    }

    fn apply_update(&mut self, update: ServiceUpdate) {
        match update {
            ServiceUpdate::Prediction(Ok(prediction)) => {
                println!("[Predict] Yield estimate: {:.2}%", prediction);
                self.form.complete_with_result(prediction);
            }
            ServiceUpdate::Prediction(Err(error)) => {
                eprintln!("[Predict] Request failed: {}", error);
                self.form.complete_with_error(error.user_message());
            }
            ServiceUpdate::Online(online) => {
                if online != self.service_online {
                    println!(
                        "[Service] Predictor {}",
                        if online { "reachable" } else { "unreachable" }
                    );
                }
                self.service_online = online;
            }
        }
    }

    fn update_service_status(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let should_check = match self.last_service_check {
            None => true,
            Some(last_check) => {
                now.duration_since(last_check).as_secs() >= SERVICE_CHECK_INTERVAL_SECS
            }
        };

        if should_check {
            self.service.check_service(ctx);
            self.last_service_check = Some(now);
        }
    }

    fn header(&self, ui: &mut egui::Ui) {
        egui::Sides::new().show(
            ui,
            |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        self.theme.heading(ui.ctx(), "Shrimp Yield Prediction").size(24.0).strong(),
                    );
                    ui.label(
                        RichText::new(
                            "Estimate expected harvest yield based on current pond conditions.",
                        )
                        .color(self.theme.muted(ui.ctx())),
                    );
                });
            },
            |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    let orange = self.theme.orange(ui.ctx());
                    ui.label(RichText::new("●").color(orange).small());
                    ui.label(RichText::new("ML Model • Random Forest").color(orange).small());
                });
            },
        );
    }
}

impl eframe::App for PrawncastApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for update in self.service.poll() {
            self.apply_update(update);
        }

        self.update_service_status(ctx);

        TopBar::show(ctx, self.service_online);

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Shrimp Yield Simulator • Educational Prototype")
                        .color(self.theme.muted(ui.ctx()))
                        .small(),
                );
            });
        });

        let mut submit_requested = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            self.header(ui);
            ui.add_space(12.0);

            StripBuilder::new(ui)
                .size(Size::relative(0.62))
                .size(Size::remainder())
                .horizontal(|mut strip| {
                    strip.cell(|ui| {
                        egui::ScrollArea::vertical().id_salt("form_column").show(ui, |ui| {
                            if let Some(FormAction::Submit) =
                                FormPanel::show(ui, &mut self.form, &self.theme)
                            {
                                submit_requested = true;
                            }
                        });
                    });
                    strip.cell(|ui| {
                        egui::ScrollArea::vertical().id_salt("side_column").show(ui, |ui| {
                            SidePanel::show(ui, &self.theme);
                        });
                    });
                });
        });

        if submit_requested {
            self.submit(ctx);
        }
    }
}
