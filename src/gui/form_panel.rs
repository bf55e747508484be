use eframe::egui::{
    self,
    RichText,
};

use super::theme::{
    blend_colors,
    Theme,
};
use crate::core::{
    fields::FieldId,
    form::{
        FormState,
        RequestStatus,
        PREDICTING_LABEL,
    },
};

/// What the panel asks the app to do. Widgets never touch the service
/// themselves; they only report intent.
pub enum FormAction {
    Submit,
}

pub struct FormPanel;

impl FormPanel {
    pub fn show(ui: &mut egui::Ui, form: &mut FormState, theme: &Theme) -> Option<FormAction> {
        let mut action = None;

        egui::Frame::group(ui.style()).inner_margin(16.0).show(ui, |ui| {
            ui.heading("Input Pond Parameters");
            ui.label(
                RichText::new("Enter current values to get a yield estimate")
                    .color(theme.muted(ui.ctx()))
                    .small(),
            );
            ui.add_space(6.0);
            ui.separator();
            ui.add_space(10.0);

            if Self::field_grid(ui, form, theme) {
                action = Some(FormAction::Submit);
            }

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let label = if form.is_loading() { PREDICTING_LABEL } else { "Predict Yield" };
                let button = egui::Button::new(RichText::new(label).strong())
                    .min_size(egui::vec2(130.0, 34.0));

                // Stays clickable while a request is in flight; a second
                // click starts a fresh submission that supersedes it.
                if ui.add(button).clicked() {
                    action = Some(FormAction::Submit);
                }

                if form.is_loading() {
                    ui.add(egui::Spinner::new().size(18.0));
                }

                Self::result_box(ui, form, theme);
            });
        });

        action
    }

    /// Two field blocks per row, filled in form order. Returns true when
    /// Enter was pressed in one of the inputs.
    fn field_grid(ui: &mut egui::Ui, form: &mut FormState, theme: &Theme) -> bool {
        let mut submitted = false;

        egui::Grid::new("pond_fields").num_columns(2).spacing([28.0, 16.0]).show(ui, |ui| {
            for row in FieldId::ALL.chunks(2) {
                for id in row.iter().copied() {
                    ui.vertical(|ui| {
                        ui.strong(id.label());
                        ui.label(
                            RichText::new(id.hint()).color(theme.muted(ui.ctx())).small(),
                        );

                        let edit = egui::TextEdit::singleline(form.fields.value_mut(id))
                            .hint_text(id.placeholder())
                            .desired_width(220.0);
                        let response = ui.add(edit);
                        if response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        {
                            submitted = true;
                        }

                        ui.label(
                            RichText::new(id.range_text())
                                .color(theme.muted(ui.ctx()))
                                .small(),
                        );
                    });
                }
                ui.end_row();
            }
        });

        submitted
    }

    /// The single line every submission outcome lands in: prompt, progress,
    /// prediction, or error. Tinted to match the state it shows.
    fn result_box(ui: &mut egui::Ui, form: &FormState, theme: &Theme) {
        let base_fill = ui.visuals().faint_bg_color;
        let (text_color, fill) = match form.status() {
            RequestStatus::Idle => (theme.muted(ui.ctx()), base_fill),
            RequestStatus::Loading => (ui.visuals().strong_text_color(), base_fill),
            RequestStatus::Done(_) => {
                let green = theme.green(ui.ctx());
                (green, blend_colors(base_fill, green, 0.12))
            }
            RequestStatus::Error(_) => {
                let red = theme.red(ui.ctx());
                (red, blend_colors(base_fill, red, 0.12))
            }
        };

        egui::Frame::new().fill(fill).corner_radius(6.0).inner_margin(10.0).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.set_min_height(20.0);
            ui.colored_label(text_color, form.status_line());
        });
    }
}
