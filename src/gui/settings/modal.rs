use eframe::egui;

use crate::generator::LlmSettings;

pub struct SettingsModal {
    open: bool,
    draft: LlmSettings,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, draft: LlmSettings::default() }
    }

    pub fn open_settings(&mut self, current_settings: LlmSettings) {
        self.draft = current_settings;
        self.open = true;
    }

    /// Returns the edited settings once the user saves them.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<LlmSettings> {
        if !self.open {
            return None;
        }

        let mut saved = None;
        let draft = &mut self.draft;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.heading("Language Model Settings");
            ui.add_space(8.0);

            egui::Grid::new("settings_grid").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
                ui.label("Model");
                ui.text_edit_singleline(&mut draft.model);
                ui.end_row();

                ui.label("Base URL");
                ui.text_edit_singleline(&mut draft.base_url);
                ui.end_row();

                ui.label("API key variable");
                ui.text_edit_singleline(&mut draft.api_key_env)
                    .on_hover_text("Environment variable that holds the API key");
                ui.end_row();

                ui.label("Timeout (s)");
                ui.add(egui::DragValue::new(&mut draft.timeout_secs).range(5..=600));
                ui.end_row();
            });

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Reset to defaults").clicked() {
                    *draft = LlmSettings::default();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() {
                        saved = Some(draft.clone());
                        ui.close();
                    }
                    if ui.button("Cancel").clicked() {
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        saved
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
