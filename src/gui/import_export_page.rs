use eframe::egui;

use crate::{
    core::SessionState,
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

pub fn import_export_page(
    ui: &mut egui::Ui,
    state: &SessionState,
    status: Option<&str>,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    ui.heading(theme.heading(ui.ctx(), "Import file with flashcards"));
    ui.add_space(4.0);
    if ui.button("📂 Select a file").clicked() {
        actions.push(UiAction::ImportFile);
    }

    if let Some(status) = status {
        ui.add_space(4.0);
        ui.colored_label(theme.green(ui.ctx()), status);
    }

    ui.separator();

    ui.heading(theme.heading(ui.ctx(), "Export generated flashcards"));
    ui.add_space(4.0);
    ui.label(format!("{} flashcards in this session", state.flashcards.len()));
    if ui.button("💾 Download flashcards").clicked() {
        actions.push(UiAction::ExportFile);
    }

    ui.separator();

    ui.heading(theme.heading(ui.ctx(), "Sample deck"));
    ui.add_space(4.0);
    ui.label("Replaces the current flashcards with a few English → Polish examples.");
    if ui.button("Load sample deck").clicked() {
        actions.push(UiAction::LoadSampleDeck);
    }
}
