use eframe::egui;

use crate::{
    core::{
        Page,
        SessionState,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

pub struct SidePanel;

impl SidePanel {
    /// `model_name` is `None` when no backend could be configured.
    pub fn show(
        ctx: &egui::Context,
        state: &SessionState,
        model_name: Option<&str>,
        theme: &Theme,
        actions: &mut ActionQueue,
    ) {
        egui::SidePanel::left("side_panel").resizable(false).default_width(180.0).show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(theme.heading(ctx, "🃏 Flashcards"));
            ui.separator();

            ui.label("Select Page");
            for page in Page::ALL {
                if ui.radio(state.page == page, page.label()).clicked() && state.page != page {
                    actions.push(UiAction::SelectPage(page));
                }
            }

            ui.separator();
            if ui.button("⚙ Settings").clicked() {
                actions.push(UiAction::OpenSettings);
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.add_space(4.0);
                Self::show_status_indicator(ui, model_name, theme);
                egui::widgets::global_theme_preference_switch(ui);
            });
        });
    }

    fn show_status_indicator(ui: &mut egui::Ui, model_name: Option<&str>, theme: &Theme) {
        let (color, tooltip) = match model_name {
            Some(model) => (theme.green(ui.ctx()), format!("Using {model}")),
            None => (theme.red(ui.ctx()), "No language model configured".to_string()),
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("Model").on_hover_text(tooltip.as_str());
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip.as_str());
        });
    }
}
