use eframe::egui::{
    self,
    RichText,
};

use crate::{
    core::{
        Flashcard,
        Language,
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

/// Widget state of the generator page that is not part of the session.
#[derive(Default)]
pub struct GeneratorView {
    pub expression: String,
    /// Forces every card open or shut for the next frame only.
    pub force_open: Option<bool>,
}

pub fn generator_page(
    ui: &mut egui::Ui,
    state: &SessionState,
    view: &mut GeneratorView,
    busy: bool,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    ui.heading(theme.heading(ui.ctx(), "Flashcards generator"));
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        if let Some(language) = language_picker(
            &mut columns[0],
            "Select an input language:",
            "input_language",
            state.input_language,
        ) {
            actions.push(UiAction::SetInputLanguage(language));
        }
        if let Some(language) = language_picker(
            &mut columns[1],
            "Select an output language:",
            "output_language",
            state.output_language,
        ) {
            actions.push(UiAction::SetOutputLanguage(language));
        }
    });

    ui.add_space(8.0);
    ui.label("Expression");
    let response = ui.add_enabled(
        !busy,
        egui::TextEdit::singleline(&mut view.expression)
            .hint_text("Enter an expression and press Enter to generate a flashcard")
            .desired_width(f32::INFINITY),
    );

    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        if let Some(request) = state.prepare_generation(&view.expression) {
            actions.push(UiAction::Generate(request));
        }
    }

    ui.separator();

    if ui.button("Expand/Collapse All").clicked() {
        actions.push(UiAction::ToggleExpandAll);
    }
    ui.add_space(4.0);

    show_flashcards(ui, state, view, theme);
}

fn language_picker(
    ui: &mut egui::Ui,
    label: &str,
    id: &str,
    current: Language,
) -> Option<Language> {
    let mut selected = current;

    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(format!("{} {}", selected.flag(), selected.name()))
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for language in Language::ALL {
                ui.selectable_value(
                    &mut selected,
                    language,
                    format!("{} {}", language.flag(), language.name()),
                );
            }
        });

    (selected != current).then_some(selected)
}

fn show_flashcards(
    ui: &mut egui::Ui,
    state: &SessionState,
    view: &mut GeneratorView,
    theme: &Theme,
) {
    if state.flashcards.is_empty() {
        ui.label(
            RichText::new("Generate a flashcard or import a file with previously generated ones")
                .color(theme.comment(ui.ctx())),
        );
        return;
    }

    let force_open = view.force_open.take();

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        ui.columns(2, |columns| {
            for (index, card) in state.flashcards.iter().enumerate() {
                flashcard_entry(&mut columns[index % 2], index, card, state.expand_all, force_open, theme);
            }
        });
    });
}

fn flashcard_entry(
    ui: &mut egui::Ui,
    index: usize,
    card: &Flashcard,
    expand_all: bool,
    force_open: Option<bool>,
    theme: &Theme,
) {
    egui::CollapsingHeader::new(card.front_label())
        .id_salt(("flashcard", index))
        .default_open(expand_all)
        .open(force_open)
        .show(ui, |ui| {
            if card.is_translated() {
                ui.label(theme.translation(ui.ctx(), &card.back_label()));
            } else {
                ui.weak("Not translated yet");
            }

            if let Some(example) = &card.example_usage {
                ui.add_space(4.0);
                ui.label(example);
            }
        });
}
