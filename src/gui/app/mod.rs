mod modals;

use std::{
    fs,
    sync::Arc,
    time::Duration,
};

use eframe::egui;
use modals::Modals;
use tracing::{
    error,
    info,
    warn,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    generator_page::{
        generator_page,
        GeneratorView,
    },
    import_export_page::import_export_page,
    message_overlay::MessageOverlay,
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    side_panel::SidePanel,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        FlashcardError,
        GenerationRequest,
        Page,
        SessionState,
    },
    generator::FlashcardGenerator,
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub struct FlashcardsApp {
    // Session
    pub session: SessionState,

    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub theme: Theme,
    pub message_overlay: MessageOverlay,
    pub generator_view: GeneratorView,
    pub import_status: Option<String>,
    actions: ActionQueue,

    // Modals
    modals: Modals,

    // External Services
    generator: Option<Arc<FlashcardGenerator>>,
    task_manager: TaskManager,
}

impl FlashcardsApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let session = SessionState::new(settings_data.input_language, settings_data.output_language);

        let mut app = Self {
            // Session
            session,

            // Configuration
            settings_data,

            // UI State
            theme: Theme::dracula(),
            message_overlay: MessageOverlay::new(),
            generator_view: GeneratorView::default(),
            import_status: None,
            actions: ActionQueue::new(),

            // Modals
            modals: Modals::default(),

            // External Services
            generator: None,
            task_manager: TaskManager::new(),
        };

        // A missing key is reported when the user first tries to generate.
        let _ = app.rebuild_generator();
        app.setup_theme(cc);

        app
    }

    fn setup_theme(&self, cc: &eframe::CreationContext<'_>) {
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);
        set_theme(&cc.egui_ctx, &self.theme);
    }

    fn rebuild_generator(&mut self) -> Result<(), FlashcardError> {
        match FlashcardGenerator::from_settings(&self.settings_data.llm) {
            Ok(generator) => {
                info!(model = generator.model_name(), "Language model backend ready");
                self.generator = Some(Arc::new(generator));
                Ok(())
            }
            Err(e) => {
                warn!("Language model backend unavailable: {e}");
                self.generator = None;
                Err(e)
            }
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            error!("Failed to save settings: {e}");
        }
    }

    fn remember_languages(&mut self) {
        self.settings_data.input_language = self.session.input_language;
        self.settings_data.output_language = self.session.output_language;
        self.save_settings();
    }
}

impl eframe::App for FlashcardsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        let busy = self.task_manager.is_busy();

        SidePanel::show(
            ctx,
            &self.session,
            self.generator.as_ref().map(|generator| generator.model_name()),
            &self.theme,
            &mut self.actions,
        );

        egui::CentralPanel::default().show(ctx, |ui| match self.session.page {
            Page::Generator => generator_page(
                ui,
                &self.session,
                &mut self.generator_view,
                busy,
                &self.theme,
                &mut self.actions,
            ),
            Page::ImportExport => import_export_page(
                ui,
                &self.session,
                self.import_status.as_deref(),
                &self.theme,
                &mut self.actions,
            ),
        });

        self.message_overlay.show(ctx, &self.theme);
        self.modals.error.show(ctx);

        if let Some(llm_settings) = self.modals.settings.show(ctx) {
            self.settings_data.llm = llm_settings;
            self.save_settings();

            if let Err(e) = self.rebuild_generator() {
                self.modals
                    .error
                    .show_flashcard_error("The new settings could not be applied.", &e);
            }
        }

        let actions: Vec<UiAction> = self.actions.drain().collect();
        for action in actions {
            self.apply_action(action);
        }

        if busy {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl FlashcardsApp {
    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::SelectPage(page) => self.session.page = page,
            UiAction::OpenSettings => {
                self.modals.settings.open_settings(self.settings_data.llm.clone());
            }
            UiAction::SetInputLanguage(language) => {
                self.session.input_language = language;
                self.remember_languages();
            }
            UiAction::SetOutputLanguage(language) => {
                self.session.output_language = language;
                self.remember_languages();
            }
            UiAction::Generate(request) => self.start_generation(request),
            UiAction::ToggleExpandAll => {
                let expanded = self.session.toggle_expand_all();
                self.generator_view.force_open = Some(expanded);
            }
            UiAction::ImportFile => self.import_file(),
            UiAction::ExportFile => self.export_file(),
            UiAction::LoadSampleDeck => {
                let count = self.session.load_sample_deck();
                self.import_status = Some(format!("Loaded {count} sample flashcards!"));
            }
        }
    }

    fn start_generation(&mut self, request: GenerationRequest) {
        if self.task_manager.is_busy() {
            return;
        }

        if self.generator.is_none() {
            if let Err(e) = self.rebuild_generator() {
                self.modals
                    .error
                    .show_flashcard_error("No language model backend is configured.", &e);
                return;
            }
        }

        let Some(generator) = self.generator.clone() else {
            return;
        };

        self.message_overlay
            .set_message(format!("Generating flashcard for \"{}\"...", request.expression));
        self.task_manager.generate_flashcard(generator, request);
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::FlashcardGenerated { expression, result } => {
                self.message_overlay.clear_message();

                match result {
                    Ok(card) => {
                        let refined = card.input_expression.clone();
                        if !self.session.accept_generated(card) {
                            self.modals.error.show_error(
                                "Duplicate Flashcard",
                                format!("A flashcard for \"{refined}\" already exists."),
                                None::<String>,
                            );
                        }
                        self.generator_view.expression.clear();
                    }
                    Err(e) => {
                        error!(expression = %expression, "Flashcard generation failed: {e}");
                        self.modals.error.show_flashcard_error(
                            format!("Could not generate a flashcard for \"{expression}\"."),
                            &e,
                        );
                    }
                }
            }
        }
    }

    fn import_file(&mut self) {
        let Some(path) = rfd::FileDialog::new().add_filter("JSON", &["json"]).pick_file() else {
            return;
        };

        let result = fs::read(&path)
            .map_err(FlashcardError::from)
            .and_then(|document| self.session.import_document(&document));

        match result {
            Ok(count) => self.import_status = Some(format!("Imported {count} flashcards!")),
            Err(e) => {
                self.import_status = None;
                self.modals.error.show_flashcard_error(e.import_failure_message(), &e);
            }
        }
    }

    fn export_file(&mut self) {
        let artifact = match self.session.export_document() {
            Ok(artifact) => artifact,
            Err(e) => {
                self.modals.error.show_flashcard_error("Could not export flashcards.", &e);
                return;
            }
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(artifact.file_name)
            .save_file()
        else {
            return;
        };

        match fs::write(&path, artifact.contents) {
            Ok(()) => {
                info!(path = %path.display(), mime = artifact.mime, "Exported flashcards");
            }
            Err(e) => {
                self.modals
                    .error
                    .show_flashcard_error("Could not write the export file.", &FlashcardError::from(e));
            }
        }
    }
}
