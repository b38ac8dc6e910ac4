use tracing::{
    debug,
    info,
    warn,
};

use super::{
    collection::Flashcards,
    models::{
        Flashcard,
        Language,
    },
    FlashcardError,
};

pub const EXPORT_FILE_NAME: &str = "flashcards_export.json";
pub const EXPORT_MIME: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Generator,
    ImportExport,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Generator, Page::ImportExport];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Generator => "🤖 Generator",
            Page::ImportExport => "📂 Import/Export",
        }
    }
}

/// A novel expression the generator should translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub expression: String,
    pub input_language: Language,
    pub output_language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub contents: String,
}

/// Everything one interactive session mutates.
///
/// Owned by the window loop and handed to each handler, so a handler's effect
/// is visible in the values it changes here and nowhere else.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub flashcards: Flashcards,
    pub expand_all: bool,
    pub input_language: Language,
    pub output_language: Language,
    pub page: Page,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Language::English, Language::Polish)
    }
}

impl SessionState {
    pub fn new(input_language: Language, output_language: Language) -> Self {
        Self {
            flashcards: Flashcards::default(),
            expand_all: false,
            input_language,
            output_language,
            page: Page::default(),
        }
    }

    /// Returns a request only for non-empty expressions that are not in the
    /// collection yet.
    pub fn prepare_generation(&self, expression: &str) -> Option<GenerationRequest> {
        let expression = expression.trim();

        if expression.is_empty() {
            return None;
        }

        if self.flashcards.contains_expression(expression) {
            debug!(expression, "Flashcard already exists, skipping generation");
            return None;
        }

        Some(GenerationRequest {
            expression: expression.to_string(),
            input_language: self.input_language,
            output_language: self.output_language,
        })
    }

    /// Appends `card` unless its (possibly model-refined) expression is
    /// already stored. Returns whether the card was added.
    pub fn accept_generated(&mut self, card: Flashcard) -> bool {
        if self.flashcards.contains_expression(&card.input_expression) {
            debug!(expression = %card.input_expression, "Generated flashcard duplicates a stored one");
            return false;
        }

        info!(expression = %card.input_expression, "Flashcard added");
        self.flashcards.append(card);
        true
    }

    /// Replaces the collection with the cards of `document`.
    ///
    /// On error the current collection is left exactly as it was.
    pub fn import_document(&mut self, document: &[u8]) -> Result<usize, FlashcardError> {
        let imported = Flashcards::from_json(document).inspect_err(|e| {
            warn!("Rejected flashcards import: {e}");
        })?;

        let count = imported.len();
        self.flashcards = imported;
        info!(count, "Imported flashcards");
        Ok(count)
    }

    pub fn export_document(&self) -> Result<ExportArtifact, FlashcardError> {
        Ok(ExportArtifact {
            file_name: EXPORT_FILE_NAME,
            mime: EXPORT_MIME,
            contents: self.flashcards.to_pretty_json()?,
        })
    }

    pub fn load_sample_deck(&mut self) -> usize {
        self.flashcards = Flashcards::sample();
        self.flashcards.len()
    }

    pub fn toggle_expand_all(&mut self) -> bool {
        self.expand_all = !self.expand_all;
        self.expand_all
    }
}
