use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("Malformed flashcards document: {0}")]
    MalformedDocument(String),

    #[error("Model response did not match the flashcard schema: {0}")]
    SchemaParse(String),

    #[error("Language model backend error: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlashcardError {
    /// Short title used by the error modal.
    pub fn title(&self) -> &'static str {
        match self {
            FlashcardError::MalformedDocument(_) => "Import Error",
            FlashcardError::SchemaParse(_) => "Generation Error",
            FlashcardError::Backend(_) => "Language Model Error",
            FlashcardError::Io(_) | FlashcardError::Json(_) => "File Error",
        }
    }

    /// What to tell the user when importing a file failed with this error.
    pub fn import_failure_message(&self) -> &'static str {
        match self {
            FlashcardError::Io(_) => "The selected file could not be read.",
            _ => "Invalid JSON file. Please upload a valid JSON file.",
        }
    }
}

impl From<std::io::Error> for FlashcardError {
    fn from(error: std::io::Error) -> Self {
        FlashcardError::Io(Box::new(error))
    }
}
