pub mod collection;
pub mod errors;
pub mod http;
pub mod models;
pub mod session;
pub mod tasks;

pub use collection::Flashcards;
pub use errors::FlashcardError;
pub use models::{ Flashcard, FlashcardFields, Language };
pub use session::{ ExportArtifact, GenerationRequest, Page, SessionState };
