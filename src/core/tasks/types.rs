use crate::core::{
    Flashcard,
    FlashcardError,
};

#[derive(Debug)]
pub enum TaskResult {
    FlashcardGenerated { expression: String, result: Result<Flashcard, FlashcardError> },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::FlashcardGenerated { .. } => "flashcard_generation",
        }
    }
}
