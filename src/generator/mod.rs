//! Turns an expression and a language pair into a translated [`Flashcard`].
//!
//! The generator renders a fixed prompt, sends it to a [`LanguageModel`] with
//! sampling disabled and validates the reply against [`FLASHCARD_SCHEMA`].
//! Every call is a single blocking request. Nothing is retried.

pub mod openai;
pub mod prompt;
pub mod schema;

use tracing::{
    info,
    warn,
};

pub use openai::{
    LlmSettings,
    OpenAiBackend,
};
pub use schema::{
    OutputSchema,
    FLASHCARD_SCHEMA,
};

use crate::core::{
    Flashcard,
    FlashcardError,
    Language,
};

/// Flashcards should be reproducible for the same input.
pub const GENERATION_TEMPERATURE: f32 = 0.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f32,
}

/// A text-completion service. Implementations block until the reply arrives.
pub trait LanguageModel: Send + Sync {
    fn complete(&self, request: &CompletionRequest) -> Result<String, FlashcardError>;

    fn model_name(&self) -> &str;
}

pub struct FlashcardGenerator {
    backend: Box<dyn LanguageModel>,
    schema: OutputSchema,
}

impl FlashcardGenerator {
    pub fn new(backend: Box<dyn LanguageModel>) -> Self {
        Self { backend, schema: FLASHCARD_SCHEMA }
    }

    pub fn from_settings(settings: &LlmSettings) -> Result<Self, FlashcardError> {
        Ok(Self::new(Box::new(OpenAiBackend::new(settings)?)))
    }

    pub fn model_name(&self) -> &str {
        self.backend.model_name()
    }

    pub fn generate(
        &self,
        expression: &str,
        input_language: Language,
        output_language: Language,
    ) -> Result<Flashcard, FlashcardError> {
        info!(
            expression,
            %input_language,
            %output_language,
            model = self.backend.model_name(),
            prompt_version = prompt::PROMPT_VERSION,
            "Generating flashcard"
        );

        let request = CompletionRequest {
            prompt: prompt::flashcard_prompt(expression, input_language, output_language, &self.schema),
            temperature: GENERATION_TEMPERATURE,
        };

        let reply = self.backend.complete(&request)?;
        let fields = self.schema.parse(&reply).inspect_err(|e| {
            warn!(expression, "Unusable model reply: {e}");
        })?;

        // The model may refine the expression, but the language pair is the caller's.
        let mut card = Flashcard::from_mapping(&fields);
        card.input_language = input_language.name().to_string();
        card.output_language = output_language.name().to_string();
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct StubModel {
        reply: Result<String, String>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl StubModel {
        fn replying(reply: &str) -> Self {
            Self { reply: Ok(reply.to_string()), requests: Mutex::new(Vec::new()) }
        }

        fn failing(message: &str) -> Self {
            Self { reply: Err(message.to_string()), requests: Mutex::new(Vec::new()) }
        }
    }

    impl LanguageModel for StubModel {
        fn complete(&self, request: &CompletionRequest) -> Result<String, FlashcardError> {
            self.requests.lock().unwrap().push(request.clone());
            self.reply.clone().map_err(FlashcardError::Backend)
        }

        fn model_name(&self) -> &str {
            "stub"
        }
    }

    impl LanguageModel for std::sync::Arc<StubModel> {
        fn complete(&self, request: &CompletionRequest) -> Result<String, FlashcardError> {
            self.as_ref().complete(request)
        }

        fn model_name(&self) -> &str {
            self.as_ref().model_name()
        }
    }

    const PORE_OVER_REPLY: &str = "```json\n{\n\t\"input_expression\": \"pore over\",\n\t\"input_language\": \"English\",\n\t\"output_expression\": \"ślęczeć nad / studiować\",\n\t\"output_language\": \"Polish\",\n\t\"example_usage\": \"She spent hours poring over the documents.\"\n}\n```";

    #[test]
    fn generates_flashcard_from_stubbed_reply() {
        let generator = FlashcardGenerator::new(Box::new(StubModel::replying(PORE_OVER_REPLY)));

        let card = generator.generate("pore over", Language::English, Language::Polish).unwrap();

        assert_eq!(card.input_expression, "pore over");
        assert_eq!(card.output_language, "Polish");
        assert_eq!(card.output_expression.as_deref(), Some("ślęczeć nad / studiować"));
        assert!(card.is_translated());
    }

    #[test]
    fn sends_rendered_prompt_at_zero_temperature() {
        let stub = std::sync::Arc::new(StubModel::replying(PORE_OVER_REPLY));
        let generator = FlashcardGenerator::new(Box::new(stub.clone()));

        generator.generate("pore over", Language::English, Language::Polish).unwrap();

        let requests = stub.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].temperature, 0.0);
        assert!(requests[0].prompt.contains("input_expression: pore over"));
        assert!(requests[0].prompt.contains("translated to Polish language"));
    }

    #[test]
    fn language_fields_follow_requested_pair() {
        let reply = r#"{"input_expression": "cruel", "input_language": "english", "output_expression": "okrutny / brutalny", "output_language": "Polish language", "example_usage": "It was a cruel joke."}"#;
        let generator = FlashcardGenerator::new(Box::new(StubModel::replying(reply)));

        let card = generator.generate("cruel", Language::English, Language::Polish).unwrap();

        assert_eq!(card.input_language, "English");
        assert_eq!(card.output_language, "Polish");
        assert_eq!(Language::from_name(&card.input_language), Some(Language::English));
        assert!(card.back_label().starts_with(Language::Polish.flag()));
    }

    #[test]
    fn unparseable_reply_is_schema_error() {
        let generator =
            FlashcardGenerator::new(Box::new(StubModel::replying("Sorry, I cannot do that.")));

        let result = generator.generate("crude", Language::English, Language::Polish);
        assert!(matches!(result, Err(FlashcardError::SchemaParse(_))));
    }

    #[test]
    fn backend_failure_propagates() {
        let generator = FlashcardGenerator::new(Box::new(StubModel::failing("connection refused")));

        let result = generator.generate("crude", Language::English, Language::Polish);
        match result {
            Err(FlashcardError::Backend(message)) => assert_eq!(message, "connection refused"),
            other => panic!("expected backend error, got {other:?}"),
        }
    }
}
