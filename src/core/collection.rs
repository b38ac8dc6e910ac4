use serde::Serialize;
use serde_json::{
    ser::PrettyFormatter,
    Map,
    Value,
};

use super::{
    models::{
        Flashcard,
        FlashcardFields,
    },
    FlashcardError,
};

const FLASHCARDS_KEY: &str = "flashcards";

/// The ordered set of flashcards held for the running session.
///
/// Insertion order matters: even positions render in the left column and odd
/// positions in the right one. Duplicates are not rejected here, callers use
/// [`Flashcards::contains_expression`] before generating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flashcards {
    cards: Vec<Flashcard>,
}

impl Flashcards {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self { cards }
    }

    pub fn append(&mut self, card: Flashcard) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Flashcard> {
        self.cards.iter()
    }

    pub fn contains_expression(&self, expression: &str) -> bool {
        self.cards.iter().any(|card| card.input_expression == expression)
    }

    /// `{"flashcards": [...]}` with one field map per card, in order.
    pub fn to_json(&self) -> Value {
        let cards = self.cards.iter().map(|card| Value::Object(card.to_mapping())).collect();

        let mut document = Map::new();
        document.insert(FLASHCARDS_KEY.to_string(), Value::Array(cards));
        Value::Object(document)
    }

    /// Export form of [`Flashcards::to_json`], indented by four spaces.
    pub fn to_pretty_json(&self) -> Result<String, FlashcardError> {
        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        self.to_json().serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Rebuilds a collection from an exported document.
    ///
    /// The document must be JSON with a `flashcards` array of objects. Fields
    /// inside each object are read tolerantly, see [`Flashcard::from_mapping`].
    pub fn from_json(document: impl AsRef<[u8]>) -> Result<Self, FlashcardError> {
        let value: Value = serde_json::from_slice(document.as_ref())
            .map_err(|e| FlashcardError::MalformedDocument(format!("invalid JSON: {e}")))?;

        let entries = value.get(FLASHCARDS_KEY).and_then(Value::as_array).ok_or_else(|| {
            FlashcardError::MalformedDocument(format!("missing `{FLASHCARDS_KEY}` array"))
        })?;

        let cards = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry.as_object().map(Flashcard::from_mapping).ok_or_else(|| {
                    FlashcardError::MalformedDocument(format!(
                        "flashcard #{} is not an object",
                        index + 1
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { cards })
    }

    /// English to Polish demo deck.
    pub fn sample() -> Self {
        let card = |input: &str, output: &str, example: &str| {
            FlashcardFields::new()
                .input_expression(input)
                .input_language("English")
                .output_expression(output)
                .output_language("Polish")
                .example_usage(example)
                .build()
        };

        Self::new(vec![
            card(
                "cruel",
                "okrutny / brutalny",
                "The dictator's cruel treatment of his people sparked international outrage.",
            ),
            card(
                "let someone off the hook",
                "uwolnić kogoś od odpowiedzialności / odpuścić komuś",
                "I decided to let my friend off the hook and not hold him responsible for the mistake.",
            ),
            card(
                "it absorbed me",
                "to mnie wchłonęło / to mnie pochłonęło",
                "The book was so captivating that it absorbed me completely.",
            ),
            card(
                "get my thoughts in order",
                "uporządkować moje myśli / poukładać moje myśli",
                "I need some time alone to get my thoughts in order before making a decision.",
            ),
            card("crude", "prostacki / prymitywny", "His jokes were crude and offensive."),
            card(
                "pore over",
                "prześwietlić / szperać",
                "She spent hours poring over the documents to find the missing information.",
            ),
        ])
    }
}

impl<'a> IntoIterator for &'a Flashcards {
    type Item = &'a Flashcard;
    type IntoIter = std::slice::Iter<'a, Flashcard>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Language;

    const CRUDE_DOCUMENT: &str = r#"{"flashcards":[{"input_expression":"crude","input_language":"English","output_expression":"prostacki / prymitywny","output_language":"Polish","example_usage":"His jokes were crude."}]}"#;

    #[test]
    fn imports_single_card_document() {
        let flashcards = Flashcards::from_json(CRUDE_DOCUMENT).unwrap();

        assert_eq!(flashcards.len(), 1);
        let card = flashcards.iter().next().unwrap();
        assert_eq!(card.input_expression, "crude");
        assert_eq!(card.output_language, "Polish");
    }

    #[test]
    fn export_then_import_keeps_order_and_fields() {
        let mut flashcards = Flashcards::sample();
        flashcards.append(Flashcard::new_pending("pending", Language::Spanish, Language::Japanese));

        let exported = flashcards.to_pretty_json().unwrap();
        let imported = Flashcards::from_json(&exported).unwrap();

        assert_eq!(imported.len(), flashcards.len());
        assert_eq!(imported, flashcards);
    }

    #[test]
    fn to_json_lists_cards_in_insertion_order() {
        let flashcards = Flashcards::sample();
        let reparsed: Value = serde_json::from_str(&flashcards.to_json().to_string()).unwrap();

        let entries = reparsed["flashcards"].as_array().unwrap();
        assert_eq!(entries.len(), flashcards.len());
        for (entry, card) in entries.iter().zip(flashcards.iter()) {
            assert_eq!(entry["input_expression"], Value::String(card.input_expression.clone()));
        }
    }

    #[test]
    fn pretty_json_uses_four_space_indent() {
        let exported = Flashcards::sample().to_pretty_json().unwrap();
        assert!(exported.starts_with("{\n    \"flashcards\": ["));
    }

    #[test]
    fn export_lists_fields_in_declaration_order() {
        let exported = Flashcards::sample().to_pretty_json().unwrap();
        let positions: Vec<usize> = [
            "\"input_expression\"",
            "\"input_language\"",
            "\"output_expression\"",
            "\"output_language\"",
            "\"example_usage\"",
        ]
        .iter()
        .map(|key| exported.find(key).unwrap())
        .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{exported}");
    }

    #[test]
    fn rejects_non_json_text() {
        let result = Flashcards::from_json("flashcards: nope");
        assert!(matches!(result, Err(FlashcardError::MalformedDocument(_))));
    }

    #[test]
    fn rejects_document_without_flashcards_key() {
        let result = Flashcards::from_json(r#"{"cards": []}"#);
        assert!(matches!(result, Err(FlashcardError::MalformedDocument(_))));

        let result = Flashcards::from_json(r#"{"flashcards": "cruel"}"#);
        assert!(matches!(result, Err(FlashcardError::MalformedDocument(_))));

        let result = Flashcards::from_json(r#"[{"input_expression": "cruel"}]"#);
        assert!(matches!(result, Err(FlashcardError::MalformedDocument(_))));
    }

    #[test]
    fn rejects_entries_that_are_not_objects() {
        let result = Flashcards::from_json(r#"{"flashcards": [{"input_expression": "a"}, "b"]}"#);
        match result {
            Err(FlashcardError::MalformedDocument(message)) => assert!(message.contains("#2")),
            other => panic!("expected malformed document, got {other:?}"),
        }
    }

    #[test]
    fn imported_cards_fill_missing_fields_with_defaults() {
        let flashcards =
            Flashcards::from_json(r#"{"flashcards": [{"input_expression": "crude"}, {}]}"#).unwrap();

        assert_eq!(flashcards.len(), 2);
        let cards: Vec<_> = flashcards.iter().collect();
        assert_eq!(cards[0].input_expression, "crude");
        assert_eq!(cards[0].output_expression, None);
        assert_eq!(cards[1].input_expression, "");
    }

    #[test]
    fn contains_expression_matches_exact_input() {
        let flashcards = Flashcards::sample();
        assert!(flashcards.contains_expression("cruel"));
        assert!(!flashcards.contains_expression("Cruel"));
        assert!(!flashcards.contains_expression("kind"));
    }
}
