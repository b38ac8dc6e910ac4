use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};

pub const FIELD_INPUT_EXPRESSION: &str = "input_expression";
pub const FIELD_INPUT_LANGUAGE: &str = "input_language";
pub const FIELD_OUTPUT_EXPRESSION: &str = "output_expression";
pub const FIELD_OUTPUT_LANGUAGE: &str = "output_language";
pub const FIELD_EXAMPLE_USAGE: &str = "example_usage";

/// Languages offered by the language pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    Polish,
    Chinese,
    Hindi,
    Arabic,
    Portuguese,
    Bengali,
    Russian,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::Spanish,
        Language::Polish,
        Language::Chinese,
        Language::Hindi,
        Language::Arabic,
        Language::Portuguese,
        Language::Bengali,
        Language::Russian,
        Language::Japanese,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::Polish => "Polish",
            Language::Chinese => "Chinese",
            Language::Hindi => "Hindi",
            Language::Arabic => "Arabic",
            Language::Portuguese => "Portuguese",
            Language::Bengali => "Bengali",
            Language::Russian => "Russian",
            Language::Japanese => "Japanese",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::English => "🇬🇧",
            Language::Spanish => "🇪🇸",
            Language::Polish => "🇵🇱",
            Language::Chinese => "🇨🇳",
            Language::Hindi => "🇮🇳",
            Language::Arabic => "🇸🇦", // Arabic has no single country, Saudi Arabia stands in
            Language::Portuguese => "🇵🇹",
            Language::Bengali => "🇧🇩",
            Language::Russian => "🇷🇺",
            Language::Japanese => "🇯🇵",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.name() == name)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One source/target expression pair plus an example sentence.
///
/// The output fields stay `None` until a generation fills them in, and
/// [`Flashcard::to_mapping`] writes them as `null` in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub input_expression: String,
    pub input_language: String,
    pub output_expression: Option<String>,
    pub output_language: String,
    pub example_usage: Option<String>,
}

impl Flashcard {
    /// A card for an expression that has not been translated yet.
    pub fn new_pending(
        expression: impl Into<String>,
        input_language: Language,
        output_language: Language,
    ) -> Self {
        FlashcardFields::new()
            .input_expression(expression)
            .input_language(input_language.name())
            .output_language(output_language.name())
            .build()
    }

    /// Builds a card from a loosely-typed map of fields.
    ///
    /// Never fails: keys that are missing, or hold something other than a
    /// string, fall back to the per-field defaults of [`FlashcardFields`].
    pub fn from_mapping(fields: &Map<String, Value>) -> Self {
        let text = |key: &str| fields.get(key).and_then(Value::as_str).map(str::to_string);

        FlashcardFields {
            input_expression: text(FIELD_INPUT_EXPRESSION),
            input_language: text(FIELD_INPUT_LANGUAGE),
            output_expression: text(FIELD_OUTPUT_EXPRESSION),
            output_language: text(FIELD_OUTPUT_LANGUAGE),
            example_usage: text(FIELD_EXAMPLE_USAGE),
        }
        .build()
    }

    pub fn to_mapping(&self) -> Map<String, Value> {
        let optional = |value: &Option<String>| match value {
            Some(text) => Value::String(text.clone()),
            None => Value::Null,
        };

        let mut fields = Map::new();
        fields.insert(FIELD_INPUT_EXPRESSION.to_string(), Value::String(self.input_expression.clone()));
        fields.insert(FIELD_INPUT_LANGUAGE.to_string(), Value::String(self.input_language.clone()));
        fields.insert(FIELD_OUTPUT_EXPRESSION.to_string(), optional(&self.output_expression));
        fields.insert(FIELD_OUTPUT_LANGUAGE.to_string(), Value::String(self.output_language.clone()));
        fields.insert(FIELD_EXAMPLE_USAGE.to_string(), optional(&self.example_usage));
        fields
    }

    pub fn is_translated(&self) -> bool {
        self.output_expression.is_some()
    }

    /// Card front: flag of the input language followed by the expression.
    pub fn front_label(&self) -> String {
        with_flag(&self.input_language, &self.input_expression)
    }

    /// Card back: flag of the output language followed by the translation.
    pub fn back_label(&self) -> String {
        with_flag(&self.output_language, self.output_expression.as_deref().unwrap_or_default())
    }
}

fn with_flag(language: &str, text: &str) -> String {
    match Language::from_name(language) {
        Some(language) => format!("{} {}", language.flag(), text),
        None => text.to_string(),
    }
}

/// Builder with a declared default for every field.
///
/// Required text fields default to an empty string, the generated fields
/// default to absent.
#[derive(Debug, Clone, Default)]
pub struct FlashcardFields {
    pub input_expression: Option<String>,
    pub input_language: Option<String>,
    pub output_expression: Option<String>,
    pub output_language: Option<String>,
    pub example_usage: Option<String>,
}

impl FlashcardFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_expression(mut self, value: impl Into<String>) -> Self {
        self.input_expression = Some(value.into());
        self
    }

    pub fn input_language(mut self, value: impl Into<String>) -> Self {
        self.input_language = Some(value.into());
        self
    }

    pub fn output_expression(mut self, value: impl Into<String>) -> Self {
        self.output_expression = Some(value.into());
        self
    }

    pub fn output_language(mut self, value: impl Into<String>) -> Self {
        self.output_language = Some(value.into());
        self
    }

    pub fn example_usage(mut self, value: impl Into<String>) -> Self {
        self.example_usage = Some(value.into());
        self
    }

    pub fn build(self) -> Flashcard {
        Flashcard {
            input_expression: self.input_expression.unwrap_or_default(),
            input_language: self.input_language.unwrap_or_default(),
            output_expression: self.output_expression,
            output_language: self.output_language.unwrap_or_default(),
            example_usage: self.example_usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn mapping(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test mapping must be an object"),
        }
    }

    #[test]
    fn from_mapping_reads_all_fields() {
        let card = Flashcard::from_mapping(&mapping(json!({
            "input_expression": "cruel",
            "input_language": "English",
            "output_expression": "okrutny / brutalny",
            "output_language": "Polish",
            "example_usage": "The dictator's cruel treatment of his people sparked outrage.",
        })));

        assert_eq!(card.input_expression, "cruel");
        assert_eq!(card.input_language, "English");
        assert_eq!(card.output_expression.as_deref(), Some("okrutny / brutalny"));
        assert_eq!(card.output_language, "Polish");
        assert!(card.example_usage.is_some());
    }

    #[test]
    fn from_mapping_tolerates_missing_keys() {
        let empty = Flashcard::from_mapping(&Map::new());
        assert_eq!(empty.input_expression, "");
        assert_eq!(empty.input_language, "");
        assert_eq!(empty.output_expression, None);
        assert_eq!(empty.output_language, "");
        assert_eq!(empty.example_usage, None);

        let partial = Flashcard::from_mapping(&mapping(json!({
            "input_expression": "crude",
            "example_usage": "His jokes were crude.",
        })));
        assert_eq!(partial.input_expression, "crude");
        assert_eq!(partial.output_expression, None);
        assert_eq!(partial.example_usage.as_deref(), Some("His jokes were crude."));
    }

    #[test]
    fn from_mapping_treats_non_strings_as_missing() {
        let card = Flashcard::from_mapping(&mapping(json!({
            "input_expression": 42,
            "output_expression": null,
            "output_language": ["Polish"],
            "unknown_field": "ignored",
        })));

        assert_eq!(card.input_expression, "");
        assert_eq!(card.output_expression, None);
        assert_eq!(card.output_language, "");
    }

    #[test]
    fn to_mapping_writes_null_for_pending_fields() {
        let card = Flashcard::new_pending("pore over", Language::English, Language::Polish);
        let fields = card.to_mapping();

        assert_eq!(fields[FIELD_INPUT_EXPRESSION], json!("pore over"));
        assert_eq!(fields[FIELD_OUTPUT_LANGUAGE], json!("Polish"));
        assert_eq!(fields[FIELD_OUTPUT_EXPRESSION], Value::Null);
        assert_eq!(fields[FIELD_EXAMPLE_USAGE], Value::Null);
        assert_eq!(Flashcard::from_mapping(&fields), card);
    }

    #[test]
    fn labels_prefix_known_languages_with_flags() {
        let card = FlashcardFields::new()
            .input_expression("crude")
            .input_language("English")
            .output_expression("prostacki / prymitywny")
            .output_language("Klingon")
            .build();

        assert_eq!(card.front_label(), "🇬🇧 crude");
        assert_eq!(card.back_label(), "prostacki / prymitywny");
    }

    #[test]
    fn language_names_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_name(language.name()), Some(language));
        }
        assert_eq!(Language::from_name("english"), None);
    }
}
