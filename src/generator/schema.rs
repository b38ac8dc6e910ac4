//! Declared output schema for model replies and the parser that enforces it.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{
    Map,
    Value,
};

use crate::core::{
    models::{
        FIELD_EXAMPLE_USAGE,
        FIELD_INPUT_EXPRESSION,
        FIELD_INPUT_LANGUAGE,
        FIELD_OUTPUT_EXPRESSION,
        FIELD_OUTPUT_LANGUAGE,
    },
    FlashcardError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
}

impl FieldType {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ResponseField {
    pub name: &'static str,
    pub field_type: FieldType,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct OutputSchema {
    fields: &'static [ResponseField],
}

pub const FLASHCARD_SCHEMA: OutputSchema = OutputSchema {
    fields: &[
        ResponseField {
            name: FIELD_INPUT_EXPRESSION,
            field_type: FieldType::String,
            description: "Original expression entered by the user, refined to create the translated expression.",
        },
        ResponseField {
            name: FIELD_INPUT_LANGUAGE,
            field_type: FieldType::String,
            description: "Language of the input expression.",
        },
        ResponseField {
            name: FIELD_OUTPUT_EXPRESSION,
            field_type: FieldType::String,
            description: "Translation of the refined expression entered by the user.",
        },
        ResponseField {
            name: FIELD_OUTPUT_LANGUAGE,
            field_type: FieldType::String,
            description: "Language of the output expression.",
        },
        ResponseField {
            name: FIELD_EXAMPLE_USAGE,
            field_type: FieldType::String,
            description: "Example usage of the input expression, used to give the user some example context where it could be used. Limited to one sentence.",
        },
    ],
};

fn fenced_block() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").expect("fence pattern is valid")
    })
}

impl OutputSchema {
    pub fn fields(&self) -> &[ResponseField] {
        self.fields
    }

    /// Instructions appended to the prompt so the model replies in a shape
    /// [`OutputSchema::parse`] accepts.
    pub fn format_instructions(&self) -> String {
        let lines: Vec<String> = self
            .fields
            .iter()
            .map(|field| {
                format!(
                    "\t\"{}\": {}  // {}",
                    field.name,
                    field.field_type.type_name(),
                    field.description
                )
            })
            .collect();

        format!(
            "The output should be a markdown code snippet formatted in the following schema, \
             including the leading and trailing \"```json\" and \"```\":\n\n```json\n{{\n{}\n}}\n```",
            lines.join("\n")
        )
    }

    /// Extracts the JSON object from a model reply and checks every declared
    /// field is present with the declared type.
    ///
    /// A fenced ```json block is preferred; without one the whole reply is
    /// parsed. Extra keys are kept, the caller ignores them.
    pub fn parse(&self, text: &str) -> Result<Map<String, Value>, FlashcardError> {
        let payload = fenced_block()
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|block| block.as_str())
            .unwrap_or_else(|| text.trim());

        let value: Value = serde_json::from_str(payload)
            .map_err(|e| FlashcardError::SchemaParse(format!("reply is not valid JSON: {e}")))?;

        let Value::Object(object) = value else {
            return Err(FlashcardError::SchemaParse("reply is not a JSON object".to_string()));
        };

        for field in self.fields {
            match object.get(field.name) {
                None => {
                    return Err(FlashcardError::SchemaParse(format!(
                        "missing field `{}`",
                        field.name
                    )))
                }
                Some(value) if !field.field_type.matches(value) => {
                    return Err(FlashcardError::SchemaParse(format!(
                        "field `{}` is not a {}",
                        field.name,
                        field.field_type.type_name()
                    )))
                }
                Some(_) => {}
            }
        }

        Ok(object)
    }
}
