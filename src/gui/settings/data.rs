use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::Language,
    generator::LlmSettings,
};

pub const SETTINGS_FILE: &str = "settings.json";

/// User preferences kept between runs. Flashcards themselves are never saved here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub llm: LlmSettings,
    pub input_language: Language,
    pub output_language: Language,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            llm: LlmSettings::default(),
            input_language: Language::English,
            output_language: Language::Polish,
        }
    }
}
