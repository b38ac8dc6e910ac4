use std::time::Duration;

use reqwest::blocking::Client;

use crate::core::FlashcardError;

const USER_AGENT: &str = concat!("flashcards_generator/", env!("CARGO_PKG_VERSION"), " (+reqwest)");

pub fn http_client(timeout: Duration) -> Result<Client, FlashcardError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FlashcardError::Backend(format!("HTTP client build failed: {e}")))
}
