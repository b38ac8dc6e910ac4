pub mod actions;
pub mod app;
pub mod error_modal;
pub mod generator_page;
pub mod import_export_page;
pub mod message_overlay;
pub mod settings;
pub mod side_panel;
pub mod theme;

pub use app::FlashcardsApp;
