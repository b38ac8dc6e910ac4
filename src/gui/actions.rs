use crate::core::{
    GenerationRequest,
    Language,
    Page,
};

// A simple ui action queue so pages only need read access to the session
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    // Navigation
    SelectPage(Page),
    OpenSettings,

    // Generator page
    SetInputLanguage(Language),
    SetOutputLanguage(Language),
    Generate(GenerationRequest),
    ToggleExpandAll,

    // Import/Export page
    ImportFile,
    ExportFile,
    LoadSampleDeck,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
