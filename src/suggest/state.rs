//! Dropdown state derived from the engine

/// What the suggestion dropdown shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
    /// Whether the dropdown has been opened
    pub visible: bool,
    /// Candidates in catalog order
    pub candidates: Vec<String>,
}

impl SuggestionState {
    /// Open the dropdown with the given candidates
    pub fn show(&mut self, candidates: Vec<String>) {
        self.candidates = candidates;
        self.visible = true;
    }

    /// Close the dropdown, keeping candidates
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Close the dropdown and drop candidates
    pub fn reset(&mut self) {
        self.visible = false;
        self.candidates.clear();
    }

    /// An open dropdown with no candidates is not rendered
    pub fn is_shown(&self) -> bool {
        self.visible && !self.candidates.is_empty()
    }

    /// Candidates to render, empty when the dropdown is hidden
    pub fn rendered(&self) -> &[String] {
        if self.is_shown() {
            &self.candidates
        } else {
            &[]
        }
    }
}
