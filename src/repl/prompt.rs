//! Custom prompt implementation for the selector editor

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

/// Prompt showing the field name and whether the last value was valid
pub struct SelectorPrompt {
    /// Field name
    name: String,
    /// Whether the last accepted value had only known selectors
    valid: bool,
}

impl SelectorPrompt {
    /// Create a new prompt
    ///
    /// # Arguments
    /// * `name` - Field name shown in the prompt
    /// * `valid` - Whether the last accepted value was valid
    pub fn new(name: impl Into<String>, valid: bool) -> Self {
        Self {
            name: name.into(),
            valid,
        }
    }

    /// Update the validity marker
    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }
}

impl Default for SelectorPrompt {
    fn default() -> Self {
        Self::new("selector", true)
    }
}

impl Prompt for SelectorPrompt {
    fn render_prompt_left(&self) -> std::borrow::Cow<'_, str> {
        if self.valid {
            format!("{}> ", self.name).into()
        } else {
            format!("{} (invalid)> ", self.name).into()
        }
    }

    fn render_prompt_right(&self) -> std::borrow::Cow<'_, str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> std::borrow::Cow<'_, str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> std::borrow::Cow<'_, str> {
        "... ".into()
    }

    /// Render the history search prompt
    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> std::borrow::Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}
