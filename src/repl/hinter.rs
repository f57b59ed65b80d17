//! Hinter for reedline - shows the rest of the first matching suggestion inline

use std::sync::Arc;

use nu_ansi_term::{Color, Style};
use reedline::{Hinter, History};

use crate::field::replay_line;
use crate::suggest::SelectorCatalog;

/// Selector hinter for reedline
pub struct SelectorHinter {
    /// Catalog used to replay the line
    catalog: Arc<SelectorCatalog>,
    /// Style for hints
    style: Style,
    /// Current hint text
    current_hint: String,
}

impl SelectorHinter {
    /// Create a new hinter with default style
    pub fn new(catalog: Arc<SelectorCatalog>) -> Self {
        Self {
            catalog,
            style: Style::new().italic().fg(Color::DarkGray),
            current_hint: String::new(),
        }
    }

    /// Remainder of the first suggestion starting with the typed fragment
    fn hint_for(&self, line: &str) -> Option<String> {
        let engine = replay_line(Arc::clone(&self.catalog), line);
        let fragment = engine.fragment().filter(|f| !f.is_empty())?;
        let needle = fragment.to_lowercase();

        engine
            .suggestions()
            .iter()
            .filter(|candidate| candidate.to_lowercase().starts_with(&needle))
            .find_map(|candidate| candidate.get(fragment.len()..))
            .filter(|rest| !rest.is_empty())
            .map(str::to_string)
    }
}

impl Hinter for SelectorHinter {
    /// Provide a hint for the current line
    ///
    /// # Arguments
    /// * `line` - The current input line
    /// * `pos` - Cursor position
    /// * `_history` - Command history (unused)
    /// * `use_ansi_coloring` - Whether to use ANSI colors
    /// * `_cwd` - Current working directory (unused)
    ///
    /// # Returns
    /// * `String` - Hint text to display after the cursor
    fn handle(
        &mut self,
        line: &str,
        pos: usize,
        _history: &dyn History,
        use_ansi_coloring: bool,
        _cwd: &str,
    ) -> String {
        self.current_hint.clear();

        // Only hint when the cursor is at the end of the line
        if pos != line.len() || line.trim().is_empty() {
            return String::new();
        }

        match self.hint_for(line) {
            Some(hint) => {
                self.current_hint = hint;
                if use_ansi_coloring {
                    self.style.paint(&self.current_hint).to_string()
                } else {
                    self.current_hint.clone()
                }
            }
            None => String::new(),
        }
    }

    /// Return the complete hint
    fn complete_hint(&self) -> String {
        self.current_hint.clone()
    }

    /// Hints are a single token
    fn next_hint_token(&self) -> String {
        self.current_hint.clone()
    }
}
