use std::sync::Arc;

use reedline::{
    ColumnarMenu, Emacs, FileBackedHistory, KeyCode, KeyModifiers, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use tracing::{debug, warn};

use crate::config::{DisplayConfig, HistoryConfig};
use crate::error::Result;
use crate::field::{SelectorField, type_text};
use crate::suggest::SelectorCatalog;

use super::completer::SelectorCompleter;
use super::highlighter::SelectorHighlighter;
use super::hinter::SelectorHinter;
use super::prompt::SelectorPrompt;
use super::summary::LineSummary;

const COMPLETION_MENU: &str = "completion_menu";

/// REPL engine hosting a selector field in a line editor
pub struct ReplEngine {
    /// Line editor for input
    editor: Reedline,

    /// Catalog shared by the editor helpers and the field
    catalog: Arc<SelectorCatalog>,

    /// Prompt reflecting the last accepted value
    prompt: SelectorPrompt,

    /// Whether to continue running
    running: bool,
}

impl ReplEngine {
    /// Create a new REPL engine
    ///
    /// # Arguments
    /// * `catalog` - Selector catalog
    /// * `history_config` - History configuration
    /// * `display_config` - Display configuration
    ///
    /// # Returns
    /// * `Result<Self>` - New REPL engine or error
    pub fn new(
        catalog: Arc<SelectorCatalog>,
        history_config: &HistoryConfig,
        display_config: &DisplayConfig,
    ) -> Result<Self> {
        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let menu = ColumnarMenu::default().with_name(COMPLETION_MENU);

        let mut editor = Reedline::create()
            .with_completer(Box::new(SelectorCompleter::new(Arc::clone(&catalog))))
            .with_menu(ReedlineMenu::EngineCompleter(Box::new(menu)))
            .with_edit_mode(Box::new(Emacs::new(keybindings)))
            .with_highlighter(Box::new(SelectorHighlighter::new(
                Arc::clone(&catalog),
                display_config.syntax_highlighting && display_config.color_output,
            )))
            .with_ansi_colors(display_config.color_output)
            .with_quick_completions(true);

        if display_config.inline_hints {
            editor = editor.with_hinter(Box::new(SelectorHinter::new(Arc::clone(&catalog))));
        }

        if history_config.persist {
            match FileBackedHistory::with_file(
                history_config.max_size,
                history_config.file_path.clone(),
            ) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled: {}", e),
            }
        } else {
            editor = editor.with_history(Box::new(FileBackedHistory::new(history_config.max_size)?));
        }

        Ok(Self {
            editor,
            catalog,
            prompt: SelectorPrompt::default(),
            running: true,
        })
    }

    /// Read a single line of input
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Input line or None on EOF / interrupt
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.read_line(&self.prompt)? {
            Signal::Success(line) => Ok(Some(line)),
            _ => {
                self.running = false;
                Ok(None)
            }
        }
    }

    /// Run an accepted line through a selector field
    ///
    /// The line is typed into a fresh field; the value it publishes is
    /// summarized and the prompt updated.
    pub fn process_input(&mut self, input: &str) -> LineSummary {
        let mut published = String::new();
        {
            let mut field =
                SelectorField::new(Arc::clone(&self.catalog), "", |v: &str| published = v.to_string());
            type_text(&mut field, input);
        }

        let summary = LineSummary::from_value(&self.catalog, &published);
        debug!(
            "Accepted '{}' with {} selectors",
            summary.value,
            summary.selectors.len()
        );
        self.prompt.set_valid(summary.is_valid());
        summary
    }

    /// Check if REPL is still running
    pub fn is_running(&self) -> bool {
        self.running
    }
}
