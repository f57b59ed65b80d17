//! Selector highlighter for the line editor

use std::sync::Arc;

use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use super::summary::{TokenClass, classify};
use crate::suggest::SelectorCatalog;

/// Colors selectors and operators as they are typed
pub struct SelectorHighlighter {
    catalog: Arc<SelectorCatalog>,
    enabled: bool,
}

impl SelectorHighlighter {
    /// Create a new highlighter
    pub fn new(catalog: Arc<SelectorCatalog>, enabled: bool) -> Self {
        Self { catalog, enabled }
    }

    fn style_for(class: &TokenClass) -> Style {
        match class {
            TokenClass::Selector => Color::Green.bold(),
            TokenClass::UnknownSelector => Color::Red.into(),
            TokenClass::Operator => Color::Yellow.bold(),
            TokenClass::Text => Style::default(),
        }
    }
}

impl Highlighter for SelectorHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();

        if !self.enabled {
            styled.push((Style::default(), line.to_string()));
            return styled;
        }

        let mut word = String::new();
        for ch in line.chars() {
            if ch.is_whitespace() {
                if !word.is_empty() {
                    let style = Self::style_for(&classify(&self.catalog, &word));
                    styled.push((style, std::mem::take(&mut word)));
                }
                styled.push((Style::default(), ch.to_string()));
            } else {
                word.push(ch);
            }
        }

        if !word.is_empty() {
            let style = Self::style_for(&classify(&self.catalog, &word));
            styled.push((style, word));
        }

        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter(enabled: bool) -> SelectorHighlighter {
        SelectorHighlighter::new(SelectorCatalog::shared_builtin(), enabled)
    }

    fn raw_text(result: &StyledText) -> String {
        result.buffer.iter().map(|(_, text)| text.as_str()).collect()
    }

    #[test]
    fn test_segments_keep_text() {
        let line = "$string  && $frm";
        let result = highlighter(true).highlight(line, 0);
        assert_eq!(raw_text(&result), line);
    }

    #[test]
    fn test_styles_by_class() {
        let result = highlighter(true).highlight("$string && $frm", 0);
        let styles: Vec<(Style, &str)> = result
            .buffer
            .iter()
            .map(|(style, text)| (*style, text.as_str()))
            .collect();

        assert_eq!(styles[0], (Color::Green.bold(), "$string"));
        assert_eq!(styles[2], (Color::Yellow.bold(), "&&"));
        assert_eq!(styles[4], (Style::from(Color::Red), "$frm"));
    }

    #[test]
    fn test_disabled_highlighting() {
        let result = highlighter(false).highlight("$string", 0);
        assert_eq!(result.buffer.len(), 1);
        assert_eq!(result.buffer[0].0, Style::default());
        assert_eq!(raw_text(&result), "$string");
    }
}
