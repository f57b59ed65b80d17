//! Key events and caret positions forwarded by a host

/// Key code reported for the space bar
pub const SPACE_KEY_CODE: u32 = 32;

/// A single key press as seen by the input element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Logical key name (`"$"`, `"a"`, `" "`)
    pub key: String,
    /// Numeric key code
    pub code: u32,
}

impl KeyPress {
    /// Create a key press from its parts
    pub fn new(key: impl Into<String>, code: u32) -> Self {
        Self {
            key: key.into(),
            code,
        }
    }

    /// Key press for a typed character, with the character's code point as key code
    pub fn character(ch: char) -> Self {
        Self {
            key: ch.to_string(),
            code: ch as u32,
        }
    }

    /// Check whether this is the space bar, judged by key code only
    pub fn is_space(&self) -> bool {
        self.code == SPACE_KEY_CODE
    }
}

/// Caret position inside the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorPosition {
    /// Byte offset of the caret
    At(usize),
    /// The host could not report a caret position
    #[default]
    Unavailable,
}

impl CursorPosition {
    /// Sentinel offset reported when the caret is unknown
    pub const UNAVAILABLE_OFFSET: isize = -1;

    /// Build from an optional offset
    pub fn from_option(offset: Option<usize>) -> Self {
        offset.map_or(Self::Unavailable, Self::At)
    }

    /// Offset as a signed value, `-1` when unavailable
    pub fn offset(&self) -> isize {
        match self {
            CursorPosition::At(pos) => isize::try_from(*pos).unwrap_or(Self::UNAVAILABLE_OFFSET),
            CursorPosition::Unavailable => Self::UNAVAILABLE_OFFSET,
        }
    }

    /// Check whether the caret position is known
    pub fn is_available(&self) -> bool {
        matches!(self, CursorPosition::At(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_key_press() {
        let press = KeyPress::character('$');
        assert_eq!(press.key, "$");
        assert_eq!(press.code, 36);
        assert!(!press.is_space());
    }

    #[test]
    fn test_space_detected_by_code() {
        assert!(KeyPress::character(' ').is_space());
        assert!(KeyPress::new("Spacebar", SPACE_KEY_CODE).is_space());
        assert!(!KeyPress::new(" ", 0).is_space());
    }

    #[test]
    fn test_cursor_position_sentinel() {
        assert_eq!(CursorPosition::Unavailable.offset(), -1);
        assert_eq!(CursorPosition::default().offset(), -1);
        assert_eq!(CursorPosition::At(4).offset(), 4);
        assert_eq!(CursorPosition::from_option(None), CursorPosition::Unavailable);
        assert!(CursorPosition::from_option(Some(0)).is_available());
    }
}
