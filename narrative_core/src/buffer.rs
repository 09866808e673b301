//! Fixed-capacity text buffers.
//!
//! Writes never fail: text that does not fit is cut on a character boundary,
//! and labels beyond the menu capacity are dropped.

use heapless::{String, Vec};

/// Size of the description buffer, terminator slot included.
pub const DESCRIPTION_SIZE: usize = 250;

/// Number of label slots in a menu.
pub const MENU_CAPACITY: usize = 10;

/// Size of one menu label slot, terminator slot included.
pub const LABEL_SIZE: usize = 13;

/// A string buffer of `N` bytes that holds at most `N - 1` bytes of text.
///
/// The last byte is reserved the way a terminated C buffer would reserve it, so
/// truncation lengths match the device's fixed buffers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer<const N: usize> {
    text: String<N>,
}

impl<const N: usize> TextBuffer<N> {
    /// Maximum number of bytes of text kept.
    pub const LIMIT: usize = N.saturating_sub(1);

    pub fn new() -> Self {
        Self { text: String::new() }
    }

    /// Create a buffer holding as much of `text` as fits.
    pub fn from_truncated(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.append(text);
        buffer
    }

    /// Append as much of `text` as fits. Returns `false` if anything was cut.
    pub fn append(&mut self, text: &str) -> bool {
        for ch in text.chars() {
            if self.text.len() + ch.len_utf8() > Self::LIMIT || self.text.push(ch).is_err() {
                return false;
            }
        }
        true
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl<const N: usize> std::fmt::Display for TextBuffer<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The description text of the current scene.
pub type Description = TextBuffer<DESCRIPTION_SIZE>;

/// One menu entry.
pub type Label = TextBuffer<LABEL_SIZE>;

/// The label slots of one menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuLabels {
    slots: Vec<Label, MENU_CAPACITY>,
}

impl MenuLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a label set from a list, dropping whatever does not fit.
    pub fn from_list(labels: &[&str]) -> Self {
        let mut menu = Self::new();
        menu.extend(labels.iter().copied());
        menu
    }

    /// Add a label, truncated to the slot size. Returns `false` once the menu is full.
    pub fn push(&mut self, label: &str) -> bool {
        self.slots.push(Label::from_truncated(label)).is_ok()
    }

    /// Add labels in order until the menu is full.
    pub fn extend<'a>(&mut self, labels: impl IntoIterator<Item = &'a str>) {
        for label in labels {
            if !self.push(label) {
                break;
            }
        }
    }

    /// Empty every slot before reuse.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(Label::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().map(Label::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;
    use std::vec::Vec;

    #[test]
    fn test_text_buffer_keeps_short_text() {
        let mut buffer = TextBuffer::<32>::new();
        assert!(buffer.append("Nothing"));
        assert!(buffer.append(" happens."));
        assert_eq!(buffer.as_str(), "Nothing happens.");
    }

    #[test]
    fn test_text_buffer_truncates_to_limit() {
        let mut buffer = TextBuffer::<8>::new();
        assert!(!buffer.append("abcdefghij"));
        assert_eq!(buffer.as_str(), "abcdefg");
        assert_eq!(buffer.len(), TextBuffer::<8>::LIMIT);

        // further appends are silently dropped
        assert!(!buffer.append("x"));
        assert_eq!(buffer.as_str(), "abcdefg");
    }

    #[test]
    fn test_text_buffer_cuts_on_char_boundary() {
        let mut buffer = TextBuffer::<5>::new();
        buffer.append("ab\u{e9}\u{e9}");
        // 'a' 'b' take 2 bytes, one 'é' takes 2 more, the second does not fit
        assert_eq!(buffer.as_str(), "ab\u{e9}");
    }

    #[test]
    fn test_label_truncation() {
        let label = Label::from_truncated("A very long label indeed");
        assert_eq!(label.as_str(), "A very long ");
        assert_eq!(label.len(), LABEL_SIZE - 1);
    }

    #[test]
    fn test_menu_labels_drop_overflow() {
        let names: Vec<String> = (0..MENU_CAPACITY + 3).map(|i| format!("Item {i}")).collect();
        let refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();

        let menu = MenuLabels::from_list(&refs);

        assert_eq!(menu.len(), MENU_CAPACITY);
        assert_eq!(menu.get(0), Some("Item 0"));
        assert_eq!(menu.get(MENU_CAPACITY - 1), Some("Item 9"));
        assert_eq!(menu.get(MENU_CAPACITY), None);
    }

    #[test]
    fn test_menu_labels_clear_before_reuse() {
        let mut menu = MenuLabels::from_list(&["Window", "Angel Statue", "Stairs up"]);
        menu.clear();
        menu.push("Rope");

        assert_eq!(menu.len(), 1);
        assert_eq!(menu.iter().collect::<Vec<_>>(), vec!["Rope"]);
    }
}
