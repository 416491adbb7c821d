/// Longest tooltip applied, in UTF-16 code units.
///
/// Native tooltip buffers hold 128 units including the terminator.
pub const MAX_TOOLTIP_UTF16_UNITS: usize = 127;

/// Tooltip used when none is configured.
pub const DEFAULT_TOOLTIP: &str = "Tray";

/// Process-level settings applied once, before `ready` is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupOptions {
    /// Encoded initial icon. `None` selects the built-in icon.
    pub icon: Option<Vec<u8>>,
    /// Initial tooltip text.
    pub tooltip: String,
}

impl Default for StartupOptions {
    fn default() -> Self {
        Self {
            icon: None,
            tooltip: DEFAULT_TOOLTIP.to_string(),
        }
    }
}

/// Cut `text` down to at most [`MAX_TOOLTIP_UTF16_UNITS`] UTF-16 units.
///
/// Never splits a character, so a surrogate pair that would straddle the
/// limit is dropped whole.
pub fn truncate_tooltip(text: &str) -> &str {
    let mut units = 0;
    for (index, c) in text.char_indices() {
        units += c.len_utf16();
        if units > MAX_TOOLTIP_UTF16_UNITS {
            return &text[..index];
        }
    }
    text
}
