//! Column widths for cell-grid typefaces.

use unicode_width::UnicodeWidthChar;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Number of grid columns a character occupies.
///
/// Returns `None` for control characters, which have no printable form.
/// Combining marks and other zero-width characters return `Some(0)`.
#[inline]
#[must_use]
pub fn char_columns(c: char, method: WidthMethod) -> Option<usize> {
    // Fast path: ASCII printable characters are always width 1
    if (' '..='~').contains(&c) {
        return Some(1);
    }
    if c.is_control() {
        return None;
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c),
    }
}
