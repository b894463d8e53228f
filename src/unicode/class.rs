//! Character classification for line breaking.

/// Line feed; closes the current line.
pub const NEW_LINE: char = '\n';
/// Carriage return; recorded as a placeholder and otherwise ignored.
pub const CARRIAGE_RETURN: char = '\r';
/// Backspace; the next glyph is drawn without advancing the pen.
pub const NEXT_CHAR_NO_ADVANCE: char = '\u{8}';

/// Characters that end a word token.
#[inline]
#[must_use]
pub const fn is_line_terminator(c: char) -> bool {
    matches!(c, NEW_LINE | CARRIAGE_RETURN)
}

/// Unicode whitespace, including the non-breaking variants.
#[must_use]
pub const fn is_space(c: char) -> bool {
    matches!(
        c,
        '\u{9}'..='\u{D}'
            | '\u{20}'
            | '\u{85}'
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Spaces and joiners a word may run through.
#[must_use]
pub const fn is_non_breaking(c: char) -> bool {
    matches!(c, '\u{A0}' | '\u{2007}' | '\u{202F}' | '\u{2060}')
}

/// Ideographs, kana, hangul and related blocks. Each is its own word.
#[must_use]
pub const fn is_cjk(c: char) -> bool {
    matches!(
        c,
        '\u{2E80}'..='\u{2FDF}'
            | '\u{2FF0}'..='\u{30FF}'
            | '\u{3100}'..='\u{31BF}'
            | '\u{31C0}'..='\u{4DFF}'
            | '\u{4E00}'..='\u{9FBF}'
            | '\u{AC00}'..='\u{D7AF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{FE30}'..='\u{FE4F}'
            | '\u{1F004}'..='\u{1F682}'
    )
}
