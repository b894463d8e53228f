//! Unicode character classes and column widths used by the line breaker.

mod class;
mod width;

pub use class::{
    CARRIAGE_RETURN, NEW_LINE, NEXT_CHAR_NO_ADVANCE, is_cjk, is_line_terminator, is_non_breaking,
    is_space,
};
pub use width::{WidthMethod, char_columns};
