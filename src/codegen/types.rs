//! Declared type → Go type mapping

use crate::parser::ast::ValueType;

/// Go type used when a declared type has no mapping
pub const FALLBACK_TYPE: &str = "any";

/// Go spelling of a declared type, or `None` for `void` (no result type).
pub fn go_type(value_type: &ValueType) -> Option<&'static str> {
    match value_type {
        ValueType::Number => Some("int"),
        ValueType::String => Some("string"),
        ValueType::Boolean => Some("bool"),
        ValueType::Void => None,
        ValueType::Unknown(_) => Some(FALLBACK_TYPE),
    }
}

/// Quote text as a Go interpreted string literal.
///
/// Control characters and the byte order mark are escaped the way Go's `%q`
/// verb escapes them, so the result is always valid Go source.
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{07}' => quoted.push_str("\\a"),
            '\u{08}' => quoted.push_str("\\b"),
            '\u{0C}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{0B}' => quoted.push_str("\\v"),
            c if c < ' ' || c == '\u{7F}' => quoted.push_str(&format!("\\x{:02x}", c as u32)),
            c if c.is_control() || c == '\u{FEFF}' => {
                quoted.push_str(&format!("\\u{:04x}", c as u32))
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
