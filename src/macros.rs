//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SINGLE_TOKEN!` - Creates a single-byte token from the lexer's current byte

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: String::from($value),
        }
    };
}

/// Creates a token of the given kind whose text is the single byte the
/// lexer currently sits on.
///
/// # Example
///
/// ```ignore
/// b'+' => MK_SINGLE_TOKEN!(TokenKind::Plus, self),
/// ```
#[macro_export]
macro_rules! MK_SINGLE_TOKEN {
    ($kind:expr, $lexer:expr) => {
        MK_TOKEN!($kind, ($lexer.at() as char).to_string())
    };
}
