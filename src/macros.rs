//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $span:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            span: $span,
        }
    };
}

/// Creates a lexer handler for a token whose text never varies.
///
/// The generated handler emits a token of the given kind at the lexer's
/// current position and advances past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $literal:literal) => {
        |lexer: &mut Lexer, _matched: &str| Some(lexer.emit($kind, String::from($literal)))
    };
}
