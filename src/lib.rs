#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing a byte offset.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. Offsets past the end of the source (an EOF
/// token) resolve to the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if source.is_empty() || pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) || end == source.len() {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\nbar\nTesting { }\n";
        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_source() {
        let source = "let x = 5";
        let (line_number, _, line_pos) = super::get_line_at_position(source, 9).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line_pos, 9);

        assert!(super::get_line_at_position("", 0).is_none());
    }

    #[test]
    fn test_render_error() {
        let (_, errors) = crate::parser::parser::parse_source("let x 5;", Some("main.mk".to_string()));
        let rendered = super::render_error(&errors[0], "let x 5;");

        assert_eq!(
            rendered,
            "Error: UnexpectedToken (expected next token to be =, got INT instead)\n\
             Tip: did you forget a `=`?\n\
             -> main.mk\n  |\n1 | let x 5;\n  | ------^\n"
        );
    }

    #[test]
    fn test_render_error_after_tabs_and_multibyte_characters() {
        let source = "\té; let 5;";
        let (_, errors) = crate::parser::parser::parse_source(source, Some("tabs.mk".to_string()));
        assert_eq!(errors.len(), 2);

        let illegal = super::render_error(&errors[0], source);
        assert!(illegal.contains("1 | é; let 5;\n"));
        assert!(illegal.ends_with("  | ^\n"));

        let missing_name = super::render_error(&errors[1], source);
        assert!(missing_name.ends_with("  | -------^\n"));
    }

    #[test]
    fn test_remove_starting_whitespace() {
        assert_eq!(
            super::remove_starting_whitespace("\t  \tx = 1"),
            (String::from("x = 1"), 4)
        );
        assert_eq!(super::remove_starting_whitespace("x"), (String::from("x"), 0));
    }
}

/// Renders a diagnostic with the offending line and a caret under the token.
///
/// ```text
/// Error: UnexpectedToken (expected next token to be =, got INT instead)
/// Tip: did you forget a `=`?
/// -> main.mk
///   |
/// 1 | let x 5;
///   | ------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut output = String::new();

    output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error));
    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        output.push_str(&format!("Tip: {}\n", tip));
    }
    output.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return output;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    // Columns are counted in characters, positions in bytes
    let column = line_text
        .get(..line_pos)
        .map(|before| before.chars().count())
        .unwrap_or(line_pos);
    let arrows = column.saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

/// Strips leading whitespace, returning the rest and how many characters went.
fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start_matches(char::is_whitespace);
    let removed = string[..string.len() - trimmed.len()].chars().count();

    (String::from(trimmed), removed)
}
