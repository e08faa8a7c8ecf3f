use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::{
    source::TokenSource,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Called with the matched text; returns `None` for skipped input.
pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Patterns are anchored and tried in order, so two-character operators
    // must come before their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: integer_handler },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
    ];
}

/// Pull-style lexer: each call to `next_token` scans exactly one token.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    /// Builds a token for `literal` at the current position and advances past it.
    pub fn emit(&mut self, kind: TokenKind, literal: String) -> Token {
        let start = self.position();
        self.advance_n(literal.len());

        MK_TOKEN!(kind, literal, Span { start, end: self.position() })
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                let position = self.position();
                return MK_TOKEN!(
                    TokenKind::EOF,
                    String::new(),
                    Span { start: position.clone(), end: position }
                );
            }

            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|found| (pattern.handler, found.as_str().to_string()))
            });

            match matched {
                Some((handler, text)) => {
                    if let Some(token) = handler(self, &text) {
                        return token;
                    }
                }
                None => {
                    let illegal = self.remainder().chars().next().map(String::from).unwrap_or_default();
                    return self.emit(TokenKind::Illegal, illegal);
                }
            }
        }
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance_n(matched.len());
    None
}

fn integer_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    Some(lexer.emit(TokenKind::Integer, matched.to_string()))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let kind = RESERVED_LOOKUP.get(matched).copied().unwrap_or(TokenKind::Identifier);
    Some(lexer.emit(kind, matched.to_string()))
}

/// Lexes the whole source, including the trailing EOF token.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source.to_string(), file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
