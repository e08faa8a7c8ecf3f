use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("let", TokenKind::Let);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Identifier,
    Integer,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    Greater,

    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Fn,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// The name used for this kind in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Identifier => "IDENT",
            TokenKind::Integer => "INT",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Not => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Fn => "fn",
            TokenKind::Let => "let",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nliteral: {}}}", self.kind, self.literal)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
