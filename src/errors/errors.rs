use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A parser diagnostic: what went wrong and where.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixHandler { .. } => "NoPrefixHandler",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => {
                ErrorTip::Suggestion(format!("did you forget a `{}`?", expected))
            }
            ErrorImpl::NoPrefixHandler { kind: TokenKind::Illegal } => ErrorTip::None,
            ErrorImpl::NoPrefixHandler { kind } => {
                ErrorTip::Suggestion(format!("`{}` cannot start an expression", kind))
            }
            ErrorImpl::IntegerParseError { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions may nest at most {} levels, split it up with `let`",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {actual} instead")]
    UnexpectedToken { expected: TokenKind, actual: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixHandler { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
