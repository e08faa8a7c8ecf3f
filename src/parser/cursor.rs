//! Two-token lookahead over a `TokenSource`.

use crate::lexer::{source::TokenSource, tokens::Token};

/// Holds the current token and the one after it.
///
/// The underlying source is only ever pulled forward, one token per
/// `advance`.
pub struct TokenCursor {
    source: Box<dyn TokenSource>,
    current: Token,
    peek: Token,
}

impl TokenCursor {
    pub fn new(mut source: Box<dyn TokenSource>) -> Self {
        let current = source.next_token();
        let peek = source.next_token();

        TokenCursor {
            source,
            current,
            peek,
        }
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn peek(&self) -> &Token {
        &self.peek
    }

    /// Shifts peek into current and pulls a new peek token.
    pub fn advance(&mut self) -> &Token {
        let next = self.source.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        &self.current
    }
}
