use std::vec::IntoIter;

use crate::{Position, Span};

use super::tokens::{Token, TokenKind};

/// Anything the parser can pull tokens from.
///
/// Once input is exhausted an implementation must return an `EOF` token,
/// and keep returning one on every further call.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// A `TokenSource` over tokens that were lexed ahead of time.
///
/// Anything after the first `EOF` is ignored. If the tokens carry no `EOF`
/// one is synthesised at the end of the last token.
pub struct TokenStream {
    tokens: IntoIter<Token>,
    eof: Token,
}

impl TokenStream {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let eof = match tokens.iter().position(|token| token.kind == TokenKind::EOF) {
            Some(index) => {
                let eof = tokens[index].clone();
                tokens.truncate(index);
                eof
            }
            None => {
                let position = tokens
                    .last()
                    .map(|token| token.span.end.clone())
                    .unwrap_or_else(Position::null);

                Token {
                    kind: TokenKind::EOF,
                    literal: String::new(),
                    span: Span {
                        start: position.clone(),
                        end: position,
                    },
                }
            }
        };

        TokenStream {
            tokens: tokens.into_iter(),
            eof,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(|| self.eof.clone())
    }
}
