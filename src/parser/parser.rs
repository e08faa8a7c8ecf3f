//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser is a Pratt parser: prefix and infix handlers are looked up by
//! token kind, and operator precedence decides how far an expression extends.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - Prefix handlers (tokens that can start an expression)
//! - Infix handlers (tokens that extend an already parsed expression)
//! - Precedence of infix tokens

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    cursor::TokenCursor,
    lookups::{
        create_token_lookups, InfixHandler, InfixLookup, Precedence, PrecedenceLookup,
        PrefixHandler, PrefixLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How many expressions may be open at once before parsing gives up on one.
pub const MAX_EXPRESSION_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// A parser owns its token cursor, its handler tables and the diagnostics
/// collected so far. One instance parses one program.
pub struct Parser {
    /// Current and peek tokens over the token source
    cursor: TokenCursor,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup,
    /// Lookup table for infix precedence
    precedence_lookup: PrecedenceLookup,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Expressions currently being parsed
    depth: usize,
}

impl Parser {
    /// Creates a new Parser reading from `source`, with all handlers registered.
    pub fn new(source: impl TokenSource + 'static) -> Self {
        let mut parser = Parser {
            cursor: TokenCursor::new(Box::new(source)),
            stmt_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
            errors: vec![],
            depth: 0,
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.cursor.current()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.cursor.current().kind
    }

    /// Returns the token after the current one.
    pub fn peek_token(&self) -> &Token {
        self.cursor.peek()
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.cursor.peek().kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token_kind() == kind
    }

    /// Advances to the next token and returns the new current token.
    pub fn next_token(&mut self) -> &Token {
        self.cursor.advance()
    }

    /// Advances if the peek token is of the expected kind.
    ///
    /// On a mismatch nothing is consumed and an `UnexpectedToken` error
    /// pointing at the peek token is returned.
    pub fn expect_peek(&mut self, expected: TokenKind) -> Result<(), Error> {
        if self.peek_is(expected) {
            self.next_token();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected,
                    actual: self.peek_token_kind(),
                },
                self.peek_token().span.start.clone(),
            ))
        }
    }

    pub fn current_precedence(&self) -> Precedence {
        self.precedence_of(self.current_token_kind())
    }

    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek_token_kind())
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        *self
            .precedence_lookup
            .get(&kind)
            .unwrap_or(&Precedence::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the prefix lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_lookup
    }

    /// Returns a reference to the infix lookup table.
    pub fn get_infix_lookup(&self) -> &InfixLookup {
        &self.infix_lookup
    }

    /// Registers an infix handler and the precedence of its token.
    pub(super) fn infix(&mut self, kind: TokenKind, precedence: Precedence, infix_fn: InfixHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Registers a prefix handler for a token.
    pub(super) fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers a statement handler for a token.
    pub(super) fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Opens one more level of expression nesting.
    ///
    /// Fails with `NestingTooDeep` at the current token once
    /// `MAX_EXPRESSION_DEPTH` levels are open; every successful call must
    /// be paired with `exit_nesting`.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_EXPRESSION_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_EXPRESSION_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Records a diagnostic and keeps going.
    pub fn record_error(&mut self, error: Error) {
        debug!("{}: {}", error.get_error_name(), error);
        self.errors.push(error);
    }

    /// Skips the terminator of a statement that failed, if it is next.
    pub fn synchronize(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    /// Diagnostics collected so far, in source order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Parses statements until EOF.
    ///
    /// A statement that fails is left out of the program and its error is
    /// recorded; parsing resumes after the failing token (and its `;`).
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.record_error(error);
                    self.synchronize();
                }
            }
            self.next_token();
        }

        debug!(
            "parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );

        program
    }

    /// Consumes the parser, returning its diagnostics.
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

/// Parses every token `source` produces into a program.
///
/// # Returns
///
/// A tuple containing:
/// - The Program (statements that parsed successfully)
/// - Every diagnostic, in order; when non-empty the tree is incomplete
pub fn parse(source: impl TokenSource + 'static) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    (program, parser.into_errors())
}

/// Lexes and parses source text. `file` names the source in positions.
pub fn parse_source(source: &str, file: Option<String>) -> (Program, Vec<Error>) {
    parse(Lexer::new(source.to_string(), file))
}
