use log::trace;

use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::Precedence, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    trace!("parse_stmt: current token = {:?}", parser.current_token_kind());

    let stmt_fn = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied();
    if let Some(stmt_fn) = stmt_fn {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

// let x = 5;
pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        token: parser.current_token().clone(),
        value: parser.current_token().literal.clone(),
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.next_token();

    let value = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

// return 5; or a bare return
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let value = if parser.peek_token().is_one_of_many(&[
        TokenKind::Semicolon,
        TokenKind::CloseCurly,
        TokenKind::EOF,
    ]) {
        None
    } else {
        parser.next_token();
        Some(parse_expr(parser, Precedence::Lowest)?)
    };

    if parser.peek_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// Parses `{ ... }` starting on the `{`.
///
/// Stops with the closing `}` as the current token. Statements that fail
/// inside the block are recorded and skipped, like at the top level.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.enter_nesting()?;
    let result = parse_block_bounded(parser);
    parser.exit_nesting();

    result
}

fn parse_block_bounded(parser: &mut Parser) -> Result<BlockStmt, Error> {
    trace!("parse_block: next token = {:?}", parser.peek_token_kind());

    let token = parser.current_token().clone();
    let mut statements = Vec::new();

    parser.next_token();

    while !parser.current_is(TokenKind::CloseCurly) {
        if parser.current_is(TokenKind::EOF) {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::CloseCurly,
                    actual: TokenKind::EOF,
                },
                parser.get_position(),
            ));
        }

        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => {
                parser.record_error(error);
                parser.synchronize();
            }
        }
        parser.next_token();
    }

    Ok(BlockStmt { token, statements })
}
