use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr,
            IntegerLiteral, PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser, stmt::parse_block};

pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let result = parse_expr_bounded(parser, precedence);
    parser.exit_nesting();

    result
}

fn parse_expr_bounded(parser: &mut Parser, precedence: Precedence) -> Result<Expr, Error> {
    trace!(
        "parse_expr({:?}): current token = {:?}, next token = {:?}",
        precedence,
        parser.current_token_kind(),
        parser.peek_token_kind()
    );

    // First parse the prefix
    let token_kind = parser.current_token_kind();
    let Some(prefix_fn) = parser.get_prefix_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixHandler { kind: token_kind },
            parser.get_position(),
        ));
    };

    let mut left = prefix_fn(parser)?;

    // Fold in operators that bind tighter than the caller
    while !parser.peek_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let Some(infix_fn) = parser.get_infix_lookup().get(&parser.peek_token_kind()).copied() else {
            return Ok(left);
        };

        parser.next_token();
        left = infix_fn(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    // A leading zero means octal, as in C
    let value = match token.literal.strip_prefix('0') {
        Some(digits) if !digits.is_empty() => i64::from_str_radix(digits, 8),
        _ => token.literal.parse::<i64>(),
    };

    match value {
        Ok(value) => Ok(Expr::Integer(IntegerLiteral { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::IntegerParseError {
                literal: token.literal.clone(),
            },
            token.span.start,
        )),
    }
}

pub fn parse_boolean(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Boolean(BooleanLiteral {
        value: token.kind == TokenKind::True,
        token,
    }))
}

// !x or -x
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();

    parser.next_token();
    let right = parse_expr(parser, Precedence::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    let precedence = parser.current_precedence();

    parser.next_token();
    let right = parse_expr(parser, precedence)?;

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouped_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.next_token();
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

// if (<condition>) { ... } else { ... }
pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.next_token();
    let condition = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block(parser)?;

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.next_token();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

// fn(<parameters>) { ... }
pub fn parse_function_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block(parser)?;

    Ok(Expr::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

/// Parses `a, b, c)` with the opening `(` as the current token.
fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = vec![];

    if parser.peek_is(TokenKind::CloseParen) {
        parser.next_token();
        return Ok(parameters);
    }

    loop {
        parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier {
            token: parser.current_token().clone(),
            value: parser.current_token().literal.clone(),
        });

        if !parser.peek_is(TokenKind::Comma) {
            break;
        }
        parser.next_token();
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, callee: Expr) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Ok(Expr::Call(CallExpr {
        token,
        callee: Box::new(callee),
        arguments,
    }))
}

/// Parses `x, y + 1)` with the opening `(` as the current token.
fn parse_call_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut arguments = vec![];

    if parser.peek_is(TokenKind::CloseParen) {
        parser.next_token();
        return Ok(arguments);
    }

    parser.next_token();
    arguments.push(parse_expr(parser, Precedence::Lowest)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.next_token();
        parser.next_token();
        arguments.push(parse_expr(parser, Precedence::Lowest)?);
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(arguments)
}
