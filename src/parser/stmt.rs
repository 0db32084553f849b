use log::trace;

use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token_kind = parser.current_token_kind();
    trace!("statement starting at {}", token_kind);

    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&token_kind).copied() {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

/// A semicolon terminator is optional, but consumed when present.
fn skip_semicolon(parser: &mut Parser) {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start_token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    skip_semicolon(parser);

    Some(Stmt::Expression(ExpressionStmt {
        token: start_token,
        expression,
    }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start_token = parser.current_token().clone();

    let name_token = parser.expect(TokenKind::Identifier)?;
    let name = Identifier {
        name: name_token.value.clone(),
        token: name_token,
    };

    parser.expect(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    skip_semicolon(parser);

    Some(Stmt::Let(LetStmt {
        token: start_token,
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start_token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    skip_semicolon(parser);

    Some(Stmt::Return(ReturnStmt {
        token: start_token,
        value,
    }))
}
