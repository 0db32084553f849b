//! Unit tests for the parser module.
//!
//! This module contains tests for parsing:
//! - `let` and `return` statements
//! - Prefix and infix expressions, and their precedence
//! - Literals and grouping
//! - Error recovery and diagnostics

use test_log::test;

use super::parser::{parse, Parser};
use crate::{
    ast::ast::{Expr, Program, Stmt},
    lexer::lexer::Lexer,
};

/// Parses `source` and fails the test if any diagnostic was recorded.
fn parse_ok(source: &str) -> Program {
    let (parser, program) = parse(source);
    let errors = parser.errors();
    assert!(errors.is_empty(), "parser had {} errors: {:?}", errors.len(), errors);
    program
}

/// Parses a single expression statement and returns its expression.
fn parse_single_expr(source: &str) -> Expr {
    let program = parse_ok(source);
    assert_eq!(program.len(), 1, "expected one statement in {:?}", source);
    match &program.statements[0] {
        Stmt::Expression(stmt) => stmt.expression.clone(),
        other => panic!("expected expression statement, got {:?}", other),
    }
}

fn assert_integer(expr: &Expr, expected: i64) {
    match expr {
        Expr::Integer(integer) => {
            assert_eq!(integer.value, expected);
            assert_eq!(integer.token.value, expected.to_string());
        }
        other => panic!("expected integer literal, got {:?}", other),
    }
}

fn assert_identifier(expr: &Expr, expected: &str) {
    match expr {
        Expr::Identifier(ident) => {
            assert_eq!(ident.name, expected);
            assert_eq!(ident.token.value, expected);
        }
        other => panic!("expected identifier, got {:?}", other),
    }
}

#[test]
fn test_parse_let_statements() {
    let program = parse_ok("let x = 5;\nlet y = 10;\nlet foobar = 838383;");

    assert_eq!(program.len(), 3);
    for (stmt, (name, value)) in program.iter().zip([("x", 5), ("y", 10), ("foobar", 838383)]) {
        assert_eq!(stmt.token_literal(), "let");
        match stmt {
            Stmt::Let(let_stmt) => {
                assert_eq!(let_stmt.name.name, name);
                assert_eq!(let_stmt.name.token.value, name);
                assert_integer(&let_stmt.value, value);
            }
            other => panic!("expected let statement, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_let_with_expression_value() {
    let program = parse_ok("let total = a + b * 2;");

    assert_eq!(program.to_string(), "let total = (a+(b*2));");
}

#[test]
fn test_parse_return_statement() {
    let program = parse_ok("return 5;");

    assert_eq!(program.len(), 1);
    assert!(matches!(program.statements[0], Stmt::Return(_)));
    assert_eq!(program.statements[0].token_literal(), "return");
    assert_eq!(program.statements[0].to_string(), "return 5;");
}

#[test]
fn test_parse_return_expression() {
    let program = parse_ok("return x == 10;");

    assert_eq!(program.to_string(), "return (x==10);");
}

#[test]
fn test_parse_identifier_expression() {
    assert_identifier(&parse_single_expr("foobar;"), "foobar");
}

#[test]
fn test_parse_integer_literal_expression() {
    assert_integer(&parse_single_expr("5;"), 5);
}

#[test]
fn test_parse_boolean_expressions() {
    for (source, expected) in [("true;", true), ("false", false)] {
        match parse_single_expr(source) {
            Expr::Boolean(boolean) => assert_eq!(boolean.value, expected),
            other => panic!("expected boolean, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_prefix_expressions() {
    let cases = [("!5;", "!", 5, "(!5)"), ("-15;", "-", 15, "(-15)")];

    for (source, operator, value, rendered) in cases {
        let expr = parse_single_expr(source);
        assert_eq!(expr.to_string(), rendered);
        match expr {
            Expr::Prefix(prefix) => {
                assert_eq!(prefix.operator, operator);
                assert_integer(&prefix.right_expr, value);
            }
            other => panic!("expected prefix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_infix_expressions() {
    let operators = ["+", "-", "*", "/", ">", "<", "==", "!="];

    for operator in operators {
        let source = format!("5 {} 5;", operator);
        let expr = parse_single_expr(&source);
        assert_eq!(expr.to_string(), format!("(5{}5)", operator));
        match expr {
            Expr::Infix(infix) => {
                assert_integer(&infix.left, 5);
                assert_eq!(infix.operator, operator);
                assert_eq!(infix.token.value, operator);
                assert_integer(&infix.right, 5);
            }
            other => panic!("expected infix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("-a * b", "((-a)*b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a+b)+c)"),
        ("a + b - c", "((a+b)-c)"),
        ("a * b * c", "((a*b)*c)"),
        ("a * b / c", "((a*b)/c)"),
        ("a + b / c", "(a+(b/c))"),
        ("a + b * c + d / e - f", "(((a+(b*c))+(d/e))-f)"),
        ("5 > 4 == 3 < 4", "((5>4)==(3<4))"),
        ("5 < 4 != 3 > 4", "((5<4)!=(3>4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3+(4*5))==((3*1)+(4*5)))"),
        ("true == !false", "(true==(!false))"),
        ("3 > 5 == false", "((3>5)==false)"),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_ok(source).to_string(), expected, "source: {}", source);
    }
}

#[test]
fn test_grouped_expressions() {
    let cases = [
        ("1 + (2 + 3) + 4", "((1+(2+3))+4)"),
        ("(5 + 5) * 2", "((5+5)*2)"),
        ("2 / (5 + 5)", "(2/(5+5))"),
        ("-(5 + 5)", "(-(5+5))"),
        ("!(true == true)", "(!(true==true))"),
        ("((a))", "a"),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_ok(source).to_string(), expected, "source: {}", source);
    }
}

#[test]
fn test_multiple_statements_without_semicolons() {
    let program = parse_ok("let x = 5 let y = x\nx + y");

    assert_eq!(program.len(), 3);
    assert_eq!(program.to_string(), "let x = 5;\nlet y = x;\n(x+y)");
}

#[test]
fn test_expression_statements_split_at_semicolon() {
    let program = parse_ok("3 + 4; -5 * 5");

    assert_eq!(program.to_string(), "(3+4)\n((-5)*5)");
}

#[test]
fn test_parse_empty_program() {
    let program = parse_ok("");

    assert!(program.is_empty());
}

#[test]
fn test_missing_let_identifier() {
    let (parser, program) = parse("let = 5;");

    assert!(!program.iter().any(|stmt| matches!(stmt, Stmt::Let(_))));
    let errors = parser.errors();
    assert!(!errors.is_empty());
    assert_eq!(errors[0], "expected next token to be IDENT, got =");
}

#[test]
fn test_missing_let_assignment() {
    let (parser, program) = parse("let x 5;");

    assert!(!program.iter().any(|stmt| matches!(stmt, Stmt::Let(_))));
    assert_eq!(parser.errors()[0], "expected next token to be =, got INT");
}

#[test]
fn test_bad_statement_is_skipped_and_parsing_continues() {
    let (parser, program) = parse("let = 1; let y = 2;");

    let names: Vec<&str> = program
        .iter()
        .filter_map(|stmt| match stmt {
            Stmt::Let(let_stmt) => Some(let_stmt.name.name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["y"]);
    assert!(!parser.errors().is_empty());
}

#[test]
fn test_no_prefix_parse_function() {
    let (parser, program) = parse("@");

    assert!(program.is_empty());
    assert_eq!(parser.errors(), vec!["no prefix parse function for ILLEGAL found"]);
}

#[test]
fn test_keyword_without_handler_in_expression_position() {
    let (parser, _) = parse("let f = fn;");

    assert_eq!(parser.errors()[0], "no prefix parse function for FUNCTION found");
}

#[test]
fn test_integer_overflow_is_a_diagnostic() {
    let (parser, program) = parse("let x = 99999999999999999999;");

    assert!(!program.iter().any(|stmt| matches!(stmt, Stmt::Let(_))));
    assert_eq!(
        parser.errors(),
        vec![
            "could not parse \"99999999999999999999\" as integer",
            "no prefix parse function for ; found",
        ]
    );
}

#[test]
fn test_largest_integer_parses() {
    assert_integer(&parse_single_expr("9223372036854775807"), i64::MAX);
}

#[test]
fn test_unclosed_group() {
    let (parser, program) = parse("(1 + 2");

    assert!(program.is_empty());
    assert_eq!(parser.errors(), vec!["expected next token to be ), got EOF"]);
}

#[test]
fn test_dangling_operator() {
    let (parser, program) = parse("1 +");

    assert!(program.is_empty());
    assert_eq!(parser.errors(), vec!["no prefix parse function for EOF found"]);
}

#[test]
fn test_diagnostics_keep_their_kind() {
    let (parser, _) = parse("let = 5;");

    assert_eq!(parser.diagnostics()[0].get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parser_over_explicit_lexer() {
    let mut parser = Parser::new(Lexer::new("return -x;"));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "return (-x);");
}

#[test]
fn test_render_is_stable_after_reparse() {
    let sources = [
        "let x = 5; let y = x * (2 + 3); return -y != !true;",
        "a + b * c - d / e",
        "-(-a) == !(b < c)",
        "x; y; 1; 2",
    ];

    for source in sources {
        let first = parse_ok(source).to_string();
        let second = parse_ok(&first).to_string();
        assert_eq!(first, second, "source: {}", source);
    }
}

#[test]
fn test_binding_power_table() {
    use super::lookups::BindingPower;
    use crate::lexer::tokens::TokenKind;

    let parser = Parser::new(Lexer::new(""));
    let bps = parser.get_bp_lookup();

    assert_eq!(bps[&TokenKind::Equals], BindingPower::Equals);
    assert_eq!(bps[&TokenKind::NotEquals], BindingPower::Equals);
    assert_eq!(bps[&TokenKind::Less], BindingPower::LessGreater);
    assert_eq!(bps[&TokenKind::Greater], BindingPower::LessGreater);
    assert_eq!(bps[&TokenKind::Plus], BindingPower::Sum);
    assert_eq!(bps[&TokenKind::Dash], BindingPower::Sum);
    assert_eq!(bps[&TokenKind::Star], BindingPower::Product);
    assert_eq!(bps[&TokenKind::Slash], BindingPower::Product);
    // Nothing is bound to Call yet.
    assert!(bps.values().all(|bp| *bp < BindingPower::Prefix));
    assert_eq!(parser.current_binding_power(), BindingPower::Lowest);
}
