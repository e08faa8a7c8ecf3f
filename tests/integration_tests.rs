//! End-to-end tests: source text through the lexer and parser.

use monkey_parser::{
    ast::ast::{Expr, Stmt},
    lexer::{lexer::tokenize, source::TokenStream},
    parser::parser::{parse, parse_source},
    render_error,
};

#[test]
fn test_parse_program_with_functions() {
    let source = r#"
        let five = 5;
        let ten = 10;

        let add = fn(x, y) {
            x + y;
        };

        let result = add(five, ten);
        if (result > 10) {
            return true;
        } else {
            return false;
        }
    "#;

    let (program, errors) = parse_source(source, Some("program.mk".to_string()));

    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(program.statements.len(), 5);

    let Stmt::Let(add) = &program.statements[2] else {
        panic!("expected let statement");
    };
    assert_eq!(add.name.value, "add");
    assert!(matches!(add.value, Expr::Function(_)));

    let Stmt::Expression(stmt) = &program.statements[4] else {
        panic!("expected expression statement");
    };
    let Expr::If(if_expr) = &stmt.expression else {
        panic!("expected if expression");
    };
    assert!(if_expr.alternative.is_some());
}

#[test]
fn test_parse_recursive_function() {
    let source = "let fib = fn(n) { if (n < 2) { return n; } fib(n - 1) + fib(n - 2) };";
    let (program, errors) = parse_source(source, None);

    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(
        program.to_string(),
        "let fib = fn(n) if(n < 2) return n;(fib((n - 1)) + fib((n - 2)));"
    );
}

#[test]
fn test_parse_higher_order_functions() {
    let source = "let twice = fn(f, x) { f(f(x)) }; twice(fn(a) { a * 2 }, 3);";
    let (program, errors) = parse_source(source, None);

    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(program.statements.len(), 2);
    assert_eq!(
        program.statements[1].to_string(),
        "twice(fn(a) (a * 2), 3)"
    );
}

#[test]
fn test_parse_reports_multiple_errors() {
    let source = "let x 5;\nlet = 10;\nlet y = 3 * (4 + 2;\nlet z = 1;";
    let (program, errors) = parse_source(source, None);

    assert_eq!(errors.len(), 4);
    assert_eq!(
        errors[0].to_string(),
        "expected next token to be =, got INT instead"
    );
    assert_eq!(
        errors[3].to_string(),
        "expected next token to be ), got ; instead"
    );

    // The last statement is still parsed
    let last = program.statements.last().expect("no statements parsed");
    assert_eq!(last.to_string(), "let z = 1;");
}

#[test]
fn test_parse_from_token_stream() {
    let tokens = tokenize("add(1, 2 * 3, 4 + 5)", None);
    let (program, errors) = parse(TokenStream::new(tokens));

    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "add(1, (2 * 3), (4 + 5))");
}

#[test]
fn test_parse_twice_gives_same_result() {
    let source = "let a = -b * c; if (a == b) { a } else { fn(x) { x }(a) }; let 7;";
    let tokens = tokenize(source, Some("same.mk".to_string()));

    let first = parse(TokenStream::new(tokens.clone()));
    let second = parse(TokenStream::new(tokens));

    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
    assert_eq!(first.1.len(), 1);
}

#[test]
fn test_render_error_points_at_token() {
    let source = "let a = 1;\n  let b c;";
    let (_, errors) = parse_source(source, Some("render.mk".to_string()));

    assert_eq!(errors.len(), 1);
    let rendered = render_error(&errors[0], source);

    assert!(rendered.starts_with("Error: UnexpectedToken (expected next token to be =, got IDENT instead)\n"));
    assert!(rendered.contains("-> render.mk\n"));
    assert!(rendered.contains("2 | let b c;\n"));
    assert!(rendered.ends_with("  | ------^\n"));
}
