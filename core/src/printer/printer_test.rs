use pretty_assertions::assert_eq;

use crate::{
    ast::{Expr, Stmt},
    environment::Environment,
    evaluator::Interpreter,
    parser::parse,
    printer::{format_expr, format_stmt, print_expr, print_stmt},
    scanner::{Token, TokenKind, scan},
    values::Value,
};

fn expr(source: &str) -> Expr {
    let scanned = scan(&format!("{source};"));
    let mut program = parse(&scanned.tokens);
    assert!(!program.has_errors(), "{source}: {:?}", program.errors);
    match program.statements.pop() {
        Some(Some(Stmt::Expression(expr))) => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

fn token(kind: TokenKind, lexeme: &str) -> Token {
    Token::synthetic(kind, lexeme, 1)
}

/// Evaluate `expr` with a few globals defined.
fn value_of(expr: &Expr) -> Value {
    let mut globals = Environment::new();
    globals.define("a", Value::Number(3.0));
    globals.define("b", Value::Number(4.0));
    globals.define("s", Value::string("x"));
    let mut sink = Vec::new();
    Interpreter::new(&mut sink)
        .evaluate(expr, &mut globals)
        .unwrap()
}

#[test]
fn test_print_hand_built_tree() {
    // -123 * (45.67)
    let tree = Expr::binary(
        Expr::unary(
            token(TokenKind::Minus, "-"),
            Expr::Literal(Value::Number(123.0)),
        ),
        token(TokenKind::Star, "*"),
        Expr::grouping(Expr::Literal(Value::Number(45.67))),
    );
    assert_eq!(print_expr(&tree), "(* (- 123) (group 45.67))");
}

#[test]
fn test_print_all_expression_kinds() {
    assert_eq!(print_expr(&expr("x = nil")), "(= x nil)");
    assert_eq!(print_expr(&expr("a and b or c")), "(or (and a b) c)");
    assert_eq!(print_expr(&expr("!true")), "(! true)");
    assert_eq!(print_expr(&expr("\"str\"")), "str");
    assert_eq!(print_expr(&expr("(1)")), "(group 1)");
}

#[test]
fn test_print_statements() {
    let scanned = scan("var a = 1; { print a; } if (a) a; else nil; while (false) {}");
    let program = parse(&scanned.tokens);
    let printed: Vec<String> = program.valid_statements().map(print_stmt).collect();
    assert_eq!(
        printed,
        vec![
            "(var a = 1)",
            "(block (print a))",
            "(if-else a (; a) (; nil))",
            "(while false (block))",
        ]
    );
}

#[test]
fn test_format_expr() {
    assert_eq!(format_expr(&expr("1 + 2 * 3")), "(1 + (2 * 3))");
    assert_eq!(format_expr(&expr("-a")), "(-a)");
    assert_eq!(format_expr(&expr("(a)")), "(a)");
    assert_eq!(format_expr(&expr("s + \"y\"")), "(s + \"y\")");
    assert_eq!(format_expr(&expr("a or nil")), "(a or nil)");
    assert_eq!(format_expr(&expr("a = 2.5")), "(a = 2.5)");
}

#[test]
fn test_formatted_source_evaluates_to_same_value() {
    let cases = [
        "(5 * (2 + 3)) - 25 == 0",
        "1 + 2 * 3 - 4 / 8",
        "-a * -b",
        "--a",
        "!nil == false",
        "a < b and b >= 4 or s",
        "s + \"y\" + s",
        "a = b = 7",
        "nil or false",
        "a - b - 1",
        "8 / 4 / 2",
    ];
    for source in cases {
        let original = expr(source);
        let formatted = format_expr(&original);
        let reparsed = expr(&formatted);
        assert_eq!(
            value_of(&original),
            value_of(&reparsed),
            "{source} formatted as {formatted}"
        );
        // Formatting again does not change the reading.
        assert_eq!(
            value_of(&expr(&format_expr(&reparsed))),
            value_of(&original),
            "{formatted} reformatted"
        );
    }
}

#[test]
fn test_formatted_source_parenthesizes_every_node() {
    let original = expr("a + b * (a - 1) / b == s");
    let reparsed = expr(&format_expr(&original));
    assert_eq!(
        print_expr(&reparsed),
        "(group (== (group (+ a (group (/ (group (* b (group (group (- a 1))))) b)))) s))"
    );
}

#[test]
fn test_format_statements() {
    let scanned = scan(
        "var a; var b = 1; { print a; } if (a) a = 2; else {} for (var i = 0; i < 2; i = i + 1) print i;",
    );
    let program = parse(&scanned.tokens);
    let formatted: Vec<String> = program.valid_statements().map(format_stmt).collect();
    assert_eq!(
        formatted,
        vec![
            "var a;",
            "var b = 1;",
            "{ print a; }",
            "if (a) (a = 2); else {}",
            "{ var i = 0; while ((i < 2)) { print i; (i = (i + 1)); } }",
        ]
    );
}

#[test]
fn test_formatted_statements_run_the_same() {
    fn run(source: &str) -> String {
        let program = parse(&scan(source).tokens);
        assert!(!program.has_errors(), "{source}: {:?}", program.errors);
        let mut out = Vec::new();
        let mut globals = Environment::new();
        Interpreter::new(&mut out)
            .interpret(&program.statements, &mut globals)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    let source = "var x = 1; while (x < 4) { if (x == 2) print \"two\"; else print x; x = x + 1; }";
    let program = parse(&scan(source).tokens);
    let formatted: Vec<String> = program.valid_statements().map(format_stmt).collect();

    assert_eq!(run(&formatted.join("\n")), run(source));
    assert_eq!(run(source), "1\ntwo\n3\n");
}

#[test]
fn test_format_non_finite_numbers() {
    for n in [f64::INFINITY, f64::NEG_INFINITY] {
        let formatted = format_expr(&Expr::Literal(Value::Number(n)));
        assert_eq!(value_of(&expr(&formatted)), Value::Number(n), "{formatted}");
    }

    let formatted = format_expr(&Expr::Literal(Value::Number(f64::NAN)));
    assert_eq!(formatted, "(0 / 0)");
    assert!(matches!(value_of(&expr(&formatted)), Value::Number(n) if n.is_nan()));
}
