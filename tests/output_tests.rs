//! Integration tests for rendering parsed expressions.

use observe_expr::output::{render, render_error, OutputFormat};
use observe_expr::{parse, Parallel};

#[test]
fn test_render_text_is_canonical() {
    let ast = parse(" a . [ b , +c ] : items ").unwrap();
    assert_eq!(
        render(&ast, OutputFormat::Text, 2).unwrap(),
        "a.[b,+c]:items"
    );
}

#[test]
fn test_render_paths() {
    let ast = parse("a.[b,c].d,e").unwrap();
    assert_eq!(
        render(&ast, OutputFormat::Paths, 2).unwrap(),
        "a.b.d\na.c.d\ne"
    );
}

#[test]
fn test_render_json_round_trips() {
    let ast = parse("[a,+m]:items").unwrap();
    let json = render(&ast, OutputFormat::Json, 2).unwrap();
    assert!(json.contains("\"Metadata\": \"m\""));
    assert!(json.contains("\"Items\""));

    let back: Parallel = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ast);
}

#[test]
fn test_render_tree_respects_indent() {
    let ast = parse("a:b").unwrap();
    assert_eq!(
        render(&ast, OutputFormat::Tree, 4).unwrap(),
        "parallel\n    series\n        trait a (quiet)\n        trait b (quiet)"
    );
}

#[test]
fn test_render_error_points_at_token() {
    let input = "a.[b,c";
    let err = parse(input).unwrap_err();
    assert_eq!(
        render_error(input, &err),
        "error: Unexpected end of input at position 6, expected ']'\n  a.[b,c\n        ^"
    );
}

#[test]
fn test_render_error_replaces_whitespace() {
    let input = "a\t.";
    let err = parse(input).unwrap_err();
    assert!(render_error(input, &err).contains("\n  a .\n"));
}
