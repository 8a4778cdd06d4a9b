//! Rendering of parse results and diagnostics for the command-line tool.

use crate::expression::{Element, ExpressionError, Parallel, Series};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// How a parsed expression is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Canonical expression text
    #[default]
    Text,
    /// Indented tree of nodes
    Tree,
    /// Pretty-printed JSON of the AST
    Json,
    /// One line per path with groups expanded
    Paths,
}

/// Renders a parsed expression in the given format.
pub fn render(ast: &Parallel, format: OutputFormat, indent_size: usize) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => ast.to_string(),
        OutputFormat::Tree => render_tree(ast, indent_size),
        OutputFormat::Json => serde_json::to_string_pretty(ast)?,
        OutputFormat::Paths => ast
            .paths()
            .into_iter()
            .map(|path| Series::new(path).to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

/// Renders the AST as an indented tree, one node per line.
pub fn render_tree(ast: &Parallel, indent_size: usize) -> String {
    let mut out = String::new();
    write_parallel(&mut out, ast.branches(), 0, indent_size);
    // Drop the final newline so callers can println! the result.
    out.pop();
    out
}

fn write_parallel(out: &mut String, branches: &[Series], depth: usize, indent_size: usize) {
    push_line(out, depth, indent_size, "parallel");
    for series in branches {
        push_line(out, depth + 1, indent_size, "series");
        for (element, notify) in series.elements() {
            let flag = if *notify { "notify" } else { "quiet" };
            match element {
                Element::Trait(name) => {
                    push_line(out, depth + 2, indent_size, &format!("trait {} ({})", name, flag))
                }
                Element::Metadata(name) => push_line(
                    out,
                    depth + 2,
                    indent_size,
                    &format!("metadata {} ({})", name, flag),
                ),
                Element::Items => {
                    push_line(out, depth + 2, indent_size, &format!("items ({})", flag))
                }
                Element::Group(inner) => {
                    push_line(out, depth + 2, indent_size, &format!("group ({})", flag));
                    write_parallel(out, inner, depth + 3, indent_size);
                }
            }
        }
    }
}

fn push_line(out: &mut String, depth: usize, indent_size: usize, text: &str) {
    let _ = writeln!(out, "{:width$}{}", "", text, width = depth * indent_size);
}

/// Formats an error with the input echoed and a caret under the offending position.
pub fn render_error(input: &str, err: &ExpressionError) -> String {
    let shown: String = input
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    let column = input
        .get(..err.position())
        .map(|prefix| prefix.chars().count())
        .unwrap_or_else(|| input.chars().count());
    format!("error: {}\n  {}\n  {:width$}^", err, shown, "", width = column)
}
