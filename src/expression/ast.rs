//! Abstract syntax tree types for observe expressions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single position in a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    /// Named trait (`name`)
    Trait(String),
    /// Traits tagged with the given metadata (`+name`)
    Metadata(String),
    /// Container members (`items`)
    Items,
    /// Parallel branches nested at this position (`[a,b]`)
    Group(Vec<Series>),
}

/// One path through the attribute graph.
///
/// Each element is paired with its notify flag. A series produced by the
/// parser is never empty and its last flag is always `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    elements: Vec<(Element, bool)>,
}

impl Series {
    /// Creates a series from `(element, notify)` pairs.
    pub fn new(elements: Vec<(Element, bool)>) -> Self {
        Self { elements }
    }

    /// The `(element, notify)` pairs in source order.
    pub fn elements(&self) -> &[(Element, bool)] {
        &self.elements
    }

    /// The final element, whose notify flag is inferred rather than written.
    pub fn last(&self) -> Option<&(Element, bool)> {
        self.elements.last()
    }

    fn depth(&self) -> usize {
        self.elements
            .iter()
            .map(|(element, _)| match element {
                Element::Group(branches) => {
                    1 + branches.iter().map(Series::depth).max().unwrap_or(0)
                }
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }
}

/// Alternative series observed independently from the same starting point.
///
/// The root of every parsed expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parallel {
    branches: Vec<Series>,
}

impl Parallel {
    /// Creates a parallel node from its branches.
    pub fn new(branches: Vec<Series>) -> Self {
        Self { branches }
    }

    pub fn branches(&self) -> &[Series] {
        &self.branches
    }

    /// Number of branches.
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Maximum group nesting, 0 when the expression has no groups.
    pub fn depth(&self) -> usize {
        self.branches.iter().map(Series::depth).max().unwrap_or(0)
    }

    pub fn into_branches(self) -> Vec<Series> {
        self.branches
    }
}

fn write_branches(f: &mut fmt::Formatter<'_>, branches: &[Series]) -> fmt::Result {
    for (i, series) in branches.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", series)?;
    }
    Ok(())
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Trait(name) => f.write_str(name),
            Element::Metadata(name) => write!(f, "+{}", name),
            Element::Items => f.write_str("items"),
            Element::Group(branches) => {
                f.write_str("[")?;
                write_branches(f, branches)?;
                f.write_str("]")
            }
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.elements.len();
        for (i, (element, notify)) in self.elements.iter().enumerate() {
            write!(f, "{}", element)?;
            if i + 1 < count {
                f.write_str(if *notify { "." } else { ":" })?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Parallel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_branches(f, &self.branches)
    }
}
