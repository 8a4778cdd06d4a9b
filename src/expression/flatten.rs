//! Expansion of groups into concrete linear paths.

use super::ast::{Element, Parallel, Series};

/// A linear sequence of `(element, notify)` steps containing no groups.
pub type Path = Vec<(Element, bool)>;

impl Parallel {
    /// Expands every group, returning all linear paths in source order.
    pub fn paths(&self) -> Vec<Path> {
        self.branches().iter().flat_map(Series::paths).collect()
    }
}

impl Series {
    /// Expands every group in this series into linear paths.
    ///
    /// A path taken from inside a group ends with the group's own notify
    /// flag, since in the flat path it is followed by whatever followed the
    /// group.
    pub fn paths(&self) -> Vec<Path> {
        let mut current: Vec<Path> = vec![Vec::new()];

        for (element, notify) in self.elements() {
            let expansions: Vec<Path> = match element {
                Element::Group(branches) => branches
                    .iter()
                    .flat_map(Series::paths)
                    .map(|mut path| {
                        if let Some(last) = path.last_mut() {
                            last.1 = *notify;
                        }
                        path
                    })
                    .collect(),
                leaf => vec![vec![(leaf.clone(), *notify)]],
            };

            let mut next = Vec::with_capacity(current.len() * expansions.len());
            for prefix in &current {
                for expansion in &expansions {
                    let mut path = prefix.clone();
                    path.extend(expansion.iter().cloned());
                    next.push(path);
                }
            }
            current = next;
        }

        current
    }
}
