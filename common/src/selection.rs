//! # Scan Selection
//!
//! Parses the user's "which tools" answer: a comma-separated list of
//! catalog indices, where `0` selects the whole catalog.

use std::collections::BTreeSet;
use std::str::FromStr;

use thiserror::Error;

use crate::registry::{ToolRegistry, ToolSpec};

/// Index meaning "run every tool in the catalog".
pub const ALL_SENTINEL: usize = 0;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selection must not be empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("no tool with index {0} in the catalog")]
    UnknownIndex(usize),
}

/// A de-duplicated, ordered set of selected catalog indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    indices: BTreeSet<usize>,
}

impl Selection {
    /// The selection equivalent to answering `0`.
    pub fn all() -> Self {
        Self {
            indices: BTreeSet::from([ALL_SENTINEL]),
        }
    }

    pub fn contains_sentinel(&self) -> bool {
        self.indices.contains(&ALL_SENTINEL)
    }

    /// Resolves the selection against a registry.
    ///
    /// The sentinel expands to the whole catalog; otherwise every index
    /// must name a registry entry. The result preserves catalog order.
    pub fn expand<'r>(
        &self,
        registry: &'r ToolRegistry,
    ) -> Result<Vec<&'r ToolSpec>, SelectionError> {
        if self.contains_sentinel() {
            return Ok(registry.iter().collect());
        }

        let mut specs = Vec::with_capacity(self.indices.len());
        for &index in &self.indices {
            let spec = registry
                .get(index)
                .ok_or(SelectionError::UnknownIndex(index))?;
            specs.push(spec);
        }
        Ok(specs)
    }
}

impl FromStr for Selection {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut indices = BTreeSet::new();

        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let index = part
                .parse::<usize>()
                .map_err(|_| SelectionError::NotANumber(part.to_string()))?;
            indices.insert(index);
        }

        if indices.is_empty() {
            return Err(SelectionError::Empty);
        }
        Ok(Self { indices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ToolRegistry {
        ToolRegistry::new(vec![
            ToolSpec::new(1, "Alpha", "first", "alpha {target}"),
            ToolSpec::new(2, "Bravo", "second", "bravo {target}"),
            ToolSpec::new(3, "Charlie", "third", "charlie {target}"),
        ])
    }

    #[test]
    fn parses_comma_separated_indices() {
        let registry = registry();
        let selection = Selection::from_str("1,3").unwrap();
        let specs = selection.expand(&registry).unwrap();
        let names: Vec<&str> = specs.iter().map(|spec| spec.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Charlie"]);
    }

    #[test]
    fn tolerates_spaces_and_duplicates() {
        let registry = registry();
        let selection = Selection::from_str(" 2, 2 ,1,").unwrap();
        let specs = selection.expand(&registry).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "Alpha");
    }

    #[test]
    fn sentinel_expands_to_whole_catalog() {
        let registry = registry();
        for input in ["0", "0,2", "2,0"] {
            let selection = Selection::from_str(input).unwrap();
            assert!(selection.contains_sentinel());
            assert_eq!(selection.expand(&registry).unwrap().len(), registry.len());
        }
        assert_eq!(Selection::all().expand(&registry).unwrap().len(), 3);
    }

    #[test]
    fn rejects_garbage_and_empty_input() {
        assert_eq!(
            Selection::from_str("1,two"),
            Err(SelectionError::NotANumber("two".to_string()))
        );
        assert_eq!(Selection::from_str(""), Err(SelectionError::Empty));
        assert_eq!(Selection::from_str(" , "), Err(SelectionError::Empty));
    }

    #[test]
    fn unknown_index_fails_at_expansion() {
        let selection = Selection::from_str("1,7").unwrap();
        assert_eq!(
            selection.expand(&registry()),
            Err(SelectionError::UnknownIndex(7))
        );
    }
}
