//! Annotation type hierarchy of a corpus
//!
//! Maps each annotation type to the type that contains it (`phone` ->
//! `word` -> `utterance`). Root types have no parent.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    parents: BTreeMap<String, Option<String>>,
    annotation_types: BTreeSet<String>,
}

impl Hierarchy {
    /// Build from (type, containing type) pairs
    ///
    /// A type reported both with and without a parent keeps the parent.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        let mut hierarchy = Self::default();
        for (child, parent) in pairs {
            hierarchy.annotation_types.insert(child.clone());
            let entry = hierarchy.parents.entry(child).or_insert(None);
            if parent.is_some() {
                *entry = parent;
            }
        }
        hierarchy
    }

    pub fn contains(&self, annotation_type: &str) -> bool {
        self.annotation_types.contains(annotation_type)
    }

    pub fn parent_of(&self, annotation_type: &str) -> Option<&str> {
        self.parents.get(annotation_type)?.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.annotation_types.is_empty()
    }

    /// Drop an annotation type, returning whether it was present
    ///
    /// Types it contained are attached to its own parent.
    pub fn remove_annotation_type(&mut self, annotation_type: &str) -> bool {
        let removed_parent = match self.parents.remove(annotation_type) {
            Some(parent) => parent,
            None => return self.annotation_types.remove(annotation_type),
        };
        self.annotation_types.remove(annotation_type);

        for parent in self.parents.values_mut() {
            if parent.as_deref() == Some(annotation_type) {
                *parent = removed_parent.clone();
            }
        }
        true
    }

    /// Types ordered from the outermost container inwards
    ///
    /// Ties (siblings at the same depth) are broken alphabetically.
    pub fn highest_to_lowest(&self) -> Vec<&str> {
        let mut ranked: Vec<(usize, &str)> = self
            .annotation_types
            .iter()
            .map(|t| (self.depth(t), t.as_str()))
            .collect();
        ranked.sort();
        ranked.into_iter().map(|(_, t)| t).collect()
    }

    fn depth(&self, annotation_type: &str) -> usize {
        let mut depth = 0;
        let mut current = annotation_type;
        // Bounded by the type count so a malformed cycle cannot spin forever
        while let Some(parent) = self.parent_of(current) {
            depth += 1;
            if depth > self.parents.len() {
                break;
            }
            current = parent;
        }
        depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(child: &str, parent: Option<&str>) -> (String, Option<String>) {
        (child.to_string(), parent.map(str::to_string))
    }

    fn sample() -> Hierarchy {
        Hierarchy::from_pairs([
            pair("phone", Some("syllabic")),
            pair("syllabic", Some("word")),
            pair("word", Some("utterance")),
            pair("utterance", None),
        ])
    }

    #[test]
    fn parent_wins_over_root_report() {
        let hierarchy = Hierarchy::from_pairs([pair("word", None), pair("word", Some("utterance"))]);
        assert_eq!(hierarchy.parent_of("word"), Some("utterance"));
    }

    #[test]
    fn orders_from_outermost() {
        let hierarchy = sample();
        assert_eq!(
            hierarchy.highest_to_lowest(),
            vec!["utterance", "word", "syllabic", "phone"]
        );
    }

    #[test]
    fn removing_reattaches_children() {
        let mut hierarchy = sample();
        assert!(hierarchy.remove_annotation_type("syllabic"));
        assert!(!hierarchy.contains("syllabic"));
        assert_eq!(hierarchy.parent_of("phone"), Some("word"));
        assert_eq!(
            hierarchy.highest_to_lowest(),
            vec!["utterance", "word", "phone"]
        );
    }

    #[test]
    fn removing_missing_type_is_harmless() {
        let mut hierarchy = Hierarchy::from_pairs([pair("word", None)]);
        let before = hierarchy.clone();
        assert!(!hierarchy.remove_annotation_type("syllabic"));
        assert_eq!(hierarchy, before);
    }

    #[test]
    fn cycle_does_not_hang() {
        let hierarchy = Hierarchy::from_pairs([pair("a", Some("b")), pair("b", Some("a"))]);
        assert_eq!(hierarchy.highest_to_lowest().len(), 2);
    }
}
