//! Cross-locale symmetry check for message dictionaries.
//!
//! Every path reachable in one locale must be reachable, with the same shape,
//! in every other locale. This is a data-integrity check for tests and CI;
//! lookups never fall back to another locale at runtime.

use std::collections::BTreeSet;
use std::fmt;

use crate::format::placeholders;
use crate::tree::{join, MessageNode, MessageTree, Shape};
use crate::translator::Translator;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompletenessIssue {
    /// A locale has no dictionary at all.
    MissingDictionary { locale: String },
    /// `path` exists in `present_in` but not in `locale`.
    Missing {
        locale: String,
        path: String,
        present_in: String,
    },
    ShapeMismatch {
        locale: String,
        path: String,
        expected: Shape,
        found: Shape,
    },
    EmptyLeaf { locale: String, path: String },
    /// The same leaf names different arguments in two locales.
    PlaceholderMismatch {
        path: String,
        reference: String,
        locale: String,
        expected: BTreeSet<String>,
        found: BTreeSet<String>,
    },
}

impl fmt::Display for CompletenessIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDictionary { locale } => write!(f, "[{locale}] no dictionary loaded"),
            Self::Missing {
                locale,
                path,
                present_in,
            } => write!(f, "[{locale}] missing `{path}` (present in {present_in})"),
            Self::ShapeMismatch {
                locale,
                path,
                expected,
                found,
            } => write!(f, "[{locale}] `{path}` is a {found}, expected a {expected}"),
            Self::EmptyLeaf { locale, path } => write!(f, "[{locale}] `{path}` is empty"),
            Self::PlaceholderMismatch {
                path,
                reference,
                locale,
                expected,
                found,
            } => write!(
                f,
                "[{locale}] `{path}` uses placeholders {found:?}, {reference} uses {expected:?}"
            ),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletenessReport {
    pub issues: Vec<CompletenessIssue>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for CompletenessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return f.write_str("all locales complete");
        }
        writeln!(f, "{} translation issue(s):", self.issues.len())?;
        for issue in &self.issues {
            writeln!(f, "  {issue}")?;
        }
        Ok(())
    }
}

/// Report every path of `reference` that `other` lacks or shapes differently.
fn diff(
    reference: (&str, &MessageNode),
    other: (&str, &MessageNode),
    path: &str,
    issues: &mut Vec<CompletenessIssue>,
) {
    let (ref_locale, ref_node) = reference;
    let (locale, node) = other;
    for (segment, ref_child) in ref_node.children() {
        let child_path = join(path, &segment);
        match node.child(&segment) {
            None => issues.push(CompletenessIssue::Missing {
                locale: locale.to_string(),
                path: child_path,
                present_in: ref_locale.to_string(),
            }),
            Some(child) if child.shape() != ref_child.shape() => {
                issues.push(CompletenessIssue::ShapeMismatch {
                    locale: locale.to_string(),
                    path: child_path,
                    expected: ref_child.shape(),
                    found: child.shape(),
                })
            }
            Some(child) => diff((ref_locale, ref_child), (locale, child), &child_path, issues),
        }
    }
}

/// Check one set of dictionaries against each other.
pub fn check_trees(trees: &[(&str, &MessageTree)]) -> CompletenessReport {
    let mut issues = Vec::new();

    for (locale, tree) in trees {
        for (path, text) in tree.leaves() {
            if text.trim().is_empty() {
                issues.push(CompletenessIssue::EmptyLeaf {
                    locale: locale.to_string(),
                    path,
                });
            }
        }
    }

    for (i, (ref_locale, ref_tree)) in trees.iter().enumerate() {
        for (j, (locale, tree)) in trees.iter().enumerate() {
            if i == j {
                continue;
            }
            diff(
                (*ref_locale, ref_tree.root()),
                (*locale, tree.root()),
                "",
                &mut issues,
            );
        }
    }

    // Placeholder parity, measured against the first locale only.
    if let Some((ref_locale, ref_tree)) = trees.first() {
        for (path, ref_text) in ref_tree.leaves() {
            let expected = placeholders(ref_text);
            for (locale, tree) in &trees[1..] {
                let Some(text) = tree.get_text(&path) else {
                    continue;
                };
                let found = placeholders(text);
                if found != expected {
                    issues.push(CompletenessIssue::PlaceholderMismatch {
                        path: path.clone(),
                        reference: ref_locale.to_string(),
                        locale: locale.to_string(),
                        expected: expected.clone(),
                        found,
                    });
                }
            }
        }
    }

    CompletenessReport { issues }
}

/// Check every supported locale of a translator.
pub fn check_completeness(translator: &Translator) -> CompletenessReport {
    let mut missing = Vec::new();
    let mut trees = Vec::new();
    for code in translator.registry().codes() {
        match translator.dictionary(code) {
            Some(tree) => trees.push((code, tree)),
            None => missing.push(CompletenessIssue::MissingDictionary {
                locale: code.to_string(),
            }),
        }
    }
    let mut report = check_trees(&trees);
    missing.append(&mut report.issues);
    CompletenessReport { issues: missing }
}
