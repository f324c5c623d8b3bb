//! Slot names and ordered name sets.

use std::fmt;

use serde::Serialize;

use crate::types::config::ValidationPolicy;
use crate::{MemoError, MemoResult};

/// Words that can never be used as a variable name.
const RESERVED: &[&str] = &[
    // strict
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
    // reserved for future use
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// A validated local-variable name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SlotName(String);

impl SlotName {
    /// Validates `name` as a variable identifier.
    pub fn new<S: Into<String>>(name: S) -> MemoResult<Self> {
        let name = name.into();

        let mut chars = name.chars();
        let valid = match chars.next() {
            Some(first) if first.is_alphabetic() || first == '_' => {
                chars.all(|c| c.is_alphabetic() || c.is_ascii_digit() || c == '_')
            }
            _ => false,
        };
        if !valid || name == "_" {
            return Err(MemoError::InvalidName(name));
        }
        if RESERVED.contains(&name.as_str()) {
            return Err(MemoError::ReservedName(name));
        }

        Ok(Self(name))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SlotName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered, duplicate-free list of slot names.
///
/// `Display` renders the declaration block the private scope is built from,
/// e.g. `var iSeed, total;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SlotNameSet(Vec<SlotName>);

impl SlotNameSet {
    /// Builds a name set, applying `policy` to repeated names.
    pub fn from_names<I>(names: I, policy: ValidationPolicy) -> MemoResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut set: Vec<SlotName> = Vec::new();

        for raw in names {
            let name = SlotName::new(raw)?;
            if set.contains(&name) {
                match policy {
                    ValidationPolicy::Strict => {
                        return Err(MemoError::DuplicateName(name.0));
                    }
                    ValidationPolicy::Permissive => {
                        tracing::warn!("Slot '{}' declared more than once, keeping one", name);
                        continue;
                    }
                }
            }
            set.push(name);
        }

        if set.is_empty() {
            return Err(MemoError::EmptyNames);
        }

        Ok(Self(set))
    }

    /// Number of declared names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a set built by `from_names`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotName> {
        self.0.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Declaration index of `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|n| n.as_str() == name)
    }
}

impl fmt::Display for SlotNameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("var ")?;
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name.as_str())?;
        }
        f.write_str(";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["iSeed", "_cache", "x1", "total_count", "ñame"] {
            assert!(SlotName::new(name).is_ok(), "{} should be valid", name);
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "_", "1x", "a-b", "a b", "x.y", "$x", "x²"] {
            let err = SlotName::new(name).unwrap_err();
            assert!(matches!(err, MemoError::InvalidName(_)), "{:?}", name);
        }
    }

    #[test]
    fn test_reserved_names() {
        for name in ["fn", "let", "self", "yield", "match"] {
            let err = SlotName::new(name).unwrap_err();
            assert!(matches!(err, MemoError::ReservedName(_)));
        }
    }

    #[test]
    fn test_set_keeps_order() {
        let set = SlotNameSet::from_names(["b", "a", "c"], ValidationPolicy::Strict).unwrap();
        let names: Vec<&str> = set.iter().map(SlotName::as_str).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(set.position("c"), Some(2));
        assert!(!set.contains("d"));
    }

    #[test]
    fn test_empty_set_rejected() {
        let names: Vec<String> = Vec::new();
        let err = SlotNameSet::from_names(names, ValidationPolicy::Permissive).unwrap_err();
        assert!(matches!(err, MemoError::EmptyNames));
    }

    #[test]
    fn test_duplicates_per_policy() {
        let set = SlotNameSet::from_names(["a", "b", "a"], ValidationPolicy::Permissive).unwrap();
        assert_eq!(set.len(), 2);

        let err = SlotNameSet::from_names(["a", "b", "a"], ValidationPolicy::Strict).unwrap_err();
        assert!(matches!(err, MemoError::DuplicateName(ref n) if n == "a"));
    }

    #[test]
    fn test_declaration_display() {
        let set = SlotNameSet::from_names(["iSeed", "total"], ValidationPolicy::Strict).unwrap();
        assert_eq!(set.to_string(), "var iSeed, total;");
    }

    #[test]
    fn test_first_bad_name_wins() {
        let err = SlotNameSet::from_names(["ok", "fn", "1x"], ValidationPolicy::Permissive)
            .unwrap_err();
        assert!(matches!(err, MemoError::ReservedName(ref n) if n == "fn"));
    }
}
