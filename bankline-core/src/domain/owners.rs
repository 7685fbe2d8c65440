//! Joint account owner set

use super::result::{Error, Result};

/// Names of the parties holding rights on a joint account.
///
/// Membership is what matters; insertion order is kept only so listings are
/// stable. Names are trimmed and duplicates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JointOwners(Vec<String>);

impl JointOwners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an owner set from names, dropping duplicates
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut owners = Self::new();
        for name in names {
            owners.insert(name.as_ref())?;
        }
        Ok(owners)
    }

    /// Add an owner. Returns `false` when the name was already present.
    pub fn insert(&mut self, name: &str) -> Result<bool> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid("owner name cannot be empty"));
        }
        if self.contains(trimmed) {
            return Ok(false);
        }
        self.0.push(trimmed.to_string());
        Ok(true)
    }

    pub fn contains(&self, name: &str) -> bool {
        let trimmed = name.trim();
        self.0.iter().any(|owner| owner == trimmed)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_ignored() {
        let mut owners = JointOwners::from_names(["Alice"]).unwrap();
        assert!(!owners.insert("Alice").unwrap());
        assert!(!owners.insert("  Alice ").unwrap());
        assert!(owners.insert("Bob").unwrap());
        assert_eq!(owners.as_slice(), ["Alice", "Bob"]);
    }

    #[test]
    fn test_from_names_dedups() {
        let owners = JointOwners::from_names(["Alice", "Bob", "Alice"]).unwrap();
        assert_eq!(owners.len(), 2);
        assert!(owners.contains("Bob"));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut owners = JointOwners::new();
        assert!(owners.insert("   ").unwrap_err().is_invalid_argument());
        assert!(owners.is_empty());
    }
}
