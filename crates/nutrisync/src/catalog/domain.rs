use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::normalizer::{clean_display, normalize_tag};

/// Catalog identifier. Accepted rows always carry a positive value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(pub u32);

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unordered set of lowercase nutrition/behavior tags.
///
/// Tags are trimmed and lowercased on insertion; blank tags are dropped and
/// duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertySet(BTreeSet<String>);

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: &str) -> bool {
        match normalize_tag(tag) {
            Some(tag) => self.0.insert(tag),
            None => false,
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Subset test: every tag in `tags` is present.
    pub fn contains_all(&self, tags: &[&str]) -> bool {
        tags.iter().all(|tag| self.contains(tag))
    }

    pub fn contains_any(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.contains(tag))
    }

    /// Number of distinct tags across both sets.
    pub fn union_len(&self, other: &PropertySet) -> usize {
        self.0.union(&other.0).count()
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
}

impl<S: AsRef<str>> FromIterator<S> for PropertySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = PropertySet::new();
        for tag in iter {
            set.insert(tag.as_ref());
        }
        set
    }
}

/// Immutable catalog entry shared by every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodRecord {
    pub id: FoodId,
    pub name: String,
    pub category: String,
    /// Advisory only; the compatibility cascade never reads it.
    pub season: String,
    pub properties: PropertySet,
}

impl FoodRecord {
    pub fn new<I, S>(id: FoodId, name: &str, category: &str, season: &str, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id,
            name: clean_display(name),
            category: category.trim().to_string(),
            season: season.trim().to_string(),
            properties: properties.into_iter().collect(),
        }
    }

    pub fn has(&self, tag: &str) -> bool {
        self.properties.contains(tag)
    }

    pub fn summary(&self) -> FoodSummary {
        FoodSummary {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
        }
    }
}

/// Listing view of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodSummary {
    pub id: FoodId,
    pub name: String,
    pub category: String,
}
