use std::collections::HashMap;

/// Side table of module descriptions keyed by identifier.
///
/// Produced by the enrichment pass; failed lookups are stored as
/// parenthesized reasons, so every looked-up identifier has an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptions {
    entries: HashMap<String, String>,
}

impl Descriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, identifier: impl Into<String>, description: impl Into<String>) {
        self.entries.insert(identifier.into(), description.into());
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Descriptions {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
