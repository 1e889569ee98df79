use std::collections::BTreeMap;

/// Flat adjacency list as emitted by the module graph command.
///
/// Keys iterate in lexicographic order, which makes root selection
/// deterministic. Dependency lists keep their original order and may
/// contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeMap {
    edges: BTreeMap<String, Vec<String>>,
}

impl EdgeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `to` to the dependency list of `from`.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.edges.entry(from.into()).or_default().push(to.into());
    }

    /// Registers `from` as a source with no dependencies (if not present yet).
    pub fn add_source(&mut self, from: impl Into<String>) {
        self.edges.entry(from.into()).or_default();
    }

    pub fn dependencies_of(&self, identifier: &str) -> &[String] {
        self.edges
            .get(identifier)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.edges.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of distinct source identifiers.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

impl<K, V> FromIterator<(K, Vec<V>)> for EdgeMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Vec<V>)>>(iter: I) -> Self {
        let mut map = EdgeMap::new();
        for (from, tos) in iter {
            let from = from.into();
            map.add_source(from.clone());
            for to in tos {
                map.add_edge(from.clone(), to);
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_preserves_order_and_duplicates() {
        let mut map = EdgeMap::new();
        map.add_edge("root", "b@v1");
        map.add_edge("root", "a@v1");
        map.add_edge("root", "b@v1");

        assert_eq!(map.dependencies_of("root"), ["b@v1", "a@v1", "b@v1"]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.edge_count(), 3);
    }

    #[test]
    fn test_dependencies_of_unknown_is_empty() {
        let map = EdgeMap::new();
        assert!(map.dependencies_of("missing").is_empty());
        assert!(map.is_empty());
    }

    #[test]
    fn test_sources_are_sorted() {
        let map: EdgeMap = [
            ("zeta", vec!["x@v1"]),
            ("alpha@v1", vec![]),
            ("mid", vec![]),
        ]
        .into_iter()
        .collect();

        let sources: Vec<&str> = map.sources().collect();
        assert_eq!(sources, vec!["alpha@v1", "mid", "zeta"]);
    }

    #[test]
    fn test_from_iter_keeps_sources_without_edges() {
        let map: EdgeMap = [("leaf@v1", Vec::<&str>::new())].into_iter().collect();
        assert_eq!(map.len(), 1);
        assert!(map.dependencies_of("leaf@v1").is_empty());
    }
}
