use crate::dependency_tree::domain::identifier::{is_toolchain_dependency, WORKSPACE_MODULE};
use crate::dependency_tree::domain::EdgeMap;
use std::collections::BTreeSet;

/// ModuleCollector service producing the flat export list
pub struct ModuleCollector;

impl ModuleCollector {
    /// Collects every distinct module named in `edges`, sorted.
    ///
    /// Sources and targets are both included, except the workspace
    /// module as a source and toolchain pseudo-dependencies anywhere.
    pub fn collect(edges: &EdgeMap) -> Vec<String> {
        let mut modules = BTreeSet::new();

        for (from, tos) in edges.iter() {
            if from != WORKSPACE_MODULE && !is_toolchain_dependency(from) {
                modules.insert(from);
            }
            for to in tos {
                if !is_toolchain_dependency(to) {
                    modules.insert(to.as_str());
                }
            }
        }

        modules.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_sorted_and_deduplicated() {
        let edges: EdgeMap = [
            ("example.com/app", vec!["b.io/x@v1", "a.io/y@v1", "b.io/x@v1"]),
            ("b.io/x@v1", vec!["a.io/y@v1"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            ModuleCollector::collect(&edges),
            vec!["a.io/y@v1", "b.io/x@v1", "example.com/app"]
        );
    }

    #[test]
    fn test_collect_filters_toolchain() {
        let edges: EdgeMap = [
            ("example.com/app", vec!["go@1.21", "toolchain@go1.21.5", "dep@v1"]),
            ("go@1.21", vec!["toolchain@go1.21.5"]),
            ("dep@v1", vec!["go@1.20"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            ModuleCollector::collect(&edges),
            vec!["dep@v1", "example.com/app"]
        );
    }

    #[test]
    fn test_collect_excludes_workspace_source() {
        let edges: EdgeMap = [
            ("temp", vec!["github.com/example/pkg@v1.0.0"]),
            ("github.com/example/pkg@v1.0.0", vec!["dep@v1.0.0"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            ModuleCollector::collect(&edges),
            vec!["dep@v1.0.0", "github.com/example/pkg@v1.0.0"]
        );
    }
}
