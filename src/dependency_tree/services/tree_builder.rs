use crate::dependency_tree::domain::identifier::{
    is_toolchain_dependency, is_versioned, strip_version, WORKSPACE_MODULE,
};
use crate::dependency_tree::domain::{DependencyTree, EdgeMap, Node};
use std::collections::HashSet;

/// TreeBuilder service turning a flat edge map into a dependency tree
///
/// Expansion uses one visited set for the whole traversal. An identifier
/// is expanded the first time the depth-first walk reaches it; every later
/// reference becomes a childless leaf. This keeps the walk finite on
/// cyclic graphs and materializes each subtree once.
pub struct TreeBuilder;

impl TreeBuilder {
    /// Builds the tree for `edges`.
    ///
    /// When the graph comes from the throwaway workspace and a package was
    /// requested, the requested module replaces the workspace as root.
    ///
    /// # Returns
    /// `None` when the edge map is empty.
    pub fn build(edges: &EdgeMap, requested_package: Option<&str>) -> Option<DependencyTree> {
        let root_name = Self::select_root(edges)?;

        let mut visited = HashSet::new();
        let root = Self::expand(Node::new(root_name), edges, &mut visited);

        let root = match requested_package {
            Some(package) if !package.is_empty() && root.name() == WORKSPACE_MODULE => {
                Self::reroot(root, package)
            }
            _ => root,
        };

        Some(DependencyTree::new(root))
    }

    /// Picks the first unversioned source, conventionally the main module.
    /// Falls back to the first source when every source is versioned.
    pub fn select_root(edges: &EdgeMap) -> Option<&str> {
        edges
            .sources()
            .find(|source| !is_versioned(source))
            .or_else(|| edges.sources().next())
    }

    fn expand(mut node: Node, edges: &EdgeMap, visited: &mut HashSet<String>) -> Node {
        if !visited.insert(node.name().to_string()) {
            return node;
        }

        for dependency in edges.dependencies_of(node.name()) {
            if node.has_child(dependency) {
                continue;
            }
            let child = Self::expand(Node::new(dependency.as_str()), edges, visited);
            node.add_child(child);
        }

        node
    }

    /// Replaces the workspace root with the direct child matching `package`.
    ///
    /// A child matches when its version-stripped path is a prefix of the
    /// requested path or the other way round, so `github.com/a-h/templ/cmd/templ`
    /// finds `github.com/a-h/templ@v0.3.960`. Toolchain nodes never match.
    fn reroot(mut root: Node, package: &str) -> Node {
        let requested = strip_version(package);

        let matched = root
            .children()
            .map(Node::name)
            .filter(|name| !is_toolchain_dependency(name))
            .find(|name| {
                let base = strip_version(name);
                requested.starts_with(base) || base.starts_with(requested)
            })
            .map(str::to_string);

        match matched.and_then(|name| root.take_child(&name)) {
            Some(child) => child,
            None => root,
        }
    }
}
