use super::{Descriptions, Node};
use std::collections::BTreeSet;

/// DependencyTree aggregate: a single rooted tree of modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyTree {
    root: Node,
}

impl DependencyTree {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Distinct identifiers reachable from the root, sorted.
    pub fn identifiers(&self) -> BTreeSet<String> {
        let mut identifiers = BTreeSet::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            identifiers.insert(node.name().to_string());
            stack.extend(node.children());
        }
        identifiers
    }

    /// Total number of nodes, counting repeated identifiers once per position.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Copies descriptions onto every node whose identifier has an entry.
    pub fn apply_descriptions(&mut self, descriptions: &Descriptions) {
        let mut stack = vec![&mut self.root];
        while let Some(node) = stack.pop() {
            if let Some(description) = descriptions.get(node.name()) {
                node.set_description(description);
            }
            stack.extend(node.children_mut());
        }
    }
}
