use std::collections::BTreeMap;

/// A module in the rendered dependency tree.
///
/// A node owns its children exclusively: the same identifier reachable
/// from two parents yields two independent nodes. Children are keyed by
/// identifier, so siblings are unique and iterate in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    description: Option<String>,
    children: BTreeMap<String, Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            children: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Attaches a child. An existing child with the same identifier is kept.
    pub fn add_child(&mut self, child: Node) {
        self.children.entry(child.name.clone()).or_insert(child);
    }

    /// Children in lexicographic identifier order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = &Node> {
        self.children.values()
    }

    pub(crate) fn children_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.children.values_mut()
    }

    /// Detaches and returns the child with the given identifier.
    pub(crate) fn take_child(&mut self, name: &str) -> Option<Node> {
        self.children.remove(name)
    }

    #[cfg(test)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
