pub mod dependency_tree;
pub mod descriptions;
pub mod edge_map;
pub mod github_repository;
pub mod identifier;
pub mod node;

pub use dependency_tree::DependencyTree;
pub use descriptions::Descriptions;
pub use edge_map::EdgeMap;
pub use github_repository::GitHubRepository;
pub use node::Node;
