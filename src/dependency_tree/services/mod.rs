mod edge_list_parser;
mod module_collector;
mod tree_builder;

pub use edge_list_parser::EdgeListParser;
pub use module_collector::ModuleCollector;
pub use tree_builder::TreeBuilder;
