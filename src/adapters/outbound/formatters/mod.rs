/// Formatter adapters for the tree and flat export listings
mod export_formatter;
mod tree_formatter;

pub use export_formatter::ExportFormatter;
pub use tree_formatter::TreeFormatter;

/// Appends `" - <description>"` when descriptions were requested and one is known
fn description_suffix(description: Option<&str>, enabled: bool) -> String {
    match description {
        Some(description) if enabled && !description.is_empty() => {
            format!(" - {}", description)
        }
        _ => String::new(),
    }
}
