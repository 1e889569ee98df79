/// Filesystem adapters for writing the rendered listing
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
