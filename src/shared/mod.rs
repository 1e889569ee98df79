/// Shared kernel - error types and common aliases used by every layer
pub mod error;
mod result;

pub use result::Result;
