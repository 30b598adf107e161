//! General-purpose utility modules.

pub mod error;
pub mod instrumentation;

// Re-export commonly used items
pub use error::{ImageError, Result};
pub use instrumentation::{Counter, Instrumentation};
