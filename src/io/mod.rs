//! I/O modules for page file loading.

pub mod file_loader;
pub mod async_loader;

// Re-export commonly used types
pub use file_loader::{read_page_file, LoadingState};
pub use async_loader::{AsyncLoader, LoadResult};
