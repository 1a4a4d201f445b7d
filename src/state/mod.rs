//! State management modules for the EduHack page viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Page state (page document, source path, content index)
//! - Search state (panel visibility, query, results)
//! - Layout state (scroll offset, viewport width, display toggles)

mod page_state;
mod search_state;
mod layout_state;

pub use page_state::PageState;
pub use search_state::SearchState;
pub use layout_state::LayoutState;
