//! Loaded page and search index state.
//!
//! This module encapsulates the page document currently on screen, the file
//! it came from, and the content index built from it.

use eduhack::{ContentIndex, PageDocument, SiteConfig};
use std::path::PathBuf;

/// State related to the loaded page.
///
/// Responsibilities:
/// - Owning the page document
/// - Tracking the source file path
/// - Keeping the content index in sync with the document
#[derive(Default)]
pub struct PageState {
    /// The currently displayed page (if any)
    document: Option<PageDocument>,
    /// Path to the loaded file (None for the built-in page)
    file_path: Option<PathBuf>,
    /// Fragments scanned from the document, built once per load
    index: ContentIndex,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the page and rebuilds the content index.
    ///
    /// # Arguments
    /// * `document` - The page to display
    /// * `path` - Optional file path (None for the built-in page)
    pub fn load_page(&mut self, document: PageDocument, path: Option<PathBuf>) {
        self.index = ContentIndex::build(&document, &document.config.default_region_label);
        self.document = Some(document);
        self.file_path = path;
    }

    // ===== Queries =====

    pub fn document(&self) -> Option<&PageDocument> {
        self.document.as_ref()
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    pub fn index(&self) -> &ContentIndex {
        &self.index
    }

    /// Configuration of the loaded page, or the defaults when nothing is loaded
    pub fn config(&self) -> SiteConfig {
        self.document
            .as_ref()
            .map(|d| d.config.clone())
            .unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.document.as_ref().map(|d| d.title.as_str()).unwrap_or("")
    }
}
