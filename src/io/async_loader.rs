//! Asynchronous page file loading.
//!
//! Page files are read and parsed in a background thread so the frame loop
//! keeps running while a large file is opened.

use eframe::egui;
use eduhack::{DemoPageReader, PageDocument, PageReader};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use crate::io::{read_page_file, LoadingState};

/// Result of a completed page loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        document: PageDocument,
        /// Path to the file that was loaded (None for the built-in page)
        path: Option<PathBuf>,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Manages asynchronous loading of page files.
pub struct AsyncLoader {
    /// Shared loading state
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<PageDocument, String>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.loading_state
            .lock()
            .map(|state| state.in_progress)
            .unwrap_or(false)
    }

    /// File currently being read, if any
    pub fn loading_source(&self) -> Option<PathBuf> {
        self.loading_state.lock().ok().and_then(|state| state.source.clone())
    }

    /// Starts loading a page file asynchronously.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON page file
    /// * `ctx` - egui context for requesting a repaint when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        if let Ok(mut state) = self.loading_state.lock() {
            state.begin(&path);
        }

        self.pending_load_path = Some(path.clone());
        tracing::info!("Loading page file {}", path.display());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = read_page_file(&path);
            let _ = sender.send(result);

            if let Ok(mut state) = loading_state.lock() {
                state.finish();
            }

            // Wake the GUI thread so the result is picked up
            ctx_handle.request_repaint();
        });
    }

    /// Loads the built-in page synchronously.
    pub fn load_demo_page(&mut self) -> Result<PageDocument, String> {
        DemoPageReader::new().read("").map_err(|e| e.to_string())
    }

    /// Returns the result of the background load if it has finished.
    ///
    /// # Returns
    /// * `LoadResult::Success` - Loading completed successfully
    /// * `LoadResult::Error` - Loading failed with an error
    /// * `LoadResult::None` - Still loading, or nothing was started
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };
        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        self.loading_receiver = None;
        let path = self.pending_load_path.take();
        match result {
            Ok(document) => LoadResult::Success { document, path },
            Err(error_msg) => LoadResult::Error(error_msg),
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}
