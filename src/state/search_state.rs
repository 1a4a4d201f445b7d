//! Search panel state.
//!
//! Holds panel visibility, the query buffer and the latest outcome. Running
//! the query against the index is left to the caller so this stays free of
//! page data.

use eduhack::search::{ContentIndex, SearchOutcome};

/// State of the search box and its result list.
#[derive(Debug)]
pub struct SearchState {
    open: bool,
    query: String,
    outcome: SearchOutcome,
    /// Set when the panel opens; consumed by the text field on the next frame
    focus_requested: bool,
    /// Screen area of the toggle button and panel, for outside-click checks
    container: Option<egui::Rect>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            open: false,
            query: String::new(),
            outcome: SearchOutcome::Inactive,
            focus_requested: false,
            container: None,
        }
    }

    // ===== Visibility =====

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Shows or hides the panel.
    ///
    /// `None` flips the current state; `Some(show)` is a no-op when the
    /// panel is already in that state. Opening requests input focus.
    pub fn toggle(&mut self, show: Option<bool>) {
        let show = show.unwrap_or(!self.open);
        if show == self.open {
            return;
        }
        self.open = show;
        self.focus_requested = show;
    }

    pub fn close(&mut self) {
        self.toggle(Some(false));
    }

    /// Returns true once after the panel was opened
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    // ===== Query =====

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    /// Re-runs the current query against `index`
    pub fn refresh(&mut self, index: &ContentIndex) {
        self.outcome = index.search(&self.query);
    }

    /// Empties the query and clears any displayed results
    pub fn clear(&mut self) {
        self.query.clear();
        self.outcome = SearchOutcome::Inactive;
    }

    /// Closes the panel and forgets the query, for a freshly loaded page
    pub fn reset(&mut self) {
        self.close();
        self.clear();
        self.container = None;
    }

    // ===== Outside clicks =====

    /// Records the screen area that counts as "inside" the search widget
    pub fn set_container(&mut self, rect: egui::Rect) {
        self.container = Some(rect);
    }

    /// Grows the inside area, e.g. by the panel drawn below the toggle
    pub fn extend_container(&mut self, rect: egui::Rect) {
        self.container = Some(match self.container {
            Some(current) => current.union(rect),
            None => rect,
        });
    }

    /// Closes the panel when a click lands outside the search widget.
    ///
    /// Returns true if the panel was closed.
    pub fn handle_click(&mut self, pos: egui::Pos2) -> bool {
        if !self.open {
            return false;
        }
        match self.container {
            Some(rect) if rect.contains(pos) => false,
            _ => {
                self.close();
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduhack::search::IndexedFragment;
    use eduhack::NodeRef;

    fn index() -> ContentIndex {
        ContentIndex::from_fragments(vec![IndexedFragment {
            node: NodeRef::root(),
            text: "Schedule details here".to_string(),
            region_label: "schedule".to_string(),
            region_id: "schedule".to_string(),
            score: 0,
        }])
    }

    #[test]
    fn test_toggle_semantics() {
        let mut search = SearchState::new();

        search.toggle(Some(false));
        assert!(!search.is_open());
        assert!(!search.take_focus_request());

        search.toggle(None);
        assert!(search.is_open());
        assert!(search.take_focus_request());
        assert!(!search.take_focus_request());

        // Already open: no new focus request
        search.toggle(Some(true));
        assert!(search.is_open());
        assert!(!search.take_focus_request());

        search.toggle(None);
        assert!(!search.is_open());
    }

    #[test]
    fn test_refresh_and_clear() {
        let mut search = SearchState::new();
        let index = index();

        *search.query_mut() = "sched".to_string();
        search.refresh(&index);
        assert_eq!(search.outcome().results().len(), 1);

        *search.query_mut() = "s".to_string();
        search.refresh(&index);
        assert_eq!(search.outcome(), &SearchOutcome::Inactive);

        *search.query_mut() = "zzz".to_string();
        search.refresh(&index);
        assert!(search.outcome().is_active());
        assert!(search.outcome().results().is_empty());

        search.clear();
        assert_eq!(search.query(), "");
        assert!(!search.outcome().is_active());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut search = SearchState::new();
        search.toggle(Some(true));
        search.set_container(egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(100.0, 20.0)));
        search.extend_container(egui::Rect::from_min_max(egui::pos2(0.0, 20.0), egui::pos2(100.0, 100.0)));

        assert!(!search.handle_click(egui::pos2(50.0, 10.0)));
        assert!(!search.handle_click(egui::pos2(50.0, 50.0)));
        assert!(search.is_open());

        assert!(search.handle_click(egui::pos2(150.0, 50.0)));
        assert!(!search.is_open());

        // Closed panels ignore clicks
        assert!(!search.handle_click(egui::pos2(150.0, 50.0)));
    }
}
