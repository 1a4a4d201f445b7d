//! Content indexing and substring search.
//!
//! The index is built once from a [`PageDocument`]. Ranking is a fixed
//! two-tier heuristic: a case-insensitive substring match scores 100 and a
//! prefix match earns 50 more. Ties keep scan order.

use crate::page::{ContentNode, NodeKind, NodeRef, PageDocument};

/// Maximum number of results returned by a search
pub const MAX_RESULTS: usize = 8;

/// Queries shorter than this (after trimming) are not searched
pub const MIN_QUERY_CHARS: usize = 2;

/// Fragments must be longer than this after trimming
pub const MAX_EXCLUDED_FRAGMENT_CHARS: usize = 2;

pub const SCORE_CONTAINS: u32 = 100;
pub const SCORE_PREFIX_BONUS: u32 = 50;

/// One unit of searchable text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFragment {
    /// Source node in the page tree
    pub node: NodeRef,
    /// Trimmed text content, always longer than two characters
    pub text: String,
    pub region_label: String,
    /// Id of the owning region, empty when there is none
    pub region_id: String,
    /// Always 0 in the index; only results carry a score
    pub score: u32,
}

/// A scored fragment returned by [`ContentIndex::search`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Position of the fragment in the index
    pub position: usize,
    pub node: NodeRef,
    pub text: String,
    pub region_label: String,
    pub region_id: String,
    pub score: u32,
}

/// Outcome of a search request.
///
/// `Inactive` means there is no query to answer and any displayed results
/// should be cleared; it is not the same as a query with zero matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Inactive,
    Results(Vec<SearchResult>),
}

impl SearchOutcome {
    pub fn is_active(&self) -> bool {
        matches!(self, SearchOutcome::Results(_))
    }

    /// The results, empty when inactive
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchOutcome::Inactive => &[],
            SearchOutcome::Results(results) => results,
        }
    }
}

/// Indexing passes in priority order
#[derive(Debug, Clone, Copy)]
enum Pass {
    Headings,
    Paragraphs,
    ListItems,
    MarkedSearchable,
}

const PASSES: [Pass; 4] = [
    Pass::Headings,
    Pass::Paragraphs,
    Pass::ListItems,
    Pass::MarkedSearchable,
];

impl Pass {
    fn matches(self, node: &ContentNode) -> bool {
        match self {
            Pass::Headings => node.is_heading(),
            Pass::Paragraphs => node.kind == NodeKind::Paragraph,
            Pass::ListItems => node.kind == NodeKind::ListItem,
            Pass::MarkedSearchable => node.searchable,
        }
    }
}

/// Scores `text` against `query`, case-insensitively.
///
/// Returns 0, [`SCORE_CONTAINS`], or [`SCORE_CONTAINS`] + [`SCORE_PREFIX_BONUS`].
pub fn score(text: &str, query: &str) -> u32 {
    let text = text.to_lowercase();
    let query = query.to_lowercase();

    if !text.contains(&query) {
        return 0;
    }
    if text.starts_with(&query) {
        SCORE_CONTAINS + SCORE_PREFIX_BONUS
    } else {
        SCORE_CONTAINS
    }
}

/// Shortens `text` to at most `max_chars` characters, appending `...` when
/// anything was cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// In-memory list of fragments scanned from a page
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    fragments: Vec<IndexedFragment>,
}

impl ContentIndex {
    /// Scans the page once.
    ///
    /// Headings come first, then paragraphs, list items and explicitly
    /// searchable nodes, each pass in document order. A searchable heading
    /// is therefore indexed twice.
    pub fn build(document: &PageDocument, default_label: &str) -> Self {
        let nodes = document.walk();
        let mut fragments = Vec::new();

        for pass in PASSES {
            for (node_ref, node) in nodes.iter().filter(|(_, node)| pass.matches(node)) {
                let text = node.text_content().trim().to_string();
                if text.chars().count() <= MAX_EXCLUDED_FRAGMENT_CHARS {
                    continue;
                }

                let (region_label, region_id) = region_of(document, node_ref, default_label);
                fragments.push(IndexedFragment {
                    node: node_ref.clone(),
                    text,
                    region_label,
                    region_id,
                    score: 0,
                });
            }
        }

        tracing::info!("Indexed {} fragments from '{}'", fragments.len(), document.title);
        Self { fragments }
    }

    /// Builds an index from ready-made fragments (scores are reset)
    pub fn from_fragments(fragments: impl IntoIterator<Item = IndexedFragment>) -> Self {
        Self {
            fragments: fragments
                .into_iter()
                .map(|f| IndexedFragment { score: 0, ..f })
                .collect(),
        }
    }

    pub fn fragments(&self) -> &[IndexedFragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Ranks every fragment against `query`.
    ///
    /// The index itself is left untouched.
    pub fn search(&self, query: &str) -> SearchOutcome {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return SearchOutcome::Inactive;
        }

        let mut results: Vec<SearchResult> = self
            .fragments
            .iter()
            .enumerate()
            .filter_map(|(position, fragment)| {
                let score = score(&fragment.text, query);
                (score > 0).then(|| SearchResult {
                    position,
                    node: fragment.node.clone(),
                    text: fragment.text.clone(),
                    region_label: fragment.region_label.clone(),
                    region_id: fragment.region_id.clone(),
                    score,
                })
            })
            .collect();

        // sort_by is stable, so equal scores keep index order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(MAX_RESULTS);

        tracing::debug!("Search '{}' matched {} fragments", query, results.len());
        SearchOutcome::Results(results)
    }
}

/// Label and id of the region owning a node
fn region_of(document: &PageDocument, node_ref: &NodeRef, default_label: &str) -> (String, String) {
    let Some(region) = document.enclosing_region(node_ref) else {
        return (default_label.to_string(), String::new());
    };

    let region_id = region.non_empty_id().unwrap_or_default().to_string();
    let label = if !region_id.is_empty() {
        region_id.clone()
    } else {
        region
            .children
            .iter()
            .find_map(|c| c.first_major_heading())
            .map(|h| h.text_content().trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| default_label.to_string())
    };

    (label, region_id)
}
