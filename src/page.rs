//! Page document model and JSON reader.
//!
//! A page is a tree of [`ContentNode`]s. Nodes are addressed by a
//! [`NodeRef`], the path of child indices from the root, which stays valid
//! for as long as the document is not mutated.

use anyhow::Context;
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;

use crate::config::SiteConfig;
use crate::traits::PageReader;

/// Structural role of a content node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A labeled page region (scroll-spy target)
    Section,
    /// Heading level 1 to 6
    Heading(#[serde(deserialize_with = "heading_level")] u8),
    Paragraph,
    ListItem,
    /// Any other container
    Block,
}

/// Heading levels outside 1..=6 are rejected
fn heading_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let level = u8::deserialize(deserializer)?;
    if (1..=6).contains(&level) {
        Ok(level)
    } else {
        Err(D::Error::invalid_value(
            Unexpected::Unsigned(u64::from(level)),
            &"a heading level from 1 to 6",
        ))
    }
}

/// One node of the page tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentNode {
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Explicitly marked as searchable regardless of kind
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub searchable: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    pub fn new(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            id: None,
            text: text.into(),
            searchable: false,
            children: Vec::new(),
        }
    }

    pub fn section(id: impl Into<String>) -> Self {
        Self::new(NodeKind::Section, "").with_id(id)
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(NodeKind::Heading(level.clamp(1, 6)), text)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Paragraph, text)
    }

    pub fn list_item(text: impl Into<String>) -> Self {
        Self::new(NodeKind::ListItem, text)
    }

    pub fn block() -> Self {
        Self::new(NodeKind::Block, "")
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: ContentNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ContentNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn mark_searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Returns the id if it is present and non-empty
    pub fn non_empty_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, NodeKind::Heading(_))
    }

    /// Own text followed by all descendant text, in document order.
    ///
    /// Non-empty parts are joined with a single space.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        let own = self.text.trim();
        if !own.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(own);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// First h1-h3 in this subtree (self included), depth-first
    pub fn first_major_heading(&self) -> Option<&ContentNode> {
        if let NodeKind::Heading(level) = self.kind {
            if (1..=3).contains(&level) {
                return Some(self);
            }
        }
        self.children.iter().find_map(|c| c.first_major_heading())
    }
}

/// Path of child indices from the document root
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeRef(Vec<usize>);

impl NodeRef {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Self first, then each ancestor up to and including the root
    pub fn self_and_ancestors(&self) -> impl Iterator<Item = NodeRef> + '_ {
        (0..=self.0.len()).rev().map(move |len| NodeRef(self.0[..len].to_vec()))
    }
}

/// Entry of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Anchor such as `#schedule`
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Region id the anchor points at, if any
    pub fn target_id(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

/// A complete page: content tree, navigation and site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub title: String,
    #[serde(default)]
    pub config: SiteConfig,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    pub root: ContentNode,
}

impl PageDocument {
    pub fn new(title: impl Into<String>, root: ContentNode) -> Self {
        Self {
            title: title.into(),
            config: SiteConfig::default(),
            nav: Vec::new(),
            root,
        }
    }

    /// Resolves a node reference
    pub fn node(&self, node_ref: &NodeRef) -> Option<&ContentNode> {
        let mut node = &self.root;
        for &index in node_ref.indices() {
            node = node.children.get(index)?;
        }
        Some(node)
    }

    /// All nodes in document (pre-)order
    pub fn walk(&self) -> Vec<(NodeRef, &ContentNode)> {
        let mut out = vec![(NodeRef::root(), &self.root)];
        walk_children(&self.root, &NodeRef::root(), &mut out);
        out
    }

    /// First node carrying `id`
    pub fn find_by_id(&self, id: &str) -> Option<NodeRef> {
        if id.is_empty() {
            return None;
        }
        self.walk()
            .into_iter()
            .find(|(_, node)| node.id.as_deref() == Some(id))
            .map(|(node_ref, _)| node_ref)
    }

    /// Sections that carry an id, in document order
    pub fn sections(&self) -> Vec<(NodeRef, &ContentNode)> {
        self.walk()
            .into_iter()
            .filter(|(_, node)| node.kind == NodeKind::Section && node.non_empty_id().is_some())
            .collect()
    }

    /// Nearest enclosing region of a node (the node itself counts).
    ///
    /// The closest section wins; otherwise the closest node with an id.
    pub fn enclosing_region(&self, node_ref: &NodeRef) -> Option<&ContentNode> {
        let chain: Vec<&ContentNode> = node_ref
            .self_and_ancestors()
            .filter_map(|r| self.node(&r))
            .collect();

        chain
            .iter()
            .find(|n| n.kind == NodeKind::Section)
            .or_else(|| chain.iter().find(|n| n.id.is_some()))
            .copied()
    }
}

fn walk_children<'a>(node: &'a ContentNode, node_ref: &NodeRef, out: &mut Vec<(NodeRef, &'a ContentNode)>) {
    for (index, child) in node.children.iter().enumerate() {
        let child_ref = node_ref.child(index);
        out.push((child_ref.clone(), child));
        walk_children(child, &child_ref, out);
    }
}

/// Parses a page document from JSON text
pub fn parse_page(json: &str) -> anyhow::Result<PageDocument> {
    serde_json::from_str(json).context("Invalid page document")
}

/// Reads page documents from JSON files
#[derive(Debug, Default)]
pub struct JsonPageReader;

impl JsonPageReader {
    pub fn new() -> Self {
        Self
    }
}

impl PageReader for JsonPageReader {
    fn read(&self, path: &str) -> anyhow::Result<PageDocument> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page file {}", path))?;
        let page = parse_page(&json).with_context(|| format!("Failed to parse {}", path))?;
        tracing::info!("Loaded page '{}' from {}", page.title, path);
        Ok(page)
    }
}
