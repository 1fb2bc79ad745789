//! Navigation menu model and active-path matching.
//!
//! A menu is authored as a tree of [`NavItem`]s and flattened into a
//! [`NavTree`] arena for rendering. Transient UI state (which branches are
//! expanded) is keyed by [`NavPath`], the node's index path, so two siblings
//! that share a title never share state.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::error::AppError;

/// Default nesting cap. Observed menus are two levels deep.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Symbolic icon reference. The rendering layer resolves the name to an
/// actual icon; unknown names render nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavIcon(pub String);

impl NavIcon {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A node in the navigation menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    /// Destination path or URL. Empty means the entry has nowhere to go and
    /// renders as an inert link.
    #[serde(default)]
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<NavIcon>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", alias = "subItems")]
    pub children: Vec<NavItem>,
    /// Extra CSS class applied to the rendered entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default)]
    pub external: bool,
}

impl NavItem {
    /// A plain leaf entry.
    pub fn link(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            icon: None,
            children: Vec::new(),
            class: None,
            external: false,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(NavIcon::new(icon));
        self
    }

    pub fn with_children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Mark the entry as pointing outside the app.
    pub fn opens_externally(mut self) -> Self {
        self.external = true;
        self
    }

    /// An entry with an empty children list is a leaf.
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_inert(&self) -> bool {
        self.href.is_empty()
    }
}

/// How a destination is compared against the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// `/` and `""` match only by equality; every other destination matches
    /// exactly or as a prefix.
    #[default]
    RootExact,
    /// Every destination matches exactly or as a prefix, so a root
    /// destination is active on every page.
    Literal,
}

impl MatchPolicy {
    pub fn from_root_exact(root_exact: bool) -> Self {
        if root_exact {
            MatchPolicy::RootExact
        } else {
            MatchPolicy::Literal
        }
    }

    /// Exact-or-prefix comparison of a single destination. No trailing slash
    /// or query string normalization.
    pub fn href_matches(self, href: &str, location: &str) -> bool {
        if href == location {
            return true;
        }
        match self {
            MatchPolicy::RootExact if is_root(href) => false,
            _ => location.starts_with(href),
        }
    }
}

fn is_root(href: &str) -> bool {
    href.is_empty() || href == "/"
}

/// Whether `item`, or any of its descendants, matches `location`.
pub fn matches(item: &NavItem, location: &str, policy: MatchPolicy) -> bool {
    policy.href_matches(&item.href, location)
        || item
            .children
            .iter()
            .any(|child| matches(child, location, policy))
}

/// Check a menu for caller contract violations: duplicate sibling titles and
/// nesting deeper than `max_depth`.
///
/// Neither is fatal. [`NavTree::build`] copes with both, so callers log the
/// error rather than refuse to render.
pub fn validate(items: &[NavItem], max_depth: usize) -> Result<(), AppError> {
    let mut problems = BTreeMap::new();
    collect_problems(items, None, 1, max_depth.max(1), &mut problems);
    if problems.is_empty() {
        return Ok(());
    }
    let mut err = AppError::invalid_navigation(format!(
        "{} problem(s) in navigation menu",
        problems.len()
    ));
    err.field_errors = problems;
    Err(err)
}

fn collect_problems(
    items: &[NavItem],
    parent: Option<&NavPath>,
    depth: usize,
    max_depth: usize,
    problems: &mut BTreeMap<String, String>,
) {
    let mut seen = HashSet::new();
    for (i, item) in items.iter().enumerate() {
        let path = match parent {
            Some(p) => p.child(i),
            None => NavPath::root(i),
        };
        if !seen.insert(item.title.as_str()) {
            add_problem(
                problems,
                &path,
                format!("duplicates sibling title {:?}", item.title),
            );
        }
        if item.is_branch() {
            if depth >= max_depth {
                add_problem(
                    problems,
                    &path,
                    format!("nests deeper than {max_depth} level(s)"),
                );
            } else {
                collect_problems(&item.children, Some(&path), depth + 1, max_depth, problems);
            }
        }
    }
}

/// Record `message` under `path`, joining it to any earlier problem there.
fn add_problem(problems: &mut BTreeMap<String, String>, path: &NavPath, message: String) {
    problems
        .entry(path.to_string())
        .and_modify(|existing| {
            existing.push_str("; ");
            existing.push_str(&message);
        })
        .or_insert(message);
}

/// Position of a node in the menu: `[1, 0]` is the first child of the second
/// top-level entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NavPath(Vec<usize>);

impl NavPath {
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// 1 for top-level entries.
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<usize>> for NavPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NavPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

/// One arena slot. `item.children` is always empty; structure lives in
/// `children` as arena indices.
#[derive(Debug, Clone, PartialEq)]
pub struct NavNode {
    pub item: NavItem,
    pub path: NavPath,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

impl NavNode {
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn title(&self) -> &str {
        &self.item.title
    }
}

/// Flat, depth-first arena of a navigation menu.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavTree {
    nodes: Vec<NavNode>,
    roots: Vec<usize>,
    policy: MatchPolicy,
    truncated: usize,
}

impl NavTree {
    /// Flatten `items`. Entries nested deeper than `max_depth` are dropped
    /// and their parent becomes a leaf.
    pub fn build(items: &[NavItem], policy: MatchPolicy, max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        let mut tree = NavTree {
            policy,
            ..Default::default()
        };
        warn_duplicate_titles(items, &NavPath::default());
        for (i, item) in items.iter().enumerate() {
            let index = tree.insert(item, NavPath::root(i), None, max_depth);
            tree.roots.push(index);
        }
        if tree.truncated > 0 {
            tracing::warn!(
                dropped = tree.truncated,
                max_depth,
                "Navigation entries nested past the depth cap were dropped"
            );
        }
        tree
    }

    fn insert(
        &mut self,
        item: &NavItem,
        path: NavPath,
        parent: Option<usize>,
        max_depth: usize,
    ) -> usize {
        let index = self.nodes.len();
        let depth = path.depth();
        self.nodes.push(NavNode {
            item: NavItem {
                title: item.title.clone(),
                href: item.href.clone(),
                icon: item.icon.clone(),
                children: Vec::new(),
                class: item.class.clone(),
                external: item.external,
            },
            path: path.clone(),
            parent,
            children: Vec::new(),
        });

        if depth >= max_depth {
            self.truncated += count_descendants(&item.children);
            return index;
        }

        warn_duplicate_titles(&item.children, &path);
        for (i, child) in item.children.iter().enumerate() {
            let child_index = self.insert(child, path.child(i), Some(index), max_depth);
            self.nodes[index].children.push(child_index);
        }
        index
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of entries dropped by the depth cap.
    pub fn truncated(&self) -> usize {
        self.truncated
    }

    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn node(&self, index: usize) -> Option<&NavNode> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[NavNode] {
        &self.nodes
    }

    /// Arena indices of every branch node, depth-first.
    pub fn branches(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_branch())
            .map(|(index, _)| index)
    }

    /// Resolve an index path to an arena index.
    pub fn find(&self, path: &NavPath) -> Result<usize, AppError> {
        let not_found = || AppError::not_found(format!("no navigation entry at {path}"));
        let (first, rest) = path.indices().split_first().ok_or_else(not_found)?;
        let mut index = *self.roots.get(*first).ok_or_else(not_found)?;
        for step in rest {
            index = *self.nodes[index].children.get(*step).ok_or_else(not_found)?;
        }
        Ok(index)
    }

    /// Arena form of [`matches`]: the node or any descendant matches.
    pub fn is_active(&self, index: usize, location: &str) -> bool {
        let Some(node) = self.nodes.get(index) else {
            return false;
        };
        self.policy.href_matches(&node.item.href, location)
            || node
                .children
                .iter()
                .any(|child| self.is_active(*child, location))
    }

    /// Chain of nodes from a top-level entry down to the deepest active
    /// descendant, following the first active entry at each level.
    pub fn active_trail(&self, location: &str) -> Vec<&NavNode> {
        let mut trail = Vec::new();
        let mut level = self.roots.as_slice();
        while let Some(index) = level.iter().find(|i| self.is_active(**i, location)) {
            let node = &self.nodes[*index];
            trail.push(node);
            level = node.children.as_slice();
        }
        trail
    }
}

fn warn_duplicate_titles(siblings: &[NavItem], parent: &NavPath) {
    let mut seen = HashSet::new();
    for item in siblings {
        if !seen.insert(item.title.as_str()) {
            tracing::warn!(title = %item.title, parent = %parent, "Duplicate sibling title in navigation menu");
        }
    }
}

fn count_descendants(items: &[NavItem]) -> usize {
    items
        .iter()
        .map(|item| 1 + count_descendants(&item.children))
        .sum()
}
