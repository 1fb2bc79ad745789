use std::collections::BTreeMap;

use crate::nav::{NavPath, NavTree};

/// Open/closed state of every branch in a navigation menu.
///
/// Seeded once when the menu mounts and changed only by [`toggle`]. Nothing
/// collapses on navigation; a branch the user opened stays open.
///
/// [`toggle`]: ExpandState::toggle
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpandState {
    open: BTreeMap<NavPath, bool>,
}

impl ExpandState {
    /// One entry per branch node, open iff the branch contains the active
    /// location. Leaves get no entry.
    pub fn seeded(tree: &NavTree, location: &str) -> Self {
        let open = tree
            .branches()
            .filter_map(|index| {
                let node = tree.node(index)?;
                Some((node.path.clone(), tree.is_active(index, location)))
            })
            .collect();
        Self { open }
    }

    pub fn is_open(&self, path: &NavPath) -> bool {
        self.open.get(path).copied().unwrap_or(false)
    }

    /// Flip one branch and return its new state. Paths that were not
    /// branches at seeding time are left alone and yield `None`.
    pub fn toggle(&mut self, path: &NavPath) -> Option<bool> {
        let state = self.open.get_mut(path)?;
        *state = !*state;
        Some(*state)
    }

    pub fn contains(&self, path: &NavPath) -> bool {
        self.open.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.open.values().filter(|open| **open).count()
    }
}
