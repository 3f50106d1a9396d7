//! Two-level line-item hierarchy from a flat, parent-referencing list

use std::collections::HashMap;

use tracing::debug;

use crate::schema::{ItemNode, LineItem};

/// Result of [`build_item_tree`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemTree {
    /// Top-level items in input order
    pub roots: Vec<ItemNode>,

    /// Ids of items whose parent could not be attached
    pub dropped: Vec<String>,
}

impl ItemTree {
    /// Total number of sub-items across all roots
    pub fn descendant_count(&self) -> usize {
        self.roots.iter().map(|node| node.sub_items.len()).sum()
    }

    /// Take the roots, discarding the dropped-item report
    pub fn into_roots(self) -> Vec<ItemNode> {
        self.roots
    }
}

/// Where an id points in the arena
#[derive(Debug, Clone, Copy)]
enum Slot {
    Root(usize),
    Child,
}

/// Rebuild the item hierarchy
///
/// Roots keep their input order. Children are appended to their parent in
/// input order; the builder never re-sorts (see [`sort_by_order`]).
///
/// A child is dropped when its `parent_id` names no item, or names an item
/// that is itself a sub-item (the hierarchy is two levels deep). When two
/// roots share an id, children attach to the first.
pub fn build_item_tree(items: &[LineItem]) -> ItemTree {
    // Pass 1: arena of roots, every id indexed.
    let mut roots = Vec::new();
    let mut index: HashMap<&str, Slot> = HashMap::with_capacity(items.len());

    for item in items {
        let slot = index.entry(item.id.as_str()).or_insert(Slot::Child);
        if item.is_root() {
            if let Slot::Child = slot {
                *slot = Slot::Root(roots.len());
            }
            roots.push(ItemNode::new(item.clone()));
        }
    }

    // Pass 2: attach children.
    let mut dropped = Vec::new();

    for item in items {
        let Some(parent_id) = item.parent() else {
            continue;
        };

        match index.get(parent_id) {
            Some(Slot::Root(position)) => roots[*position].sub_items.push(item.clone()),
            Some(Slot::Child) => {
                debug!(item_id = %item.id, parent_id, "dropping line item nested below a sub-item");
                dropped.push(item.id.clone());
            }
            None => {
                debug!(item_id = %item.id, parent_id, "dropping orphan line item");
                dropped.push(item.id.clone());
            }
        }
    }

    ItemTree { roots, dropped }
}

/// Rebuild the item hierarchy, discarding the orphan report
pub fn build(items: &[LineItem]) -> Vec<ItemNode> {
    build_item_tree(items).into_roots()
}

/// Stable sort on `order`; ties keep their original relative position
pub fn sort_by_order(items: &mut [LineItem]) {
    items.sort_by_key(|item| item.order);
}
