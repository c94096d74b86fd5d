//! Read-only queries over the registry.
//!
//! The registry is a flat list; folder structure exists only through `parent_id` references,
//! which are not validated. Queries tolerate dangling parents and never loop on cycles.

use std::collections::HashSet;

use crate::model::{FileItem, ItemId};

/// Looks up an item by id.
pub fn find_item<'a>(items: &'a [FileItem], id: &ItemId) -> Option<&'a FileItem> {
    items.iter().find(|item| &item.id == id)
}

/// Lists the children of `folder` whose name contains `query`, case-insensitively.
///
/// An empty query matches every child. Insertion order is preserved.
pub fn list_items<'a>(
    items: &'a [FileItem],
    folder: Option<&ItemId>,
    query: &str,
) -> Vec<&'a FileItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.parent_id.as_ref() == folder)
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .collect()
}

/// Returns the cursor for "up" navigation from `cursor`.
///
/// Root, and any cursor naming a missing item, map to root.
pub fn parent_cursor(items: &[FileItem], cursor: Option<&ItemId>) -> Option<ItemId> {
    cursor
        .and_then(|id| find_item(items, id))
        .and_then(|item| item.parent_id.clone())
}

/// Resolves the folder path from root down to `cursor` (root itself excluded).
///
/// The walk stops at the first id that does not resolve, and at the first repeated id.
pub fn breadcrumbs<'a>(items: &'a [FileItem], cursor: Option<&ItemId>) -> Vec<&'a FileItem> {
    let mut path = Vec::new();
    let mut seen = HashSet::new();
    let mut next = cursor.cloned();
    while let Some(id) = next {
        if !seen.insert(id.clone()) {
            break;
        }
        let Some(item) = find_item(items, &id) else {
            break;
        };
        path.push(item);
        next = item.parent_id.clone();
    }
    path.reverse();
    path
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Totals shown in the status bar.
pub struct UsageSummary {
    /// Number of file records.
    pub files: usize,
    /// Number of folder records.
    pub folders: usize,
    /// Sum of file sizes in bytes.
    pub total_bytes: u64,
}

/// Summarizes the whole registry, reachable or not.
pub fn usage_summary(items: &[FileItem]) -> UsageSummary {
    items
        .iter()
        .fold(UsageSummary::default(), |mut summary, item| {
            match item.size() {
                Some(size) => {
                    summary.files += 1;
                    summary.total_bytes = summary.total_bytes.saturating_add(size);
                }
                None => summary.folders += 1,
            }
            summary
        })
}
