//! PageTable and Group Index.
//!
//! Two separate insertion-ordered mappings, kept deliberately apart: one
//! keyed by page id, one keyed by group id, both insertion-ordered so
//! `group_pages` is deterministic.

use std::collections::HashMap;

use super::lru::LruHandle;

pub type PageId = u64;
pub type GroupId = u64;

/// One per live page id. Never moved after creation — callers hold a
/// stable `PageId`, not a reference into this struct.
#[derive(Debug)]
pub(crate) struct PageInfo {
    pub page_id: PageId,
    pub group_id: GroupId,
    /// Present iff the page is currently memory-resident.
    pub slab: Option<Vec<u8>>,
    pub disk_offset: Option<u64>,
    /// Capacity of the on-disk slot at `disk_offset`, kept at the largest
    /// compressed length ever written there (§4.6 step 3's "keep the
    /// larger of the two lengths" rule) so free-list bookkeeping and
    /// in-place-overwrite decisions don't depend on the most recent write.
    pub slot_len: u64,
    /// Length, in bytes, of the most recent successful write into this
    /// page's slot — the only span of the slot that holds valid data.
    /// Always `<= slot_len`; a shrinking overwrite leaves stale bytes from
    /// a previous, larger write sitting past `stored_len` in the slot.
    pub stored_len: u64,
    /// True between `new_page`/`get_page` and the matching `release_page`.
    pub pinned: bool,
    /// Back-reference into the LRU list; absent iff pinned.
    pub lru_link: Option<LruHandle>,
}

pub(crate) struct PageTable {
    by_id: HashMap<PageId, PageInfo>,
    by_group: HashMap<GroupId, Vec<PageId>>,
    next_id: PageId,
}

impl PageTable {
    pub fn new() -> Self {
        Self {
            by_id: HashMap::new(),
            by_group: HashMap::new(),
            next_id: 0,
        }
    }

    /// Assigns the next page id (monotonic, never reused) and registers a
    /// fresh, pinned, not-yet-resident `PageInfo` under `group_id`.
    pub fn register_page(&mut self, group_id: GroupId) -> PageId {
        let page_id = self.next_id;
        self.next_id += 1;

        self.by_id.insert(
            page_id,
            PageInfo {
                page_id,
                group_id,
                slab: None,
                disk_offset: None,
                slot_len: 0,
                stored_len: 0,
                pinned: true,
                lru_link: None,
            },
        );
        self.by_group.entry(group_id).or_default().push(page_id);

        page_id
    }

    pub fn get(&self, page_id: PageId) -> Option<&PageInfo> {
        self.by_id.get(&page_id)
    }

    pub fn get_mut(&mut self, page_id: PageId) -> Option<&mut PageInfo> {
        self.by_id.get_mut(&page_id)
    }

    /// Creation-ordered ids for `group_id`; absent groups return an empty
    /// shared slice rather than allocating.
    pub fn group_pages(&self, group_id: GroupId) -> &[PageId] {
        self.by_group
            .get(&group_id)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn last_page(&self, group_id: GroupId) -> Option<PageId> {
        self.by_group.get(&group_id).and_then(|ids| ids.last().copied())
    }

    pub fn num_groups(&self) -> usize {
        self.by_group.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_assigned_monotonically_and_never_reused() {
        let mut table = PageTable::new();
        let a = table.register_page(0);
        let b = table.register_page(0);
        let c = table.register_page(1);
        assert_eq!((a, b, c), (0, 1, 2));
    }

    #[test]
    fn group_enumeration_matches_creation_order() {
        let mut table = PageTable::new();
        let p0 = table.register_page(7);
        let p1 = table.register_page(7);
        let p2 = table.register_page(9);
        let p3 = table.register_page(9);
        let p4 = table.register_page(9);
        let p5 = table.register_page(7);

        assert_eq!(table.group_pages(7), &[p0, p1, p5]);
        assert_eq!(table.group_pages(9), &[p2, p3, p4]);
        assert!(table.group_pages(42).is_empty());
        assert_eq!(table.num_groups(), 2);
    }

    #[test]
    fn last_page_is_most_recently_registered() {
        let mut table = PageTable::new();
        table.register_page(1);
        let last = table.register_page(1);
        assert_eq!(table.last_page(1), Some(last));
        assert_eq!(table.last_page(404), None);
    }
}
