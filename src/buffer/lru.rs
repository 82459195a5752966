//! LruList — doubly-linked list of released (unpinned) pages.
//!
//! Modeled as an arena of slots rather than a hand-rolled intrusive list
//! inside `PageInfo`: the list stores page ids, and `PageInfo` carries only
//! an opaque `LruHandle` back into this arena, eliminating aliasing between
//! the list and the page table.

use super::page_table::PageId;

pub type LruHandle = usize;

struct Node {
    page_id: PageId,
    prev: Option<LruHandle>,
    next: Option<LruHandle>,
}

pub(crate) struct LruList {
    slots: Vec<Option<Node>>,
    free_slots: Vec<LruHandle>,
    /// Most-recently-used end.
    head: Option<LruHandle>,
    /// Least-recently-used end.
    tail: Option<LruHandle>,
    len: usize,
}

impl LruList {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_slots: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc_slot(&mut self, node: Node) -> LruHandle {
        if let Some(slot) = self.free_slots.pop() {
            self.slots[slot] = Some(node);
            slot
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        }
    }

    /// Inserts `page_id` at the front (most-recently-used position).
    pub fn push_front(&mut self, page_id: PageId) -> LruHandle {
        let handle = self.alloc_slot(Node {
            page_id,
            prev: None,
            next: self.head,
        });

        if let Some(head) = self.head {
            self.slots[head].as_mut().expect("head slot vacant").prev = Some(handle);
        }
        self.head = Some(handle);
        if self.tail.is_none() {
            self.tail = Some(handle);
        }
        self.len += 1;
        handle
    }

    fn detach(&mut self, handle: LruHandle) -> Node {
        let node = self.slots[handle].take().expect("dangling LRU handle");

        match node.prev {
            Some(prev) => self.slots[prev].as_mut().expect("prev slot vacant").next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.slots[next].as_mut().expect("next slot vacant").prev = node.prev,
            None => self.tail = node.prev,
        }

        self.free_slots.push(handle);
        self.len -= 1;
        node
    }

    /// Removes `handle` from the list entirely, returning its page id. Used
    /// when a page is pinned (it leaves the LRU list altogether) or evicted.
    pub fn pop_node(&mut self, handle: LruHandle) -> PageId {
        self.detach(handle).page_id
    }

    /// Re-inserts the node at the front. Returns the (possibly new) handle —
    /// callers must update the owning `PageInfo::lru_link`.
    #[allow(dead_code)]
    pub fn move_to_front(&mut self, handle: LruHandle) -> LruHandle {
        let page_id = self.detach(handle).page_id;
        self.push_front(page_id)
    }

    /// Walks from the tail (oldest) toward the head, returning the handle of
    /// the first page for which `is_unpinned` holds. Every node in this
    /// list is already unpinned, so in practice this returns the tail when
    /// non-empty — the iteration form is kept so that invariant can be
    /// relaxed later without changing this call site.
    pub fn oldest_unpinned<F>(&self, is_unpinned: F) -> Option<LruHandle>
    where
        F: Fn(PageId) -> bool,
    {
        let mut cursor = self.tail;
        while let Some(handle) = cursor {
            let node = self.slots[handle].as_ref().expect("tail walk hit vacant slot");
            if is_unpinned(node.page_id) {
                return Some(handle);
            }
            cursor = node.prev;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_front_then_pop_is_lifo_at_head() {
        let mut lru = LruList::new();
        let h0 = lru.push_front(10);
        let _h1 = lru.push_front(20);
        assert_eq!(lru.len(), 2);
        // tail (oldest) is still page 10.
        assert_eq!(lru.oldest_unpinned(|_| true), Some(h0));
    }

    #[test]
    fn move_to_front_changes_oldest_unpinned() {
        let mut lru = LruList::new();
        let h0 = lru.push_front(10);
        let h1 = lru.push_front(20);
        // 10 is oldest; move it to front so 20 becomes oldest.
        let _new_h0 = lru.move_to_front(h0);
        assert_eq!(lru.oldest_unpinned(|_| true).map(|h| lru.slots[h].as_ref().unwrap().page_id), Some(20));
        let _ = h1;
    }

    #[test]
    fn pop_node_removes_from_middle() {
        let mut lru = LruList::new();
        let h0 = lru.push_front(1);
        let h1 = lru.push_front(2);
        let h2 = lru.push_front(3);

        assert_eq!(lru.pop_node(h1), 2);
        assert_eq!(lru.len(), 2);
        // Remaining order: head=3, tail=1.
        assert_eq!(lru.oldest_unpinned(|_| true), Some(h0));
        let _ = h2;
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut lru = LruList::new();
        let h0 = lru.push_front(1);
        lru.pop_node(h0);
        let h1 = lru.push_front(2);
        assert_eq!(h0, h1);
    }

    #[test]
    fn oldest_unpinned_skips_predicate_false_entries() {
        let mut lru = LruList::new();
        lru.push_front(1);
        lru.push_front(2);
        // Pretend page 1 (the tail/oldest) no longer counts as unpinned.
        let found = lru.oldest_unpinned(|id| id != 1);
        assert_eq!(found.map(|h| lru.slots[h].as_ref().unwrap().page_id), Some(2));
    }
}
