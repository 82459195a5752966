//! Monotonic counters tracked by the spill buffer.
//!
//! All five counters only ever increase: they record lifetime totals, not
//! current occupancy (that's [`super::SpillBuffer::total_memory_bytes`]).

/// Snapshot of a [`super::SpillBuffer`]'s lifetime activity counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Incremented by both `new_page` and `get_page`.
    pub get_pages: u64,
    pub release_pages: u64,
    pub flush_pages: u64,
    pub flush_bytes: u64,
    pub load_bytes: u64,
}
