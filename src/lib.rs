//! A disk-spilling paged result buffer with LRU eviction, compression, and
//! a free-list scratch-file allocator.
//!
//! See [`buffer::SpillBuffer`] for the entry point.

pub mod buffer;

pub use buffer::{BufferConfig, BufferError, GroupId, PageId, SpillBuffer, Stats};
