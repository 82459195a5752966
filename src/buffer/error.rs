//! Error taxonomy for the spill buffer.
//!
//! Every fallible `SpillBuffer` operation returns one of these variants;
//! none are retried internally and none are downgraded to a panic. Caller
//! programming errors on the page handle (double release, unknown id,
//! re-pinning a pinned page) still surface as `Err(UnknownPageId)` rather
//! than panicking, since every other fallible path here already returns
//! `Result`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::page_table::PageId;

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("out of memory: failed to allocate a {size}-byte page slab")]
    OutOfMemory { size: usize },

    #[error("failed to create scratch file at {path}: {source}")]
    IoInit {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {len} bytes at offset {offset} of {path}: {source}")]
    IoWrite {
        path: PathBuf,
        offset: u64,
        len: usize,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {len} bytes at offset {offset} of {path}: {source}")]
    IoRead {
        path: PathBuf,
        offset: u64,
        len: usize,
        #[source]
        source: io::Error,
    },

    #[error("decompressing page {page_id} produced {actual} bytes, expected {expected}")]
    CorruptDecode {
        page_id: PageId,
        expected: usize,
        actual: usize,
    },

    #[error("page {page_id} is unknown, not pinned, or already released")]
    UnknownPageId { page_id: PageId },
}
