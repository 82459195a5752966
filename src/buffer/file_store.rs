//! FileStore — lazily-created scratch file with free-list reuse.
//!
//! The file is created under a caller-chosen temp directory on first write
//! (`ensure_open`), never before — a buffer that fits entirely in memory
//! never touches disk at all. On drop the file is closed and unlinked; the
//! scratch file never outlives the `FileStore` that owns it.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use super::error::BufferError;

static INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A reclaimed byte extent in the scratch file, available for first-fit reuse.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FreeRegion {
    pub offset: u64,
    pub length: u64,
}

pub(crate) struct FileStore {
    dir: PathBuf,
    prefix: String,
    handle: String,
    file: Option<File>,
    path: Option<PathBuf>,
    next_append_offset: u64,
    high_water: u64,
    free: Vec<FreeRegion>,
}

impl FileStore {
    pub fn new(dir: PathBuf, prefix: String, handle: String) -> Self {
        Self {
            dir,
            prefix,
            handle,
            file: None,
            path: None,
            next_append_offset: 0,
            high_water: 0,
            free: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    #[allow(dead_code)]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Total scratch-file bytes ever written to, i.e. the file's final size.
    pub fn file_size(&self) -> u64 {
        self.high_water
    }

    fn ensure_open(&mut self) -> Result<(), BufferError> {
        if self.file.is_some() {
            return Ok(());
        }

        fs::create_dir_all(&self.dir).map_err(|source| BufferError::IoInit {
            path: self.dir.clone(),
            source,
        })?;

        let unique = INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = self
            .dir
            .join(format!("{}-{}-{}.tmp", self.prefix, std::process::id(), unique));

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| BufferError::IoInit {
                path: path.clone(),
                source,
            })?;

        debug!("[{}] created scratch file at {}", self.handle, path.display());
        self.path = Some(path);
        self.file = Some(file);
        Ok(())
    }

    /// First-fit allocation: reuses a free region if one is large enough,
    /// otherwise appends. Ties are broken by earliest index; a satisfied
    /// region is shrunk in place rather than split (no split, no coalesce).
    pub fn allocate(&mut self, size: u64) -> u64 {
        if let Some(pos) = self.free.iter().position(|region| region.length >= size) {
            let region = &mut self.free[pos];
            let offset = region.offset;
            region.offset += size;
            region.length -= size;
            if region.length == 0 {
                self.free.remove(pos);
            }
            offset
        } else {
            let offset = self.next_append_offset;
            self.next_append_offset += size;
            offset
        }
    }

    pub fn write_at(&mut self, offset: u64, bytes: &[u8]) -> Result<(), BufferError> {
        self.ensure_open()?;
        let path = self.path.clone().expect("just ensured open");
        let file = self.file.as_mut().expect("just ensured open");

        file.seek(SeekFrom::Start(offset))
            .map_err(|source| BufferError::IoWrite {
                path: path.clone(),
                offset,
                len: bytes.len(),
                source,
            })?;
        file.write_all(bytes).map_err(|source| BufferError::IoWrite {
            path,
            offset,
            len: bytes.len(),
            source,
        })?;

        self.high_water = self.high_water.max(offset + bytes.len() as u64);
        Ok(())
    }

    pub fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<(), BufferError> {
        self.ensure_open()?;
        let path = self.path.clone().expect("just ensured open");
        let file = self.file.as_mut().expect("just ensured open");

        file.seek(SeekFrom::Start(offset))
            .map_err(|source| BufferError::IoRead {
                path: path.clone(),
                offset,
                len: buf.len(),
                source,
            })?;
        file.read_exact(buf).map_err(|source| BufferError::IoRead {
            path,
            offset,
            len: buf.len(),
            source,
        })
    }

    /// Pushes a reclaimed extent onto the free list. The list is unordered
    /// and never coalesced.
    pub fn free(&mut self, offset: u64, length: u64) {
        if length > 0 {
            self.free.push(FreeRegion { offset, length });
        }
    }

    #[cfg(test)]
    pub fn free_regions(&self) -> &[FreeRegion] {
        &self.free
    }
}

impl Drop for FileStore {
    fn drop(&mut self) {
        self.file.take();
        if let Some(path) = self.path.take() {
            let _ = fs::remove_file(&path);
        }
    }
}
