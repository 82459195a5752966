//! Codec — compress/decompress a page payload into a reused scratch buffer.
//!
//! When the buffer's `compress` flag is off both directions are the identity
//! function: the payload is copied into the scratch buffer unchanged and the
//! reported length is `page_size`. This keeps [`super::SpillBuffer`] from
//! having to special-case the uncompressed path anywhere else.

use lz4_flex::block::{compress_into, decompress_into, get_maximum_output_size};

/// Compresses/decompresses page payloads into caller-owned scratch buffers.
///
/// `Codec` holds no buffers itself — the scratch buffer lives on
/// [`super::SpillBuffer`] and is passed in on every call, so a single
/// allocation is reused across the buffer's entire lifetime.
pub(crate) struct Codec {
    compress: bool,
    page_size: usize,
}

impl Codec {
    pub fn new(compress: bool, page_size: usize) -> Self {
        Self { compress, page_size }
    }

    /// Minimum scratch buffer size this codec ever needs, for either direction.
    pub fn scratch_len(&self) -> usize {
        get_maximum_output_size(self.page_size).max(self.page_size)
    }

    /// Compresses `src` (exactly `page_size` bytes) into `scratch`, returning
    /// the number of bytes written. `scratch` must be at least
    /// [`Codec::scratch_len`] bytes.
    pub fn compress(&self, src: &[u8], scratch: &mut [u8]) -> usize {
        debug_assert_eq!(src.len(), self.page_size);

        if !self.compress {
            scratch[..src.len()].copy_from_slice(src);
            return src.len();
        }

        compress_into(src, scratch)
            .expect("scratch buffer sized for worst-case compression output (see scratch_len)")
    }

    /// Decompresses `src` into `scratch`, returning the number of bytes
    /// written. Returns `None` if the compressed stream is malformed; the
    /// caller turns that into `BufferError::CorruptDecode`.
    pub fn decompress(&self, src: &[u8], scratch: &mut [u8]) -> Option<usize> {
        if !self.compress {
            scratch[..src.len()].copy_from_slice(src);
            return Some(src.len());
        }

        decompress_into(src, scratch).ok()
    }
}
