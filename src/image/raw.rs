//! Shared, read-only handle to a raw camera frame.

use std::sync::Arc;

use opencv::core::Mat;
use opencv::prelude::*;

/// A raw camera frame shared between the caller and the front-end.
///
/// The pixel data is reference-counted and treated as immutable for the
/// whole duration of a matching or detection call: the front-end only ever
/// hands `&Mat` to the underlying tracker/detector capabilities and never
/// writes to it. Cloning a `RawImage` clones the handle, not the pixels.
#[derive(Clone)]
pub struct RawImage {
    img: Arc<Mat>,
    timestamp_ns: u64,
}

impl RawImage {
    /// Wrap a decoded frame. The caller gives up its right to mutate `img`.
    pub fn new(img: Mat, timestamp_ns: u64) -> Self {
        Self {
            img: Arc::new(img),
            timestamp_ns,
        }
    }

    /// Pixel data, read-only.
    pub fn mat(&self) -> &Mat {
        &self.img
    }

    /// Capture timestamp in nanoseconds.
    pub fn timestamp_ns(&self) -> u64 {
        self.timestamp_ns
    }

    /// Frame dimensions as (width, height).
    pub fn size(&self) -> (i32, i32) {
        (self.img.cols(), self.img.rows())
    }
}

impl std::fmt::Debug for RawImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawImage")
            .field("cols", &self.img.cols())
            .field("rows", &self.img.rows())
            .field("timestamp_ns", &self.timestamp_ns)
            .finish()
    }
}

// SAFETY: RawImage is safe to share between threads because:
// 1. The Mat is behind an Arc and never mutated after construction - all
//    access goes through &Mat.
// 2. The OpenCV Mat's *mut c_void is an artifact of the Rust bindings; the
//    underlying buffer is only ever read.
unsafe impl Send for RawImage {}
unsafe impl Sync for RawImage {}
