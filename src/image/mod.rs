//! Image-side input types: the shared raw frame handle and convex search
//! regions.

pub mod raw;
pub mod roi;

pub use raw::RawImage;
pub use roi::ConvexRoi;
