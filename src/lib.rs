//! Point sampling of georeferenced raster coverages.
//!
//! Convenience facade over the `geo` workspace crate.

#[doc(inline)]
pub use geo::*;
