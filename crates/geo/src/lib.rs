#![warn(clippy::unwrap_used)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Point sampling and reference system handling for georeferenced raster coverages.

pub type Result<T = ()> = std::result::Result<T, Error>;

mod bandindex;
mod cell;
pub mod coverage;
pub mod crs;
mod error;
mod geometry;
mod georeference;
mod geotransform;
mod nodata;
mod rastersize;
pub mod rect;
mod runtimeconfiguration;
pub mod srs;

#[cfg(test)]
mod testutils;

#[doc(inline)]
pub use bandindex::{BandIndex, FIRST_BAND, band_index};
#[doc(inline)]
pub use cell::Cell;
#[doc(inline)]
pub use coverage::algo::{PixelRead, crs_srid, envelope, num_bands, read_band, set_srid, srid, srid_with_config, value, values};
#[cfg(feature = "rayon")]
#[doc(inline)]
pub use coverage::algo::values_par;
#[doc(inline)]
pub use coverage::{Band, CoverageNum, DenseCoverage, RasterCoverage};
#[doc(inline)]
pub use crs::{CoordinateReferenceSystem, Epsg, Srid};
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use geometry::{SpatialGeometry, ensure_point};
#[doc(inline)]
pub use georeference::{CellSize, GeoReference};
#[doc(inline)]
pub use geotransform::GeoTransform;
#[doc(inline)]
pub use nodata::NodataValues;
#[doc(inline)]
pub use rastersize::RasterSize;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use runtimeconfiguration::RuntimeConfiguration;
#[doc(inline)]
pub use srs::CrsAuthority;
#[cfg(feature = "proj4rs")]
#[doc(inline)]
pub use srs::EpsgRegistry;

pub type Point<T = f64> = geo_types::Point<T>;
