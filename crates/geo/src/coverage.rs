//! Raster coverages: georeferenced multi band grids that can be sampled.

pub mod algo;
mod densecoverage;

use crate::{BandIndex, Cell, CoordinateReferenceSystem, GeoReference, NodataValues};

#[doc(inline)]
pub use densecoverage::{Band, DenseCoverage};

/// Numeric types that can be stored in the bands of a [`DenseCoverage`].
pub trait CoverageNum: num::ToPrimitive + num::NumCast + Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static {}

macro_rules! impl_coverage_num {
    ( $( $t:ty ),* ) => {
        $( impl CoverageNum for $t {} )*
    };
}

impl_coverage_num!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// Read access to a raster coverage.
///
/// Bands are addressed with a 1-based [`BandIndex`].
/// Implementations are expected to be cheap to query, the sampling functions call
/// into this trait for every sampled point.
pub trait RasterCoverage {
    /// The number of bands in the coverage
    fn band_count(&self) -> usize;

    /// The grid geometry and reference system of the coverage
    fn geo_reference(&self) -> &GeoReference;

    /// The nodata sentinels declared for the band.
    ///
    /// # Panics
    /// When the band index exceeds `band_count`.
    fn nodata_values(&self, band: BandIndex) -> &NodataValues;

    /// Reads the values of all bands at the cell into `pixel`.
    ///
    /// The caller guarantees the cell is on the map and `pixel` holds `band_count` elements.
    fn read_cell(&self, cell: Cell, pixel: &mut [f64]);

    /// A copy of the coverage bound to another reference system.
    /// Pixel data and grid placement are left untouched.
    fn with_crs(&self, crs: CoordinateReferenceSystem) -> Self
    where
        Self: Sized;
}
