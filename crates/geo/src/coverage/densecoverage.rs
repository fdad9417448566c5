use crate::{
    BandIndex, Cell, CoordinateReferenceSystem, Error, GeoReference, NodataValues, Result,
    coverage::{CoverageNum, RasterCoverage},
};

/// A single band of a [`DenseCoverage`], row-major pixel data with its nodata sentinels.
#[derive(Debug, Clone, PartialEq)]
pub struct Band<T: CoverageNum> {
    data: Vec<T>,
    nodata: NodataValues,
}

impl<T: CoverageNum> Band<T> {
    pub fn new(data: Vec<T>, nodata: impl Into<NodataValues>) -> Self {
        Band {
            data,
            nodata: nodata.into(),
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn nodata(&self) -> &NodataValues {
        &self.nodata
    }
}

/// In memory coverage that keeps every band in a contiguous buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseCoverage<T: CoverageNum> {
    georef: GeoReference,
    bands: Vec<Band<T>>,
}

impl<T: CoverageNum> DenseCoverage<T> {
    /// Creates a coverage, every band must contain exactly one value per cell of the georeference.
    pub fn new(georef: GeoReference, bands: Vec<Band<T>>) -> Result<Self> {
        let cell_count = georef.raster_size().cell_count();
        if let Some((index, band)) = bands.iter().enumerate().find(|(_, band)| band.data.len() != cell_count) {
            return Err(Error::InvalidArgument(format!(
                "Band {} contains {} values, expected {} for raster size {}",
                index + 1,
                band.data.len(),
                cell_count,
                georef.raster_size()
            )));
        }

        Ok(DenseCoverage { georef, bands })
    }

    pub fn single_band(georef: GeoReference, data: Vec<T>, nodata: impl Into<NodataValues>) -> Result<Self> {
        DenseCoverage::new(georef, vec![Band::new(data, nodata)])
    }

    pub fn band(&self, band: BandIndex) -> Option<&Band<T>> {
        self.bands.get(band.get() - 1)
    }

    pub fn bands(&self) -> &[Band<T>] {
        &self.bands
    }
}

impl<T: CoverageNum> RasterCoverage for DenseCoverage<T> {
    fn band_count(&self) -> usize {
        self.bands.len()
    }

    fn geo_reference(&self) -> &GeoReference {
        &self.georef
    }

    fn nodata_values(&self, band: BandIndex) -> &NodataValues {
        &self.bands[band.get() - 1].nodata
    }

    fn read_cell(&self, cell: Cell, pixel: &mut [f64]) {
        let size = self.georef.raster_size();
        let Some(index) = cell.index_in_raster(size.rows, size.cols) else {
            debug_assert!(false, "Cell {cell:?} is not on the map {size}");
            pixel.fill(f64::NAN);
            return;
        };

        for (value, band) in pixel.iter_mut().zip(&self.bands) {
            *value = band.data[index].to_f64().unwrap_or(f64::NAN);
        }
    }

    fn with_crs(&self, crs: CoordinateReferenceSystem) -> Self {
        DenseCoverage {
            georef: self.georef.with_crs(crs),
            bands: self.bands.clone(),
        }
    }
}
