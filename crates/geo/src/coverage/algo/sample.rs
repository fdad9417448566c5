use geo_types::Geometry;

use crate::{
    BandIndex, Error, GeoTransform, NodataValues, Point, Result,
    bandindex::band_index,
    coverage::RasterCoverage,
    geometry::ensure_point,
    georeference::cell_for_point,
};

/// Outcome of reading a band at a world location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PixelRead {
    /// The raw band value, nodata sentinels are not filtered
    Found(f64),
    /// The location is outside of the raster grid
    OutOfExtent,
}

pub fn num_bands<R: RasterCoverage + ?Sized>(raster: &R) -> usize {
    raster.band_count()
}

/// Reads the raw band value at a world location (nearest pixel, no interpolation).
/// Fails when the band does not exist.
pub fn read_band<R: RasterCoverage + ?Sized>(raster: &R, point: Point, band: BandIndex) -> Result<PixelRead> {
    if band.get() > raster.band_count() {
        return Err(Error::InvalidArgument(format!(
            "Band {band} not present in raster with {} bands",
            raster.band_count()
        )));
    }

    BandSampler::new(raster, band).read(point)
}

/// Samples a single location, see [`values`].
pub fn value<R: RasterCoverage + ?Sized>(raster: &R, geometry: Option<&Geometry<f64>>, band: i32) -> Result<Option<f64>> {
    Ok(sample_geometries(raster, std::iter::once(geometry), band)?.into_iter().next().flatten())
}

/// Samples the band at every location, the result has the same length and order as `geometries`.
///
/// Absent values are reported as `None`:
/// - for every location when the band does not exist (band numbers are 1-based)
/// - for `None` geometries
/// - for points outside of the raster extent
/// - for pixels that contain one of the nodata values of the band
///
/// Passing a geometry that is not a point is an invalid argument and fails the entire batch,
/// as does a raster with a grid transform that cannot be inverted.
/// The invalid band check takes precedence over the geometry checks.
pub fn values<R: RasterCoverage + ?Sized>(raster: &R, geometries: &[Option<Geometry<f64>>], band: i32) -> Result<Vec<Option<f64>>> {
    sample_geometries(raster, geometries.iter().map(Option::as_ref), band)
}

fn sample_geometries<'g, R, I>(raster: &R, geometries: I, band: i32) -> Result<Vec<Option<f64>>>
where
    R: RasterCoverage + ?Sized,
    I: ExactSizeIterator<Item = Option<&'g Geometry<f64>>>,
{
    let Some(band) = band_index(band, raster.band_count()) else {
        log::trace!("Band {band} not present in raster with {} bands", raster.band_count());
        return Ok(vec![None; geometries.len()]);
    };

    let mut sampler = BandSampler::new(raster, band);
    geometries
        .map(|geometry| match geometry {
            Some(geometry) => sampler.sample(ensure_point(geometry)?),
            None => Ok(None),
        })
        .collect()
}

/// Samples a set of locations using multiple threads.
///
/// Same semantics and result order as [`values`], batches smaller than
/// `config.parallel_min_batch` are sampled on the calling thread.
/// All geometries are validated before sampling starts, errors are identical to the ones of [`values`].
#[cfg(feature = "rayon")]
pub fn values_par<R>(
    raster: &R,
    geometries: &[Option<Geometry<f64>>],
    band: i32,
    config: &crate::RuntimeConfiguration,
) -> Result<Vec<Option<f64>>>
where
    R: RasterCoverage + Sync + ?Sized,
{
    use rayon::prelude::*;

    if geometries.len() < config.parallel_min_batch {
        return values(raster, geometries, band);
    }

    let Some(band) = band_index(band, raster.band_count()) else {
        return Ok(vec![None; geometries.len()]);
    };

    // Same check order as `values`: the transform is computed at the first point
    let mut world_to_grid = None;
    let points = geometries
        .iter()
        .map(|geometry| -> Result<Option<Point>> {
            let Some(geometry) = geometry else {
                return Ok(None);
            };

            let point = ensure_point(geometry)?;
            if world_to_grid.is_none() {
                world_to_grid = Some(raster.geo_reference().world_to_grid_transform()?);
            }

            Ok(Some(point))
        })
        .collect::<Result<Vec<_>>>()?;

    let Some(world_to_grid) = world_to_grid else {
        return Ok(vec![None; points.len()]);
    };

    log::trace!("Sampling {} points on {} threads", points.len(), rayon::current_num_threads());

    points
        .par_iter()
        .map_init(
            || BandSampler::with_world_to_grid(raster, band, world_to_grid),
            |sampler, point| match point {
                Some(point) => sampler.sample(*point),
                None => Ok(None),
            },
        )
        .collect()
}

/// Reads a single band of a raster, the pixel buffer is reused between reads.
struct BandSampler<'a, R: ?Sized> {
    raster: &'a R,
    band: BandIndex,
    nodata: &'a NodataValues,
    world_to_grid: Option<GeoTransform>,
    pixel: Vec<f64>,
}

impl<'a, R: RasterCoverage + ?Sized> BandSampler<'a, R> {
    fn new(raster: &'a R, band: BandIndex) -> Self {
        BandSampler {
            raster,
            band,
            nodata: raster.nodata_values(band),
            world_to_grid: None,
            pixel: vec![0.0; raster.band_count()],
        }
    }

    #[cfg(feature = "rayon")]
    fn with_world_to_grid(raster: &'a R, band: BandIndex, world_to_grid: GeoTransform) -> Self {
        let mut sampler = BandSampler::new(raster, band);
        sampler.world_to_grid = Some(world_to_grid);
        sampler
    }

    /// The inverse grid transform is only computed once a point needs to be mapped
    fn world_to_grid(&mut self) -> Result<GeoTransform> {
        if let Some(transform) = self.world_to_grid {
            return Ok(transform);
        }

        let transform = self.raster.geo_reference().world_to_grid_transform()?;
        self.world_to_grid = Some(transform);
        Ok(transform)
    }

    fn read(&mut self, point: Point) -> Result<PixelRead> {
        let cell = cell_for_point(&self.world_to_grid()?, point);
        if !self.raster.geo_reference().is_cell_on_map(cell) {
            return Ok(PixelRead::OutOfExtent);
        }

        self.raster.read_cell(cell, &mut self.pixel);
        Ok(PixelRead::Found(self.pixel[self.band.get() - 1]))
    }

    fn sample(&mut self, point: Point) -> Result<Option<f64>> {
        Ok(match self.read(point)? {
            PixelRead::Found(value) => self.nodata.filter(value),
            PixelRead::OutOfExtent => None,
        })
    }
}
