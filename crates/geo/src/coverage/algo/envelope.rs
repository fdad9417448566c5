use geo_types::Polygon;

use crate::{Result, SpatialGeometry, coverage::RasterCoverage, srs::CrsAuthority};

use super::srid;

/// The world space extent of the raster as a polygon tagged with the srid of the raster.
///
/// The polygon is the axis aligned bounding rectangle of the grid, a single closed exterior ring
/// without holes. An empty grid yields a degenerate polygon at the grid origin.
pub fn envelope<R, A>(raster: &R, authority: &A) -> Result<SpatialGeometry<Polygon<f64>>>
where
    R: RasterCoverage + ?Sized,
    A: CrsAuthority + ?Sized,
{
    let bbox = raster.geo_reference().bounding_box();
    Ok(SpatialGeometry::new(Polygon::from(bbox), srid(raster, authority)?))
}
