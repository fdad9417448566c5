use geo_types::Geometry;

use crate::{Error, Point, Result, crs::Srid};

/// A geometry tagged with the srid of the reference system its coordinates are expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialGeometry<G = Geometry<f64>> {
    pub geometry: G,
    pub srid: Srid,
}

impl<G> SpatialGeometry<G> {
    pub fn new(geometry: G, srid: Srid) -> Self {
        SpatialGeometry { geometry, srid }
    }

    pub fn into_geometry(self) -> Geometry<f64>
    where
        G: Into<Geometry<f64>>,
    {
        self.geometry.into()
    }
}

fn geometry_type_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

/// Returns the point of a point geometry, any other geometry type is an invalid argument.
pub fn ensure_point(geometry: &Geometry<f64>) -> Result<Point> {
    match geometry {
        Geometry::Point(point) => Ok(*point),
        other => Err(Error::InvalidArgument(format!(
            "Attempting to get the value of a pixel with a non-point geometry ({})",
            geometry_type_name(other)
        ))),
    }
}
