use approx::{AbsDiffEq, RelativeEq};

use crate::{Cell, CoordinateReferenceSystem, GeoTransform, Point, RasterSize, Rect, Result};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CellSize {
    x: f64,
    y: f64,
}

impl AbsDiffEq for CellSize {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> <f64 as AbsDiffEq>::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: <f64 as AbsDiffEq>::Epsilon) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon) && f64::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl RelativeEq for CellSize {
    fn default_max_relative() -> <f64 as AbsDiffEq>::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: <f64 as AbsDiffEq>::Epsilon, max_relative: <f64 as AbsDiffEq>::Epsilon) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative) && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}

impl CellSize {
    pub const fn new(x: f64, y: f64) -> Self {
        CellSize { x, y }
    }

    /// Square cells for a north up raster (negative y cell size)
    pub const fn square(size: f64) -> Self {
        CellSize::new(size, -size)
    }

    pub fn is_valid(&self) -> bool {
        self.x != 0.0 && self.y != 0.0
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// The grid geometry of a raster: the mapping between grid cells and world coordinates
/// and the reference system the world coordinates are expressed in.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GeoReference {
    crs: CoordinateReferenceSystem,
    /// The size of the image in pixels
    size: RasterSize,
    /// The affine transformation from grid to world space
    geo_transform: GeoTransform,
}

impl GeoReference {
    pub fn new(crs: impl Into<CoordinateReferenceSystem>, size: RasterSize, geo_transform: impl Into<GeoTransform>) -> Self {
        GeoReference {
            crs: crs.into(),
            size,
            geo_transform: geo_transform.into(),
        }
    }

    /// A georeference in cartesian space without a real-world reference system.
    pub fn without_spatial_reference(size: RasterSize, geo_transform: impl Into<GeoTransform>) -> Self {
        GeoReference {
            crs: CoordinateReferenceSystem::UNDEFINED,
            size,
            geo_transform: geo_transform.into(),
        }
    }

    pub fn with_origin(crs: impl Into<CoordinateReferenceSystem>, size: RasterSize, lower_left: Point, cell_size: CellSize) -> Self {
        let top_left = Point::new(lower_left.x(), lower_left.y() - (cell_size.y() * size.rows as f64));
        GeoReference::new(crs, size, GeoTransform::from_top_left_and_cell_size(top_left, cell_size))
    }

    /// Copy of the georeference bound to a different reference system.
    /// The grid and its placement in world space are unchanged.
    pub fn with_crs(&self, crs: CoordinateReferenceSystem) -> Self {
        GeoReference {
            crs,
            size: self.size,
            geo_transform: self.geo_transform,
        }
    }

    pub fn crs(&self) -> &CoordinateReferenceSystem {
        &self.crs
    }

    pub fn raster_size(&self) -> RasterSize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.rows
    }

    pub fn columns(&self) -> usize {
        self.size.cols
    }

    pub fn geo_transform(&self) -> GeoTransform {
        self.geo_transform
    }

    pub fn cell_size(&self) -> CellSize {
        CellSize::new(self.geo_transform.cell_size_x(), self.geo_transform.cell_size_y())
    }

    /// World coordinate of the top left corner of the cell
    pub fn cell_corner(&self, cell: Cell) -> Point {
        self.geo_transform.apply_to_cell(cell)
    }

    pub fn cell_center(&self, cell: Cell) -> Point {
        self.geo_transform.apply(cell.col as f64 + 0.5, cell.row as f64 + 0.5)
    }

    /// The inverse of the geo transform, maps world coordinates to fractional grid coordinates.
    pub fn world_to_grid_transform(&self) -> Result<GeoTransform> {
        self.geo_transform.invert()
    }

    /// The cell that contains the world coordinate.
    /// The cell is not guaranteed to be on the map, use `is_cell_on_map` to check.
    pub fn world_to_cell(&self, p: Point) -> Result<Cell> {
        Ok(cell_for_point(&self.world_to_grid_transform()?, p))
    }

    pub fn is_cell_on_map(&self, cell: Cell) -> bool {
        self.is_on_map(cell.row, cell.col)
    }

    pub fn is_on_map(&self, r: i32, c: i32) -> bool {
        r >= 0 && c >= 0 && (r as usize) < self.rows() && (c as usize) < self.columns()
    }

    /// The world space extent of the raster.
    /// For rotated grids this is the bounding rectangle of the four grid corners.
    pub fn bounding_box(&self) -> Rect<f64> {
        let (rows, cols) = (self.rows() as f64, self.columns() as f64);
        let corners = [
            self.geo_transform.apply(0.0, 0.0),
            self.geo_transform.apply(cols, 0.0),
            self.geo_transform.apply(0.0, rows),
            self.geo_transform.apply(cols, rows),
        ];

        Rect::bounding(corners).unwrap_or_else(|| Rect::from_points(corners[0], corners[0]))
    }
}

/// Maps a world coordinate to the enclosing cell using an inverted geo transform.
pub fn cell_for_point(world_to_grid: &GeoTransform, p: Point) -> Cell {
    let grid = world_to_grid.apply(p.x(), p.y());
    Cell::enclosing(grid.x(), grid.y())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{Error, crs::epsg};

    #[test]
    fn bounding_box_zero_origin() {
        let meta = GeoReference::with_origin(
            CoordinateReferenceSystem::UNDEFINED,
            RasterSize::with_rows_cols(10, 5),
            Point::new(0.0, 0.0),
            CellSize::square(5.0),
        );

        let bbox = meta.bounding_box();
        assert_eq!(bbox.top_left(), Point::new(0.0, 50.0));
        assert_eq!(bbox.bottom_right(), Point::new(25.0, 0.0));
    }

    #[test]
    fn bounding_box_negative_y_origin() {
        let meta = GeoReference::with_origin(
            CoordinateReferenceSystem::UNDEFINED,
            RasterSize::with_rows_cols(2, 2),
            Point::new(9.0, -10.0),
            CellSize::square(4.0),
        );

        let bbox = meta.bounding_box();
        assert_eq!(bbox.top_left(), Point::new(9.0, -2.0));
        assert_eq!(bbox.bottom_right(), Point::new(17.0, -10.0));
    }

    #[test]
    fn bounding_box_epsg_4326() {
        const TRANS: [f64; 6] = [-30.0, 0.100, 0.0, 30.0, 0.0, -0.05];

        let meta = GeoReference::new(epsg::WGS84, RasterSize::with_rows_cols(840, 900), TRANS);

        assert_relative_eq!(
            meta.bounding_box(),
            Rect::from_points(Point::new(-30.0, 30.0), Point::new(60.0, -12.0)),
            epsilon = 1e-9
        );
        assert_relative_eq!(meta.cell_size(), CellSize::new(0.1, -0.05));
    }

    #[test]
    fn bounding_box_south_up() {
        let meta = GeoReference::without_spatial_reference(RasterSize::square(10), [0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

        let bbox = meta.bounding_box();
        assert_eq!(bbox.min_x(), 0.0);
        assert_eq!(bbox.min_y(), 0.0);
        assert_eq!(bbox.max_x(), 10.0);
        assert_eq!(bbox.max_y(), 10.0);
    }

    #[test]
    fn bounding_box_rotated() {
        let meta = GeoReference::without_spatial_reference(RasterSize::with_rows_cols(2, 4), [10.0, 1.0, 0.5, 20.0, 0.25, -1.0]);

        let bbox = meta.bounding_box();
        assert_eq!(bbox.min_x(), 10.0);
        assert_eq!(bbox.max_x(), 15.0);
        assert_eq!(bbox.min_y(), 18.0);
        assert_eq!(bbox.max_y(), 21.0);
    }

    #[test]
    fn point_calculations_zero_origin() {
        let meta = GeoReference::with_origin(
            CoordinateReferenceSystem::UNDEFINED,
            RasterSize::with_rows_cols(2, 2),
            Point::new(0.0, 0.0),
            CellSize::square(1.0),
        );

        assert_relative_eq!(meta.cell_size(), CellSize::square(1.0));
        assert_eq!(meta.cell_center(Cell::from_row_col(0, 0)), Point::new(0.5, 1.5));
        assert_eq!(meta.cell_center(Cell::from_row_col(1, 1)), Point::new(1.5, 0.5));
        assert_eq!(meta.cell_corner(Cell::from_row_col(1, 1)), Point::new(1.0, 1.0));

        assert_eq!(meta.world_to_cell(Point::new(0.5, 1.5)).unwrap(), Cell::from_row_col(0, 0));
        assert_eq!(meta.world_to_cell(Point::new(1.5, 0.5)).unwrap(), Cell::from_row_col(1, 1));
        assert_eq!(meta.world_to_cell(Point::new(0.0, 2.0)).unwrap(), Cell::from_row_col(0, 0));
        assert_eq!(meta.world_to_cell(Point::new(2.0, 0.0)).unwrap(), Cell::from_row_col(2, 2));
        assert_eq!(meta.world_to_cell(Point::new(-1.0, 3.0)).unwrap(), Cell::from_row_col(-1, -1));
    }

    #[test]
    fn cell_on_map() {
        let meta = GeoReference::without_spatial_reference(RasterSize::with_rows_cols(2, 3), [0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

        assert!(meta.is_cell_on_map(Cell::from_row_col(0, 0)));
        assert!(meta.is_cell_on_map(Cell::from_row_col(1, 2)));
        assert!(!meta.is_cell_on_map(Cell::from_row_col(2, 0)));
        assert!(!meta.is_cell_on_map(Cell::from_row_col(0, 3)));
        assert!(!meta.is_cell_on_map(Cell::invalid()));
    }

    #[test]
    fn world_to_cell_singular_transform() {
        let meta = GeoReference::without_spatial_reference(RasterSize::square(2), [0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(matches!(meta.world_to_cell(Point::new(0.5, 0.5)), Err(Error::Transform(_))));
    }

    #[test]
    fn rebinding_crs_keeps_grid() {
        let meta = GeoReference::new(epsg::WGS84, RasterSize::with_rows_cols(840, 900), [-30.0, 0.1, 0.0, 30.0, 0.0, -0.05]);
        let rebound = meta.with_crs(CoordinateReferenceSystem::CARTESIAN_2D);

        assert_eq!(rebound.crs(), &CoordinateReferenceSystem::CARTESIAN_2D);
        assert_eq!(rebound.raster_size(), meta.raster_size());
        assert_eq!(rebound.geo_transform(), meta.geo_transform());
        assert_eq!(rebound.bounding_box(), meta.bounding_box());
    }
}
