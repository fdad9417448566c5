/// Represents a point in the raster using row, col coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn from_row_col(row: i32, col: i32) -> Self {
        Cell { row, col }
    }

    pub const fn invalid() -> Self {
        Cell { row: -1, col: -1 }
    }

    pub const fn is_valid(&self) -> bool {
        self.row >= 0 && self.col >= 0
    }

    /// The cell that encloses a fractional grid position.
    /// Positions that cannot be represented (NaN, infinite) map to an invalid cell.
    pub fn enclosing(col: f64, row: f64) -> Self {
        let (col, row) = (col.floor(), row.floor());
        if !col.is_finite() || !row.is_finite() || col.abs() > i32::MAX as f64 || row.abs() > i32::MAX as f64 {
            return Cell::invalid();
        }

        Cell::from_row_col(row as i32, col as i32)
    }

    /// Offset of the cell in a row-major buffer, `None` for cells outside of the grid.
    pub fn index_in_raster(&self, rows: usize, cols: usize) -> Option<usize> {
        if !self.is_valid() {
            return None;
        }

        let (row, col) = (self.row as usize, self.col as usize);
        if row < rows && col < cols { Some(row * cols + col) } else { None }
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}
