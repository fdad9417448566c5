use crate::{
    CoordinateReferenceSystem, DenseCoverage, Epsg, Error, GeoReference, NodataValues, RasterSize, Result,
    srs::{self, CrsAuthority},
};

pub const NOD: f64 = -9999.0;

/// Authority with a fixed set of known codes, no geodesy database involved.
pub struct FakeAuthority {
    codes: Vec<Epsg>,
    reachable: bool,
}

impl FakeAuthority {
    pub fn with_codes(codes: &[Epsg]) -> Self {
        FakeAuthority {
            codes: codes.to_vec(),
            reachable: true,
        }
    }

    /// Authority that fails every request
    pub fn unreachable() -> Self {
        FakeAuthority {
            codes: Vec::new(),
            reachable: false,
        }
    }

    fn check_reachable(&self) -> Result<()> {
        if self.reachable {
            Ok(())
        } else {
            Err(Error::CrsResolution("authority database unavailable".to_string()))
        }
    }
}

impl CrsAuthority for FakeAuthority {
    fn lookup_epsg(&self, crs: &CoordinateReferenceSystem, lenient: bool) -> Result<Option<Epsg>> {
        self.check_reachable()?;

        Ok(match crs {
            CoordinateReferenceSystem::Engineering { .. } => None,
            CoordinateReferenceSystem::Epsg(epsg) => Some(*epsg),
            CoordinateReferenceSystem::Definition(def) => srs::epsg_from_definition(def, lenient).filter(|epsg| self.codes.contains(epsg)),
        })
    }

    fn decode_epsg(&self, epsg: Epsg) -> Result<CoordinateReferenceSystem> {
        self.check_reachable()?;

        if self.codes.contains(&epsg) {
            Ok(CoordinateReferenceSystem::Epsg(epsg))
        } else {
            Err(Error::CrsResolution(format!("Unknown code {epsg}")))
        }
    }
}

/// 10x10 single band raster covering [0, 10] x [0, 10] with a cell size of 1 and an undefined crs.
/// The grid origin is at (0, 0) so cell (row, col) covers [col, col + 1] x [row, row + 1].
/// Cell (0, 0) contains 5, cell (5, 5) contains nodata, the other cells contain `row * 10 + col`.
pub fn example_coverage() -> DenseCoverage<f64> {
    let georef = GeoReference::without_spatial_reference(RasterSize::square(10), [0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    let mut data: Vec<f64> = (0..100).map(f64::from).collect();
    data[0] = 5.0;
    data[55] = NOD;

    DenseCoverage::single_band(georef, data, NodataValues::single(NOD)).expect("valid test coverage")
}
