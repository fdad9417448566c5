use crate::{
    CoordinateReferenceSystem, Epsg, Result, RuntimeConfiguration,
    coverage::RasterCoverage,
    crs::{Srid, UNDEFINED_SRID},
    srs::CrsAuthority,
};

/// The normalized spatial reference identifier of the raster.
///
/// Rasters without reference system information report `0`, as do rasters whose
/// reference system is not known by the authority.
/// Failures of the authority itself are propagated.
pub fn srid<R, A>(raster: &R, authority: &A) -> Result<Srid>
where
    R: RasterCoverage + ?Sized,
    A: CrsAuthority + ?Sized,
{
    srid_with_config(raster, authority, &RuntimeConfiguration::default())
}

pub fn srid_with_config<R, A>(raster: &R, authority: &A, config: &RuntimeConfiguration) -> Result<Srid>
where
    R: RasterCoverage + ?Sized,
    A: CrsAuthority + ?Sized,
{
    crs_srid(raster.geo_reference().crs(), authority, config.lenient_epsg_lookup)
}

/// Normalizes a reference system to its srid.
pub fn crs_srid<A>(crs: &CoordinateReferenceSystem, authority: &A, lenient: bool) -> Result<Srid>
where
    A: CrsAuthority + ?Sized,
{
    if crs.is_wildcard() {
        // Synthetic default, there is no reference system to look up
        return Ok(UNDEFINED_SRID);
    }

    match authority.lookup_epsg(crs, lenient)? {
        Some(epsg) => Ok(epsg.code()),
        None => {
            log::debug!("No EPSG code found for crs '{crs}'");
            Ok(UNDEFINED_SRID)
        }
    }
}

/// Binds the raster to the reference system identified by `srid`.
///
/// Srid `0` binds the raster to a cartesian reference system, other values must be known by the authority.
/// This only changes the label of the raster: pixel values and the extent in world space are unchanged.
pub fn set_srid<R, A>(raster: &R, srid: Srid, authority: &A) -> Result<R>
where
    R: RasterCoverage,
    A: CrsAuthority + ?Sized,
{
    let crs = if srid == UNDEFINED_SRID {
        CoordinateReferenceSystem::CARTESIAN_2D
    } else {
        authority.decode_epsg(Epsg::new(srid))?
    };

    Ok(raster.with_crs(crs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error, GeoReference, RasterSize,
        coverage::DenseCoverage,
        crs::epsg,
        testutils::{FakeAuthority, example_coverage},
    };

    fn coverage_with_crs(crs: impl Into<CoordinateReferenceSystem>) -> DenseCoverage<f64> {
        let georef = GeoReference::new(crs, RasterSize::square(2), [0.0, 1.0, 0.0, 2.0, 0.0, -1.0]);
        DenseCoverage::single_band(georef, vec![1.0, 2.0, 3.0, 4.0], Some(-9999.0)).unwrap()
    }

    #[test_log::test]
    fn undefined_crs_has_srid_zero() {
        let authority = FakeAuthority::unreachable();
        // The wildcard crs never reaches the authority
        assert_eq!(srid(&example_coverage(), &authority).unwrap(), 0);
    }

    #[test_log::test]
    fn epsg_crs_srid() {
        let authority = FakeAuthority::with_codes(&[epsg::WGS84, epsg::BELGIAN_LAMBERT72]);
        assert_eq!(srid(&coverage_with_crs(epsg::BELGIAN_LAMBERT72), &authority).unwrap(), 31370);
        assert_eq!(
            srid(&coverage_with_crs(CoordinateReferenceSystem::from_definition("EPSG:4326")), &authority).unwrap(),
            4326
        );
    }

    #[test_log::test]
    fn missing_code_is_zero() {
        let authority = FakeAuthority::with_codes(&[epsg::WGS84]);
        let raster = coverage_with_crs(CoordinateReferenceSystem::from_definition("+proj=longlat +ellps=intl +no_defs"));
        assert_eq!(srid(&raster, &authority).unwrap(), 0);
        assert_eq!(srid(&coverage_with_crs(CoordinateReferenceSystem::CARTESIAN_2D), &authority).unwrap(), 0);
    }

    #[test_log::test]
    fn lenient_lookup_is_configurable() {
        let authority = FakeAuthority::with_codes(&[epsg::WGS84]);
        let raster = coverage_with_crs(CoordinateReferenceSystem::from_definition("urn:ogc:def:crs:EPSG::4326"));

        assert_eq!(srid(&raster, &authority).unwrap(), 4326);

        let strict = RuntimeConfiguration::builder().lenient_epsg_lookup(false).build();
        assert_eq!(srid_with_config(&raster, &authority, &strict).unwrap(), 0);
    }

    #[test_log::test]
    fn authority_failure_propagates() {
        let authority = FakeAuthority::unreachable();
        assert!(matches!(
            srid(&coverage_with_crs(epsg::WGS84), &authority),
            Err(Error::CrsResolution(_))
        ));
    }

    #[test_log::test]
    fn set_srid_round_trip() {
        let authority = FakeAuthority::with_codes(&[epsg::WGS84, epsg::WGS84_WEB_MERCATOR]);
        let raster = example_coverage();

        let rebound = set_srid(&raster, 3857, &authority).unwrap();
        assert_eq!(srid(&rebound, &authority).unwrap(), 3857);
        assert_eq!(rebound.bands(), raster.bands());
        assert_eq!(rebound.geo_reference().bounding_box(), raster.geo_reference().bounding_box());
        assert_eq!(rebound.geo_reference().geo_transform(), raster.geo_reference().geo_transform());

        let cleared = set_srid(&rebound, 0, &authority).unwrap();
        assert_eq!(cleared.geo_reference().crs(), &CoordinateReferenceSystem::CARTESIAN_2D);
        assert_eq!(srid(&cleared, &authority).unwrap(), 0);
        assert_eq!(cleared.bands(), raster.bands());
    }

    #[test_log::test]
    fn set_srid_unknown_code_fails() {
        let authority = FakeAuthority::with_codes(&[epsg::WGS84]);
        assert!(matches!(set_srid(&example_coverage(), 123456, &authority), Err(Error::CrsResolution(_))));
    }

    #[test_log::test]
    fn set_srid_zero_does_not_consult_authority() {
        let authority = FakeAuthority::unreachable();
        let cleared = set_srid(&coverage_with_crs(epsg::WGS84), 0, &authority).unwrap();
        assert_eq!(cleared.geo_reference().crs(), &CoordinateReferenceSystem::CARTESIAN_2D);
    }
}
