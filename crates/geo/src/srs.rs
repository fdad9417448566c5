//! Spatial reference authority lookups.
//!
//! The [`CrsAuthority`] trait is the seam between the raster functions and a geodesy database.
//! The raster functions never talk to a reference database directly, which allows
//! tests and embedders to provide their own registry.

use crate::Result;
use crate::crs::{CoordinateReferenceSystem, Epsg};

#[cfg(feature = "proj4rs")]
mod proj4rs;

#[cfg(feature = "proj4rs")]
#[cfg_attr(docsrs, doc(cfg(feature = "proj4rs")))]
pub use proj4rs::EpsgRegistry;

/// A registry capable of mapping reference systems to EPSG codes and back.
pub trait CrsAuthority {
    /// Finds the EPSG code of the reference system.
    ///
    /// Returns `Ok(None)` when the authority does not know a code for it, errors are reserved
    /// for failures of the authority itself.
    /// With `lenient` matching, identifiers that are not in canonical form are accepted as well.
    fn lookup_epsg(&self, crs: &CoordinateReferenceSystem, lenient: bool) -> Result<Option<Epsg>>;

    /// Resolves an EPSG code to a reference system, fails when the code is not registered.
    fn decode_epsg(&self, epsg: Epsg) -> Result<CoordinateReferenceSystem>;
}

const WKT_ROOTS: [&str; 7] = ["GEOGCS[", "PROJCS[", "GEOCCS[", "VERT_CS[", "LOCAL_CS[", "COMPD_CS[", "FITTED_C["];
const WKT2_ROOTS: [&str; 9] = [
    "GEODCRS[",
    "GEOGCRS[",
    "PROJCRS[",
    "VERTCRS[",
    "ENGCRS[",
    "COMPOUNDCRS[",
    "BOUNDCRS[",
    "PARAMETRICCRS[",
    "TIMECRS[",
];

pub fn is_wkt_string(s: &str) -> bool {
    WKT_ROOTS.iter().any(|&root| s.starts_with(root)) || WKT2_ROOTS.iter().any(|&root| s.starts_with(root))
}

pub fn is_proj_string(s: &str) -> bool {
    s.starts_with("+proj=") || s.starts_with("+init=")
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len() && s.is_char_boundary(prefix.len()) && s[..prefix.len()].eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

fn parse_code(code: &str) -> Option<Epsg> {
    code.trim().parse::<u32>().ok().filter(|&code| code != 0).map(Epsg::new)
}

/// Extracts the EPSG code from an identifier string.
///
/// Strict matching only recognizes "EPSG:<code>".
/// Lenient matching also accepts case variations, OGC urns and proj `+init` references.
/// WKT definitions are not handled here, the authority backends parse those.
pub fn epsg_from_definition(def: &str, lenient: bool) -> Option<Epsg> {
    let def = def.trim();

    if let Some(code) = def.strip_prefix("EPSG:") {
        return parse_code(code);
    }

    if !lenient {
        return None;
    }

    if let Some(code) = strip_prefix_ignore_case(def, "epsg:") {
        return parse_code(code);
    }

    if let Some(code) = strip_prefix_ignore_case(def, "urn:ogc:def:crs:epsg:") {
        // the version part is optional: urn:ogc:def:crs:EPSG::4326 or urn:ogc:def:crs:EPSG:6.6:4326
        return code.rsplit(':').next().and_then(parse_code);
    }

    def.split_whitespace()
        .find_map(|param| strip_prefix_ignore_case(param, "+init=epsg:"))
        .and_then(parse_code)
}
