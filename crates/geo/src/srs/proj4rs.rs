use proj4rs::Proj;

use crate::Error;
use crate::Result;
use crate::crs::{CoordinateReferenceSystem, Epsg};
use crate::srs::{CrsAuthority, epsg_from_definition, is_proj_string, is_wkt_string};

/// EPSG registry backed by the crs-definitions database.
/// Definitions are validated by constructing the corresponding proj4rs projection.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpsgRegistry;

impl EpsgRegistry {
    pub fn new() -> Self {
        EpsgRegistry
    }

    /// Returns the proj4 definition registered for the code.
    pub fn proj_string(&self, epsg: Epsg) -> Result<&'static str> {
        let code = u16::try_from(epsg.code()).map_err(|_| Error::CrsResolution(format!("EPSG code out of range: {}", epsg.code())))?;

        crs_definitions::from_code(code)
            .map(|def| def.proj4)
            .ok_or_else(|| Error::CrsResolution(format!("No definition registered for {epsg}")))
    }

    /// Constructs the projection for a registered code.
    pub fn projection(&self, epsg: Epsg) -> Result<Proj> {
        Ok(Proj::from_proj_string(self.proj_string(epsg)?)?)
    }

    pub fn is_registered(&self, epsg: Epsg) -> bool {
        self.proj_string(epsg).is_ok()
    }
}

impl CrsAuthority for EpsgRegistry {
    fn lookup_epsg(&self, crs: &CoordinateReferenceSystem, lenient: bool) -> Result<Option<Epsg>> {
        match crs {
            CoordinateReferenceSystem::Engineering { .. } => Ok(None),
            CoordinateReferenceSystem::Epsg(epsg) => Ok(Some(*epsg)),
            CoordinateReferenceSystem::Definition(def) => {
                let def = def.trim();
                let epsg = if is_wkt_string(def) {
                    parse_wkt_epsg(def)?
                } else {
                    epsg_from_definition(def, lenient)
                };

                if let Some(epsg) = epsg {
                    if lenient || self.is_registered(epsg) {
                        return Ok(Some(epsg));
                    }

                    log::debug!("{epsg} is not present in the registry");
                    return Ok(None);
                }

                if !lenient && epsg_from_definition(def, true).is_some() {
                    log::debug!("Non canonical EPSG reference '{def}' ignored");
                    return Ok(None);
                }

                if is_proj_string(def) {
                    // An invalid proj string is a broken crs, not a crs without a code
                    Proj::from_proj_string(def)?;
                } else if !is_wkt_string(def) {
                    return Err(Error::CrsResolution(format!("Unsupported crs definition: '{def}'")));
                }

                log::debug!("No EPSG identifier found in crs definition");
                Ok(None)
            }
        }
    }

    fn decode_epsg(&self, epsg: Epsg) -> Result<CoordinateReferenceSystem> {
        self.projection(epsg)?;
        Ok(CoordinateReferenceSystem::Epsg(epsg))
    }
}

/// The EPSG code of the root node of a WKT definition.
/// Authorities of nested nodes (base crs, datum, ellipsoid) do not identify the crs.
fn parse_wkt_epsg(wkt: &str) -> Result<Option<Epsg>> {
    let node = proj4wkt::Builder
        .parse(wkt)
        .map_err(|err| Error::CrsResolution(format!("Invalid WKT definition: {err:?}")))?;

    let authority = match &node {
        proj4wkt::builder::Node::PROJCRS(crs) => crs.projection.authority.as_ref(),
        proj4wkt::builder::Node::GEOGCRS(crs) => crs.authority.as_ref(),
        _ => None,
    };

    Ok(authority
        .and_then(|auth| auth.code.parse::<u32>().ok())
        .filter(|&code| code != 0)
        .map(Epsg::new))
}
