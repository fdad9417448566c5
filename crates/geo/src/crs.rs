//! Coordinate reference system descriptors and EPSG codes.

/// Spatial reference identifier, `0` is reserved for "no reference system".
pub type Srid = u32;

/// The srid used for rasters without a real-world reference system.
pub const UNDEFINED_SRID: Srid = 0;

/// An EPSG authority code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Epsg(u32);

impl Epsg {
    pub const fn new(code: u32) -> Self {
        Epsg(code)
    }

    pub const fn code(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Epsg {
    fn from(code: u32) -> Self {
        Epsg(code)
    }
}

impl From<u16> for Epsg {
    fn from(code: u16) -> Self {
        Epsg(code as u32)
    }
}

impl From<Epsg> for u32 {
    fn from(epsg: Epsg) -> u32 {
        epsg.0
    }
}

impl std::fmt::Display for Epsg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

pub mod epsg {
    use super::Epsg;

    pub const WGS84: Epsg = Epsg::new(4326);
    pub const WGS84_WEB_MERCATOR: Epsg = Epsg::new(3857);
    pub const BELGIAN_LAMBERT72: Epsg = Epsg::new(31370);
    pub const BELGE72_GEO: Epsg = Epsg::new(4313);
    pub const ETRS89: Epsg = Epsg::new(4258);
    pub const ETRS89_LAEA: Epsg = Epsg::new(3035);
}

/// Describes the reference system the world coordinates of a raster are expressed in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordinateReferenceSystem {
    /// Cartesian engineering space without a real-world reference.
    /// `wildcard` marks a synthetic default assigned because the raster carried no crs at all,
    /// as opposed to a deliberately chosen cartesian system.
    Engineering { wildcard: bool },
    /// A reference system registered by the EPSG authority.
    Epsg(Epsg),
    /// A free-form definition (WKT, proj string or authority string like "EPSG:4326").
    Definition(String),
}

impl CoordinateReferenceSystem {
    /// The crs assigned to rasters that do not carry reference system information.
    pub const UNDEFINED: CoordinateReferenceSystem = CoordinateReferenceSystem::Engineering { wildcard: true };
    /// A deliberately chosen 2D cartesian reference system.
    pub const CARTESIAN_2D: CoordinateReferenceSystem = CoordinateReferenceSystem::Engineering { wildcard: false };

    pub fn from_definition(def: impl Into<String>) -> Self {
        CoordinateReferenceSystem::Definition(def.into())
    }

    pub fn is_engineering(&self) -> bool {
        matches!(self, CoordinateReferenceSystem::Engineering { .. })
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, CoordinateReferenceSystem::Engineering { wildcard: true })
    }
}

impl Default for CoordinateReferenceSystem {
    fn default() -> Self {
        CoordinateReferenceSystem::UNDEFINED
    }
}

impl From<Epsg> for CoordinateReferenceSystem {
    fn from(epsg: Epsg) -> Self {
        CoordinateReferenceSystem::Epsg(epsg)
    }
}

impl std::fmt::Display for CoordinateReferenceSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinateReferenceSystem::Engineering { wildcard: true } => write!(f, "Undefined"),
            CoordinateReferenceSystem::Engineering { wildcard: false } => write!(f, "Cartesian 2D"),
            CoordinateReferenceSystem::Epsg(epsg) => write!(f, "{epsg}"),
            CoordinateReferenceSystem::Definition(def) => write!(f, "{def}"),
        }
    }
}
