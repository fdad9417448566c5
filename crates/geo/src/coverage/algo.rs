//! Functions operating on raster coverages.

mod envelope;
mod sample;
mod srid;

pub use envelope::envelope;
#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub use sample::values_par;
pub use sample::{PixelRead, num_bands, read_band, value, values};
pub use srid::{crs_srid, set_srid, srid, srid_with_config};
