//! Band index utilities.

/// 1-based raster band index.
///
/// The band api's use a 1-based index for bands. We use `NonZeroUsize` to
/// make it impossible to represent band index 0.
pub type BandIndex = std::num::NonZeroUsize;

/// Convenience constant for the first band (band 1).
pub const FIRST_BAND: BandIndex = std::num::NonZeroUsize::new(1).unwrap();

/// Validates a caller provided band number against the number of bands of a raster.
/// Returns `None` when the band does not exist.
pub fn band_index(band: i32, band_count: usize) -> Option<BandIndex> {
    let index = BandIndex::new(usize::try_from(band).ok()?)?;
    (index.get() <= band_count).then_some(index)
}
