use bon::bon;

/// Tunables for the raster functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfiguration {
    /// Accept non canonical identifiers when looking up EPSG codes
    pub lenient_epsg_lookup: bool,
    /// Batches smaller than this are always sampled on the calling thread
    pub parallel_min_batch: usize,
}

impl RuntimeConfiguration {
    pub const DEFAULT_PARALLEL_MIN_BATCH: usize = 4096;
}

#[bon]
impl RuntimeConfiguration {
    #[builder]
    pub fn new(lenient_epsg_lookup: Option<bool>, parallel_min_batch: Option<usize>) -> Self {
        Self {
            lenient_epsg_lookup: lenient_epsg_lookup.unwrap_or(true),
            parallel_min_batch: parallel_min_batch.unwrap_or(Self::DEFAULT_PARALLEL_MIN_BATCH),
        }
    }
}

impl Default for RuntimeConfiguration {
    fn default() -> Self {
        RuntimeConfiguration::builder().build()
    }
}
