/// Checks if two values are identical sentinels.
///
/// This is an exact comparison on the bit pattern: all NaN values are considered equal to each other
/// and `0.0` and `-0.0` are different values. No tolerance is applied.
#[inline]
pub fn is_same_value(value: f64, sentinel: f64) -> bool {
    (value.is_nan() && sentinel.is_nan()) || value.to_bits() == sentinel.to_bits()
}

/// The set of values that indicate missing data in a raster band.
/// A band can declare zero or more sentinels, without sentinels no value is ever considered nodata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodataValues(Vec<f64>);

impl NodataValues {
    pub fn none() -> Self {
        NodataValues(Vec::new())
    }

    pub fn single(nodata: f64) -> Self {
        NodataValues(vec![nodata])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    #[inline]
    pub fn is_nodata(&self, value: f64) -> bool {
        self.0.iter().any(|&sentinel| is_same_value(value, sentinel))
    }

    /// `None` when the value matches one of the sentinels
    #[inline]
    pub fn filter(&self, value: f64) -> Option<f64> {
        if self.is_nodata(value) { None } else { Some(value) }
    }
}

impl From<Vec<f64>> for NodataValues {
    fn from(values: Vec<f64>) -> Self {
        NodataValues(values)
    }
}

impl From<Option<f64>> for NodataValues {
    fn from(nodata: Option<f64>) -> Self {
        NodataValues(nodata.into_iter().collect())
    }
}

impl FromIterator<f64> for NodataValues {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        NodataValues(iter.into_iter().collect())
    }
}
