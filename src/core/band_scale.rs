use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Inner/outer padding of a band scale, as fractions of the band step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPadding {
    pub inner: f64,
    pub outer: f64,
}

impl Default for BandPadding {
    fn default() -> Self {
        Self {
            inner: 0.1,
            outer: 0.1,
        }
    }
}

impl BandPadding {
    #[must_use]
    pub fn new(inner: f64, outer: f64) -> Self {
        Self { inner, outer }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.inner.is_finite() || !(0.0..=1.0).contains(&self.inner) {
            return Err(ChartError::InvalidConfig(
                "band inner padding must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.outer.is_finite() || self.outer < 0.0 {
            return Err(ChartError::InvalidConfig(
                "band outer padding must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Discrete scale placing each category key on a contiguous pixel band.
///
/// Layout follows the usual band-scale rules:
/// `step = extent / max(1, n - inner + 2 * outer)`, bands are
/// `step * (1 - inner)` wide and the whole run is centered in the extent.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    keys: IndexSet<String>,
    extent: f64,
    start: f64,
    step: f64,
    band_width: f64,
}

impl BandScale {
    pub fn new<I, K>(keys: I, extent: f64, padding: BandPadding) -> ChartResult<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let padding = padding.validate()?;
        if !extent.is_finite() || extent <= 0.0 {
            return Err(ChartError::InvalidData(
                "band scale extent must be finite and > 0".to_owned(),
            ));
        }

        let mut set = IndexSet::new();
        for key in keys {
            let key = key.into();
            if set.contains(&key) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate category key `{key}`"
                )));
            }
            set.insert(key);
        }

        let n = set.len() as f64;
        let step = extent / (n - padding.inner + padding.outer * 2.0).max(1.0);
        let start = (extent - step * (n - padding.inner)) * 0.5;
        let band_width = step * (1.0 - padding.inner);

        Ok(Self {
            keys: set,
            extent,
            start,
            step,
            band_width,
        })
    }

    pub fn band_position(&self, key: &str) -> ChartResult<f64> {
        self.keys
            .get_index_of(key)
            .map(|index| self.start + self.step * index as f64)
            .ok_or_else(|| ChartError::UnknownKey(key.to_owned()))
    }

    /// Center of the key's band; used for key-axis tick placement.
    pub fn band_center(&self, key: &str) -> ChartResult<f64> {
        Ok(self.band_position(key)? + self.band_width * 0.5)
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.band_width
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn extent(&self) -> f64 {
        self.extent
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}
