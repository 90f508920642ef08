use serde::{Deserialize, Serialize};

use crate::core::{
    BandPadding, EasingProfile, KeyAxisLocation, MAX_VALUE_TICK_COUNT, Margins, OrientationKind,
    ValueAxisLocation, ValueDomain, Viewport,
};
use crate::error::{ChartError, ChartResult};

/// Where `update` takes each bar's previous value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HistorySource {
    /// Read the value back from the rectangle the surface currently shows,
    /// so an update issued mid-animation starts where the bar actually is.
    /// Falls back to the retained value when the surface has no rectangle.
    #[default]
    RenderedGeometry,
    /// Use the target value of the previous `create`/`update` call.
    Retained,
}

/// Construction-time chart configuration.
///
/// Serializable so hosts can keep chart setup next to their own config
/// instead of inventing an ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    pub value_min: f64,
    pub value_max: f64,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_band_padding_inner")]
    pub band_padding_inner: f64,
    #[serde(default = "default_band_padding_outer")]
    pub band_padding_outer: f64,
    #[serde(default)]
    pub key_axis_location: KeyAxisLocation,
    #[serde(default)]
    pub value_axis_location: ValueAxisLocation,
    #[serde(default = "default_value_tick_count")]
    pub value_tick_count: usize,
    #[serde(default = "default_transition_time_ms")]
    pub transition_time_ms: f64,
    #[serde(default)]
    pub easing: EasingProfile,
    #[serde(default)]
    pub history_source: HistorySource,
    #[serde(default)]
    pub orientation: OrientationKind,
}

impl ChartConfig {
    /// Creates a config with the given plot size and value domain.
    #[must_use]
    pub fn new(viewport: Viewport, value_min: f64, value_max: f64) -> Self {
        Self {
            viewport,
            value_min,
            value_max,
            margins: Margins::default(),
            band_padding_inner: default_band_padding_inner(),
            band_padding_outer: default_band_padding_outer(),
            key_axis_location: KeyAxisLocation::default(),
            value_axis_location: ValueAxisLocation::default(),
            value_tick_count: default_value_tick_count(),
            transition_time_ms: default_transition_time_ms(),
            easing: EasingProfile::default(),
            history_source: HistorySource::default(),
            orientation: OrientationKind::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets inner/outer band padding as fractions of the band step.
    #[must_use]
    pub fn with_band_padding(mut self, inner: f64, outer: f64) -> Self {
        self.band_padding_inner = inner;
        self.band_padding_outer = outer;
        self
    }

    #[must_use]
    pub fn with_key_axis_location(mut self, location: KeyAxisLocation) -> Self {
        self.key_axis_location = location;
        self
    }

    #[must_use]
    pub fn with_value_axis_location(mut self, location: ValueAxisLocation) -> Self {
        self.value_axis_location = location;
        self
    }

    #[must_use]
    pub fn with_value_tick_count(mut self, count: usize) -> Self {
        self.value_tick_count = count;
        self
    }

    /// Sets the transition time used by `update` when none is passed.
    #[must_use]
    pub fn with_transition_time_ms(mut self, transition_time_ms: f64) -> Self {
        self.transition_time_ms = transition_time_ms;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: EasingProfile) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_history_source(mut self, source: HistorySource) -> Self {
        self.history_source = source;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: OrientationKind) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn value_domain(self) -> ValueDomain {
        ValueDomain::new(self.value_min, self.value_max)
    }

    #[must_use]
    pub fn band_padding(self) -> BandPadding {
        BandPadding::new(self.band_padding_inner, self.band_padding_outer)
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.viewport.validate()?;
        self.margins.validate()?;
        self.value_domain().validate()?;
        self.band_padding().validate()?;
        if self.value_tick_count > MAX_VALUE_TICK_COUNT {
            return Err(ChartError::InvalidConfig(format!(
                "value tick count must be <= {MAX_VALUE_TICK_COUNT}"
            )));
        }
        if !self.transition_time_ms.is_finite() || self.transition_time_ms < 0.0 {
            return Err(ChartError::InvalidConfig(
                "transition time must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_band_padding_inner() -> f64 {
    BandPadding::default().inner
}

fn default_band_padding_outer() -> f64 {
    BandPadding::default().outer
}

fn default_value_tick_count() -> usize {
    5
}

fn default_transition_time_ms() -> f64 {
    1_000.0
}
