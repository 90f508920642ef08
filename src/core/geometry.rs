use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Viewport;
use crate::core::band_scale::{BandPadding, BandScale};
use crate::core::diagnostics::Diagnostics;
use crate::core::orientation::{KeySpan, Orientation, ValueSpan};
use crate::core::transition::TransitionPlan;
use crate::core::value_scale::{ValueDomain, ValueScale};
use crate::error::ChartResult;

/// Pixel distance from the baseline below which a bar edge counts as on it.
const BASELINE_SNAP_PX: f64 = 1e-9;

/// Axis-aligned rectangle in plot-area pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RectBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectBounds {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Linear blend between `self` (`t = 0`) and `target` (`t = 1`).
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        let mix = |from: f64, to: f64| from + (to - from) * t;
        Self {
            x: mix(self.x, target.x),
            y: mix(self.y, target.y),
            width: mix(self.width, target.width),
            height: mix(self.height, target.height),
        }
    }
}

/// Turns `(key, value)` pairs into bar rectangles for one chart instance.
///
/// The band scale, the value scale and the orientation are fixed at
/// construction; only values flow through afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryEngine {
    orientation: Orientation,
    viewport: Viewport,
    bands: BandScale,
    values: ValueScale,
}

impl GeometryEngine {
    pub fn new<I, K>(
        orientation: Orientation,
        viewport: Viewport,
        keys: I,
        domain: ValueDomain,
        padding: BandPadding,
    ) -> ChartResult<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let viewport = viewport.validate()?;
        let bands = BandScale::new(keys, orientation.key_extent(viewport), padding)?;
        let values = ValueScale::new(domain, orientation.value_range(viewport))?;
        Ok(Self {
            orientation,
            viewport,
            bands,
            values,
        })
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn band_scale(&self) -> &BandScale {
        &self.bands
    }

    #[must_use]
    pub fn value_scale(&self) -> ValueScale {
        self.values
    }

    #[must_use]
    pub fn baseline_position(&self) -> f64 {
        self.values.baseline_position()
    }

    /// Value-axis span a bar of `value` covers: from the baseline to the
    /// clamped value position.
    pub fn value_span(&self, value: f64, diagnostics: &mut Diagnostics) -> ValueSpan {
        let baseline = self.values.baseline_position();
        let position = self.values.value_to_position_clamped(value, diagnostics);
        ValueSpan::between(baseline, position)
    }

    pub fn rect_for(
        &self,
        key: &str,
        value: f64,
        diagnostics: &mut Diagnostics,
    ) -> ChartResult<RectBounds> {
        let key_span = KeySpan {
            start: self.bands.band_position(key)?,
            width: self.bands.band_width(),
        };
        let value_span = self.value_span(value, diagnostics);
        Ok(self.orientation.compose(key_span, value_span))
    }

    /// Rectangle the bar occupies `elapsed_ms` into `plan`.
    pub fn rect_at(
        &self,
        key: &str,
        plan: &TransitionPlan,
        elapsed_ms: f64,
        diagnostics: &mut Diagnostics,
    ) -> ChartResult<RectBounds> {
        self.rect_for(key, plan.value_at(elapsed_ms), diagnostics)
    }

    /// Target rectangle at the end of every phase of `plan`.
    pub fn phase_targets(
        &self,
        key: &str,
        plan: &TransitionPlan,
        diagnostics: &mut Diagnostics,
    ) -> ChartResult<SmallVec<[RectBounds; 2]>> {
        plan.phases
            .iter()
            .map(|phase| self.rect_for(key, phase.end_value, diagnostics))
            .collect()
    }

    /// Reads a bar's value back from its rendered rectangle.
    ///
    /// Whichever value-axis edge lies farther from the baseline is the value
    /// end of the bar. A bar whose value end sits on the baseline reads back
    /// as exactly `0.0`, so it keeps classifying as positive.
    #[must_use]
    pub fn recover_value(&self, rect: RectBounds) -> f64 {
        let baseline = self.values.baseline_position();
        let (low_edge, high_edge) = self.orientation.value_edges(rect);
        let value_edge = if (low_edge - baseline).abs() > (high_edge - baseline).abs() {
            low_edge
        } else {
            high_edge
        };
        if (value_edge - baseline).abs() <= BASELINE_SNAP_PX {
            return 0.0;
        }
        self.values.position_to_value(value_edge)
    }
}
