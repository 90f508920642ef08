use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Easing, Margins, RectBounds, Viewport};
use crate::render::Color;

/// Overall surface size and where the plot area sits inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceLayout {
    pub outer_width: f64,
    pub outer_height: f64,
    pub plot_origin_x: f64,
    pub plot_origin_y: f64,
    pub plot: Viewport,
}

impl SurfaceLayout {
    #[must_use]
    pub fn new(plot: Viewport, margins: Margins) -> Self {
        Self {
            outer_width: f64::from(plot.width) + margins.left + margins.right,
            outer_height: f64::from(plot.height) + margins.top + margins.bottom,
            plot_origin_x: margins.left,
            plot_origin_y: margins.top,
            plot,
        }
    }
}

/// One leg of an animated bar: move to `target` over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseDirective {
    pub duration_ms: f64,
    pub easing: Easing,
    pub target: RectBounds,
    pub color: Color,
}

/// Chained phases played back-to-back after `delay_ms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhasedTransition {
    pub delay_ms: f64,
    pub phases: SmallVec<[PhaseDirective; 2]>,
}

impl PhasedTransition {
    #[must_use]
    pub fn total_duration_ms(&self) -> f64 {
        self.phases.iter().map(|phase| phase.duration_ms).sum()
    }

    #[must_use]
    pub fn final_rect(&self) -> Option<RectBounds> {
        self.phases.last().map(|phase| phase.target)
    }

    /// Rectangle and fill `elapsed_ms` after playback started from `origin`.
    #[must_use]
    pub fn sample(
        &self,
        origin: RectBounds,
        origin_color: Color,
        elapsed_ms: f64,
    ) -> (RectBounds, Color) {
        let mut remaining = elapsed_ms - self.delay_ms;
        if remaining <= 0.0 {
            return (origin, origin_color);
        }

        let mut from = origin;
        for phase in &self.phases {
            if remaining < phase.duration_ms {
                let t = phase.easing.apply(remaining / phase.duration_ms);
                return (from.lerp(phase.target, t), phase.color);
            }
            remaining -= phase.duration_ms;
            from = phase.target;
        }

        let color = self.phases.last().map_or(origin_color, |phase| phase.color);
        (from, color)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BarDirective {
    /// Set geometry and fill without animation.
    Immediate { rect: RectBounds, color: Color },
    Transition(PhasedTransition),
}
