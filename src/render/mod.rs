mod directive;
mod primitives;
mod recording_surface;

pub use directive::{BarDirective, PhaseDirective, PhasedTransition, SurfaceLayout};
pub use primitives::{Color, DEFAULT_NEGATIVE_COLOR, DEFAULT_POSITIVE_COLOR};
pub use recording_surface::{RecordedBar, RecordingSurface};

use crate::core::{AxisLayout, RectBounds};

/// Contract implemented by any drawing backend.
///
/// The chart hands over fully resolved geometry, colors and timing. The
/// surface owns element creation and transition playback, and reports back
/// what it currently shows so an update can start from in-flight geometry.
pub trait RenderSurface {
    /// Called once before the first bars are drawn.
    fn begin_frame(&mut self, layout: &SurfaceLayout);

    fn apply_bar(&mut self, key: &str, directive: BarDirective);

    fn apply_axes(&mut self, axes: &AxisLayout);

    /// Rectangle currently displayed for `key`, mid-animation included.
    fn current_rect(&self, key: &str) -> Option<RectBounds>;
}
