use indexmap::IndexMap;

use crate::core::{AxisLayout, RectBounds};
use crate::render::{BarDirective, Color, RenderSurface, SurfaceLayout};

/// Bar state as last handed to the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedBar {
    /// Geometry shown when the directive arrived.
    pub origin: RectBounds,
    pub origin_color: Color,
    /// Surface clock value when the directive arrived.
    pub started_at_ms: f64,
    pub directive: BarDirective,
}

impl RecordedBar {
    fn sample(&self, clock_ms: f64) -> (RectBounds, Color) {
        match &self.directive {
            BarDirective::Immediate { rect, color } => (*rect, *color),
            BarDirective::Transition(transition) => {
                transition.sample(self.origin, self.origin_color, clock_ms - self.started_at_ms)
            }
        }
    }
}

/// Headless surface used by tests and by hosts that inspect directives.
///
/// Playback is simulated on a clock the caller advances explicitly, so
/// `current_rect` reports mid-animation geometry the way a real backend would.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    clock_ms: f64,
    layout: Option<SurfaceLayout>,
    axes: Option<AxisLayout>,
    bars: IndexMap<String, RecordedBar>,
    history: Vec<(String, BarDirective)>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn advance(&mut self, elapsed_ms: f64) {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.clock_ms += elapsed_ms;
        }
    }

    /// Moves the clock past every running transition and settles each bar on
    /// its final rectangle and fill.
    pub fn finish_all(&mut self) {
        let mut end = self.clock_ms;
        for bar in self.bars.values_mut() {
            let BarDirective::Transition(transition) = &bar.directive else {
                continue;
            };
            end = end.max(bar.started_at_ms + transition.delay_ms + transition.total_duration_ms());
            let rect = transition.final_rect().unwrap_or(bar.origin);
            let color = transition
                .phases
                .last()
                .map_or(bar.origin_color, |phase| phase.color);
            bar.directive = BarDirective::Immediate { rect, color };
        }
        self.clock_ms = end;
    }

    #[must_use]
    pub fn layout(&self) -> Option<&SurfaceLayout> {
        self.layout.as_ref()
    }

    #[must_use]
    pub fn axes(&self) -> Option<&AxisLayout> {
        self.axes.as_ref()
    }

    #[must_use]
    pub fn bar(&self, key: &str) -> Option<&RecordedBar> {
        self.bars.get(key)
    }

    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn current_color(&self, key: &str) -> Option<Color> {
        self.bars.get(key).map(|bar| bar.sample(self.clock_ms).1)
    }

    /// Every directive received, oldest first.
    #[must_use]
    pub fn history(&self) -> &[(String, BarDirective)] {
        &self.history
    }

    /// Overwrites a bar's displayed rectangle, as an external edit would.
    pub fn override_rect(&mut self, key: &str, rect: RectBounds) {
        if let Some(bar) = self.bars.get_mut(key) {
            let color = bar.sample(self.clock_ms).1;
            bar.directive = BarDirective::Immediate { rect, color };
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn begin_frame(&mut self, layout: &SurfaceLayout) {
        self.layout = Some(*layout);
    }

    fn apply_bar(&mut self, key: &str, directive: BarDirective) {
        let (origin, origin_color) = match (&directive, self.bars.get(key)) {
            (_, Some(bar)) => bar.sample(self.clock_ms),
            (BarDirective::Immediate { rect, color }, None) => (*rect, *color),
            (BarDirective::Transition(transition), None) => {
                let color = transition
                    .phases
                    .first()
                    .map_or(Color::rgb(0.0, 0.0, 0.0), |phase| phase.color);
                (RectBounds::default(), color)
            }
        };

        self.history.push((key.to_owned(), directive.clone()));
        self.bars.insert(
            key.to_owned(),
            RecordedBar {
                origin,
                origin_color,
                started_at_ms: self.clock_ms,
                directive,
            },
        );
    }

    fn apply_axes(&mut self, axes: &AxisLayout) {
        self.axes = Some(axes.clone());
    }

    fn current_rect(&self, key: &str) -> Option<RectBounds> {
        self.bars.get(key).map(|bar| bar.sample(self.clock_ms).0)
    }
}
