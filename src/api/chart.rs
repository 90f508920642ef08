use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{
    AxisLayout, ChartDiagnostic, Diagnostics, GeometryEngine, Sign, TransitionPlan,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{BarDirective, PhaseDirective, PhasedTransition, RenderSurface, SurfaceLayout};

use super::planning::{PlanRequest, plan_requests};
use super::{ChartConfig, DataPoint, HistorySource, RenderReport};

/// Animated column chart bound to one render surface.
///
/// Scales are fixed at construction. `create` draws the initial snapshot
/// without animation; every `update` classifies, plans and hands phased
/// transitions to the surface.
pub struct ColumnChart<S: RenderSurface> {
    surface: S,
    config: ChartConfig,
    geometry: GeometryEngine,
    setup: Vec<DataPoint>,
    created: bool,
    last_values: IndexMap<String, f64>,
}

impl<S: RenderSurface> ColumnChart<S> {
    pub fn new(surface: S, data: Vec<DataPoint>, config: ChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        if data.is_empty() {
            return Err(ChartError::InvalidData(
                "chart needs at least one category".to_owned(),
            ));
        }
        if let Some(point) = data.iter().find(|point| !point.next_value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "initial value for `{}` must be finite",
                point.key
            )));
        }
        for point in &data {
            point.validate_colors()?;
        }

        let geometry = GeometryEngine::new(
            config.orientation.orientation(),
            config.viewport,
            data.iter().map(|point| point.key.clone()),
            config.value_domain(),
            config.band_padding(),
        )?;
        debug!(
            categories = data.len(),
            value_min = config.value_min,
            value_max = config.value_max,
            "constructed column chart"
        );

        Ok(Self {
            surface,
            config,
            geometry,
            setup: data,
            created: false,
            last_values: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartConfig {
        self.config
    }

    #[must_use]
    pub fn geometry(&self) -> &GeometryEngine {
        &self.geometry
    }

    #[must_use]
    pub fn is_created(&self) -> bool {
        self.created
    }

    /// Target value of the most recent render for `key`.
    #[must_use]
    pub fn last_value(&self, key: &str) -> Option<f64> {
        self.last_values.get(key).copied()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Draws the construction-time snapshot and the axes.
    ///
    /// A second call is ignored and reported as `AlreadyCreated`.
    pub fn create(&mut self) -> RenderReport {
        let mut diagnostics = Diagnostics::new();
        if self.created {
            diagnostics.report(ChartDiagnostic::AlreadyCreated);
            return finish(diagnostics, IndexMap::new());
        }

        self.surface.begin_frame(&SurfaceLayout::new(
            self.config.viewport,
            self.config.margins,
        ));

        let setup = std::mem::take(&mut self.setup);
        for point in &setup {
            self.draw_immediate(point, &mut diagnostics);
        }
        self.setup = setup;

        let axes = AxisLayout::resolve(
            &self.geometry,
            self.config.key_axis_location,
            self.config.value_axis_location,
            self.config.value_tick_count,
        );
        self.surface.apply_axes(&axes);
        self.created = true;
        debug!(bars = self.last_values.len(), "created column chart");

        finish(diagnostics, IndexMap::new())
    }

    /// Animates to `next` using the configured transition time.
    pub fn update(&mut self, next: Vec<DataPoint>) -> RenderReport {
        self.update_with_transition_time(next, self.config.transition_time_ms)
    }

    pub fn update_with_transition_time(
        &mut self,
        next: Vec<DataPoint>,
        transition_time_ms: f64,
    ) -> RenderReport {
        let mut diagnostics = Diagnostics::new();
        if !self.created {
            diagnostics.report(ChartDiagnostic::NotYetCreated);
            return finish(diagnostics, IndexMap::new());
        }

        let transition_time_ms = if transition_time_ms.is_finite() && transition_time_ms >= 0.0 {
            transition_time_ms
        } else {
            diagnostics.report(ChartDiagnostic::InvalidTransitionTime {
                requested: transition_time_ms,
            });
            self.config.transition_time_ms
        };

        let mut accepted: IndexMap<String, DataPoint> = IndexMap::with_capacity(next.len());
        for point in next {
            if !self.geometry.band_scale().contains(&point.key) {
                diagnostics.report(ChartDiagnostic::UnknownKey { key: point.key });
                continue;
            }
            if !point.next_value.is_finite() {
                diagnostics.report(ChartDiagnostic::NonFiniteValue { key: point.key });
                continue;
            }
            if point.validate_colors().is_err() {
                diagnostics.report(ChartDiagnostic::InvalidColor { key: point.key });
                continue;
            }
            accepted.insert(point.key.clone(), point);
        }

        let mut requests = Vec::with_capacity(accepted.len());
        for (key, mut point) in accepted {
            if !point.delay_ms.is_finite() || point.delay_ms < 0.0 {
                point.delay_ms = 0.0;
            }
            match self.previous_value(&key) {
                Some(last_value) => requests.push(PlanRequest { point, last_value }),
                // Nothing rendered yet for this bar: draw it in place.
                None => self.draw_immediate(&point, &mut diagnostics),
            }
        }

        let plans = plan_requests(&requests, transition_time_ms, self.config.easing);
        let mut report_plans = IndexMap::with_capacity(plans.len());
        for (request, plan) in requests.into_iter().zip(plans) {
            let key = request.point.key.as_str();
            let targets = match self.geometry.phase_targets(key, &plan, &mut diagnostics) {
                Ok(targets) => targets,
                Err(_) => {
                    diagnostics.report(ChartDiagnostic::UnknownKey {
                        key: key.to_owned(),
                    });
                    continue;
                }
            };

            let phases = plan
                .phases
                .iter()
                .zip(targets)
                .map(|(phase, target)| PhaseDirective {
                    duration_ms: phase.duration_ms,
                    easing: phase.easing,
                    target,
                    color: request.point.color_for(phase.sign),
                })
                .collect();
            self.surface.apply_bar(
                key,
                BarDirective::Transition(PhasedTransition {
                    delay_ms: plan.delay_ms,
                    phases,
                }),
            );
            trace!(
                key,
                kind = ?plan.kind,
                last_value = request.last_value,
                next_value = request.point.next_value,
                "scheduled bar transition"
            );

            self.last_values
                .insert(request.point.key.clone(), request.point.next_value);
            report_plans.insert(request.point.key, plan);
        }

        debug!(
            planned = report_plans.len(),
            diagnostics = diagnostics.len(),
            transition_time_ms,
            "updated column chart"
        );
        finish(diagnostics, report_plans)
    }

    fn previous_value(&self, key: &str) -> Option<f64> {
        let retained = self.last_values.get(key).copied();
        match self.config.history_source {
            HistorySource::RenderedGeometry => self
                .surface
                .current_rect(key)
                .map(|rect| self.geometry.recover_value(rect))
                .filter(|value| value.is_finite())
                .or(retained),
            HistorySource::Retained => retained,
        }
    }

    fn draw_immediate(&mut self, point: &DataPoint, diagnostics: &mut Diagnostics) {
        match self.geometry.rect_for(&point.key, point.next_value, diagnostics) {
            Ok(rect) => {
                let color = point.color_for(Sign::of(point.next_value));
                self.surface
                    .apply_bar(&point.key, BarDirective::Immediate { rect, color });
                self.last_values.insert(point.key.clone(), point.next_value);
            }
            Err(_) => diagnostics.report(ChartDiagnostic::UnknownKey {
                key: point.key.clone(),
            }),
        }
    }
}

fn finish(diagnostics: Diagnostics, plans: IndexMap<String, TransitionPlan>) -> RenderReport {
    RenderReport {
        diagnostics: diagnostics.into_vec(),
        plans,
    }
}
