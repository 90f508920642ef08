//! Sign classification and time-split planning of bar transitions.
//!
//! A bar whose value keeps its sign animates in a single phase. A bar that
//! crosses zero first shrinks to the baseline and then grows on the other
//! side; each phase gets the share of the total duration that matches the
//! distance it covers, so the bar travels at a constant apparent speed
//! through the baseline.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// Sign bucket of a value. Zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 { Self::Pos } else { Self::Neg }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    PosToPos,
    NegToNeg,
    PosToNeg,
    NegToPos,
}

impl TransitionKind {
    #[must_use]
    pub fn from_signs(last: Sign, next: Sign) -> Self {
        match (last, next) {
            (Sign::Pos, Sign::Pos) => Self::PosToPos,
            (Sign::Neg, Sign::Neg) => Self::NegToNeg,
            (Sign::Pos, Sign::Neg) => Self::PosToNeg,
            (Sign::Neg, Sign::Pos) => Self::NegToPos,
        }
    }

    /// `true` when the bar passes through the baseline.
    #[must_use]
    pub fn crosses_zero(self) -> bool {
        matches!(self, Self::PosToNeg | Self::NegToPos)
    }
}

/// Classifies the move from `last_value` to `next_value` by sign.
#[must_use]
pub fn classify(last_value: f64, next_value: f64) -> TransitionKind {
    TransitionKind::from_signs(Sign::of(last_value), Sign::of(next_value))
}

/// Easing curve applied to normalized phase progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    /// Symmetric cubic in-out.
    #[default]
    Cubic,
    /// Accelerating cubic.
    CubicIn,
    /// Decelerating cubic.
    CubicOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Cubic => {
                let t = t * 2.0;
                if t <= 1.0 {
                    t * t * t / 2.0
                } else {
                    let t = t - 2.0;
                    (t * t * t + 2.0) / 2.0
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
        }
    }
}

/// Easing used for each phase shape of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasingProfile {
    /// Single-phase (same sign) transitions.
    pub settle: Easing,
    /// First half of a crossing: shrinking into the baseline.
    pub shrink: Easing,
    /// Second half of a crossing: growing out of the baseline.
    pub grow: Easing,
}

impl Default for EasingProfile {
    fn default() -> Self {
        Self {
            settle: Easing::Cubic,
            shrink: Easing::CubicIn,
            grow: Easing::CubicOut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionPhase {
    pub duration_ms: f64,
    pub duration_fraction: f64,
    pub start_value: f64,
    pub end_value: f64,
    pub easing: Easing,
    /// Which color the bar wears during this phase.
    pub sign: Sign,
}

impl TransitionPhase {
    #[must_use]
    pub fn value_at_progress(&self, t: f64) -> f64 {
        let eased = self.easing.apply(t);
        self.start_value + (self.end_value - self.start_value) * eased
    }
}

/// Per-bar animation plan for one update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionPlan {
    pub kind: TransitionKind,
    pub delay_ms: f64,
    pub phases: SmallVec<[TransitionPhase; 2]>,
}

impl TransitionPlan {
    #[must_use]
    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Sum of the phase durations, excluding the delay.
    #[must_use]
    pub fn total_duration_ms(&self) -> f64 {
        self.phases.iter().map(|phase| phase.duration_ms).sum()
    }

    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.phases.first().map_or(0.0, |phase| phase.start_value)
    }

    #[must_use]
    pub fn final_value(&self) -> f64 {
        self.phases.last().map_or(0.0, |phase| phase.end_value)
    }

    /// Value the bar shows `elapsed_ms` after the plan was handed over.
    ///
    /// Time before the delay reports the start value, time past the last
    /// phase reports the final value.
    #[must_use]
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let mut remaining = elapsed_ms - self.delay_ms;
        if remaining <= 0.0 {
            return self.start_value();
        }
        for phase in &self.phases {
            if remaining < phase.duration_ms {
                return phase.value_at_progress(remaining / phase.duration_ms);
            }
            remaining -= phase.duration_ms;
        }
        self.final_value()
    }

    /// Sign (color) the bar shows at `elapsed_ms`.
    #[must_use]
    pub fn sign_at(&self, elapsed_ms: f64) -> Sign {
        let mut remaining = elapsed_ms - self.delay_ms;
        for phase in &self.phases {
            if remaining < phase.duration_ms {
                return phase.sign;
            }
            remaining -= phase.duration_ms;
        }
        self.phases
            .last()
            .map_or_else(|| Sign::of(self.final_value()), |phase| phase.sign)
    }
}

/// Builds the transition plan from `last_value` to `next_value`.
///
/// Same-sign moves get one phase lasting `total_duration_ms`. Crossing moves
/// get a shrink phase to zero and a grow phase from zero whose durations are
/// split by the distance each covers; the two durations sum to the total.
#[must_use]
pub fn plan(
    last_value: f64,
    next_value: f64,
    total_duration_ms: f64,
    easing: EasingProfile,
) -> TransitionPlan {
    let kind = classify(last_value, next_value);
    let phases = match kind {
        TransitionKind::PosToPos | TransitionKind::NegToNeg => smallvec![TransitionPhase {
            duration_ms: total_duration_ms,
            duration_fraction: 1.0,
            start_value: last_value,
            end_value: next_value,
            easing: easing.settle,
            sign: Sign::of(next_value),
        }],
        TransitionKind::PosToNeg | TransitionKind::NegToPos => {
            // Opposite signs, so the distance is strictly positive.
            let distance = (last_value - next_value).abs();
            let shrink_fraction = last_value.abs() / distance;
            let grow_fraction = next_value.abs() / distance;
            smallvec![
                TransitionPhase {
                    duration_ms: total_duration_ms * shrink_fraction,
                    duration_fraction: shrink_fraction,
                    start_value: last_value,
                    end_value: 0.0,
                    easing: easing.shrink,
                    sign: Sign::of(last_value),
                },
                TransitionPhase {
                    duration_ms: total_duration_ms * grow_fraction,
                    duration_fraction: grow_fraction,
                    start_value: 0.0,
                    end_value: next_value,
                    easing: easing.grow,
                    sign: Sign::of(next_value),
                },
            ]
        }
    };

    TransitionPlan {
        kind,
        delay_ms: 0.0,
        phases,
    }
}
