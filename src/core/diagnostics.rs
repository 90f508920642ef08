//! Non-fatal conditions raised while mapping and animating bars.
//!
//! Rendering never aborts on these. Each condition is logged through `tracing`
//! and collected so hosts and tests can inspect what happened during a pass.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Side of the value domain an out-of-range value fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainDirection {
    Below,
    Above,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartDiagnostic {
    /// Value was clamped to the nearest domain bound for display.
    ValueOutOfDomain {
        direction: DomainDirection,
        value: f64,
    },
    /// Point references a key outside the construction-time key set; skipped.
    UnknownKey { key: String },
    /// Point carries a NaN or infinite value; skipped.
    NonFiniteValue { key: String },
    /// Point carries a color channel outside `[0, 1]`; skipped.
    InvalidColor { key: String },
    /// `update` was called before `create`; nothing was rendered.
    NotYetCreated,
    /// `create` was called on an already created chart; nothing was rendered.
    AlreadyCreated,
    /// Requested transition time was negative or non-finite; default used.
    InvalidTransitionTime { requested: f64 },
}

/// Collector for the diagnostics of one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<ChartDiagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a condition and emits the matching `tracing` warning.
    pub fn report(&mut self, diagnostic: ChartDiagnostic) {
        match &diagnostic {
            ChartDiagnostic::ValueOutOfDomain { direction, value } => {
                warn!(?direction, value, "value outside value domain, clamped");
            }
            ChartDiagnostic::UnknownKey { key } => {
                warn!(key = %key, "skipping point with unknown key");
            }
            ChartDiagnostic::NonFiniteValue { key } => {
                warn!(key = %key, "skipping point with non-finite value");
            }
            ChartDiagnostic::InvalidColor { key } => {
                warn!(key = %key, "skipping point with invalid color");
            }
            ChartDiagnostic::NotYetCreated => {
                warn!("chart has not been created, ignoring update");
            }
            ChartDiagnostic::AlreadyCreated => {
                warn!("chart already created, ignoring create");
            }
            ChartDiagnostic::InvalidTransitionTime { requested } => {
                warn!(requested, "invalid transition time, using default");
            }
        }
        self.entries.push(diagnostic);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartDiagnostic> {
        self.entries.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ChartDiagnostic] {
        &self.entries
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<ChartDiagnostic> {
        self.entries
    }
}
