use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::diagnostics::{ChartDiagnostic, Diagnostics, DomainDirection};
use crate::error::{ChartError, ChartResult};

/// Fixed value domain of one chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ChartError::InvalidConfig(
                "value domain bounds must be finite".to_owned(),
            ));
        }
        if self.min >= self.max {
            return Err(ChartError::InvalidConfig(format!(
                "value domain min ({}) must be < max ({})",
                self.min, self.max
            )));
        }
        Ok(self)
    }

    /// Clamps `value` into the domain, returning the side it was clamped from.
    #[must_use]
    pub fn clamp(self, value: f64) -> (f64, Option<DomainDirection>) {
        if value < self.min {
            (self.min, Some(DomainDirection::Below))
        } else if value > self.max {
            (self.max, Some(DomainDirection::Above))
        } else {
            (value, None)
        }
    }
}

/// Value axis: linear mapping of the domain onto the value-axis pixel range.
///
/// Out-of-domain input is clamped for display by
/// [`ValueScale::value_to_position_clamped`]; clamping is reported, never
/// treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain: ValueDomain,
    linear: LinearScale,
}

impl ValueScale {
    /// Builds the scale mapping `domain.min -> range.0` and `domain.max -> range.1`.
    pub fn new(domain: ValueDomain, range: (f64, f64)) -> ChartResult<Self> {
        let domain = domain.validate()?;
        let linear = LinearScale::new(domain.min, domain.max, range.0, range.1)?;
        Ok(Self { domain, linear })
    }

    #[must_use]
    pub fn domain(self) -> ValueDomain {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn value_to_position(self, value: f64) -> f64 {
        self.linear.map(value)
    }

    pub fn value_to_position_clamped(self, value: f64, diagnostics: &mut Diagnostics) -> f64 {
        let (clamped, direction) = self.domain.clamp(value);
        if let Some(direction) = direction {
            diagnostics.report(ChartDiagnostic::ValueOutOfDomain { direction, value });
        }
        self.linear.map(clamped)
    }

    /// Exact inverse of [`ValueScale::value_to_position`].
    #[must_use]
    pub fn position_to_value(self, position: f64) -> f64 {
        self.linear.invert(position)
    }

    /// Position of value `0`, which may lie outside the pixel range.
    #[must_use]
    pub fn baseline_position(self) -> f64 {
        self.linear.map(0.0)
    }
}
