use serde::{Deserialize, Serialize};

use crate::core::Sign;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DEFAULT_NEGATIVE_COLOR, DEFAULT_POSITIVE_COLOR};

/// One category value of a snapshot.
///
/// The previous value is never supplied by the caller; the chart recovers it
/// from the rendered bar or from its own history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub key: String,
    pub next_value: f64,
    #[serde(default)]
    pub delay_ms: f64,
    #[serde(default = "default_pos_color")]
    pub pos_color: Color,
    #[serde(default = "default_neg_color")]
    pub neg_color: Color,
}

impl DataPoint {
    #[must_use]
    pub fn new(key: impl Into<String>, next_value: f64) -> Self {
        Self {
            key: key.into(),
            next_value,
            delay_ms: 0.0,
            pos_color: DEFAULT_POSITIVE_COLOR,
            neg_color: DEFAULT_NEGATIVE_COLOR,
        }
    }

    /// Sets the offset before this bar's transition starts.
    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, pos_color: Color, neg_color: Color) -> Self {
        self.pos_color = pos_color;
        self.neg_color = neg_color;
        self
    }

    /// Checks both fills; the error names the offending key.
    pub fn validate_colors(&self) -> ChartResult<()> {
        self.pos_color
            .validate()
            .and_then(|()| self.neg_color.validate())
            .map_err(|err| ChartError::InvalidData(format!("point `{}`: {err}", self.key)))
    }

    /// Fill for a bar currently on the given side of the baseline.
    #[must_use]
    pub fn color_for(&self, sign: Sign) -> Color {
        match sign {
            Sign::Pos => self.pos_color,
            Sign::Neg => self.neg_color,
        }
    }
}

fn default_pos_color() -> Color {
    DEFAULT_POSITIVE_COLOR
}

fn default_neg_color() -> Color {
    DEFAULT_NEGATIVE_COLOR
}
