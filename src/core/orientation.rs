use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::core::geometry::RectBounds;

/// Band occupied by one category along the key axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeySpan {
    pub start: f64,
    pub width: f64,
}

/// Ordered pixel interval along the value axis (`start <= end`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueSpan {
    pub start: f64,
    pub end: f64,
}

impl ValueSpan {
    /// Span between two value-axis positions, whichever order they come in.
    #[must_use]
    pub fn between(a: f64, b: f64) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.end - self.start
    }
}

/// Serializable selector for the built-in orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrientationKind {
    /// Keys along x, values grow upwards.
    #[default]
    Column,
    /// Keys along y, values grow to the right.
    Row,
}

impl OrientationKind {
    #[must_use]
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Column => Orientation::COLUMN,
            Self::Row => Orientation::ROW,
        }
    }
}

/// Orientation-specific functions injected into the geometry engine.
///
/// The engine only ever speaks in key spans and value spans; this table
/// decides which screen axis each one lands on.
#[derive(Debug, Clone, Copy)]
pub struct Orientation {
    pub kind: OrientationKind,
    key_extent: fn(Viewport) -> f64,
    value_range: fn(Viewport) -> (f64, f64),
    compose: fn(KeySpan, ValueSpan) -> RectBounds,
    value_edges: fn(RectBounds) -> (f64, f64),
}

impl Orientation {
    pub const COLUMN: Self = Self {
        kind: OrientationKind::Column,
        key_extent: |viewport| f64::from(viewport.width),
        value_range: |viewport| (f64::from(viewport.height), 0.0),
        compose: |key, value| RectBounds {
            x: key.start,
            y: value.start,
            width: key.width,
            height: value.length(),
        },
        value_edges: |rect| (rect.y, rect.y + rect.height),
    };

    pub const ROW: Self = Self {
        kind: OrientationKind::Row,
        key_extent: |viewport| f64::from(viewport.height),
        value_range: |viewport| (0.0, f64::from(viewport.width)),
        compose: |key, value| RectBounds {
            x: value.start,
            y: key.start,
            width: value.length(),
            height: key.width,
        },
        value_edges: |rect| (rect.x, rect.x + rect.width),
    };

    /// Pixel length available to the key (band) axis.
    #[must_use]
    pub fn key_extent(&self, viewport: Viewport) -> f64 {
        (self.key_extent)(viewport)
    }

    /// Pixel positions of `(value_min, value_max)` on the value axis.
    #[must_use]
    pub fn value_range(&self, viewport: Viewport) -> (f64, f64) {
        (self.value_range)(viewport)
    }

    #[must_use]
    pub fn compose(&self, key: KeySpan, value: ValueSpan) -> RectBounds {
        (self.compose)(key, value)
    }

    /// Both value-axis edges of a rendered rectangle, low coordinate first.
    #[must_use]
    pub fn value_edges(&self, rect: RectBounds) -> (f64, f64) {
        (self.value_edges)(rect)
    }
}

impl PartialEq for Orientation {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}
