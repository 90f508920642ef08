use serde::{Deserialize, Serialize};

use crate::core::geometry::GeometryEngine;

/// Where the key axis line sits along the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum KeyAxisLocation {
    /// At the position of the domain minimum.
    #[default]
    Min,
    /// On the baseline (value `0`).
    Zero,
    /// At the position of the domain maximum.
    Max,
}

/// Where the value axis line sits along the key axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValueAxisLocation {
    #[default]
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyTick {
    pub key: String,
    pub position: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueTick {
    pub value: f64,
    pub position: f64,
}

/// Resolved axis decoration input handed to the render surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub key_location: KeyAxisLocation,
    pub value_location: ValueAxisLocation,
    /// Value-axis coordinate of the key axis line.
    pub key_axis_offset: f64,
    /// Key-axis coordinate of the value axis line.
    pub value_axis_offset: f64,
    pub key_ticks: Vec<KeyTick>,
    pub value_ticks: Vec<ValueTick>,
}

impl AxisLayout {
    #[must_use]
    pub fn resolve(
        geometry: &GeometryEngine,
        key_location: KeyAxisLocation,
        value_location: ValueAxisLocation,
        value_tick_count: usize,
    ) -> Self {
        let values = geometry.value_scale();
        let domain = values.domain();
        let key_axis_offset = match key_location {
            KeyAxisLocation::Min => values.value_to_position(domain.min),
            KeyAxisLocation::Zero => values.baseline_position(),
            KeyAxisLocation::Max => values.value_to_position(domain.max),
        };
        let value_axis_offset = match value_location {
            ValueAxisLocation::Start => 0.0,
            ValueAxisLocation::End => geometry.band_scale().extent(),
        };

        let bands = geometry.band_scale();
        let key_ticks = bands
            .keys()
            .filter_map(|key| {
                bands.band_center(key).ok().map(|position| KeyTick {
                    key: key.to_owned(),
                    position,
                })
            })
            .collect();
        let value_ticks = nice_ticks(domain.min, domain.max, value_tick_count)
            .into_iter()
            .map(|value| ValueTick {
                value,
                position: values.value_to_position(value),
            })
            .collect();

        Self {
            key_location,
            value_location,
            key_axis_offset,
            value_axis_offset,
            key_ticks,
            value_ticks,
        }
    }
}

/// Upper bound on requested value ticks; larger requests are capped.
pub const MAX_VALUE_TICK_COUNT: usize = 1_000;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Round tick values covering `[start, stop]`, roughly `count` of them.
///
/// Steps are 1, 2 or 5 times a power of ten. Negative-power steps are kept
/// as their reciprocal so ticks like `0.3` come out exact.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let (low, high, reversed) = if stop < start {
        (stop, start, true)
    } else {
        (start, stop, false)
    };

    let raw_step = (high - low) / count.min(MAX_VALUE_TICK_COUNT) as f64;
    let power = raw_step.log10().floor();
    let error = raw_step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    // Tick indices stay in f64; an integer cast saturates on huge domains.
    let (scale, reciprocal) = if power >= 0.0 {
        (factor * 10f64.powf(power), false)
    } else {
        (10f64.powf(-power) / factor, true)
    };
    let to_index = |value: f64| if reciprocal { value * scale } else { value / scale };
    let to_value = |index: f64| if reciprocal { index / scale } else { index * scale };

    let first = to_index(low).ceil();
    let last = to_index(high).floor();
    if !first.is_finite() || !last.is_finite() || last < first {
        return Vec::new();
    }

    let span = last - first;
    if span > (2 * MAX_VALUE_TICK_COUNT) as f64 {
        return Vec::new();
    }
    let mut ticks: Vec<f64> = (0..=span as usize)
        .map(|offset| to_value(first + offset as f64))
        .collect();

    if reversed {
        ticks.reverse();
    }
    ticks
}
