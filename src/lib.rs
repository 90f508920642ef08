//! column-chart-rs: geometry and transition engine for animated column charts.
//!
//! The crate maps `(category, value)` snapshots to rectangle geometry under a
//! fixed value domain and plans the animation between snapshots. Bars that
//! cross zero are split into a shrink phase and a grow phase whose durations
//! are proportional to the distance traveled on each side of the baseline.
//! Drawing is delegated to a [`render::RenderSurface`] implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ColumnChart, RenderReport};
pub use error::{ChartError, ChartResult};
