pub mod axis;
pub mod band_scale;
pub mod diagnostics;
pub mod geometry;
pub mod orientation;
pub mod scale;
pub mod transition;
pub mod types;
pub mod value_scale;

pub use axis::{
    AxisLayout, KeyAxisLocation, KeyTick, MAX_VALUE_TICK_COUNT, ValueAxisLocation, ValueTick,
    nice_ticks,
};
pub use band_scale::{BandPadding, BandScale};
pub use diagnostics::{ChartDiagnostic, Diagnostics, DomainDirection};
pub use geometry::{GeometryEngine, RectBounds};
pub use orientation::{KeySpan, Orientation, OrientationKind, ValueSpan};
pub use scale::LinearScale;
pub use transition::{
    Easing, EasingProfile, Sign, TransitionKind, TransitionPhase, TransitionPlan, classify, plan,
};
pub use types::{Margins, Viewport};
pub use value_scale::{ValueDomain, ValueScale};
