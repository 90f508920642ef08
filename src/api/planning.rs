#[cfg(feature = "parallel-planning")]
use rayon::prelude::*;

use crate::core::{EasingProfile, TransitionPlan, plan};

use super::DataPoint;

/// A validated point paired with the value its bar currently shows.
#[derive(Debug, Clone)]
pub(super) struct PlanRequest {
    pub point: DataPoint,
    pub last_value: f64,
}

/// Plans every requested bar; plans are independent of each other.
pub(super) fn plan_requests(
    requests: &[PlanRequest],
    transition_time_ms: f64,
    easing: EasingProfile,
) -> Vec<TransitionPlan> {
    let plan_one = |request: &PlanRequest| {
        plan(
            request.last_value,
            request.point.next_value,
            transition_time_ms,
            easing,
        )
        .with_delay(request.point.delay_ms)
    };

    #[cfg(feature = "parallel-planning")]
    {
        requests.par_iter().map(plan_one).collect()
    }

    #[cfg(not(feature = "parallel-planning"))]
    {
        requests.iter().map(plan_one).collect()
    }
}
