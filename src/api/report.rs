use indexmap::IndexMap;

use crate::core::{ChartDiagnostic, TransitionKind, TransitionPlan};

/// Outcome of one `create`/`update` pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    pub diagnostics: Vec<ChartDiagnostic>,
    /// Plans handed to the surface, keyed by category. Bars drawn without
    /// animation have no entry.
    pub plans: IndexMap<String, TransitionPlan>,
}

impl RenderReport {
    #[must_use]
    pub fn plan(&self, key: &str) -> Option<&TransitionPlan> {
        self.plans.get(key)
    }

    #[must_use]
    pub fn kind(&self, key: &str) -> Option<TransitionKind> {
        self.plans.get(key).map(|plan| plan.kind)
    }

    /// `true` when the pass raised no diagnostics.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics_matching<'a, F>(
        &'a self,
        predicate: F,
    ) -> impl Iterator<Item = &'a ChartDiagnostic>
    where
        F: Fn(&ChartDiagnostic) -> bool + 'a,
    {
        self.diagnostics.iter().filter(move |d| predicate(d))
    }
}
