//! The risk analyzer family: one independently pluggable unit per risk
//! category. Every analyzer is bound to one [`Project`] for its lifetime and
//! recomputes its [`RiskResult`] from scratch on each call, accumulating
//! exposure, impact and the four explanation lists over one pass and
//! normalizing at the end.

pub mod component_headroom;
pub mod component_obsolescence;
pub mod component_spreading;
pub mod component_trend;
pub mod heterogeneity;
pub mod incompatibility;
pub mod misalignment;
pub mod project_headroom;
pub mod project_licenses;

use crate::error::ValidationError;
use crate::messages::{Explanation, MessageKey};
use crate::models::{ComponentBinding, Project, RiskCategory, RiskResult};

/// One risk category's analysis unit.
///
/// `compute_result` is idempotent and side-effect-free on the project: it
/// may be invoked repeatedly and always recomputes from scratch. The only
/// failure path is the final score validation, which well-formed projects
/// never trigger.
pub trait RiskAnalyzer {
    fn category(&self) -> RiskCategory;

    /// The project this analyzer was bound to at construction.
    fn project(&self) -> &Project;

    fn compute_result(&self) -> Result<RiskResult, ValidationError>;
}

/// Running sums and explanation lists for one analysis pass.
///
/// Explanations are appended in iteration order: over bindings first, then
/// over project licenses where a nested loop applies.
pub(crate) struct Tally {
    pub exposure: f64,
    pub impact: f64,
    root_causes: Vec<Explanation>,
    warnings: Vec<Explanation>,
    good_things: Vec<Explanation>,
    tips: Vec<Explanation>,
}

impl Tally {
    pub fn new() -> Self {
        Tally {
            exposure: 0.0,
            impact: 0.0,
            root_causes: Vec::new(),
            warnings: Vec::new(),
            good_things: Vec::new(),
            tips: Vec::new(),
        }
    }

    pub fn root_cause(&mut self, key: MessageKey, values: Vec<String>) {
        self.root_causes.push(Explanation::new(key, values));
    }

    pub fn warning(&mut self, key: MessageKey, values: Vec<String>) {
        self.warnings.push(Explanation::new(key, values));
    }

    pub fn good_thing(&mut self, key: MessageKey, values: Vec<String>) {
        self.good_things.push(Explanation::new(key, values));
    }

    pub fn tip(&mut self, key: MessageKey) {
        self.tips.push(Explanation::bare(key));
    }

    /// Normalize the running sums by their category-specific divisors and
    /// seal the result.
    pub fn finish(
        self,
        category: RiskCategory,
        exposure_divisor: f64,
        impact_divisor: f64,
    ) -> Result<RiskResult, ValidationError> {
        RiskResult::new(
            category,
            self.exposure / exposure_divisor,
            self.impact / impact_divisor,
            self.root_causes,
            self.warnings,
            self.good_things,
            self.tips,
        )
    }
}

/// The values every binding-level explanation starts with: component name,
/// component version, component license.
pub(crate) fn binding_values(binding: &ComponentBinding) -> Vec<String> {
    vec![
        binding.component().name().to_string(),
        binding.component().version().to_string(),
        binding.license().to_string(),
    ]
}
