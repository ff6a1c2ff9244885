use crate::analyzer::{binding_values, RiskAnalyzer, Tally};
use crate::error::ValidationError;
use crate::knowledge::spreading::{self, Spreading};
use crate::messages::MessageKey;
use crate::models::{Project, RiskCategory, RiskResult};

/// Flags components under licenses that few other projects use. A niche
/// license has less settled interpretation and a smaller pool of components
/// to substitute from.
pub struct ScarcelySpreadComponentLicensesAnalyzer<'p> {
    project: &'p Project,
}

impl<'p> ScarcelySpreadComponentLicensesAnalyzer<'p> {
    pub fn new(project: &'p Project) -> Self {
        ScarcelySpreadComponentLicensesAnalyzer { project }
    }
}

impl RiskAnalyzer for ScarcelySpreadComponentLicensesAnalyzer<'_> {
    fn category(&self) -> RiskCategory {
        RiskCategory::ScarcelySpreadComponentLicenses
    }

    fn project(&self) -> &Project {
        self.project
    }

    fn compute_result(&self) -> Result<RiskResult, ValidationError> {
        let mut tally = Tally::new();
        let total_cases = self.project.bill().len() as f64;

        for binding in self.project.bill() {
            let classification = spreading::of(binding.license());
            let weight = binding.weight().value();
            match classification {
                Spreading::HighlyWidespread => {
                    tally.good_thing(
                        MessageKey::ComponentLicenseWidespread,
                        binding_values(binding),
                    );
                }
                _ => {
                    tally.exposure += weight;
                    tally.impact += classification.value() * weight;
                    let mut values = binding_values(binding);
                    values.push(classification.to_string());
                    tally.root_cause(MessageKey::ComponentLicenseNiche, values);
                }
            }
        }

        if tally.exposure > 0.0 {
            tally.tip(MessageKey::TipPreferWidespreadLicenses);
        }

        tally.finish(self.category(), total_cases, total_cases)
    }
}
