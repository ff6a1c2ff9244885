use crate::analyzer::{binding_values, RiskAnalyzer, Tally};
use crate::error::ValidationError;
use crate::knowledge::trend::{self, Trend};
use crate::messages::MessageKey;
use crate::models::{Project, RiskCategory, RiskResult};

/// Flags components whose licenses are losing real-world adoption. A
/// shrinking license community means fewer compatible replacements when a
/// component has to be swapped out.
pub struct UnfashionableComponentLicensesAnalyzer<'p> {
    project: &'p Project,
}

impl<'p> UnfashionableComponentLicensesAnalyzer<'p> {
    pub fn new(project: &'p Project) -> Self {
        UnfashionableComponentLicensesAnalyzer { project }
    }
}

impl RiskAnalyzer for UnfashionableComponentLicensesAnalyzer<'_> {
    fn category(&self) -> RiskCategory {
        RiskCategory::UnfashionableComponentLicenses
    }

    fn project(&self) -> &Project {
        self.project
    }

    fn compute_result(&self) -> Result<RiskResult, ValidationError> {
        let mut tally = Tally::new();
        let total_cases = self.project.bill().len() as f64;

        for binding in self.project.bill() {
            let classification = trend::of(binding.license());
            let weight = binding.weight().value();
            match classification {
                Trend::Trendy => {
                    tally.good_thing(MessageKey::ComponentLicenseTrendy, binding_values(binding));
                }
                _ => {
                    tally.exposure += weight;
                    tally.impact += classification.value() * weight;
                    let mut values = binding_values(binding);
                    values.push(classification.to_string());
                    tally.root_cause(MessageKey::ComponentLicenseUnfashionable, values);
                }
            }
        }

        if tally.exposure > 0.0 {
            tally.tip(MessageKey::TipPreferTrendyLicenses);
        }

        tally.finish(self.category(), total_cases, total_cases)
    }
}
