use crate::analyzer::{binding_values, RiskAnalyzer, Tally};
use crate::error::ValidationError;
use crate::messages::MessageKey;
use crate::models::{Project, RiskCategory, RiskResult};

/// Flags components whose license is simply *different* from a project
/// license, regardless of compatibility. Even a compatible mix multiplies
/// the obligations to track; a bill aligned with the project licenses is
/// cheaper to audit and to relicense.
pub struct MisalignedComponentLicensesAnalyzer<'p> {
    project: &'p Project,
}

impl<'p> MisalignedComponentLicensesAnalyzer<'p> {
    pub fn new(project: &'p Project) -> Self {
        MisalignedComponentLicensesAnalyzer { project }
    }
}

impl RiskAnalyzer for MisalignedComponentLicensesAnalyzer<'_> {
    fn category(&self) -> RiskCategory {
        RiskCategory::MisalignedComponentLicenses
    }

    fn project(&self) -> &Project {
        self.project
    }

    fn compute_result(&self) -> Result<RiskResult, ValidationError> {
        let mut tally = Tally::new();
        let bill = self.project.bill();
        let licenses = self.project.licenses();
        let total_pairs = (bill.len() * licenses.len()) as f64;
        // Every binding is paired against every project license, so the
        // weight pool is the bill's weight sum times the license count.
        let total_weight: f64 =
            bill.iter().map(|b| b.weight().value()).sum::<f64>() * licenses.len() as f64;

        if licenses.len() > 1 {
            tally.warning(MessageKey::ProjectIsMultiLicensed, Vec::new());
        }

        for binding in bill {
            for &project_license in licenses {
                let mut values = binding_values(binding);
                values.push(project_license.to_string());
                if binding.license() == project_license {
                    tally.good_thing(MessageKey::ComponentAligned, values);
                } else {
                    tally.exposure += 1.0;
                    tally.impact += binding.weight().value();
                    tally.root_cause(MessageKey::ComponentMisaligned, values);
                }
            }
        }

        if tally.exposure > 0.0 {
            tally.tip(MessageKey::TipAlignComponentLicenses);
        }

        tally.finish(self.category(), total_pairs, total_weight)
    }
}
