use crate::analyzer::{binding_values, RiskAnalyzer, Tally};
use crate::error::ValidationError;
use crate::knowledge::obsolescence::{self, Obsolescence};
use crate::messages::MessageKey;
use crate::models::{Project, RiskCategory, RiskResult};

/// Flags components whose licenses lag behind the latest version of their
/// license family. An aged license is a maintenance liability: upstream
/// projects migrate away from it and relicensing pressure lands here.
pub struct ObsoleteComponentLicensesAnalyzer<'p> {
    project: &'p Project,
}

impl<'p> ObsoleteComponentLicensesAnalyzer<'p> {
    pub fn new(project: &'p Project) -> Self {
        ObsoleteComponentLicensesAnalyzer { project }
    }
}

impl RiskAnalyzer for ObsoleteComponentLicensesAnalyzer<'_> {
    fn category(&self) -> RiskCategory {
        RiskCategory::ObsoleteComponentLicenses
    }

    fn project(&self) -> &Project {
        self.project
    }

    fn compute_result(&self) -> Result<RiskResult, ValidationError> {
        let mut tally = Tally::new();
        let total_cases = self.project.bill().len() as f64;

        for binding in self.project.bill() {
            let classification = obsolescence::of(binding.license());
            let weight = binding.weight().value();
            match classification {
                Obsolescence::Updated => {
                    tally.good_thing(MessageKey::ComponentLicenseUpdated, binding_values(binding));
                }
                _ => {
                    tally.exposure += weight;
                    tally.impact += classification.value() * weight;
                    let mut values = binding_values(binding);
                    values.push(classification.to_string());
                    tally.root_cause(MessageKey::ComponentLicenseAging, values);
                }
            }
        }

        if tally.exposure > 0.0 {
            tally.tip(MessageKey::TipReplaceAgingComponents);
        }

        tally.finish(self.category(), total_cases, total_cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Component, ComponentBinding, LinkType, Redistribution, SupportedLicense, Weight,
    };

    fn binding(name: &str, license: SupportedLicense, weight: Weight) -> ComponentBinding {
        ComponentBinding::new(
            Component::new(name, "1.0", license).unwrap(),
            LinkType::Dynamic,
            weight,
        )
    }

    #[test]
    fn test_all_updated_means_zero_risk() {
        let project = Project::new(
            "demo",
            "1.0",
            SupportedLicense::Mit,
            Redistribution::SoftwarePackageOrSaas,
            binding("a", SupportedLicense::Mit, Weight::High),
        )
        .unwrap();

        let result = ObsoleteComponentLicensesAnalyzer::new(&project)
            .compute_result()
            .unwrap();
        assert_eq!(result.exposure(), 0.0);
        assert_eq!(result.impact(), 0.0);
        assert_eq!(result.root_causes().len(), 0);
        assert_eq!(result.good_things().len(), 1);
        assert_eq!(result.tips().len(), 0);
    }

    #[test]
    fn test_outdated_binding_raises_exposure() {
        let mut project = Project::new(
            "demo",
            "1.0",
            SupportedLicense::Mit,
            Redistribution::SoftwarePackageOrSaas,
            binding("a", SupportedLicense::Mit, Weight::High),
        )
        .unwrap();
        project.add_binding(binding("b", SupportedLicense::Gpl20Only, Weight::High));

        let result = ObsoleteComponentLicensesAnalyzer::new(&project)
            .compute_result()
            .unwrap();
        // GPL-2.0-only is forced Outdated: exposure 1/2, impact 1.0/2.
        assert_eq!(result.exposure(), 0.5);
        assert_eq!(result.impact(), 0.5);
        assert_eq!(result.root_causes().len(), 1);
        assert_eq!(
            result.root_causes()[0].key,
            MessageKey::ComponentLicenseAging
        );
        assert_eq!(result.tips().len(), 1);
    }

    #[test]
    fn test_weight_scales_exposure() {
        let mut project = Project::new(
            "demo",
            "1.0",
            SupportedLicense::Mit,
            Redistribution::SoftwarePackageOrSaas,
            binding("a", SupportedLicense::Mit, Weight::High),
        )
        .unwrap();
        project.add_binding(binding("b", SupportedLicense::Gpl20Only, Weight::Low));

        let result = ObsoleteComponentLicensesAnalyzer::new(&project)
            .compute_result()
            .unwrap();
        // Low weight is 0.01: exposure 0.01/2.
        assert_eq!(result.exposure(), 0.005);
    }

    #[test]
    fn test_compute_result_is_idempotent() {
        let project = Project::new(
            "demo",
            "1.0",
            SupportedLicense::Mit,
            Redistribution::SoftwarePackageOrSaas,
            binding("a", SupportedLicense::Apache20, Weight::NearHigh),
        )
        .unwrap();

        let analyzer = ObsoleteComponentLicensesAnalyzer::new(&project);
        assert_eq!(
            analyzer.compute_result().unwrap(),
            analyzer.compute_result().unwrap()
        );
    }
}
