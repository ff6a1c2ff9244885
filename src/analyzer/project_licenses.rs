use crate::analyzer::{RiskAnalyzer, Tally};
use crate::error::ValidationError;
use crate::knowledge::obsolescence::{self, Obsolescence};
use crate::knowledge::spreading::{self, Spreading};
use crate::knowledge::trend::{self, Trend};
use crate::messages::MessageKey;
use crate::models::{Project, RiskCategory, RiskResult};

/// Rates the project's own licenses on the three ordinal scales at once:
/// obsolescence, trend and spreading. Project licenses carry no binding
/// weight; each declared license counts the same.
///
/// A license is flawed when any of the three scales is off its ideal; the
/// impact sums the raw scale values and is normalized by three slots per
/// license, so a license that is worst on all three scales contributes
/// exactly one full case.
pub struct UnappealingProjectLicensesAnalyzer<'p> {
    project: &'p Project,
}

impl<'p> UnappealingProjectLicensesAnalyzer<'p> {
    pub fn new(project: &'p Project) -> Self {
        UnappealingProjectLicensesAnalyzer { project }
    }
}

impl RiskAnalyzer for UnappealingProjectLicensesAnalyzer<'_> {
    fn category(&self) -> RiskCategory {
        RiskCategory::UnappealingProjectLicenses
    }

    fn project(&self) -> &Project {
        self.project
    }

    fn compute_result(&self) -> Result<RiskResult, ValidationError> {
        let mut tally = Tally::new();
        let license_count = self.project.licenses().len() as f64;

        for &license in self.project.licenses() {
            let age = obsolescence::of(license);
            let fashion = trend::of(license);
            let spread = spreading::of(license);
            let mut flawed = false;

            match age {
                Obsolescence::Updated => {
                    tally.good_thing(MessageKey::ProjectLicenseUpdated, vec![license.to_string()]);
                }
                _ => {
                    flawed = true;
                    tally.root_cause(
                        MessageKey::ProjectLicenseAging,
                        vec![license.to_string(), age.to_string()],
                    );
                }
            }
            match fashion {
                Trend::Trendy => {
                    tally.good_thing(MessageKey::ProjectLicenseTrendy, vec![license.to_string()]);
                }
                _ => {
                    flawed = true;
                    tally.root_cause(
                        MessageKey::ProjectLicenseUnfashionable,
                        vec![license.to_string(), fashion.to_string()],
                    );
                }
            }
            match spread {
                Spreading::HighlyWidespread => {
                    tally.good_thing(
                        MessageKey::ProjectLicenseWidespread,
                        vec![license.to_string()],
                    );
                }
                _ => {
                    flawed = true;
                    tally.root_cause(
                        MessageKey::ProjectLicenseNiche,
                        vec![license.to_string(), spread.to_string()],
                    );
                }
            }

            if flawed {
                tally.exposure += 1.0;
            }
            tally.impact += age.value() + fashion.value() + spread.value();
        }

        if tally.exposure > 0.0 {
            tally.tip(MessageKey::TipModernizeProjectLicenses);
        }

        tally.finish(self.category(), license_count, 3.0 * license_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Component, ComponentBinding, LinkType, Redistribution, SupportedLicense, Weight,
    };

    fn project_with_licenses(licenses: &[SupportedLicense]) -> Project {
        let binding = ComponentBinding::new(
            Component::new("lib", "1.0", SupportedLicense::Mit).unwrap(),
            LinkType::Dynamic,
            Weight::High,
        );
        let mut project = Project::new(
            "demo",
            "1.0",
            licenses[0],
            Redistribution::SoftwarePackageOrSaas,
            binding,
        )
        .unwrap();
        for &license in &licenses[1..] {
            project.add_license(license).unwrap();
        }
        project
    }

    #[test]
    fn test_mit_project_license_is_ideal() {
        let project = project_with_licenses(&[SupportedLicense::Mit]);
        let result = UnappealingProjectLicensesAnalyzer::new(&project)
            .compute_result()
            .unwrap();
        // MIT is Updated, Trendy and HighlyWidespread.
        assert_eq!(result.exposure(), 0.0);
        assert_eq!(result.impact(), 0.0);
        assert_eq!(result.good_things().len(), 3);
    }

    #[test]
    fn test_legacy_project_license_is_fully_flawed() {
        let project = project_with_licenses(&[SupportedLicense::Cpl10]);
        let result = UnappealingProjectLicensesAnalyzer::new(&project)
            .compute_result()
            .unwrap();
        // CPL-1.0 is worst on all three scales.
        assert_eq!(result.exposure(), 1.0);
        assert_eq!(result.impact(), 1.0);
        assert_eq!(result.root_causes().len(), 3);
    }

    #[test]
    fn test_mixed_licenses_average_out() {
        let project =
            project_with_licenses(&[SupportedLicense::Mit, SupportedLicense::Cpl10]);
        let result = UnappealingProjectLicensesAnalyzer::new(&project)
            .compute_result()
            .unwrap();
        assert_eq!(result.exposure(), 0.5);
        assert_eq!(result.impact(), 0.5);
    }
}
