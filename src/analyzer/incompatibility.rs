use crate::analyzer::{binding_values, RiskAnalyzer, Tally};
use crate::error::ValidationError;
use crate::knowledge::compatibility::{self, Compatibility};
use crate::messages::MessageKey;
use crate::models::{Project, RiskCategory, RiskResult};

/// The central legal-risk check: every binding is paired against every
/// project license and rated by the compatibility table.
///
/// Policy, applied uniformly: `Compatible` is risk-free; `ForcedCompatible`
/// is risk-free but warns, since an author-granted exception is legally
/// valid yet fragile; the two `Mostly*` classifications contribute
/// proportionally and both warn to verify the specific case; `Unknown` and
/// `Unsupported` always count as fully incompatible; a pairing the tables
/// cannot vouch for is never silently accepted. With several project
/// licenses, a binding only counts as fully compatible when it clears every
/// one of them.
pub struct IncompatibleComponentLicensesAnalyzer<'p> {
    project: &'p Project,
}

impl<'p> IncompatibleComponentLicensesAnalyzer<'p> {
    pub fn new(project: &'p Project) -> Self {
        IncompatibleComponentLicensesAnalyzer { project }
    }
}

impl RiskAnalyzer for IncompatibleComponentLicensesAnalyzer<'_> {
    fn category(&self) -> RiskCategory {
        RiskCategory::IncompatibleComponentLicenses
    }

    fn project(&self) -> &Project {
        self.project
    }

    fn compute_result(&self) -> Result<RiskResult, ValidationError> {
        let mut tally = Tally::new();
        let bill = self.project.bill();
        let licenses = self.project.licenses();
        let total_pairs = (bill.len() * licenses.len()) as f64;

        for binding in bill {
            let weight = binding.weight().value();
            let mut cleared = 0usize;

            for &project_license in licenses {
                let compat = compatibility::of(
                    binding.license(),
                    project_license,
                    binding.link(),
                    self.project.redistribution(),
                );
                let mut values = binding_values(binding);
                values.push(project_license.to_string());

                match compat {
                    Compatibility::Compatible => {
                        cleared += 1;
                        tally.good_thing(MessageKey::ComponentCompatible, values);
                    }
                    Compatibility::ForcedCompatible => {
                        cleared += 1;
                        tally.good_thing(MessageKey::ComponentForcedCompatible, values.clone());
                        tally.warning(MessageKey::AuthorExceptionFragile, values);
                    }
                    Compatibility::MostlyCompatible => {
                        tally.exposure += weight;
                        tally.impact += (1.0 - compat.value()) * weight;
                        tally.root_cause(MessageKey::ComponentMostlyCompatible, values.clone());
                        tally.warning(MessageKey::VerifySpecificCase, values);
                    }
                    Compatibility::MostlyIncompatible => {
                        tally.exposure += weight;
                        tally.impact += (1.0 - compat.value()) * weight;
                        tally.root_cause(MessageKey::ComponentMostlyIncompatible, values.clone());
                        tally.warning(MessageKey::VerifySpecificCase, values);
                    }
                    Compatibility::Incompatible => {
                        tally.exposure += weight;
                        tally.impact += (1.0 - compat.value()) * weight;
                        tally.root_cause(MessageKey::ComponentIncompatible, values);
                    }
                    Compatibility::Unknown => {
                        tally.exposure += weight;
                        tally.impact += weight;
                        tally.root_cause(MessageKey::ComponentLicenseUnknown, values);
                    }
                    Compatibility::Unsupported => {
                        tally.exposure += weight;
                        tally.impact += weight;
                        tally.root_cause(MessageKey::ComponentLicenseUnmodeled, values.clone());
                        tally.warning(MessageKey::VerifySpecificCase, values);
                    }
                }
            }

            // Partial compatibility across a multi-licensed project is a
            // root cause, not a good thing.
            if licenses.len() > 1 {
                let values = vec![
                    binding.component().name().to_string(),
                    binding.component().version().to_string(),
                    cleared.to_string(),
                    licenses.len().to_string(),
                ];
                if cleared == licenses.len() {
                    tally.good_thing(
                        MessageKey::ComponentCompatibleWithAllProjectLicenses,
                        values,
                    );
                } else if cleared > 0 {
                    tally.root_cause(MessageKey::ComponentPartiallyCompatible, values);
                }
            }
        }

        if tally.exposure > 0.0 {
            tally.tip(MessageKey::TipRemoveIncompatibleComponents);
        }

        tally.finish(self.category(), total_pairs, total_pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Component, ComponentBinding, LinkType, Redistribution, SupportedLicense, Weight,
    };

    fn binding(
        name: &str,
        license: SupportedLicense,
        link: LinkType,
        weight: Weight,
    ) -> ComponentBinding {
        ComponentBinding::new(Component::new(name, "1.0", license).unwrap(), link, weight)
    }

    fn apache_project(first: ComponentBinding) -> Project {
        Project::new(
            "demo",
            "1.0",
            SupportedLicense::Apache20,
            Redistribution::SoftwarePackageOrSaas,
            first,
        )
        .unwrap()
    }

    #[test]
    fn test_compatible_binding_is_risk_free() {
        let project = apache_project(binding(
            "a",
            SupportedLicense::Mit,
            LinkType::Dynamic,
            Weight::High,
        ));
        let result = IncompatibleComponentLicensesAnalyzer::new(&project)
            .compute_result()
            .unwrap();
        assert_eq!(result.exposure(), 0.0);
        assert_eq!(result.impact(), 0.0);
        assert_eq!(result.good_things().len(), 1);
    }

    #[test]
    fn test_incompatible_binding_raises_exposure() {
        let project = apache_project(binding(
            "a",
            SupportedLicense::Gpl20Only,
            LinkType::Static,
            Weight::High,
        ));
        let result = IncompatibleComponentLicensesAnalyzer::new(&project)
            .compute_result()
            .unwrap();
        assert!(result.exposure() > 0.0);
        assert_eq!(result.exposure(), 1.0);
        assert_eq!(result.impact(), 1.0);
        assert_eq!(
            result.root_causes()[0].key,
            MessageKey::ComponentIncompatible
        );
        assert_eq!(result.tips().len(), 1);
    }

    #[test]
    fn test_undefined_license_is_never_silently_accepted() {
        let project = apache_project(binding(
            "mystery",
            SupportedLicense::Undefined,
            LinkType::Dynamic,
            Weight::High,
        ));
        let result = IncompatibleComponentLicensesAnalyzer::new(&project)
            .compute_result()
            .unwrap();
        assert_eq!(result.exposure(), 1.0);
        assert_eq!(result.impact(), 1.0);
        assert_eq!(
            result.root_causes()[0].key,
            MessageKey::ComponentLicenseUnknown
        );
    }

    #[test]
    fn test_forced_compatible_warns_but_adds_no_risk() {
        let project = apache_project(binding(
            "granted",
            SupportedLicense::ForcedAsProjectLicense,
            LinkType::Static,
            Weight::High,
        ));
        let result = IncompatibleComponentLicensesAnalyzer::new(&project)
            .compute_result()
            .unwrap();
        assert_eq!(result.exposure(), 0.0);
        assert_eq!(result.impact(), 0.0);
        assert_eq!(result.warnings().len(), 1);
        assert_eq!(
            result.warnings()[0].key,
            MessageKey::AuthorExceptionFragile
        );
    }

    #[test]
    fn test_partial_compatibility_is_a_root_cause() {
        let mut project = apache_project(binding(
            "a",
            SupportedLicense::Apache20,
            LinkType::Static,
            Weight::High,
        ));
        project.add_license(SupportedLicense::Gpl20Only).unwrap();

        let result = IncompatibleComponentLicensesAnalyzer::new(&project)
            .compute_result()
            .unwrap();
        // Apache-2.0 clears the Apache-2.0 project license but not
        // GPL-2.0-only.
        let partial: Vec<_> = result
            .root_causes()
            .iter()
            .filter(|e| e.key == MessageKey::ComponentPartiallyCompatible)
            .collect();
        assert_eq!(partial.len(), 1);
        assert_eq!(partial[0].values[2], "1");
        assert_eq!(partial[0].values[3], "2");
    }

    #[test]
    fn test_mostly_compatible_warns_to_verify() {
        // MPL-2.0 statically linked into an MIT project.
        let project = Project::new(
            "demo",
            "1.0",
            SupportedLicense::Mit,
            Redistribution::SoftwarePackageOrSaas,
            binding(
                "a",
                SupportedLicense::Mpl20,
                LinkType::Static,
                Weight::High,
            ),
        )
        .unwrap();
        let result = IncompatibleComponentLicensesAnalyzer::new(&project)
            .compute_result()
            .unwrap();
        assert_eq!(result.exposure(), 1.0);
        // Impact is 1 − 0.67.
        assert_eq!(result.impact(), 0.33);
        assert_eq!(
            result.warnings()[0].key,
            MessageKey::VerifySpecificCase
        );
    }
}
