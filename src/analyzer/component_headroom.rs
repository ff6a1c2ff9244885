use crate::analyzer::{RiskAnalyzer, Tally};
use crate::error::ValidationError;
use crate::knowledge::compatibility;
use crate::messages::MessageKey;
use crate::models::{LinkType, Project, RiskCategory, RiskResult, SupportedLicense};

/// Measures how hard it will be to add future dependencies: every supported
/// license is tried as a *hypothetical* component, under every link type,
/// against the project's actual licenses. A combinatorial worst-case sweep
/// over the whole license space, deliberately independent of the bill of
/// components the project has today.
///
/// Hypothetical components carry no binding weight; every cell of the sweep
/// contributes with weight one.
pub struct LimitedComponentLicenseChoicesAnalyzer<'p> {
    project: &'p Project,
}

impl<'p> LimitedComponentLicenseChoicesAnalyzer<'p> {
    pub fn new(project: &'p Project) -> Self {
        LimitedComponentLicenseChoicesAnalyzer { project }
    }
}

impl RiskAnalyzer for LimitedComponentLicenseChoicesAnalyzer<'_> {
    fn category(&self) -> RiskCategory {
        RiskCategory::LimitedComponentLicenseChoices
    }

    fn project(&self) -> &Project {
        self.project
    }

    fn compute_result(&self) -> Result<RiskResult, ValidationError> {
        let mut tally = Tally::new();
        let licenses = self.project.licenses();
        let candidates = SupportedLicense::for_components();
        let total_cells =
            (candidates.len() * LinkType::ALL.len() * licenses.len()) as f64;

        for &candidate in candidates {
            for link in LinkType::ALL {
                let mut usable = true;

                for &project_license in licenses {
                    let compat = compatibility::of(
                        candidate,
                        project_license,
                        link,
                        self.project.redistribution(),
                    );
                    if compat.is_fully_compatible() {
                        continue;
                    }
                    usable = false;
                    tally.exposure += 1.0;
                    tally.impact += 1.0 - compat.value();
                    tally.root_cause(
                        MessageKey::HypotheticalComponentBlocked,
                        vec![
                            candidate.to_string(),
                            link.to_string(),
                            project_license.to_string(),
                        ],
                    );
                }

                if usable {
                    tally.good_thing(
                        MessageKey::HypotheticalComponentUsable,
                        vec![candidate.to_string(), link.to_string()],
                    );
                }
            }
        }

        if tally.exposure > 0.0 {
            tally.tip(MessageKey::TipBroadenComponentLicenseOptions);
        }

        tally.finish(self.category(), total_cells, total_cells)
    }
}
