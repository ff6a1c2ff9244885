use crate::analyzer::{RiskAnalyzer, Tally};
use crate::error::ValidationError;
use crate::knowledge::compatibility::{self, Compatibility};
use crate::messages::MessageKey;
use crate::models::{Project, RiskCategory, RiskResult, SupportedLicense};

/// Measures how boxed-in the project is: of all the licenses that could act
/// as a project license, how many does the current bill of components rule
/// out? A project whose bill blocks most candidate licenses has little room
/// to relicense when business or legal needs change.
///
/// The sweep runs over every studied project-license candidate against the
/// actual bill; the project's currently declared licenses take no special
/// role here.
pub struct LimitedProjectLicenseChoicesAnalyzer<'p> {
    project: &'p Project,
}

impl<'p> LimitedProjectLicenseChoicesAnalyzer<'p> {
    pub fn new(project: &'p Project) -> Self {
        LimitedProjectLicenseChoicesAnalyzer { project }
    }
}

impl RiskAnalyzer for LimitedProjectLicenseChoicesAnalyzer<'_> {
    fn category(&self) -> RiskCategory {
        RiskCategory::LimitedProjectLicenseChoices
    }

    fn project(&self) -> &Project {
        self.project
    }

    fn compute_result(&self) -> Result<RiskResult, ValidationError> {
        let mut tally = Tally::new();
        let bill = self.project.bill();
        let candidates = SupportedLicense::for_projects();
        let candidate_count = candidates.len() as f64;
        // The impact pool is every (binding, candidate) contribution.
        let total_contributions: f64 =
            bill.iter().map(|b| b.weight().value()).sum::<f64>() * candidate_count;

        for &candidate in candidates {
            let mut blocked = false;

            for binding in bill {
                let compat = compatibility::of(
                    binding.license(),
                    candidate,
                    binding.link(),
                    self.project.redistribution(),
                );
                let weight = binding.weight().value();
                tally.impact += (1.0 - compat.value()) * weight;

                match compat {
                    Compatibility::Compatible => {}
                    Compatibility::ForcedCompatible => {
                        tally.warning(
                            MessageKey::AuthorExceptionFragile,
                            vec![
                                binding.component().name().to_string(),
                                binding.component().version().to_string(),
                                binding.license().to_string(),
                                candidate.to_string(),
                            ],
                        );
                    }
                    Compatibility::Unknown => {
                        blocked = true;
                        tally.root_cause(
                            MessageKey::ProjectLicenseChoiceBlockedByUnknown,
                            vec![
                                candidate.to_string(),
                                binding.component().name().to_string(),
                                binding.component().version().to_string(),
                            ],
                        );
                    }
                    Compatibility::Unsupported => {
                        blocked = true;
                        tally.root_cause(
                            MessageKey::ProjectLicenseChoiceBlockedByUnmodeled,
                            vec![
                                candidate.to_string(),
                                binding.component().name().to_string(),
                                binding.component().version().to_string(),
                                binding.license().to_string(),
                            ],
                        );
                    }
                    _ => {
                        blocked = true;
                        tally.root_cause(
                            MessageKey::ProjectLicenseChoiceBlocked,
                            vec![
                                candidate.to_string(),
                                binding.component().name().to_string(),
                                binding.component().version().to_string(),
                                binding.license().to_string(),
                            ],
                        );
                    }
                }
            }

            if blocked {
                tally.exposure += 1.0;
            } else {
                tally.good_thing(
                    MessageKey::ProjectCouldUseLicense,
                    vec![candidate.to_string()],
                );
            }
        }

        if tally.exposure > 0.0 {
            tally.tip(MessageKey::TipBroadenProjectLicenseOptions);
        }

        tally.finish(self.category(), candidate_count, total_contributions)
    }
}
