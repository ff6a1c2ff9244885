use crate::analyzer::{binding_values, RiskAnalyzer, Tally};
use crate::error::ValidationError;
use crate::messages::MessageKey;
use crate::models::{Project, RiskCategory, RiskResult, SupportedLicense};

/// Flags a bill that mixes several component licenses. Every extra license
/// in the mix is another set of obligations to track, so the analyzer picks
/// one dominant license as the bill's reference point and rates every
/// binding against it.
///
/// Dominant-license tie-break chain, in order: highest aggregated binding
/// weight, then highest binding count, then the first-declared license in
/// [`SupportedLicense`] order. Changing this order changes which license is
/// treated as the reference, and with it every downstream number.
pub struct HeterogeneousComponentLicensesAnalyzer<'p> {
    project: &'p Project,
}

impl<'p> HeterogeneousComponentLicensesAnalyzer<'p> {
    pub fn new(project: &'p Project) -> Self {
        HeterogeneousComponentLicensesAnalyzer { project }
    }

    /// The bill's dominant license under the weight → count → declaration
    /// order tie-break chain.
    pub fn dominant_license(&self) -> Option<SupportedLicense> {
        let bill = self.project.bill();
        let mut best: Option<(SupportedLicense, f64, usize)> = None;

        // Iterating the license space in declaration order makes the final
        // tie-break fall out of the strict comparisons below.
        for license in SupportedLicense::ALL {
            let count = bill.iter().filter(|b| b.license() == license).count();
            if count == 0 {
                continue;
            }
            let weight: f64 = bill
                .iter()
                .filter(|b| b.license() == license)
                .map(|b| b.weight().value())
                .sum();
            let better = match best {
                None => true,
                Some((_, best_weight, best_count)) => {
                    weight > best_weight || (weight == best_weight && count > best_count)
                }
            };
            if better {
                best = Some((license, weight, count));
            }
        }

        best.map(|(license, _, _)| license)
    }
}

impl RiskAnalyzer for HeterogeneousComponentLicensesAnalyzer<'_> {
    fn category(&self) -> RiskCategory {
        RiskCategory::HeterogeneousComponentLicenses
    }

    fn project(&self) -> &Project {
        self.project
    }

    fn compute_result(&self) -> Result<RiskResult, ValidationError> {
        let mut tally = Tally::new();
        let bill = self.project.bill();
        let total_weight: f64 = bill.iter().map(|b| b.weight().value()).sum();

        let Some(dominant) = self.dominant_license() else {
            // The bill is never empty; a project cannot be built without at
            // least one binding.
            return tally.finish(self.category(), 1.0, 1.0);
        };

        for binding in bill {
            let mut values = binding_values(binding);
            values.push(dominant.to_string());
            if binding.license() == dominant {
                tally.good_thing(MessageKey::ComponentUsesDominantLicense, values);
            } else {
                tally.exposure += 1.0;
                tally.impact += binding.weight().value();
                tally.root_cause(MessageKey::ComponentDivergesFromDominantLicense, values);
            }
        }

        if tally.exposure > 0.0 {
            tally.tip(MessageKey::TipConsolidateComponentLicenses);
        }

        tally.finish(self.category(), bill.len() as f64, total_weight)
    }
}
