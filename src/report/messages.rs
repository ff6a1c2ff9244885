use crate::messages::{Explanation, MessageKey};

/// English template for a message key. Placeholders `{0}`, `{1}`, … are
/// filled from the explanation's values, in key-defined order. Keeping the
/// templates here, out of the analyzers, keeps locale rendering a pure
/// reporting concern.
fn template(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        ComponentLicenseUpdated => "{0}-{1} uses {2}, the latest version of its license family",
        ComponentLicenseAging => "{0}-{1} uses {2}, which is {3}",
        ComponentLicenseTrendy => "{0}-{1} uses {2}, whose adoption is growing",
        ComponentLicenseUnfashionable => "{0}-{1} uses {2}, whose adoption is {3}",
        ComponentLicenseWidespread => "{0}-{1} uses {2}, which is in widespread use",
        ComponentLicenseNiche => "{0}-{1} uses {2}, which is {3} across third-party projects",

        ProjectLicenseUpdated => "the project license {0} is the latest version of its family",
        ProjectLicenseAging => "the project license {0} is {1}",
        ProjectLicenseTrendy => "the project license {0} is gaining adoption",
        ProjectLicenseUnfashionable => "the project license {0} is {1}",
        ProjectLicenseWidespread => "the project license {0} is in widespread use",
        ProjectLicenseNiche => "the project license {0} is {1} across third-party projects",

        ComponentAligned => "{0}-{1} is released under the project license {3}",
        ComponentMisaligned => "{0}-{1} uses {2}, not the project license {3}",
        ProjectIsMultiLicensed => {
            "the project is multi-licensed; components cannot align with every project license at once"
        }

        ComponentCompatible => "{0}-{1} ({2}) is compatible with the project license {3}",
        ComponentForcedCompatible => {
            "{0}-{1} may be used under the project license {3} by author exception"
        }
        AuthorExceptionFragile => {
            "{0}-{1} relies on an author-granted exception towards {3}; the exception does not follow the component to new versions or forks"
        }
        ComponentMostlyCompatible => {
            "{0}-{1} ({2}) is mostly compatible with the project license {3}"
        }
        ComponentMostlyIncompatible => {
            "{0}-{1} ({2}) is mostly incompatible with the project license {3}"
        }
        VerifySpecificCase => "verify the specific case of {0}-{1} against {3}",
        ComponentIncompatible => "{0}-{1} ({2}) is incompatible with the project license {3}",
        ComponentLicenseUnknown => {
            "the license of {0}-{1} is unknown, so the pairing with {3} is treated as incompatible"
        }
        ComponentLicenseUnmodeled => {
            "{0}-{1} uses {2}, which is not modeled against {3}; the pairing is treated as incompatible"
        }
        ComponentCompatibleWithAllProjectLicenses => {
            "{0}-{1} is compatible with all {3} project licenses"
        }
        ComponentPartiallyCompatible => {
            "{0}-{1} is compatible with only {2} of the {3} project licenses"
        }

        ProjectCouldUseLicense => "the project could also be released under {0}",
        ProjectLicenseChoiceBlocked => {
            "{0} is not a viable project license: {1}-{2} ({3}) is not compatible with it"
        }
        ProjectLicenseChoiceBlockedByUnknown => {
            "{0} is not a viable project license: the license of {1}-{2} is unknown"
        }
        ProjectLicenseChoiceBlockedByUnmodeled => {
            "{0} is not a viable project license: {1}-{2} ({3}) is not modeled against it"
        }

        HypotheticalComponentUsable => "a future component under {0}, linked {1}, could be used",
        HypotheticalComponentBlocked => {
            "a future component under {0}, linked {1}, would clash with the project license {2}"
        }

        ComponentUsesDominantLicense => "{0}-{1} uses the dominant bill license {3}",
        ComponentDivergesFromDominantLicense => {
            "{0}-{1} uses {2} instead of the dominant bill license {3}"
        }

        TipReplaceAgingComponents => {
            "try to replace components under aged licenses with versions released under the latest license of the same family"
        }
        TipPreferTrendyLicenses => {
            "prefer components under licenses with growing adoption; shrinking license communities dry up the replacement pool"
        }
        TipPreferWidespreadLicenses => {
            "prefer components under widely used licenses; niche licenses have less settled interpretation"
        }
        TipModernizeProjectLicenses => {
            "consider releasing under a newer, widely adopted license; dual-licensing can ease the transition"
        }
        TipAlignComponentLicenses => {
            "when alternatives exist, pick the component released under a project license to keep the bill easy to audit"
        }
        TipRemoveIncompatibleComponents => {
            "replace incompatible components, change how they are linked, or ask their authors for an exception"
        }
        TipBroadenProjectLicenseOptions => {
            "replacing the most restrictive components would widen the set of licenses the project could move to"
        }
        TipBroadenComponentLicenseOptions => {
            "the current project licenses rule out part of the component ecosystem; dual-licensing the project widens it"
        }
        TipConsolidateComponentLicenses => {
            "when alternatives exist, prefer components under the dominant bill license to reduce the obligations to track"
        }
    }
}

/// Render an explanation with the English templates.
pub fn render(explanation: &Explanation) -> String {
    let mut text = template(explanation.key).to_string();
    for (index, value) in explanation.values.iter().enumerate() {
        text = text.replace(&format!("{{{}}}", index), value);
    }
    text
}
