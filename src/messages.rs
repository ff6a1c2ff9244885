//! Structured explanation records emitted by the risk analyzers.
//!
//! Analyzers never produce rendered prose. Each explanation is a stable
//! [`MessageKey`] plus the values to interpolate, in key-defined order; the
//! reporting layer owns the locale-specific templates
//! ([`report::messages`](crate::report::messages) ships the English ones).
//! Tests assert on keys and values, not on rendered text.

use serde::Serialize;

/// Stable identifiers for every explanation the analyzers can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKey {
    // Component license scales
    ComponentLicenseUpdated,
    ComponentLicenseAging,
    ComponentLicenseTrendy,
    ComponentLicenseUnfashionable,
    ComponentLicenseWidespread,
    ComponentLicenseNiche,

    // Project license scales
    ProjectLicenseUpdated,
    ProjectLicenseAging,
    ProjectLicenseTrendy,
    ProjectLicenseUnfashionable,
    ProjectLicenseWidespread,
    ProjectLicenseNiche,

    // Alignment
    ComponentAligned,
    ComponentMisaligned,
    ProjectIsMultiLicensed,

    // Pairwise compatibility
    ComponentCompatible,
    ComponentForcedCompatible,
    AuthorExceptionFragile,
    ComponentMostlyCompatible,
    ComponentMostlyIncompatible,
    VerifySpecificCase,
    ComponentIncompatible,
    ComponentLicenseUnknown,
    ComponentLicenseUnmodeled,
    ComponentCompatibleWithAllProjectLicenses,
    ComponentPartiallyCompatible,

    // Potential project licenses
    ProjectCouldUseLicense,
    ProjectLicenseChoiceBlocked,
    ProjectLicenseChoiceBlockedByUnknown,
    ProjectLicenseChoiceBlockedByUnmodeled,

    // Potential component licenses
    HypotheticalComponentUsable,
    HypotheticalComponentBlocked,

    // License heterogeneity
    ComponentUsesDominantLicense,
    ComponentDivergesFromDominantLicense,

    // General tips, one per category, emitted once when exposure is non-zero
    TipReplaceAgingComponents,
    TipPreferTrendyLicenses,
    TipPreferWidespreadLicenses,
    TipModernizeProjectLicenses,
    TipAlignComponentLicenses,
    TipRemoveIncompatibleComponents,
    TipBroadenProjectLicenseOptions,
    TipBroadenComponentLicenseOptions,
    TipConsolidateComponentLicenses,
}

/// One entry of a root-cause, warning, good-thing or tip list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub key: MessageKey,
    /// Values interpolated into the rendered message, in key-defined order.
    pub values: Vec<String>,
}

impl Explanation {
    pub fn new(key: MessageKey, values: Vec<String>) -> Self {
        Explanation { key, values }
    }

    /// An explanation with no interpolated values.
    pub fn bare(key: MessageKey) -> Self {
        Explanation {
            key,
            values: Vec::new(),
        }
    }
}
