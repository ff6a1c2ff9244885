use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::models::SupportedLicense;

/// How far a license version lags behind the latest version of its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Obsolescence {
    Updated,
    NearUpdated,
    NearOutdated,
    Outdated,
}

impl Obsolescence {
    /// Distance from ideal: 0.0 is fully up to date, 1.0 is fully outdated.
    pub fn value(&self) -> f64 {
        match self {
            Obsolescence::Updated => 0.0,
            Obsolescence::NearUpdated => 0.33,
            Obsolescence::NearOutdated => 0.67,
            Obsolescence::Outdated => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Obsolescence::Updated => "updated",
            Obsolescence::NearUpdated => "near updated",
            Obsolescence::NearOutdated => "near outdated",
            Obsolescence::Outdated => "outdated",
        }
    }
}

impl std::fmt::Display for Obsolescence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Position of a license inside its version family: 0-based index counted
/// from the oldest version, and the family's total version count.
///
/// Families group successive revisions of the same license text; a license
/// without successors or predecessors is its own single-version family.
fn family_position(license: SupportedLicense) -> Option<(u32, u32)> {
    use SupportedLicense::*;
    let position = match license {
        Apache11 => (0, 2),
        Apache20 => (1, 2),
        Artistic20 => (0, 1),
        Bsd4Clause => (0, 2),
        Bsd3Clause => (1, 2),
        Cddl10 => (0, 1),
        // CPL was relicensed as EPL; the three form one lineage.
        Cpl10 => (0, 3),
        Epl10 => (1, 3),
        Epl20 => (2, 3),
        Eupl11 => (0, 2),
        Eupl12 => (1, 2),
        Gpl20Only => (0, 4),
        Gpl20OrLater => (1, 4),
        Gpl30Only => (2, 4),
        Gpl30OrLater => (3, 4),
        Lgpl21Only => (0, 3),
        Lgpl21OrLater => (1, 3),
        Lgpl30OrLater => (2, 3),
        Mit => (0, 1),
        Mpl11 => (0, 2),
        Mpl20 => (1, 2),
        Undefined | Unsupported | ForcedAsProjectLicense => return None,
    };
    Some(position)
}

/// Bucket a family position into a classification.
///
/// The raw ratio `1 − index/total` is 1.0 for the oldest version of any
/// family, so left alone it would label the *first* version of a
/// multi-version license as `Updated`. The first version of a multi-version
/// family is instead forced to `Outdated`, whatever the ratio says; only a
/// single-version family's ratio of 1.0 means `Updated`. Keep this exact
/// asymmetry: it is policy, not rounding.
fn bucket(index: u32, total: u32) -> Obsolescence {
    let raw = 1.0 - f64::from(index) / f64::from(total);
    if index == 0 && total > 1 {
        Obsolescence::Outdated
    } else if raw == 1.0 {
        Obsolescence::Updated
    } else if raw < 0.5 {
        Obsolescence::NearUpdated
    } else {
        Obsolescence::NearOutdated
    }
}

static TABLE: Lazy<HashMap<SupportedLicense, Obsolescence>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for license in SupportedLicense::ALL {
        let classification = match family_position(license) {
            Some((index, total)) => bucket(index, total),
            // Pseudo-licenses are pinned to the worst classification.
            None => Obsolescence::Outdated,
        };
        table.insert(license, classification);
    }
    table
});

/// Classify a license's age. Total: anything absent from the table answers
/// the worst classification.
pub fn of(license: SupportedLicense) -> Obsolescence {
    TABLE
        .get(&license)
        .copied()
        .unwrap_or(Obsolescence::Outdated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_version_family_is_updated() {
        assert_eq!(of(SupportedLicense::Mit), Obsolescence::Updated);
        assert_eq!(of(SupportedLicense::Artistic20), Obsolescence::Updated);
        assert_eq!(of(SupportedLicense::Cddl10), Obsolescence::Updated);
    }

    #[test]
    fn test_first_version_of_multi_version_family_is_forced_outdated() {
        // The raw ratio for these is 1.0, which would read as Updated
        // without the forced bucket.
        assert_eq!(of(SupportedLicense::Gpl20Only), Obsolescence::Outdated);
        assert_eq!(of(SupportedLicense::Apache11), Obsolescence::Outdated);
        assert_eq!(of(SupportedLicense::Lgpl21Only), Obsolescence::Outdated);
        assert_eq!(of(SupportedLicense::Cpl10), Obsolescence::Outdated);
    }

    #[test]
    fn test_intermediate_and_latest_versions() {
        // GPL family of four: or-later 2.0 at 0.75, 3.0-only at 0.5, both
        // NearOutdated; 3.0-or-later at 0.25, NearUpdated.
        assert_eq!(of(SupportedLicense::Gpl20OrLater), Obsolescence::NearOutdated);
        assert_eq!(of(SupportedLicense::Gpl30Only), Obsolescence::NearOutdated);
        assert_eq!(of(SupportedLicense::Gpl30OrLater), Obsolescence::NearUpdated);
        // Two-version families land on exactly 0.5 for the newer member.
        assert_eq!(of(SupportedLicense::Apache20), Obsolescence::NearOutdated);
        assert_eq!(of(SupportedLicense::Mpl20), Obsolescence::NearOutdated);
        // Three-version lineages.
        assert_eq!(of(SupportedLicense::Epl20), Obsolescence::NearUpdated);
        assert_eq!(of(SupportedLicense::Lgpl30OrLater), Obsolescence::NearUpdated);
    }

    #[test]
    fn test_pseudo_licenses_pinned_to_worst() {
        assert_eq!(of(SupportedLicense::Undefined), Obsolescence::Outdated);
        assert_eq!(of(SupportedLicense::Unsupported), Obsolescence::Outdated);
        assert_eq!(
            of(SupportedLicense::ForcedAsProjectLicense),
            Obsolescence::Outdated
        );
    }

    #[test]
    fn test_values_in_unit_range() {
        for license in SupportedLicense::ALL {
            let value = of(license).value();
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
