use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::models::{LinkType, Redistribution, SupportedLicense};

/// The relationship between a component license and a project license under
/// a given link type and redistribution mode.
///
/// `Unknown` and `Unsupported` both carry a value of 0.0: a pairing these
/// tables cannot vouch for is never silently accepted. The difference is
/// provenance: `Unknown` is an explicit entry recording modeled ignorance
/// (the component's license itself is undefined), `Unsupported` is the
/// default answer for a pairing with no table entry at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compatibility {
    Compatible,
    ForcedCompatible,
    MostlyCompatible,
    MostlyIncompatible,
    Incompatible,
    Unknown,
    Unsupported,
}

impl Compatibility {
    /// Degree of compatibility: 1.0 is fully compatible, 0.0 is not at all.
    pub fn value(&self) -> f64 {
        match self {
            Compatibility::Compatible => 1.0,
            Compatibility::ForcedCompatible => 1.0,
            Compatibility::MostlyCompatible => 0.67,
            Compatibility::MostlyIncompatible => 0.33,
            Compatibility::Incompatible => 0.0,
            Compatibility::Unknown => 0.0,
            Compatibility::Unsupported => 0.0,
        }
    }

    /// Whether this pairing carries no compatibility risk at all. Only
    /// `Compatible` and `ForcedCompatible` qualify; everything else
    /// contributes to exposure.
    pub fn is_fully_compatible(&self) -> bool {
        matches!(
            self,
            Compatibility::Compatible | Compatibility::ForcedCompatible
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Compatibility::Compatible => "compatible",
            Compatibility::ForcedCompatible => "compatible by author exception",
            Compatibility::MostlyCompatible => "mostly compatible",
            Compatibility::MostlyIncompatible => "mostly incompatible",
            Compatibility::Incompatible => "incompatible",
            Compatibility::Unknown => "unknown",
            Compatibility::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for Compatibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Broad copyleft category of a real license; seeds the pairwise rules.
/// Pseudo-licenses have no category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Permissive,
    WeakCopyleft,
    StrongCopyleft,
}

fn category(license: SupportedLicense) -> Option<Category> {
    use SupportedLicense::*;
    match license {
        Apache11 | Apache20 | Artistic20 | Bsd3Clause | Bsd4Clause | Mit => {
            Some(Category::Permissive)
        }
        Cddl10 | Cpl10 | Epl10 | Epl20 | Eupl11 | Eupl12 | Lgpl21Only | Lgpl21OrLater
        | Lgpl30OrLater | Mpl11 | Mpl20 => Some(Category::WeakCopyleft),
        Gpl20Only | Gpl20OrLater | Gpl30Only | Gpl30OrLater => Some(Category::StrongCopyleft),
        Undefined | Unsupported | ForcedAsProjectLicense => None,
    }
}

/// Compatibility of a real component license against a studied project
/// license when the project is redistributed as a package or SaaS.
///
/// The curated knowledge of the table lives here. `project` only ranges over
/// [`SupportedLicense::for_projects`]; pairings with other project licenses
/// are deliberately left without entries.
fn redistributed(
    component: SupportedLicense,
    project: SupportedLicense,
    link: LinkType,
) -> Compatibility {
    use Compatibility::*;
    use SupportedLicense::*;

    let gpl_project = matches!(project, Gpl20Only | Gpl20OrLater | Gpl30Only | Gpl30OrLater);
    // Weak copyleft linked statically still binds the combined work to the
    // component's terms; dynamically it usually does not.
    let weak_default = match link {
        LinkType::Dynamic => Compatible,
        LinkType::Static => MostlyCompatible,
    };

    match component {
        Mit | Bsd3Clause | Artistic20 => Compatible,

        // Advertising clauses clash with copyleft redistribution terms.
        Apache11 | Bsd4Clause => match category(project) {
            Some(Category::StrongCopyleft) => Incompatible,
            Some(Category::WeakCopyleft) => MostlyIncompatible,
            _ => Compatible,
        },

        // The patent-retaliation terms are accepted by GPLv3 but not GPLv2.
        Apache20 => match project {
            Gpl20Only => Incompatible,
            Gpl20OrLater => MostlyCompatible,
            _ => Compatible,
        },

        Lgpl21Only => match project {
            Gpl20Only | Gpl20OrLater => Compatible,
            Gpl30Only | Gpl30OrLater | Lgpl30OrLater => match link {
                LinkType::Dynamic => Compatible,
                LinkType::Static => MostlyIncompatible,
            },
            _ => weak_default,
        },
        Lgpl21OrLater => {
            if gpl_project || project == Lgpl30OrLater {
                Compatible
            } else {
                weak_default
            }
        }
        Lgpl30OrLater => match project {
            Gpl30Only | Gpl30OrLater | Gpl20OrLater | Lgpl30OrLater => Compatible,
            Gpl20Only => Incompatible,
            _ => weak_default,
        },

        Mpl11 => {
            if gpl_project {
                Incompatible
            } else if project == Lgpl30OrLater {
                MostlyIncompatible
            } else {
                weak_default
            }
        }
        // MPL-2.0's secondary-license provision opens the GPL family.
        Mpl20 => {
            if gpl_project || matches!(project, Lgpl30OrLater | Mpl20) {
                Compatible
            } else {
                weak_default
            }
        }

        Cddl10 => {
            if gpl_project || project == Lgpl30OrLater {
                Incompatible
            } else {
                weak_default
            }
        }
        Cpl10 | Epl10 => {
            if gpl_project || project == Lgpl30OrLater {
                Incompatible
            } else if project == Epl20 {
                Compatible
            } else {
                weak_default
            }
        }
        // EPL-2.0 reaches the GPL family only when the initial contributor
        // exercised the secondary-license option.
        Epl20 => {
            if gpl_project || project == Lgpl30OrLater {
                MostlyIncompatible
            } else if project == Epl20 {
                Compatible
            } else {
                weak_default
            }
        }

        // The EUPL compatibility appendix is one-way and version-bound.
        Eupl11 => match project {
            Gpl20Only | Gpl20OrLater => MostlyCompatible,
            Eupl12 => Compatible,
            _ => match link {
                LinkType::Dynamic => MostlyCompatible,
                LinkType::Static => MostlyIncompatible,
            },
        },
        Eupl12 => {
            if gpl_project || matches!(project, Lgpl30OrLater | Mpl20 | Epl20 | Eupl12) {
                Compatible
            } else {
                match link {
                    LinkType::Dynamic => MostlyCompatible,
                    LinkType::Static => MostlyIncompatible,
                }
            }
        }

        Gpl20Only => match project {
            Gpl20Only | Gpl20OrLater => Compatible,
            Gpl30Only | Gpl30OrLater => Incompatible,
            _ => match link {
                LinkType::Dynamic => MostlyIncompatible,
                LinkType::Static => Incompatible,
            },
        },
        Gpl20OrLater => {
            if gpl_project {
                Compatible
            } else {
                match link {
                    LinkType::Dynamic => MostlyIncompatible,
                    LinkType::Static => Incompatible,
                }
            }
        }
        Gpl30Only | Gpl30OrLater => match project {
            Gpl30Only | Gpl30OrLater | Gpl20OrLater => Compatible,
            Gpl20Only => Incompatible,
            _ => match link {
                LinkType::Dynamic => MostlyIncompatible,
                LinkType::Static => Incompatible,
            },
        },

        // Pseudo-licenses never reach this function; their entries are
        // inserted directly by the table builder.
        Undefined | SupportedLicense::Unsupported | ForcedAsProjectLicense => {
            Compatibility::Unsupported
        }
    }
}

type Key = (SupportedLicense, SupportedLicense, LinkType, Redistribution);

static TABLE: Lazy<HashMap<Key, Compatibility>> = Lazy::new(|| {
    let mut entries = HashMap::new();

    for &component in SupportedLicense::for_components() {
        for &project in SupportedLicense::for_projects() {
            for link in LinkType::ALL {
                // Without redistribution the copyleft obligations never
                // trigger: every studied pairing is compatible.
                entries.insert(
                    (component, project, link, Redistribution::None),
                    Compatibility::Compatible,
                );
                entries.insert(
                    (component, project, link, Redistribution::SoftwarePackageOrSaas),
                    redistributed(component, project, link),
                );
            }
        }
    }

    for &project in SupportedLicense::for_projects() {
        for link in LinkType::ALL {
            for redistribution in [Redistribution::None, Redistribution::SoftwarePackageOrSaas] {
                // UNDEFINED is modeled ignorance: an explicit Unknown entry,
                // distinct from the absent-entry Unsupported default.
                entries.insert(
                    (SupportedLicense::Undefined, project, link, redistribution),
                    Compatibility::Unknown,
                );
                entries.insert(
                    (
                        SupportedLicense::ForcedAsProjectLicense,
                        project,
                        link,
                        redistribution,
                    ),
                    Compatibility::ForcedCompatible,
                );
            }
        }
    }

    // SupportedLicense::Unsupported gets no entries on purpose: lookups fall
    // through to the Unsupported default, as does any pairing with a project
    // license outside the studied set.
    log::debug!("compatibility table built with {} entries", entries.len());
    entries
});

/// Look up the compatibility of a (component, project, link, redistribution)
/// tuple. Total: a tuple with no entry answers `Unsupported`.
pub fn of(
    component: SupportedLicense,
    project: SupportedLicense,
    link: LinkType,
    redistribution: Redistribution,
) -> Compatibility {
    TABLE
        .get(&(component, project, link, redistribution))
        .copied()
        .unwrap_or(Compatibility::Unsupported)
}
