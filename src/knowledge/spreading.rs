use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::models::SupportedLicense;

/// How widely a license is currently used across third-party projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Spreading {
    HighlyWidespread,
    NearHighlyWidespread,
    NearLittleWidespread,
    LittleWidespread,
}

impl Spreading {
    /// Distance from ideal: 0.0 is highly widespread, 1.0 is little spread.
    pub fn value(&self) -> f64 {
        match self {
            Spreading::HighlyWidespread => 0.0,
            Spreading::NearHighlyWidespread => 0.33,
            Spreading::NearLittleWidespread => 0.67,
            Spreading::LittleWidespread => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Spreading::HighlyWidespread => "highly widespread",
            Spreading::NearHighlyWidespread => "near highly widespread",
            Spreading::NearLittleWidespread => "near little widespread",
            Spreading::LittleWidespread => "little widespread",
        }
    }
}

impl std::fmt::Display for Spreading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static TABLE: Lazy<HashMap<SupportedLicense, Spreading>> = Lazy::new(|| {
    use SupportedLicense::*;
    let mut table = HashMap::new();
    let entries = [
        (Apache11, Spreading::LittleWidespread),
        (Apache20, Spreading::HighlyWidespread),
        (Artistic20, Spreading::LittleWidespread),
        (Bsd3Clause, Spreading::NearHighlyWidespread),
        (Bsd4Clause, Spreading::LittleWidespread),
        (Cddl10, Spreading::LittleWidespread),
        (Cpl10, Spreading::LittleWidespread),
        (Epl10, Spreading::LittleWidespread),
        (Epl20, Spreading::NearLittleWidespread),
        (Eupl11, Spreading::LittleWidespread),
        (Eupl12, Spreading::LittleWidespread),
        (Gpl20Only, Spreading::NearHighlyWidespread),
        (Gpl20OrLater, Spreading::NearLittleWidespread),
        (Gpl30Only, Spreading::NearLittleWidespread),
        (Gpl30OrLater, Spreading::NearHighlyWidespread),
        (Lgpl21Only, Spreading::NearLittleWidespread),
        (Lgpl21OrLater, Spreading::NearLittleWidespread),
        (Lgpl30OrLater, Spreading::NearLittleWidespread),
        (Mit, Spreading::HighlyWidespread),
        (Mpl11, Spreading::LittleWidespread),
        (Mpl20, Spreading::NearLittleWidespread),
        // Pseudo-licenses are pinned to the worst classification.
        (Undefined, Spreading::LittleWidespread),
        (Unsupported, Spreading::LittleWidespread),
        (ForcedAsProjectLicense, Spreading::LittleWidespread),
    ];
    for (license, spreading) in entries {
        table.insert(license, spreading);
    }
    table
});

/// Classify a license's market spread. Total: anything absent from the
/// table answers the worst classification.
pub fn of(license: SupportedLicense) -> Spreading {
    TABLE
        .get(&license)
        .copied()
        .unwrap_or(Spreading::LittleWidespread)
}
