use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::models::SupportedLicense;

/// Whether a license's real-world adoption is growing or shrinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trend {
    Trendy,
    NearTrendy,
    NearUnfashionable,
    Unfashionable,
}

impl Trend {
    /// Distance from ideal: 0.0 is trendy, 1.0 is unfashionable.
    pub fn value(&self) -> f64 {
        match self {
            Trend::Trendy => 0.0,
            Trend::NearTrendy => 0.33,
            Trend::NearUnfashionable => 0.67,
            Trend::Unfashionable => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Trendy => "trendy",
            Trend::NearTrendy => "near trendy",
            Trend::NearUnfashionable => "near unfashionable",
            Trend::Unfashionable => "unfashionable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static TABLE: Lazy<HashMap<SupportedLicense, Trend>> = Lazy::new(|| {
    use SupportedLicense::*;
    let mut table = HashMap::new();
    let entries = [
        (Apache11, Trend::Unfashionable),
        (Apache20, Trend::Trendy),
        (Artistic20, Trend::NearUnfashionable),
        (Bsd3Clause, Trend::NearTrendy),
        (Bsd4Clause, Trend::Unfashionable),
        (Cddl10, Trend::Unfashionable),
        (Cpl10, Trend::Unfashionable),
        (Epl10, Trend::NearUnfashionable),
        (Epl20, Trend::NearTrendy),
        (Eupl11, Trend::Unfashionable),
        (Eupl12, Trend::NearTrendy),
        (Gpl20Only, Trend::NearUnfashionable),
        (Gpl20OrLater, Trend::NearUnfashionable),
        (Gpl30Only, Trend::NearTrendy),
        (Gpl30OrLater, Trend::NearTrendy),
        (Lgpl21Only, Trend::NearUnfashionable),
        (Lgpl21OrLater, Trend::NearUnfashionable),
        (Lgpl30OrLater, Trend::NearTrendy),
        (Mit, Trend::Trendy),
        (Mpl11, Trend::Unfashionable),
        (Mpl20, Trend::NearTrendy),
        // Pseudo-licenses are pinned to the worst classification.
        (Undefined, Trend::Unfashionable),
        (Unsupported, Trend::Unfashionable),
        (ForcedAsProjectLicense, Trend::Unfashionable),
    ];
    for (license, trend) in entries {
        table.insert(license, trend);
    }
    table
});

/// Classify a license's adoption trend. Total: anything absent from the
/// table answers the worst classification.
pub fn of(license: SupportedLicense) -> Trend {
    TABLE.get(&license).copied().unwrap_or(Trend::Unfashionable)
}
