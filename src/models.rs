use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::messages::Explanation;

/// The closed set of licenses the knowledge tables can classify.
///
/// Declaration order is alphabetical by SPDX identifier and is significant:
/// sweeps over the license space iterate in this order, and the
/// dominant-license tie-break resolves to the first-declared license.
///
/// The three trailing pseudo-licenses are reserved markers, not real
/// licenses: `Undefined` stands for "the component's license is unknown",
/// `Unsupported` for "a real license these tables do not model yet", and
/// `ForcedAsProjectLicense` for an author-granted exception to use a
/// component under the project's own license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SupportedLicense {
    Apache11,
    Apache20,
    Artistic20,
    Bsd3Clause,
    Bsd4Clause,
    Cddl10,
    Cpl10,
    Epl10,
    Epl20,
    Eupl11,
    Eupl12,
    Gpl20Only,
    Gpl20OrLater,
    Gpl30Only,
    Gpl30OrLater,
    Lgpl21Only,
    Lgpl21OrLater,
    Lgpl30OrLater,
    Mit,
    Mpl11,
    Mpl20,
    Undefined,
    Unsupported,
    ForcedAsProjectLicense,
}

impl SupportedLicense {
    /// Every license, real and pseudo, in declaration order.
    pub const ALL: [SupportedLicense; 24] = [
        SupportedLicense::Apache11,
        SupportedLicense::Apache20,
        SupportedLicense::Artistic20,
        SupportedLicense::Bsd3Clause,
        SupportedLicense::Bsd4Clause,
        SupportedLicense::Cddl10,
        SupportedLicense::Cpl10,
        SupportedLicense::Epl10,
        SupportedLicense::Epl20,
        SupportedLicense::Eupl11,
        SupportedLicense::Eupl12,
        SupportedLicense::Gpl20Only,
        SupportedLicense::Gpl20OrLater,
        SupportedLicense::Gpl30Only,
        SupportedLicense::Gpl30OrLater,
        SupportedLicense::Lgpl21Only,
        SupportedLicense::Lgpl21OrLater,
        SupportedLicense::Lgpl30OrLater,
        SupportedLicense::Mit,
        SupportedLicense::Mpl11,
        SupportedLicense::Mpl20,
        SupportedLicense::Undefined,
        SupportedLicense::Unsupported,
        SupportedLicense::ForcedAsProjectLicense,
    ];

    /// All real licenses, usable as component licenses and as candidates in
    /// the hypothetical-component sweep.
    pub fn for_components() -> &'static [SupportedLicense] {
        let all: &'static [SupportedLicense; 24] = &Self::ALL;
        &all[..21]
    }

    /// The licenses studied as *project* licenses in the compatibility
    /// table. Narrower than [`for_components`](Self::for_components) by
    /// design: a pairing with an unstudied project license has no table
    /// entry and answers `Unsupported`.
    pub fn for_projects() -> &'static [SupportedLicense] {
        const PROJECTS: [SupportedLicense; 12] = [
            SupportedLicense::Apache20,
            SupportedLicense::Artistic20,
            SupportedLicense::Bsd3Clause,
            SupportedLicense::Epl20,
            SupportedLicense::Eupl12,
            SupportedLicense::Gpl20Only,
            SupportedLicense::Gpl20OrLater,
            SupportedLicense::Gpl30Only,
            SupportedLicense::Gpl30OrLater,
            SupportedLicense::Lgpl30OrLater,
            SupportedLicense::Mit,
            SupportedLicense::Mpl20,
        ];
        &PROJECTS
    }

    pub fn is_pseudo(&self) -> bool {
        matches!(
            self,
            SupportedLicense::Undefined
                | SupportedLicense::Unsupported
                | SupportedLicense::ForcedAsProjectLicense
        )
    }

    /// The SPDX identifier, or an uppercase token for the pseudo-licenses.
    pub fn spdx_id(&self) -> &'static str {
        match self {
            SupportedLicense::Apache11 => "Apache-1.1",
            SupportedLicense::Apache20 => "Apache-2.0",
            SupportedLicense::Artistic20 => "Artistic-2.0",
            SupportedLicense::Bsd3Clause => "BSD-3-Clause",
            SupportedLicense::Bsd4Clause => "BSD-4-Clause",
            SupportedLicense::Cddl10 => "CDDL-1.0",
            SupportedLicense::Cpl10 => "CPL-1.0",
            SupportedLicense::Epl10 => "EPL-1.0",
            SupportedLicense::Epl20 => "EPL-2.0",
            SupportedLicense::Eupl11 => "EUPL-1.1",
            SupportedLicense::Eupl12 => "EUPL-1.2",
            SupportedLicense::Gpl20Only => "GPL-2.0-only",
            SupportedLicense::Gpl20OrLater => "GPL-2.0-or-later",
            SupportedLicense::Gpl30Only => "GPL-3.0-only",
            SupportedLicense::Gpl30OrLater => "GPL-3.0-or-later",
            SupportedLicense::Lgpl21Only => "LGPL-2.1-only",
            SupportedLicense::Lgpl21OrLater => "LGPL-2.1-or-later",
            SupportedLicense::Lgpl30OrLater => "LGPL-3.0-or-later",
            SupportedLicense::Mit => "MIT",
            SupportedLicense::Mpl11 => "MPL-1.1",
            SupportedLicense::Mpl20 => "MPL-2.0",
            SupportedLicense::Undefined => "UNDEFINED",
            SupportedLicense::Unsupported => "UNSUPPORTED",
            SupportedLicense::ForcedAsProjectLicense => "FORCED-AS-PROJECT-LICENSE",
        }
    }

    /// Map a raw license id to the closest supported license.
    ///
    /// Total by construction: an empty or whitespace-only id means the
    /// license is simply not declared (`Undefined`), and any id these tables
    /// do not model degrades to `Unsupported` so it flows into the
    /// conservative sentinel path instead of failing the load.
    pub fn from_spdx(raw: &str) -> SupportedLicense {
        let id = raw.trim();
        if id.is_empty() {
            return SupportedLicense::Undefined;
        }
        for license in SupportedLicense::ALL {
            if license.spdx_id().eq_ignore_ascii_case(id) {
                return license;
            }
        }
        log::warn!("license id {:?} is not modeled; treating it as UNSUPPORTED", id);
        SupportedLicense::Unsupported
    }
}

impl std::fmt::Display for SupportedLicense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spdx_id())
    }
}

/// How a component is linked into the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    Static,
    Dynamic,
}

impl LinkType {
    pub const ALL: [LinkType; 2] = [LinkType::Static, LinkType::Dynamic];

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Static => "static",
            LinkType::Dynamic => "dynamic",
        }
    }
}

impl std::fmt::Display for LinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Relative importance of a component binding within the project.
///
/// `Low` maps to 0.01 rather than 0.0 so that no binding ever vanishes from
/// a weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weight {
    Low,
    NearLow,
    NearHigh,
    High,
}

impl Weight {
    pub fn value(&self) -> f64 {
        match self {
            Weight::Low => 0.01,
            Weight::NearLow => 0.33,
            Weight::NearHigh => 0.67,
            Weight::High => 1.0,
        }
    }
}

/// Whether and how the project is redistributed to third parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Redistribution {
    None,
    SoftwarePackageOrSaas,
}

impl Redistribution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Redistribution::None => "none",
            Redistribution::SoftwarePackageOrSaas => "software package or SaaS",
        }
    }
}

/// A third-party component: name, version and the license it is used under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    name: String,
    version: String,
    license: SupportedLicense,
}

impl Component {
    pub fn new(
        name: &str,
        version: &str,
        license: SupportedLicense,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyComponentName);
        }
        if version.trim().is_empty() {
            return Err(ValidationError::EmptyComponentVersion);
        }
        Ok(Component {
            name: name.trim().to_string(),
            version: version.trim().to_string(),
            license,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn license(&self) -> SupportedLicense {
        self.license
    }
}

/// A component plus the way it is actually used: link type and weight.
/// The unit every per-component analyzer iterates over.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentBinding {
    component: Component,
    link: LinkType,
    weight: Weight,
}

impl ComponentBinding {
    pub fn new(component: Component, link: LinkType, weight: Weight) -> Self {
        ComponentBinding {
            component,
            link,
            weight,
        }
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn license(&self) -> SupportedLicense {
        self.component.license
    }

    pub fn link(&self) -> LinkType {
        self.link
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// A project under analysis: its own licenses, its redistribution mode and
/// its bill of component bindings.
///
/// Holds at least one license and one binding at all times; mutation is
/// append-only. Analyzers and the engine borrow the project, so the borrow
/// checker rules out mutating it while an analysis pass is in flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    name: String,
    version: String,
    licenses: Vec<SupportedLicense>,
    redistribution: Redistribution,
    bill: Vec<ComponentBinding>,
}

impl Project {
    pub fn new(
        name: &str,
        version: &str,
        license: SupportedLicense,
        redistribution: Redistribution,
        binding: ComponentBinding,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyProjectName);
        }
        if version.trim().is_empty() {
            return Err(ValidationError::EmptyProjectVersion);
        }
        Ok(Project {
            name: name.trim().to_string(),
            version: version.trim().to_string(),
            licenses: vec![license],
            redistribution,
            bill: vec![binding],
        })
    }

    /// Declare an additional project license (multi-licensing). The license
    /// list is an ordered set: re-declaring a license is rejected.
    pub fn add_license(&mut self, license: SupportedLicense) -> Result<(), ValidationError> {
        if self.licenses.contains(&license) {
            return Err(ValidationError::DuplicateProjectLicense(
                license.to_string(),
            ));
        }
        self.licenses.push(license);
        Ok(())
    }

    pub fn add_binding(&mut self, binding: ComponentBinding) {
        self.bill.push(binding);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn licenses(&self) -> &[SupportedLicense] {
        &self.licenses
    }

    pub fn redistribution(&self) -> Redistribution {
        self.redistribution
    }

    pub fn bill(&self) -> &[ComponentBinding] {
        &self.bill
    }
}

/// The risk categories the engine can report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskCategory {
    ObsoleteComponentLicenses,
    UnfashionableComponentLicenses,
    ScarcelySpreadComponentLicenses,
    UnappealingProjectLicenses,
    MisalignedComponentLicenses,
    IncompatibleComponentLicenses,
    LimitedProjectLicenseChoices,
    LimitedComponentLicenseChoices,
    HeterogeneousComponentLicenses,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::ObsoleteComponentLicenses => "components under obsolete licenses",
            RiskCategory::UnfashionableComponentLicenses => {
                "components under unfashionable licenses"
            }
            RiskCategory::ScarcelySpreadComponentLicenses => {
                "components under scarcely spread licenses"
            }
            RiskCategory::UnappealingProjectLicenses => {
                "obsolete, unfashionable or scarcely spread project licenses"
            }
            RiskCategory::MisalignedComponentLicenses => {
                "component licenses misaligned from the project licenses"
            }
            RiskCategory::IncompatibleComponentLicenses => {
                "component licenses incompatible with the project licenses"
            }
            RiskCategory::LimitedProjectLicenseChoices => {
                "limited set of potential project licenses"
            }
            RiskCategory::LimitedComponentLicenseChoices => {
                "limited set of potential component licenses"
            }
            RiskCategory::HeterogeneousComponentLicenses => {
                "heterogeneous component licenses"
            }
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Round to the fixed 4-decimal precision every reported score uses.
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// The outcome of one analyzer run: normalized scores plus the four
/// explanation lists, immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskResult {
    category: RiskCategory,
    exposure: f64,
    impact: f64,
    risk_value: f64,
    root_causes: Vec<Explanation>,
    warnings: Vec<Explanation>,
    good_things: Vec<Explanation>,
    tips: Vec<Explanation>,
}

impl RiskResult {
    /// Build a result from normalized scores. Exposure and impact must be in
    /// [0, 1]; both are stored rounded to 4 decimals and the risk value is
    /// their rounded product.
    pub fn new(
        category: RiskCategory,
        exposure: f64,
        impact: f64,
        root_causes: Vec<Explanation>,
        warnings: Vec<Explanation>,
        good_things: Vec<Explanation>,
        tips: Vec<Explanation>,
    ) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&exposure) {
            return Err(ValidationError::ExposureOutOfRange(exposure));
        }
        if !(0.0..=1.0).contains(&impact) {
            return Err(ValidationError::ImpactOutOfRange(impact));
        }
        let exposure = round4(exposure);
        let impact = round4(impact);
        Ok(RiskResult {
            category,
            exposure,
            impact,
            risk_value: round4(exposure * impact),
            root_causes,
            warnings,
            good_things,
            tips,
        })
    }

    pub fn category(&self) -> RiskCategory {
        self.category
    }

    /// Weighted fraction of the analysis universe affected by the risk.
    pub fn exposure(&self) -> f64 {
        self.exposure
    }

    /// Weighted average distance from ideal for the affected fraction.
    pub fn impact(&self) -> f64 {
        self.impact
    }

    pub fn risk_value(&self) -> f64 {
        self.risk_value
    }

    pub fn root_causes(&self) -> &[Explanation] {
        &self.root_causes
    }

    pub fn warnings(&self) -> &[Explanation] {
        &self.warnings
    }

    pub fn good_things(&self) -> &[Explanation] {
        &self.good_things
    }

    pub fn tips(&self) -> &[Explanation] {
        &self.tips
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_spdx_roundtrip() {
        for license in SupportedLicense::ALL {
            assert_eq!(SupportedLicense::from_spdx(license.spdx_id()), license);
        }
    }

    #[test]
    fn test_from_spdx_fallbacks() {
        assert_eq!(SupportedLicense::from_spdx(""), SupportedLicense::Undefined);
        assert_eq!(
            SupportedLicense::from_spdx("   "),
            SupportedLicense::Undefined
        );
        assert_eq!(
            SupportedLicense::from_spdx("SSPL-1.0"),
            SupportedLicense::Unsupported
        );
        assert_eq!(SupportedLicense::from_spdx("mit"), SupportedLicense::Mit);
    }

    #[test]
    fn test_license_subsets() {
        assert_eq!(SupportedLicense::for_components().len(), 21);
        assert!(SupportedLicense::for_components()
            .iter()
            .all(|l| !l.is_pseudo()));
        for license in SupportedLicense::for_projects() {
            assert!(SupportedLicense::for_components().contains(license));
        }
    }

    #[test]
    fn test_component_rejects_empty_fields() {
        assert_eq!(
            Component::new("", "1.0", SupportedLicense::Mit),
            Err(ValidationError::EmptyComponentName)
        );
        assert_eq!(
            Component::new("lib", "  ", SupportedLicense::Mit),
            Err(ValidationError::EmptyComponentVersion)
        );
    }

    #[test]
    fn test_project_invariants() {
        let binding = ComponentBinding::new(
            Component::new("lib", "1.0", SupportedLicense::Mit).unwrap(),
            LinkType::Dynamic,
            Weight::High,
        );
        let mut project = Project::new(
            "demo",
            "1.0",
            SupportedLicense::Mit,
            Redistribution::SoftwarePackageOrSaas,
            binding.clone(),
        )
        .unwrap();

        assert_eq!(project.licenses().len(), 1);
        assert_eq!(project.bill().len(), 1);

        project.add_license(SupportedLicense::Apache20).unwrap();
        assert_eq!(
            project.add_license(SupportedLicense::Apache20),
            Err(ValidationError::DuplicateProjectLicense(
                "Apache-2.0".to_string()
            ))
        );

        project.add_binding(binding);
        assert_eq!(project.bill().len(), 2);
    }

    #[test]
    fn test_risk_result_rounding() {
        let result = RiskResult::new(
            RiskCategory::HeterogeneousComponentLicenses,
            0.123456,
            0.5,
            vec![],
            vec![],
            vec![],
            vec![],
        )
        .unwrap();
        assert_eq!(result.exposure(), 0.1235);
        assert_eq!(result.impact(), 0.5);
        assert_eq!(result.risk_value(), round4(0.1235 * 0.5));
    }

    #[test]
    fn test_risk_result_rejects_out_of_range() {
        let out = RiskResult::new(
            RiskCategory::HeterogeneousComponentLicenses,
            1.2,
            0.5,
            vec![],
            vec![],
            vec![],
            vec![],
        );
        assert_eq!(out, Err(ValidationError::ExposureOutOfRange(1.2)));

        let out = RiskResult::new(
            RiskCategory::HeterogeneousComponentLicenses,
            0.5,
            -0.1,
            vec![],
            vec![],
            vec![],
            vec![],
        );
        assert_eq!(out, Err(ValidationError::ImpactOutOfRange(-0.1)));
    }
}
