//! End-to-end scenarios over the full engine, driven through the public
//! library surface the way a consumer would use it.

use license_riskr::analyzer::heterogeneity::HeterogeneousComponentLicensesAnalyzer;
use license_riskr::analyzer::incompatibility::IncompatibleComponentLicensesAnalyzer;
use license_riskr::analyzer::RiskAnalyzer;
use license_riskr::engine::RiskAnalysisEngine;
use license_riskr::knowledge::{compatibility, obsolescence, spreading, trend};
use license_riskr::loader;
use license_riskr::messages::MessageKey;
use license_riskr::models::{
    Component, ComponentBinding, LinkType, Project, Redistribution, RiskCategory,
    SupportedLicense, Weight,
};

fn binding(
    name: &str,
    license: SupportedLicense,
    link: LinkType,
    weight: Weight,
) -> ComponentBinding {
    ComponentBinding::new(Component::new(name, "1.0", license).unwrap(), link, weight)
}

fn single_binding_project(
    project_license: SupportedLicense,
    component: ComponentBinding,
) -> Project {
    Project::new(
        "scenario",
        "1.0",
        project_license,
        Redistribution::SoftwarePackageOrSaas,
        component,
    )
    .unwrap()
}

#[test]
fn scale_tables_stay_in_unit_range_for_every_license() {
    for license in SupportedLicense::ALL {
        assert!((0.0..=1.0).contains(&obsolescence::of(license).value()));
        assert!((0.0..=1.0).contains(&trend::of(license).value()));
        assert!((0.0..=1.0).contains(&spreading::of(license).value()));
    }
}

#[test]
fn pseudo_licenses_are_worst_on_every_scale() {
    for license in [
        SupportedLicense::Undefined,
        SupportedLicense::Unsupported,
        SupportedLicense::ForcedAsProjectLicense,
    ] {
        assert_eq!(obsolescence::of(license).value(), 1.0);
        assert_eq!(trend::of(license).value(), 1.0);
        assert_eq!(spreading::of(license).value(), 1.0);
    }
}

#[test]
fn absent_compatibility_tuples_answer_unsupported() {
    // EPL-1.0 is never studied as a project license, so no component can
    // have an entry against it.
    for &component in SupportedLicense::for_components() {
        for link in LinkType::ALL {
            assert_eq!(
                compatibility::of(
                    component,
                    SupportedLicense::Epl10,
                    link,
                    Redistribution::SoftwarePackageOrSaas
                ),
                compatibility::Compatibility::Unsupported
            );
        }
    }
}

#[test]
fn swapping_mit_for_static_gpl2_raises_incompatibility_exposure() {
    let harmless = single_binding_project(
        SupportedLicense::Apache20,
        binding("dep", SupportedLicense::Mit, LinkType::Dynamic, Weight::High),
    );
    let risky = single_binding_project(
        SupportedLicense::Apache20,
        binding(
            "dep",
            SupportedLicense::Gpl20Only,
            LinkType::Static,
            Weight::High,
        ),
    );

    let baseline = IncompatibleComponentLicensesAnalyzer::new(&harmless)
        .compute_result()
        .unwrap();
    let raised = IncompatibleComponentLicensesAnalyzer::new(&risky)
        .compute_result()
        .unwrap();

    assert_eq!(baseline.exposure(), 0.0);
    assert!(raised.exposure() > 0.0);
}

#[test]
fn homogeneous_mit_bill_has_no_heterogeneity_risk() {
    let project = single_binding_project(
        SupportedLicense::Mit,
        binding("dep", SupportedLicense::Mit, LinkType::Dynamic, Weight::High),
    );
    let analyzer = HeterogeneousComponentLicensesAnalyzer::new(&project);

    assert_eq!(analyzer.dominant_license(), Some(SupportedLicense::Mit));
    assert_eq!(analyzer.compute_result().unwrap().exposure(), 0.0);
}

#[test]
fn dominant_license_tie_resolves_to_declaration_order() {
    let mut project = single_binding_project(
        SupportedLicense::Mit,
        binding("a", SupportedLicense::Mit, LinkType::Dynamic, Weight::High),
    );
    project.add_binding(binding(
        "b",
        SupportedLicense::Lgpl30OrLater,
        LinkType::Dynamic,
        Weight::High,
    ));

    // Equal weight sums and equal counts: the first-declared license wins,
    // and LGPL-3.0-or-later is declared before MIT.
    let analyzer = HeterogeneousComponentLicensesAnalyzer::new(&project);
    assert_eq!(
        analyzer.dominant_license(),
        Some(SupportedLicense::Lgpl30OrLater)
    );
}

#[test]
fn undefined_component_license_is_flagged_by_every_compatibility_analyzer() {
    let project = single_binding_project(
        SupportedLicense::Apache20,
        binding(
            "mystery",
            SupportedLicense::Undefined,
            LinkType::Dynamic,
            Weight::High,
        ),
    );
    let results = RiskAnalysisEngine::with_default_analyzers(&project)
        .analyze()
        .unwrap();

    let incompatibility = results
        .iter()
        .find(|r| r.category() == RiskCategory::IncompatibleComponentLicenses)
        .unwrap();
    assert_eq!(incompatibility.exposure(), 1.0);
    assert!(incompatibility
        .root_causes()
        .iter()
        .any(|e| e.key == MessageKey::ComponentLicenseUnknown));

    let headroom = results
        .iter()
        .find(|r| r.category() == RiskCategory::LimitedProjectLicenseChoices)
        .unwrap();
    assert_eq!(headroom.exposure(), 1.0);
    assert!(headroom
        .root_causes()
        .iter()
        .all(|e| e.key == MessageKey::ProjectLicenseChoiceBlockedByUnknown));
}

#[test]
fn every_category_reports_scores_in_unit_range_on_the_sample_project() {
    let project = loader::project_from_json(loader::sample_json()).unwrap();
    let results = RiskAnalysisEngine::with_default_analyzers(&project)
        .analyze()
        .unwrap();

    assert_eq!(results.len(), 9);
    for result in &results {
        assert!(
            (0.0..=1.0).contains(&result.exposure()),
            "{} exposure out of range",
            result.category()
        );
        assert!(
            (0.0..=1.0).contains(&result.impact()),
            "{} impact out of range",
            result.category()
        );
        assert!((0.0..=1.0).contains(&result.risk_value()));
    }
}

#[test]
fn analysis_is_idempotent_across_repeated_runs() {
    let project = loader::project_from_json(loader::sample_json()).unwrap();
    let engine = RiskAnalysisEngine::with_default_analyzers(&project);

    let first = engine.analyze().unwrap();
    let second = engine.analyze().unwrap();
    assert_eq!(first, second);
}

#[test]
fn internal_only_redistribution_clears_compatibility_risk() {
    let project = Project::new(
        "internal-tool",
        "0.1",
        SupportedLicense::Mit,
        Redistribution::None,
        binding(
            "dep",
            SupportedLicense::Gpl30Only,
            LinkType::Static,
            Weight::High,
        ),
    )
    .unwrap();

    let result = IncompatibleComponentLicensesAnalyzer::new(&project)
        .compute_result()
        .unwrap();
    // Nothing is redistributed, so the copyleft terms never trigger.
    assert_eq!(result.exposure(), 0.0);
    assert_eq!(result.impact(), 0.0);
}

#[test]
fn json_report_serializes_structured_explanations() {
    let project = loader::project_from_json(loader::sample_json()).unwrap();
    let results = RiskAnalysisEngine::with_default_analyzers(&project)
        .analyze()
        .unwrap();

    let json = serde_json::to_string(&results).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = &parsed[0];
    assert!(first["category"].is_string());
    assert!(first["exposure"].is_number());
    assert!(first["root_causes"].is_array());
    // Explanations stay structured: a key plus values, no rendered prose.
    if let Some(cause) = first["root_causes"].get(0) {
        assert!(cause["key"].is_string());
        assert!(cause["values"].is_array());
    }
}
