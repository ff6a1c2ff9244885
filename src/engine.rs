use crate::analyzer::component_headroom::LimitedComponentLicenseChoicesAnalyzer;
use crate::analyzer::component_obsolescence::ObsoleteComponentLicensesAnalyzer;
use crate::analyzer::component_spreading::ScarcelySpreadComponentLicensesAnalyzer;
use crate::analyzer::component_trend::UnfashionableComponentLicensesAnalyzer;
use crate::analyzer::heterogeneity::HeterogeneousComponentLicensesAnalyzer;
use crate::analyzer::incompatibility::IncompatibleComponentLicensesAnalyzer;
use crate::analyzer::misalignment::MisalignedComponentLicensesAnalyzer;
use crate::analyzer::project_headroom::LimitedProjectLicenseChoicesAnalyzer;
use crate::analyzer::project_licenses::UnappealingProjectLicensesAnalyzer;
use crate::analyzer::RiskAnalyzer;
use crate::error::ValidationError;
use crate::models::{Project, RiskResult};

/// Runs an ordered collection of risk analyzers, all bound to the same
/// project, and returns their results in registration order.
///
/// The engine never aggregates across categories: exposure in one category
/// is not commensurable with exposure in another, so combining them is left
/// to whoever consumes the results.
///
/// The engine borrows the project for its whole lifetime, which statically
/// rules out appending licenses or bindings while an analysis is possible.
pub struct RiskAnalysisEngine<'p> {
    project: &'p Project,
    analyzers: Vec<Box<dyn RiskAnalyzer + 'p>>,
}

impl<'p> RiskAnalysisEngine<'p> {
    pub fn new(project: &'p Project) -> Self {
        RiskAnalysisEngine {
            project,
            analyzers: Vec::new(),
        }
    }

    /// An engine with every analyzer registered, in the canonical reporting
    /// order.
    pub fn with_default_analyzers(project: &'p Project) -> Self {
        let mut engine = Self::new(project);
        engine
            .analyzers
            .push(Box::new(IncompatibleComponentLicensesAnalyzer::new(project)));
        engine
            .analyzers
            .push(Box::new(MisalignedComponentLicensesAnalyzer::new(project)));
        engine
            .analyzers
            .push(Box::new(HeterogeneousComponentLicensesAnalyzer::new(project)));
        engine
            .analyzers
            .push(Box::new(ObsoleteComponentLicensesAnalyzer::new(project)));
        engine
            .analyzers
            .push(Box::new(UnfashionableComponentLicensesAnalyzer::new(project)));
        engine.analyzers.push(Box::new(
            ScarcelySpreadComponentLicensesAnalyzer::new(project),
        ));
        engine
            .analyzers
            .push(Box::new(UnappealingProjectLicensesAnalyzer::new(project)));
        engine
            .analyzers
            .push(Box::new(LimitedProjectLicenseChoicesAnalyzer::new(project)));
        engine.analyzers.push(Box::new(
            LimitedComponentLicenseChoicesAnalyzer::new(project),
        ));
        engine
    }

    /// Register an analyzer. The analyzer must be bound to the same project
    /// instance the engine holds; one bound elsewhere is rejected.
    pub fn add_risk_analyzer(
        &mut self,
        analyzer: Box<dyn RiskAnalyzer + 'p>,
    ) -> Result<(), ValidationError> {
        if !std::ptr::eq(self.project, analyzer.project()) {
            return Err(ValidationError::ForeignProject);
        }
        self.analyzers.push(analyzer);
        Ok(())
    }

    pub fn project(&self) -> &Project {
        self.project
    }

    pub fn analyzer_count(&self) -> usize {
        self.analyzers.len()
    }

    /// Run every registered analyzer, in registration order. The result
    /// order is significant: it is the order reports present.
    pub fn analyze(&self) -> Result<Vec<RiskResult>, ValidationError> {
        log::debug!(
            "analyzing {} v{} with {} analyzers",
            self.project.name(),
            self.project.version(),
            self.analyzers.len()
        );
        self.analyzers
            .iter()
            .map(|analyzer| analyzer.compute_result())
            .collect()
    }
}
