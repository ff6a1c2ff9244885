//! Licensing-risk scoring for software projects.
//!
//! Given a project's declared licenses, its redistribution mode and its bill
//! of third-party component bindings, the engine runs a family of risk
//! analyzers, one per risk category, over a compiled-in base of knowledge
//! (license compatibility, obsolescence, trend and spreading tables) and
//! returns normalized exposure/impact scores with structured explanations.
//!
//! The scores are heuristic: they point a review at the risky parts of a
//! dependency set, they are not legal advice.
//!
//! ```no_run
//! use license_riskr::engine::RiskAnalysisEngine;
//! use license_riskr::loader;
//!
//! # fn main() -> anyhow::Result<()> {
//! let project = loader::project_from_json(loader::sample_json())?;
//! let engine = RiskAnalysisEngine::with_default_analyzers(&project);
//! for result in engine.analyze()? {
//!     println!("{}: {:.4}", result.category(), result.risk_value());
//! }
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod cli;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod loader;
pub mod messages;
pub mod models;
pub mod report;

pub use engine::RiskAnalysisEngine;
pub use error::ValidationError;
pub use models::{
    Component, ComponentBinding, LinkType, Project, Redistribution, RiskCategory, RiskResult,
    SupportedLicense, Weight,
};
