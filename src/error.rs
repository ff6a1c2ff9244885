use thiserror::Error;

/// Validation failures surfaced at construction or registration time.
///
/// Nothing in here is recoverable internally: an invalid value is rejected at
/// the boundary it crosses, before any analysis starts. A well-formed query
/// that merely lacks table data is *not* an error; the knowledge tables
/// answer those with a conservative sentinel instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("project name must not be empty")]
    EmptyProjectName,

    #[error("project version must not be empty")]
    EmptyProjectVersion,

    #[error("component name must not be empty")]
    EmptyComponentName,

    #[error("component version must not be empty")]
    EmptyComponentVersion,

    #[error("project license {0} is already declared")]
    DuplicateProjectLicense(String),

    #[error("exposure {0} is outside [0, 1]")]
    ExposureOutOfRange(f64),

    #[error("impact {0} is outside [0, 1]")]
    ImpactOutOfRange(f64),

    #[error("analyzer is bound to a different project")]
    ForeignProject,
}
