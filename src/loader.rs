//! Load a project definition from JSON into the validated in-memory model.
//!
//! The loader is a thin boundary: serde does the structural parsing, the
//! model constructors do the validation. License ids are matched
//! case-insensitively against the supported set; an unrecognized id
//! degrades to the `UNSUPPORTED` pseudo-license (with a warning log) so it
//! flows into the conservative sentinel path, and a missing component
//! license means `UNDEFINED`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::{
    Component, ComponentBinding, LinkType, Project, Redistribution, SupportedLicense, Weight,
};

#[derive(Debug, Deserialize)]
struct RawProject {
    name: String,
    version: String,
    licenses: Vec<String>,
    redistribution: Redistribution,
    components: Vec<RawBinding>,
}

#[derive(Debug, Deserialize)]
struct RawBinding {
    name: String,
    version: String,
    /// Absent means the component's license is unknown.
    #[serde(default)]
    license: Option<String>,
    link: LinkType,
    weight: Weight,
}

/// Read and validate a project definition file.
pub fn load_project(path: &Path) -> Result<Project> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read project definition {}", path.display()))?;
    project_from_json(&content)
        .with_context(|| format!("invalid project definition {}", path.display()))
}

/// Build a validated [`Project`] from a JSON document.
pub fn project_from_json(json: &str) -> Result<Project> {
    let raw: RawProject = serde_json::from_str(json)?;

    let mut licenses = raw.licenses.iter();
    let first_license = licenses
        .next()
        .map(|id| SupportedLicense::from_spdx(id))
        .context("a project needs at least one license")?;

    let mut bindings = raw.components.into_iter().map(|entry| {
        let license = match &entry.license {
            Some(id) => SupportedLicense::from_spdx(id),
            None => SupportedLicense::Undefined,
        };
        let component = Component::new(&entry.name, &entry.version, license)?;
        Ok::<_, crate::error::ValidationError>(ComponentBinding::new(
            component, entry.link, entry.weight,
        ))
    });

    let first_binding = bindings
        .next()
        .context("a project needs at least one component binding")??;

    let mut project = Project::new(
        &raw.name,
        &raw.version,
        first_license,
        raw.redistribution,
        first_binding,
    )?;
    for id in licenses {
        project.add_license(SupportedLicense::from_spdx(id))?;
    }
    for binding in bindings {
        project.add_binding(binding?);
    }

    log::debug!(
        "loaded project {} v{}: {} licenses, {} bindings",
        project.name(),
        project.version(),
        project.licenses().len(),
        project.bill().len()
    );
    Ok(project)
}

/// A complete project definition, used by `--sample` and the tests.
pub fn sample_json() -> &'static str {
    r#"{
  "name": "invoicing-backend",
  "version": "2.4.1",
  "licenses": ["Apache-2.0"],
  "redistribution": "software_package_or_saas",
  "components": [
    { "name": "http-kit", "version": "1.8.0", "license": "MIT", "link": "dynamic", "weight": "high" },
    { "name": "pdf-writer", "version": "0.9.2", "license": "LGPL-3.0-or-later", "link": "dynamic", "weight": "near_high" },
    { "name": "ledger-core", "version": "3.1.0", "license": "GPL-2.0-only", "link": "static", "weight": "near_low" },
    { "name": "legacy-csv", "version": "0.2.7", "link": "static", "weight": "low" }
  ]
}"#
}
