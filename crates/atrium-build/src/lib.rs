//! Generation-side engine: resolve a model's schema metadata into field
//! assignments and emit the dashboard definition and resource controller
//! source artifacts.

mod error;
mod render;
mod resolve;

pub use error::GenerateError;
pub use resolve::{ResolvedAttribute, resolve_attributes, scalar_kind};

use atrium_schema::{naming, node::Schema};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

/// Default upper bound on generated `table_attributes`, so index listings
/// stay readable no matter how wide the model is.
pub const TABLE_ATTRIBUTE_LIMIT: usize = 5;

///
/// GeneratorConfig
///

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub table_attribute_limit: usize,
    pub dashboard_dir: PathBuf,
    pub controller_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            table_attribute_limit: TABLE_ATTRIBUTE_LIMIT,
            dashboard_dir: PathBuf::from("dashboards"),
            controller_dir: PathBuf::from("controllers"),
        }
    }
}

///
/// Artifact
///
/// One rendered source artifact and its path relative to the output root.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Artifact {
    pub path: PathBuf,
    pub text: String,
}

///
/// GeneratedResource
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedResource {
    pub dashboard: Artifact,
    pub controller: Artifact,
}

///
/// DashboardGenerator
///
/// One-shot, synchronous generation for a named model: resolve against
/// the schema registry, render both artifacts, optionally write them out.
///

pub struct DashboardGenerator<'a> {
    schema: &'a Schema,
    config: GeneratorConfig,
}

impl<'a> DashboardGenerator<'a> {
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self::with_config(schema, GeneratorConfig::default())
    }

    #[must_use]
    pub const fn with_config(schema: &'a Schema, config: GeneratorConfig) -> Self {
        Self { schema, config }
    }

    /// Render both artifacts for a model without touching the filesystem.
    pub fn generate(&self, model_name: &str) -> Result<GeneratedResource, GenerateError> {
        let model = self
            .schema
            .get(model_name)
            .ok_or_else(|| GenerateError::ModelNotFound {
                model: model_name.to_string(),
            })?;

        let attributes = resolve_attributes(model, self.schema);

        let dashboard = Artifact {
            path: self
                .config
                .dashboard_dir
                .join(format!("{}_dashboard.rs", model.name)),
            text: render::dashboard_artifact(model, &attributes, self.config.table_attribute_limit),
        };

        let controller = Artifact {
            path: self
                .config
                .controller_dir
                .join(format!("{}_controller.rs", naming::pluralize(&model.name))),
            text: render::controller_artifact(model),
        };

        Ok(GeneratedResource {
            dashboard,
            controller,
        })
    }

    /// Render and write both artifacts under `root`, overwriting
    /// unconditionally. Either both files land or neither does.
    pub fn generate_into(
        &self,
        model_name: &str,
        root: &Path,
    ) -> Result<GeneratedResource, GenerateError> {
        let resource = self.generate(model_name)?;

        let dashboard_path = root.join(&resource.dashboard.path);
        let controller_path = root.join(&resource.controller.path);

        write_artifact(&dashboard_path, &resource.dashboard.text)?;
        if let Err(e) = write_artifact(&controller_path, &resource.controller.text) {
            // roll back the first write so a failure leaves no partial output
            let _ = fs::remove_file(&dashboard_path);
            return Err(e.into());
        }

        info!(
            model = model_name,
            dashboard = %dashboard_path.display(),
            controller = %controller_path.display(),
            "generated admin artifacts"
        );

        Ok(resource)
    }
}

fn write_artifact(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, text)
}
