//! End-to-end generation: registry file in, three artifacts out.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use dispatchgen_application::ports::{ArtifactSink, ArtifactSinkError};
use dispatchgen_application::{ApplicationError, BuildDispatchModel};
use dispatchgen_domain::{CommandScope, DispatchModel, GeneratorSettings};
use thiserror::Error;
use tracing::{debug, info};

use crate::codegen::render_artifacts;
use crate::registry::{XmlNode, parse_registry};

/// Errors that can occur during generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The registry file could not be opened.
    #[error("failed to read registry {path}: {source}")]
    Read {
        /// Registry path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The registry is not well-formed XML.
    #[error("malformed registry XML: {0}")]
    Xml(#[from] xmltree::ParseError),

    /// The header path has no file name to include.
    #[error("header path has no file name: {0}")]
    InvalidOutputPath(PathBuf),

    /// The registry content or the settings were rejected.
    #[error(transparent)]
    Model(#[from] ApplicationError),

    /// An artifact could not be written.
    #[error(transparent)]
    Write(#[from] ArtifactSinkError),
}

/// Input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPaths {
    /// Registry XML to read.
    pub registry: PathBuf,
    /// C header to write.
    pub header: PathBuf,
    /// C++ mixin header to write.
    pub mixin_header: PathBuf,
    /// C source to write.
    pub source: PathBuf,
}

/// Summary of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    /// Distinct canonical conditions.
    pub conditions: usize,
    /// Commands classified as instance-level.
    pub instance_commands: usize,
    /// Commands classified as physical-device-level.
    pub physical_device_commands: usize,
    /// Commands classified as device-level.
    pub device_commands: usize,
}

impl GenerationReport {
    fn from_model(model: &DispatchModel) -> Self {
        Self {
            conditions: model.conditions.len(),
            instance_commands: model.classification.count(CommandScope::Instance),
            physical_device_commands: model.classification.count(CommandScope::PhysicalDevice),
            device_commands: model.classification.count(CommandScope::Device),
        }
    }
}

/// Reads the registry, builds the model and writes the header, the source
/// file and the mixin header, in that order.
///
/// Nothing is written unless every artifact renders.
///
/// # Errors
///
/// Returns an error if the registry cannot be read or parsed, if the model
/// cannot be built, or if an artifact cannot be written.
pub fn generate_files<S: ArtifactSink>(
    paths: &GenerationPaths,
    settings: &GeneratorSettings,
    sink: &S,
) -> Result<GenerationReport, GenerateError> {
    let header_name = paths
        .header
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| GenerateError::InvalidOutputPath(paths.header.clone()))?;

    let model = load_model(&paths.registry, settings)?;
    let artifacts = render_artifacts(&model, settings, header_name);

    for (path, contents) in [
        (&paths.header, &artifacts.header),
        (&paths.source, &artifacts.source),
        (&paths.mixin_header, &artifacts.mixin_header),
    ] {
        sink.write(path, contents)?;
        info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    }

    let report = GenerationReport::from_model(&model);
    info!(
        conditions = report.conditions,
        instance = report.instance_commands,
        physical_device = report.physical_device_commands,
        device = report.device_commands,
        "generated dispatch artifacts"
    );
    Ok(report)
}

/// Reads and parses the registry file into a [`DispatchModel`].
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is not well-formed XML,
/// or the model cannot be built from it.
pub fn load_model(path: &Path, settings: &GeneratorSettings) -> Result<DispatchModel, GenerateError> {
    debug!(path = %path.display(), "reading registry");
    let file = File::open(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let root = parse_registry(BufReader::new(file))?;
    Ok(BuildDispatchModel::new(settings).execute(&XmlNode::new(&root))?)
}
