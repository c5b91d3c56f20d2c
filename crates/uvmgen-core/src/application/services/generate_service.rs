//! Generate Service - main application orchestrator.
//!
//! Runs the whole pipeline for one environment:
//! 1. Read the module file and scan it for the target module
//! 2. Build and validate the environment descriptor
//! 3. Render every artifact
//! 4. Write them under the output directory

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::Filesystem,
        services::artifact_writer::{ArtifactWriter, WriteOptions},
    },
    domain::{
        DomainValidator as validator, EnvironmentDescriptor, GeneratedArtifact, ModuleScanner,
        ModuleSignature, ScanOptions, WriteResult, entities::environment, render_all,
    },
    error::UvmgenResult,
};

/// Everything one `generate` run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub env_name: String,
    pub module_file: PathBuf,
    /// Module to scan for; the first module in the file when `None`.
    pub top_module: Option<String>,
    pub output_dir: PathBuf,
    pub agent_count: u32,
    pub file_extension: String,
    pub scan: ScanOptions,
    pub write: WriteOptions,
}

impl GenerateRequest {
    pub fn new(
        env_name: impl Into<String>,
        module_file: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            env_name: env_name.into(),
            module_file: module_file.into(),
            top_module: None,
            output_dir: output_dir.into(),
            agent_count: environment::DEFAULT_AGENT_COUNT,
            file_extension: environment::DEFAULT_FILE_EXTENSION.to_string(),
            scan: ScanOptions::default(),
            write: WriteOptions::default(),
        }
    }

    pub fn with_top_module(mut self, top: impl Into<String>) -> Self {
        self.top_module = Some(top.into());
        self
    }

    pub fn with_agent_count(mut self, count: u32) -> Self {
        self.agent_count = count;
        self
    }

    pub fn with_file_extension(mut self, ext: impl Into<String>) -> Self {
        self.file_extension = ext.into();
        self
    }

    pub fn with_scan_options(mut self, scan: ScanOptions) -> Self {
        self.scan = scan;
        self
    }

    pub fn with_write_options(mut self, write: WriteOptions) -> Self {
        self.write = write;
        self
    }
}

/// Rendered but not yet written.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub module: ModuleSignature,
    pub descriptor: EnvironmentDescriptor,
    pub artifacts: Vec<GeneratedArtifact>,
}

impl GenerationPlan {
    /// Where each artifact would land under `output_dir`.
    pub fn target_paths(&self, output_dir: &Path) -> Vec<PathBuf> {
        self.artifacts
            .iter()
            .map(|a| output_dir.join(&a.path))
            .collect()
    }
}

/// Outcome of a successful `generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub environment: String,
    pub module: ModuleSignature,
    pub output_dir: PathBuf,
    pub written: Vec<WriteResult>,
}

impl GenerationReport {
    pub fn bytes_written(&self) -> usize {
        self.written.iter().map(|w| w.bytes_written).sum()
    }
}

/// Main generation service.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Scan a module file without generating anything.
    #[instrument(skip(self, options), fields(file = %module_file.display()))]
    pub fn scan(
        &self,
        module_file: &Path,
        top: Option<&str>,
        options: ScanOptions,
    ) -> UvmgenResult<ModuleSignature> {
        let source = self.filesystem.read_to_string(module_file)?;
        let module = ModuleScanner::with_options(options).scan(&source, top)?;
        info!(
            module = module.name(),
            ports = module.port_count(),
            "Resolved top module"
        );
        Ok(module)
    }

    /// Names of every module declared in a file, in textual order.
    pub fn list_modules(&self, module_file: &Path) -> UvmgenResult<Vec<String>> {
        let source = self.filesystem.read_to_string(module_file)?;
        Ok(ModuleScanner::module_names(&source))
    }

    /// Scan, validate and render without touching the output directory.
    #[instrument(skip_all, fields(env = %request.env_name))]
    pub fn plan(&self, request: &GenerateRequest) -> UvmgenResult<GenerationPlan> {
        // Reject a bad name before reading anything.
        validator::validate_env_name(&request.env_name)?;

        let module = self.scan(
            &request.module_file,
            request.top_module.as_deref(),
            request.scan,
        )?;

        let descriptor = EnvironmentDescriptor::builder()
            .env_name(&request.env_name)
            .dut_file(dut_file_name(&request.module_file))
            .module(module.clone())
            .agent_count(request.agent_count)
            .file_extension(&request.file_extension)
            .build()?;

        let artifacts = render_all(&descriptor);
        info!(artifacts = artifacts.len(), "Rendered environment");

        Ok(GenerationPlan {
            module,
            descriptor,
            artifacts,
        })
    }

    /// Full pipeline: plan, then write every artifact.
    #[instrument(
        skip_all,
        fields(env = %request.env_name, output = %request.output_dir.display())
    )]
    pub fn generate(&self, request: &GenerateRequest) -> UvmgenResult<GenerationReport> {
        let plan = self.plan(request)?;

        let writer = ArtifactWriter::new(self.filesystem.as_ref(), request.write);
        let written = writer.write_all(&plan.artifacts, &request.output_dir)?;

        info!(files = written.len(), "Generation completed successfully");
        Ok(GenerationReport {
            environment: request.env_name.clone(),
            module: plan.module,
            output_dir: request.output_dir.clone(),
            written,
        })
    }
}

/// File name the testbench `include`s for the DUT.
///
/// The basename of the module file; a trailing `.erb` (a template that is
/// expanded in place) is dropped, so `rtl/fifo.v.erb` gives `fifo.v`.
pub fn dut_file_name(module_file: &Path) -> String {
    let name = module_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.strip_suffix(".erb") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => name,
    }
}
