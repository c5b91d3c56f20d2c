//! Implementation of the `uvmgen generate` command.
//!
//! Translates CLI arguments and config defaults into a `GenerateRequest`,
//! runs the core service and reports what was written.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use uvmgen_adapters::LocalFilesystem;
use uvmgen_core::{
    application::{GenerateRequest, GenerateService, GenerationPlan, WriteOptions},
    domain::{ArtifactKind, ScanOptions},
};

use crate::{
    cli::GenerateArgs,
    commands::require_module_file,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `uvmgen generate`.
///
/// 1. Check the module file exists
/// 2. Merge flags over config defaults
/// 3. `--dry-run`: render and list target paths
/// 4. Otherwise write every artifact and summarize
#[instrument(skip_all, fields(env = %args.name))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    require_module_file(&args.file)?;
    if args.output.is_file() {
        return Err(CliError::InvalidInput {
            message: format!("--output {} is a file, not a directory", args.output.display()),
        });
    }

    let request = build_request(&args, &config);
    debug!(?request, "Request resolved");

    let service = GenerateService::new(Box::new(LocalFilesystem::new()));

    if args.dry_run {
        let plan = service.plan(&request)?;
        return report_plan(&plan, &request, &output);
    }

    let report = service.generate(&request)?;
    info!(
        files = report.written.len(),
        bytes = report.bytes_written(),
        "Environment generated"
    );

    if output.is_json() {
        return output.json(&report);
    }

    output.header(&format!(
        "Generated '{}' from module '{}'",
        report.environment,
        report.module.name()
    ))?;
    for written in &report.written {
        output.success(&written.path.display().to_string())?;
    }
    if !report.module.is_terminated() {
        output.warning("no 'endmodule' found; ports were read to end of file")?;
    }
    output.print("")?;
    output.print(&format!(
        "{} files, {} bytes under {}",
        report.written.len(),
        report.bytes_written(),
        report.output_dir.join(&report.environment).display()
    ))?;

    Ok(())
}

/// Flags win; anything left unset comes from config.
fn build_request(args: &GenerateArgs, config: &AppConfig) -> GenerateRequest {
    let strict = args.strict || config.generate.strict;
    let scan = if strict {
        ScanOptions::strict()
    } else {
        ScanOptions::default()
    };

    let mut request = GenerateRequest::new(&args.name, &args.file, &args.output)
        .with_agent_count(args.agents.unwrap_or(config.generate.agent_count))
        .with_file_extension(
            args.ext
                .clone()
                .unwrap_or_else(|| config.generate.file_extension.clone()),
        )
        .with_scan_options(scan)
        .with_write_options(WriteOptions {
            overwrite: args.force || config.generate.overwrite,
        });
    if let Some(top) = &args.top {
        request = request.with_top_module(top);
    }
    request
}

#[derive(Debug, Serialize)]
struct PlannedFile {
    kind: ArtifactKind,
    path: PathBuf,
    bytes: usize,
}

fn report_plan(
    plan: &GenerationPlan,
    request: &GenerateRequest,
    output: &OutputManager,
) -> CliResult<()> {
    let files: Vec<PlannedFile> = plan
        .artifacts
        .iter()
        .zip(plan.target_paths(&request.output_dir))
        .map(|(artifact, path)| PlannedFile {
            kind: artifact.kind,
            path,
            bytes: artifact.size(),
        })
        .collect();

    if output.is_json() {
        return output.json(&files);
    }

    output.info(&format!(
        "Dry run: would generate '{}' from module '{}' ({} ports)",
        request.env_name,
        plan.module.name(),
        plan.module.port_count()
    ))?;
    for file in &files {
        output.print(&format!("  {} ({} bytes)", file.path.display(), file.bytes))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::{Cli, Commands};

    fn parse(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["uvmgen", "generate"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Generate(args) => args,
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn config_fills_unset_flags() {
        let mut config = AppConfig::default();
        config.generate.agent_count = 4;
        config.generate.file_extension = "svh".into();
        config.generate.overwrite = true;

        let request = build_request(&parse(&["-n", "fifo", "-f", "fifo.v", "-o", "out"]), &config);

        assert_eq!(request.agent_count, 4);
        assert_eq!(request.file_extension, "svh");
        assert!(request.write.overwrite);
        assert_eq!(request.scan, ScanOptions::default());
        assert!(request.top_module.is_none());
    }

    #[test]
    fn flags_override_config() {
        let mut config = AppConfig::default();
        config.generate.agent_count = 4;

        let request = build_request(
            &parse(&[
                "-n", "fifo", "-f", "soc.v", "-t", "fifo_ctrl", "-o", "out", "--agents", "2",
                "--ext", "sv", "--strict",
            ]),
            &config,
        );

        assert_eq!(request.agent_count, 2);
        assert_eq!(request.file_extension, "sv");
        assert_eq!(request.top_module.as_deref(), Some("fifo_ctrl"));
        assert_eq!(request.scan, ScanOptions::strict());
        assert!(!request.write.overwrite);
    }

    #[test]
    fn strict_from_config() {
        let mut config = AppConfig::default();
        config.generate.strict = true;
        let request = build_request(&parse(&["-n", "a", "-f", "a.v", "-o", "out"]), &config);
        assert_eq!(request.scan, ScanOptions::strict());
    }
}
