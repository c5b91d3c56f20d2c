//! `uvmgen scan`: show what the scanner extracts without generating.

use tracing::instrument;

use uvmgen_adapters::LocalFilesystem;
use uvmgen_core::{application::GenerateService, domain::ScanOptions};

use crate::{
    cli::{OutputFormat, ScanArgs},
    commands::require_module_file,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: ScanArgs, output: OutputManager) -> CliResult<()> {
    require_module_file(&args.file)?;
    let service = GenerateService::new(Box::new(LocalFilesystem::new()));

    if args.list {
        let names = service.list_modules(&args.file)?;
        return match output.format() {
            OutputFormat::Json => output.json(&names),
            _ if names.is_empty() => {
                output.warning("no modules declared")?;
                Ok(())
            }
            _ => {
                for name in &names {
                    output.print(name)?;
                }
                Ok(())
            }
        };
    }

    let module = service.scan(&args.file, args.top.as_deref(), ScanOptions::default())?;
    match output.format() {
        OutputFormat::Json => output.json(&module),
        _ => Ok(output.module(&module)?),
    }
}
