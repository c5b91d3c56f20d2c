//! One module per subcommand.  Each exposes an `execute` function that
//! takes parsed arguments and returns a [`crate::error::CliResult`].

use std::path::Path;

use crate::error::{CliError, CliResult};

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod scan;

/// Fail early with a not-found error instead of a generic I/O failure.
fn require_module_file(path: &Path) -> CliResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::ModuleFileNotFound {
            path: path.to_path_buf(),
        })
    }
}
