//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::error::UvmgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `uvmgen_adapters::filesystem::LocalFilesystem` (production)
/// - `uvmgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Failures are reported as `ApplicationError::IoFailure` naming the path.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> UvmgenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> UvmgenResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> UvmgenResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
