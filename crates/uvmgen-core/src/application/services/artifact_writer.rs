//! Writes rendered artifacts through the `Filesystem` port.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{GeneratedArtifact, WriteResult},
    error::UvmgenResult,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOptions {
    /// Replace files that already exist. Off by default.
    pub overwrite: bool,
}

/// Serializes artifacts under an output root.
///
/// Writes are not transactional: [`ArtifactWriter::write_all`] stops at the
/// first I/O failure and leaves earlier files in place. Existing files are
/// all checked before the first write, so a refused overwrite touches nothing.
pub struct ArtifactWriter<'fs> {
    fs: &'fs dyn Filesystem,
    options: WriteOptions,
}

impl<'fs> ArtifactWriter<'fs> {
    pub fn new(fs: &'fs dyn Filesystem, options: WriteOptions) -> Self {
        Self { fs, options }
    }

    /// Write one artifact to `base/<artifact.path>`, creating parent directories.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::ArtifactExists`] if the file exists and
    ///   overwrite is off
    /// - [`ApplicationError::IoFailure`] from the filesystem
    #[instrument(skip_all, fields(kind = %artifact.kind))]
    pub fn write(&self, artifact: &GeneratedArtifact, base: &Path) -> UvmgenResult<WriteResult> {
        let path = base.join(&artifact.path);

        if self.fs.exists(&path) {
            if !self.options.overwrite {
                return Err(ApplicationError::ArtifactExists { path }.into());
            }
            debug!(path = %path.display(), "overwriting");
        }

        if let Some(parent) = path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write_file(&path, &artifact.content)?;

        info!(path = %path.display(), bytes = artifact.size(), "Generated file");
        Ok(WriteResult {
            kind: artifact.kind,
            path,
            bytes_written: artifact.size(),
        })
    }

    /// Write artifacts in order, aborting on the first failure.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::ArtifactExists`] for the first target that
    ///   exists when overwrite is off, before anything is written
    /// - [`ApplicationError::IoFailure`] from the filesystem
    pub fn write_all(
        &self,
        artifacts: &[GeneratedArtifact],
        base: &Path,
    ) -> UvmgenResult<Vec<WriteResult>> {
        if !self.options.overwrite {
            if let Some(path) = artifacts
                .iter()
                .map(|artifact| base.join(&artifact.path))
                .find(|path| self.fs.exists(path))
            {
                return Err(ApplicationError::ArtifactExists { path }.into());
            }
        }

        artifacts
            .iter()
            .map(|artifact| self.write(artifact, base))
            .collect()
    }
}
