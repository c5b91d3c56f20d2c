use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::ArtifactKind;

/// One rendered file, ready for the writer.
///
/// `path` is relative to the output root (`<env>/<env>_pkg.sv`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedArtifact {
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            kind,
            path: path.into(),
            content,
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Outcome of writing one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteResult {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub bytes_written: usize,
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        &self.path
    }
}
