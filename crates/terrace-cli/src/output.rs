//! Writing the artifact set.
//!
//! Each artifact is first written to a temp file inside its destination directory. The temp
//! files are renamed into place only once all of them were written, so an I/O failure halfway
//! through leaves the previous artifacts untouched.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use terrace::{Artifacts, Destination};

use crate::error::{CliError, Result};

/// Output directory per artifact destination.
#[derive(Debug, Clone)]
pub struct OutputDirs {
    pub json: PathBuf,
    pub data: PathBuf,
}

impl OutputDirs {
    pub fn dir_for(&self, destination: Destination) -> &Path {
        match destination {
            Destination::Json => &self.json,
            Destination::Data => &self.data,
        }
    }
}

/// Writes every artifact and returns the final paths in artifact order.
pub fn write_artifacts(artifacts: &Artifacts, dirs: &OutputDirs) -> Result<Vec<PathBuf>> {
    let mut staged: Vec<(NamedTempFile, PathBuf)> = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let dir = dirs.dir_for(artifact.destination);
        fs::create_dir_all(dir).map_err(|source| CliError::Write {
            path: dir.to_path_buf(),
            source,
        })?;

        let target = dir.join(artifact.name);
        let write_err = |source| CliError::Write {
            path: target.clone(),
            source,
        };
        let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
        file.write_all(artifact.contents.as_bytes())
            .map_err(write_err)?;
        file.flush().map_err(write_err)?;
        staged.push((file, target));
    }

    let mut written = Vec::with_capacity(staged.len());
    for (file, target) in staged {
        file.persist(&target).map_err(|err| CliError::Write {
            path: target.clone(),
            source: err.error,
        })?;
        tracing::info!(path = %target.display(), "wrote artifact");
        written.push(target);
    }
    Ok(written)
}
