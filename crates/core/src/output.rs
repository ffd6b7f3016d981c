//! All-or-nothing persistence of the generated files.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, TempPath};
use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::openapi::GeneratedFiles;

/// Write both generated files under `dest`, creating the directory if needed.
///
/// Both files are staged as temporary files in `dest` and only moved into
/// place once both are fully written. A models file from an earlier run is
/// moved aside first; if either move fails it is put back (or the new models
/// file removed when there was none), so a failed run leaves the previous
/// pair of files as it was.
pub fn write_outputs(dest: &Path, config: &GeneratorConfig, files: &GeneratedFiles) -> Result<()> {
    fs::create_dir_all(dest).map_err(|source| GenerateError::CreateDir {
        path: dest.to_path_buf(),
        source,
    })?;

    let models_path = dest.join(config.models_file_name());
    let client_path = dest.join(config.client_file_name());

    let models_tmp = stage(dest, &models_path, &files.models)?;
    let client_tmp = stage(dest, &client_path, &files.client)?;
    let previous_models = stash_existing(dest, &models_path)?;

    if let Err(e) = models_tmp.persist(&models_path) {
        if let Some(previous) = previous_models {
            restore(previous, &models_path);
        }
        return Err(GenerateError::Write {
            path: models_path,
            source: e.error,
        });
    }

    if let Err(e) = client_tmp.persist(&client_path) {
        match previous_models {
            Some(previous) => restore(previous, &models_path),
            None => {
                if let Err(err) = fs::remove_file(&models_path) {
                    warn!(
                        path = %models_path.display(),
                        error = %err,
                        "Failed to remove models file after client write failure."
                    );
                }
            }
        }
        return Err(GenerateError::Write {
            path: client_path,
            source: e.error,
        });
    }

    debug!(
        models = %models_path.display(),
        client = %client_path.display(),
        "Generated files written."
    );

    Ok(())
}

/// Move an existing file at `path` to a temporary name in `dir`. The stash is
/// deleted when dropped.
fn stash_existing(dir: &Path, path: &Path) -> Result<Option<TempPath>> {
    if !path.is_file() {
        return Ok(None);
    }
    let write_err = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };
    let stash = NamedTempFile::new_in(dir).map_err(write_err)?.into_temp_path();
    fs::rename(path, &stash).map_err(write_err)?;
    Ok(Some(stash))
}

/// Put a stashed file back at `path`.
fn restore(stash: TempPath, path: &Path) {
    if let Err(err) = stash.persist(path) {
        warn!(
            path = %path.display(),
            error = %err.error,
            "Failed to restore previous file after write failure."
        );
    }
}

/// Write `contents` to a temporary file next to `path`.
fn stage(dir: &Path, path: &Path, contents: &str) -> Result<NamedTempFile> {
    let write_err = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    Ok(file)
}
