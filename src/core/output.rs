use crate::api::WriteError;
use std::fs;
use std::path::Path;

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> Result<(), WriteError> {
    let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };
    if !dir.exists() {
        log::debug!("creating directory {}", dir.display());
        fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Write `content` as the whole file at `path`, creating parent directories
/// first. Existing files are overwritten.
pub fn save(path: &Path, content: &str) -> Result<(), WriteError> {
    ensure_parent_dir(path)?;
    fs::write(path, content).map_err(|source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    })
}
