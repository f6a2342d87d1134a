use crate::error::{InstallError, Result};
use std::{fs, path::PathBuf};

/// Creates `path` if it is missing. Fails if something other than a directory is already there.
pub fn make_path_and_create(path: impl Into<PathBuf>) -> Result<PathBuf> {
    let path = path.into();

    if path.exists() && !path.is_dir() {
        return Err(InstallError::NotADirectory(path));
    }

    fs::create_dir_all(&path)?;
    Ok(path)
}
