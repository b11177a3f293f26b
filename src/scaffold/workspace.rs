// src/scaffold/workspace.rs — Workspace root resolution

use std::path::{Path, PathBuf};

use crate::infra::errors::ScaffoldError;

/// Resolve the workspace root: the `--workspace` flag when given, the
/// current directory otherwise. The root must exist and be a directory.
/// Nothing is created here; whether it actually is an Athena workspace
/// only surfaces once the plugin root is created.
pub fn resolve(flag: Option<&Path>) -> Result<PathBuf, ScaffoldError> {
    let root = match flag {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().map_err(|_| ScaffoldError::NoWorkspace {
            path: PathBuf::from("."),
        })?,
    };

    if !root.is_dir() {
        return Err(ScaffoldError::NoWorkspace { path: root });
    }
    Ok(root)
}
