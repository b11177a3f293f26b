// src/scaffold/mod.rs — Plugin scaffolding core

pub mod request;
pub mod template;
pub mod tree;
pub mod workspace;

use std::fs;
use std::io::ErrorKind;

use crate::infra::errors::ScaffoldError;

pub use request::PluginRequest;
pub use tree::PluginTree;

/// Create the plugin's folder structure, then write the two index files.
/// Directories are created one at a time, in the tree's fixed order,
/// aborting on the first failure; partially created trees are reported
/// but not rolled back.
///
/// The plugin root is created with `create_dir`, never `create_dir_all`:
/// a missing plugins base surfaces as [`ScaffoldError::PluginsDirMissing`]
/// and a name collision as [`ScaffoldError::PluginExists`] before any
/// other path is touched.
pub fn create_folder_structure(tree: &PluginTree, server_index: &str) -> Result<(), ScaffoldError> {
    if let Err(e) = fs::create_dir(&tree.plugin_root) {
        return Err(match e.kind() {
            ErrorKind::NotFound => ScaffoldError::PluginsDirMissing {
                path: tree.plugins_base.clone(),
            },
            ErrorKind::AlreadyExists => ScaffoldError::PluginExists {
                name: tree.name.clone(),
            },
            _ => ScaffoldError::Io(e),
        });
    }
    tracing::debug!("created {}", tree.plugin_root.display());

    for dir in tree.directories().iter().skip(1) {
        fs::create_dir(dir)?;
        tracing::debug!("created {}", dir.display());
    }

    fs::write(&tree.client_index, "")?;
    fs::write(&tree.server_index, server_index)?;
    tracing::info!("plugin '{}' scaffolded at {}", tree.name, tree.plugin_root.display());

    Ok(())
}
