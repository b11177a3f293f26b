// src/infra/errors.rs — Error taxonomy for athenagen

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a scaffold invocation.
///
/// Every variant is terminal: the invocation stops, the message is shown
/// to the user, nothing is retried. Generic filesystem failures keep the
/// underlying `std::io::Error` reachable through `source()`.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // Request errors (raised before any filesystem activity)
    #[error("Please enter a plugin name.")]
    EmptyName,

    #[error("Plugin name '{name}' must not contain path separators or '..'.")]
    InvalidName { name: String },

    // Workspace errors
    #[error("No workspace found at {}.", .path.display())]
    NoWorkspace { path: PathBuf },

    #[error("Couldn't find the plugins folder at {}. Are you sure this is an Athena workspace?", .path.display())]
    PluginsDirMissing { path: PathBuf },

    #[error("Plugin '{name}' already exists.")]
    PluginExists { name: String },

    // Infra
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Couldn't read the server template at {}: {}", .path.display(), .source)]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error creating folder structure: {0}")]
    Io(#[from] std::io::Error),
}
