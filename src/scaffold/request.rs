// src/scaffold/request.rs — Scaffold request validation

use crate::infra::errors::ScaffoldError;

/// What to create: a plugin name and whether it gets a webview folder.
/// Built once per invocation, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRequest {
    pub name: String,
    pub webview: bool,
}

/// Trim and validate a raw plugin name. Empty names and names that could
/// escape the plugins directory are rejected. The interactive flow calls
/// this as soon as the name is known, so a bad name aborts before the
/// webview question is ever asked.
pub fn validate_name(name: &str) -> Result<&str, ScaffoldError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScaffoldError::EmptyName);
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(ScaffoldError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(name)
}

impl PluginRequest {
    /// Build a request from raw user input. The name goes through
    /// [`validate_name`], so construction never succeeds with a name the
    /// filesystem layer would have to second-guess.
    pub fn new(name: &str, webview: bool) -> Result<Self, ScaffoldError> {
        let name = validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            webview,
        })
    }
}
