// src/scaffold/template.rs — Server index rendering (minijinja)

use std::borrow::Cow;
use std::path::Path;

use minijinja::Environment;
use serde::Serialize;

use crate::infra::errors::ScaffoldError;

/// Bundled server index template (embedded in the binary via include_str!).
/// Byte-for-byte the snippet the original generator emitted, with the name
/// as the only substitution point.
const SERVER_INDEX_TEMPLATE: &str = include_str!("../../templates/server.index.ts.j2");

/// Typed parameter record for the server index template.
#[derive(Debug, Serialize)]
pub struct ServerIndexContext<'a> {
    pub plugin_name: &'a str,
}

/// Pick the template source: the configured custom file when present,
/// the bundled template otherwise.
pub fn server_template_source(custom: Option<&Path>) -> Result<Cow<'static, str>, ScaffoldError> {
    match custom {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(source) => Ok(Cow::Owned(source)),
            Err(source) => Err(ScaffoldError::TemplateRead {
                path: path.to_path_buf(),
                source,
            }),
        },
        None => Ok(Cow::Borrowed(SERVER_INDEX_TEMPLATE)),
    }
}

/// Render the server index from the given template source. Rendering is
/// done before any directory is created, so a bad custom template leaves
/// the workspace untouched.
pub fn render_server_index(
    source: &str,
    ctx: &ServerIndexContext<'_>,
) -> Result<String, ScaffoldError> {
    let mut env = Environment::new();
    // minijinja strips a template's final newline by default; the
    // generated index must keep it.
    env.set_keep_trailing_newline(true);
    Ok(env.render_str(source, ctx)?)
}
