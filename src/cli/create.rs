// src/cli/create.rs — The create-plugin flow

use std::io::IsTerminal;

use anyhow::Result;

use crate::cli::Cli;
use crate::infra::config::Config;
use crate::infra::errors::ScaffoldError;
use crate::scaffold::{self, request, template, workspace, PluginRequest, PluginTree};

/// Run the one command athenagen has: collect the request, resolve the
/// workspace root, render the server index, create the folder structure.
pub fn run_create(cli: &Cli, config: &Config) -> Result<()> {
    let request = collect_request(cli, config)?;
    let root = workspace::resolve(cli.workspace.as_deref())?;

    // Render before any directory is created so a template failure leaves
    // the workspace untouched.
    let source = template::server_template_source(config.templates.server_index.as_deref())?;
    let ctx = template::ServerIndexContext {
        plugin_name: &request.name,
    };
    let server_index = template::render_server_index(&source, &ctx)?;

    let tree = PluginTree::new(&root, &config.scaffold.plugins_dir, &request);
    scaffold::create_folder_structure(&tree, &server_index)?;

    println!("Plugin {} created successfully.", request.name);
    Ok(())
}

/// Obtain the plugin name and webview choice, prompting only for what the
/// command line didn't provide and only when running on a terminal.
/// Prompt order matches the original generator: name first, then webview.
fn collect_request(cli: &Cli, config: &Config) -> Result<PluginRequest, ScaffoldError> {
    let raw = match &cli.name {
        Some(name) => name.clone(),
        None if stdin_is_interactive() => prompt_name(&config.scaffold.plugins_dir)?,
        None => return Err(ScaffoldError::EmptyName),
    };
    // Validate here, not at construction: an empty or bad name has to
    // abort before the webview question is asked.
    let name = request::validate_name(&raw)?.to_string();

    let webview = match cli.webview_flag() {
        Some(choice) => choice,
        None if stdin_is_interactive() => prompt_webview(config.scaffold.webview_default),
        None => config.scaffold.webview_default,
    };

    PluginRequest::new(&name, webview)
}

fn stdin_is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Free-text name prompt. Esc aborts with the empty-name error; no
/// filesystem work has happened yet.
fn prompt_name(plugins_dir: &std::path::Path) -> Result<String, ScaffoldError> {
    let help = format!("The directory name under {}", plugins_dir.display());
    inquire::Text::new("Plugin name:")
        .with_help_message(&help)
        .prompt()
        .map_err(|_| ScaffoldError::EmptyName)
}

/// Yes/No webview choice. A dismissed prompt means no webview folder.
fn prompt_webview(default_yes: bool) -> bool {
    let start = usize::from(!default_yes);
    inquire::Select::new("Do you want a webview folder?", vec!["Yes", "No"])
        .with_starting_cursor(start)
        .prompt()
        .map(|choice| choice == "Yes")
        .unwrap_or(false)
}
