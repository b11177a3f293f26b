// src/cli/mod.rs — CLI definition (clap derive)

pub mod create;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "athenagen",
    about = "Plugin scaffolding for the Athena Framework",
    version
)]
pub struct Cli {
    /// Plugin name (prompted for when omitted)
    pub name: Option<String>,

    /// Create the webview folder without asking
    #[arg(long)]
    pub webview: bool,

    /// Skip the webview folder without asking
    #[arg(long, conflicts_with = "webview")]
    pub no_webview: bool,

    /// Workspace root (defaults to the current directory)
    #[arg(short, long)]
    pub workspace: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The webview choice carried by flags, when either flag was given.
    pub fn webview_flag(&self) -> Option<bool> {
        match (self.webview, self.no_webview) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
