// src/scaffold/tree.rs — Plugin directory tree computation

use std::path::{Path, PathBuf};

use super::request::PluginRequest;

/// Every path a scaffold invocation will touch, computed up front from
/// the workspace root, the plugins base and the request. Purely a
/// computation; creation happens in [`super::create_folder_structure`].
#[derive(Debug, Clone)]
pub struct PluginTree {
    /// The plugin's directory name (the validated request name).
    pub name: String,
    /// `<root>/<plugins_dir>` — must already exist in an Athena workspace.
    pub plugins_base: PathBuf,
    /// `<plugins_base>/<name>` — created first, atomically or not at all.
    pub plugin_root: PathBuf,
    pub client: PathBuf,
    pub client_src: PathBuf,
    pub server: PathBuf,
    pub server_src: PathBuf,
    /// Present iff the request asked for a webview folder.
    pub webview: Option<PathBuf>,
    pub client_index: PathBuf,
    pub server_index: PathBuf,
}

impl PluginTree {
    pub fn new(root: &Path, plugins_dir: &Path, request: &PluginRequest) -> Self {
        let plugins_base = root.join(plugins_dir);
        let plugin_root = plugins_base.join(&request.name);
        let client = plugin_root.join("client");
        let server = plugin_root.join("server");

        Self {
            name: request.name.clone(),
            client_src: client.join("src"),
            server_src: server.join("src"),
            webview: request.webview.then(|| plugin_root.join("webview")),
            client_index: client.join("index.ts"),
            server_index: server.join("index.ts"),
            plugins_base,
            plugin_root,
            client,
            server,
        }
    }

    /// Directories in creation order: plugin root, client, server,
    /// webview (if requested), client/src, server/src. The plugin root
    /// comes first so a missing plugins base or a name collision surfaces
    /// before anything else is touched.
    pub fn directories(&self) -> Vec<&Path> {
        let mut dirs = vec![
            self.plugin_root.as_path(),
            self.client.as_path(),
            self.server.as_path(),
        ];
        if let Some(webview) = &self.webview {
            dirs.push(webview.as_path());
        }
        dirs.push(self.client_src.as_path());
        dirs.push(self.server_src.as_path());
        dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(name: &str, webview: bool) -> PluginRequest {
        PluginRequest::new(name, webview).unwrap()
    }

    #[test]
    fn test_paths_follow_athena_layout() {
        let tree = PluginTree::new(
            Path::new("/ws"),
            Path::new("src/core/plugins"),
            &request("chat", true),
        );

        assert_eq!(tree.plugins_base, Path::new("/ws/src/core/plugins"));
        assert_eq!(tree.plugin_root, Path::new("/ws/src/core/plugins/chat"));
        assert_eq!(tree.client, Path::new("/ws/src/core/plugins/chat/client"));
        assert_eq!(
            tree.client_src,
            Path::new("/ws/src/core/plugins/chat/client/src")
        );
        assert_eq!(tree.server, Path::new("/ws/src/core/plugins/chat/server"));
        assert_eq!(
            tree.server_src,
            Path::new("/ws/src/core/plugins/chat/server/src")
        );
        assert_eq!(
            tree.webview.as_deref(),
            Some(Path::new("/ws/src/core/plugins/chat/webview"))
        );
        assert_eq!(
            tree.client_index,
            Path::new("/ws/src/core/plugins/chat/client/index.ts")
        );
        assert_eq!(
            tree.server_index,
            Path::new("/ws/src/core/plugins/chat/server/index.ts")
        );
    }

    #[test]
    fn test_webview_absent_when_not_requested() {
        let tree = PluginTree::new(
            Path::new("/ws"),
            Path::new("src/core/plugins"),
            &request("chat", false),
        );
        assert!(tree.webview.is_none());
        assert_eq!(tree.directories().len(), 5);
    }

    #[test]
    fn test_creation_order_matches_original_generator() {
        let tree = PluginTree::new(
            Path::new("/ws"),
            Path::new("src/core/plugins"),
            &request("chat", true),
        );
        let dirs = tree.directories();
        assert_eq!(dirs.len(), 6);
        assert_eq!(dirs[0], tree.plugin_root);
        assert_eq!(dirs[1], tree.client);
        assert_eq!(dirs[2], tree.server);
        assert_eq!(dirs[3], tree.webview.as_deref().unwrap());
        assert_eq!(dirs[4], tree.client_src);
        assert_eq!(dirs[5], tree.server_src);
    }

    #[test]
    fn test_custom_plugins_base() {
        let tree = PluginTree::new(Path::new("/ws"), Path::new("plugins"), &request("hud", false));
        assert_eq!(tree.plugin_root, Path::new("/ws/plugins/hud"));
    }
}
