//! Small helpers shared by the command and configuration layers.

use std::path::Path;

/// Render a path for display with the home directory replaced by `~`, so
/// user names do not end up in logs.
pub fn private_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }
    path.display().to_string()
}
