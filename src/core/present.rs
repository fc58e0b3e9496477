//! Writing rendered output and showing it to the user

use crate::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Write `contents` to `path`, creating parent directories as needed
///
/// # Errors
/// Returns an error if a directory cannot be created or the file cannot be written
pub fn write_output(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}

/// `file://` URL for an existing file
///
/// # Errors
/// Returns an error if the path cannot be resolved
pub fn file_url(path: &Path) -> io::Result<String> {
    let absolute = fs::canonicalize(path)?;
    Ok(format!("file://{}", absolute.display()))
}

/// Open a written file in the default browser
///
/// Failures are logged and reported as `false`; they never abort the run.
pub fn open_in_browser(path: &Path) -> bool {
    let url = match file_url(path) {
        Ok(url) => url,
        Err(e) => {
            warn!("Could not resolve {}: {e}", path.display());
            return false;
        }
    };
    match webbrowser::open(&url) {
        Ok(()) => {
            info!("Opened {url} in the default browser");
            true
        }
        Err(e) => {
            warn!("Could not open browser: {e}. Please open {url} manually.");
            false
        }
    }
}
