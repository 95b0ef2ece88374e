use crate::error::ConvertError;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

pub const DEFAULT_VIEWER: &str = "libreoffice";

/// Starts `viewer` on `path` without waiting for it. Its output is discarded.
pub fn open_in_viewer(viewer: &str, path: &Path) -> Result<(), ConvertError> {
    let child = Command::new(viewer)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ConvertError::LaunchFailed {
            program: viewer.to_string(),
            source,
        })?;

    debug!(pid = child.id(), viewer, path = %path.display(), "viewer started");
    Ok(())
}
