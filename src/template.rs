use crate::error::ConvertError;
use std::fs;
use std::path::{Path, PathBuf};

pub const TEMPLATE_FILE: &str = "template.html";

const TEMPLATE_HTML: &str = include_str!("../templates/template.html");

/// Writes the starter HTML template into `dir`, replacing any existing file.
pub fn create_template(dir: &Path) -> Result<PathBuf, ConvertError> {
    let path = dir.join(TEMPLATE_FILE);
    fs::write(&path, TEMPLATE_HTML).map_err(|source| ConvertError::TemplateWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
