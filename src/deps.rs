use std::ffi::OsStr;
use which::which;

/// Returns the names from `programs` that cannot be found on `PATH`,
/// preserving their order. An empty result means everything is installed.
pub fn missing_programs<S: AsRef<OsStr>>(programs: &[S]) -> Vec<String> {
    programs
        .iter()
        .map(AsRef::<OsStr>::as_ref)
        .filter(|program| which(program).is_err())
        .map(|program| program.to_string_lossy().into_owned())
        .collect()
}

/// One install command per missing program.
pub fn install_hints(missing: &[String]) -> Vec<String> {
    missing
        .iter()
        .map(|name| format!("sudo apt install {}", package_name(name)))
        .collect()
}

// A custom converter or viewer may be configured as a full path.
fn package_name(program: &str) -> &str {
    std::path::Path::new(program)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(program)
}
