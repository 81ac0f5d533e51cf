use std::path::{Path, PathBuf};

/// Output directory: `explicit` if given, else the directory holding `first_input`.
pub fn output_dir(explicit: Option<&Path>, first_input: &Path) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    match first_input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
