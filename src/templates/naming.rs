use super::types::NameProblem;
use std::path::{Path, PathBuf};

/// Full path of `filename.ext` inside `path`.
pub fn target_path(path: &Path, filename: &str, ext: &str) -> PathBuf {
    path.join(format!("{}.{}", filename, ext))
}

/// Whether `path/filename.ext` already exists.
pub fn file_exists(path: &Path, filename: &str, ext: &str) -> bool {
    target_path(path, filename, ext).exists()
}

/// Finds the first free name in `base`, `base (1)`, `base (2)`, ...
pub fn find_empty_name(path: &Path, base: &str, ext: &str) -> String {
    let mut name = base.to_string();
    let mut counter: u64 = 1;

    while file_exists(path, &name, ext) {
        name = format!("{} ({})", base, counter);
        counter += 1;
    }

    log::debug!("Resolved default name {:?} in {}", name, path.display());
    name
}

/// Live validation rule for the name dialog.
pub fn check_name(path: &Path, filename: &str, ext: &str) -> Option<NameProblem> {
    if filename.is_empty() {
        return Some(NameProblem::Empty);
    }

    // Would escape the target directory.
    if filename.chars().any(|c| std::path::is_separator(c) || c == '\0') {
        return Some(NameProblem::Separator);
    }

    if file_exists(path, filename, ext) {
        return Some(NameProblem::Exists);
    }

    None
}
