use std::path::{Path, PathBuf};

/// In-memory record of the project being scaffolded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// Name exactly as typed at the prompt
    pub raw_name: String,
    /// Directory and package name derived from `raw_name`
    pub normalized_name: String,
    /// `normalized_name` resolved against the base directory
    pub absolute_path: PathBuf,
}

impl ProjectDescriptor {
    /// Build a descriptor for `raw_name`, placing the project under `base_dir`
    pub fn new(raw_name: impl Into<String>, base_dir: &Path) -> Self {
        let raw_name = raw_name.into();
        let normalized_name = normalize_app_name(&raw_name);
        let absolute_path = base_dir.join(&normalized_name);

        Self {
            raw_name,
            normalized_name,
            absolute_path,
        }
    }

    /// Path of the `src` directory the template is copied into
    pub fn source_dir(&self) -> PathBuf {
        self.absolute_path.join("src")
    }
}

/// Map a free-text application name to a directory/package name.
///
/// Lowercases, trims outer whitespace, then turns the first remaining space
/// into a hyphen. Any further spaces are kept as they are.
pub fn normalize_app_name(raw: &str) -> String {
    raw.to_lowercase().trim().replacen(' ', "-", 1)
}
