// File system utilities

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively copy the contents of `src` into `dest`, creating `dest` and
/// any intermediate directories. Returns the number of files copied.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> std::io::Result<usize> {
    if !src.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Source directory not found: {}", src.display()),
        ));
    }

    fs::create_dir_all(dest)?;

    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.map_err(std::io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            tracing::debug!(file = %relative.display(), "Copied template file");
            copied += 1;
        }
    }

    Ok(copied)
}
