use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{FramegridError, FramegridResult};

/// Non-recursive listing of the image files in `dir`, sorted by full path.
///
/// Extension matching is case-insensitive. Directories, non-regular files
/// and non-matching extensions are skipped silently. Later pipeline stages
/// rely on this order index-for-index, so the sort is part of the contract.
pub fn list_images(dir: &Path, extension: &str) -> FramegridResult<Vec<PathBuf>> {
    let want = extension.trim_start_matches('.').to_ascii_lowercase();

    let entries = std::fs::read_dir(dir).map_err(|e| {
        FramegridError::enumeration(format!("read directory '{}': {e}", dir.display()))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry in '{}': {e}", dir.display());
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension() else {
            continue;
        };
        if ext.to_string_lossy().to_ascii_lowercase() == want {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn lists_matching_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.png", "c.PNG", "notes.txt"] {
            File::create(dir.path().join(name)).unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();

        let files = list_images(dir.path(), "png").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["a.png", "b.png", "c.PNG"]);
    }

    #[test]
    fn missing_directory_is_an_enumeration_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("nope");
        let err = list_images(&gone, "png").unwrap_err();
        assert!(matches!(err, FramegridError::Enumeration(_)));
    }

    #[test]
    fn extension_dot_prefix_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("x.png")).unwrap();
        assert_eq!(list_images(dir.path(), ".png").unwrap().len(), 1);
    }
}
