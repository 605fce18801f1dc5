use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::DiscoveryError;

use super::config::PACKAGE_SEPARATOR;

/// Makes `path` absolute against the current directory and folds `.` and
/// `..` lexically. Symlinks are left alone.
pub fn normalize_path(path: &Path) -> Result<PathBuf, DiscoveryError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|source| DiscoveryError::CurrentDir {
                path: path.to_path_buf(),
                source,
            })?
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// Every file below `root`, in walk order, as reached from `root`.
/// Symlinked directories are followed. Dangling links are skipped; any other
/// walk error, including a symlink loop, ends the scan.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if is_dangling_link(&e, root) => {
                debug!("skipping dangling link: {}", e);
                continue;
            }
            Err(e) => return Err(DiscoveryError::traversal(root, e)),
        };

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_dangling_link(error: &walkdir::Error, root: &Path) -> bool {
    if error.loop_ancestor().is_some() {
        return false;
    }
    let not_found = error
        .io_error()
        .map(|e| e.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false);
    let is_link = error
        .path()
        .filter(|path| *path != root)
        .map(|path| path.is_symlink())
        .unwrap_or(false);
    not_found && is_link
}

/// Package identifier of `dir` relative to `base`: components joined with
/// `/`, empty for `base` itself. `None` when `dir` is outside `base`.
pub fn package_identifier(base: &Path, dir: &Path) -> Option<String> {
    let relative = dir.strip_prefix(base).ok()?;
    let segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Some(segments.join(PACKAGE_SEPARATOR))
}
