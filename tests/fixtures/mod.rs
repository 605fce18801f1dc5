#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway Go source tree.
pub struct GoTree {
    dir: TempDir,
}

impl GoTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn with_files(files: &[&str]) -> Self {
        let tree = Self::new();
        for file in files {
            tree.write(file, &default_source(file));
        }
        tree
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create package dir");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    pub fn mkdir(&self, relative: &str) {
        fs::create_dir_all(self.dir.path().join(relative)).expect("Failed to create dir");
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

fn default_source(relative: &str) -> String {
    let package = Path::new(relative)
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "main".to_string());
    format!("package {package}\n\nimport \"testing\"\n\nfunc TestIt(t *testing.T) {{}}\n")
}
