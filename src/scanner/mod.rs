
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tree_sitter::Parser;

use crate::discovery::{is_go_test_file, PackageIdentifier};
use crate::error::ScanError;

pub use go_tests::classify;

pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestKind {
    Test,
    Benchmark,
    Example,
    Fuzz,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestFunction {
    pub name: String,
    pub kind: TestKind,
    pub file: PathBuf,
    /// 1-based.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageTests {
    pub package: PackageIdentifier,
    pub functions: Vec<TestFunction>,
}

/// Lists the test functions declared in discovered packages.
pub struct TestIndexer {
    parser: Parser,
    max_file_size: u64,
}

impl TestIndexer {
    pub fn new() -> Result<Self, ScanError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::LANGUAGE.into())?;
        Ok(Self {
            parser,
            max_file_size: MAX_FILE_SIZE,
        })
    }

    /// Files larger than `bytes` are skipped with a warning.
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Indexes each package's own test files; subdirectories are separate
    /// packages and are not included.
    pub fn index(
        &mut self,
        source_root: &Path,
        packages: &[PackageIdentifier],
    ) -> Result<Vec<PackageTests>, ScanError> {
        let mut index = Vec::with_capacity(packages.len());
        for package in packages {
            let dir = if package.is_empty() {
                source_root.to_path_buf()
            } else {
                source_root.join(package)
            };
            index.push(PackageTests {
                package: package.clone(),
                functions: self.index_dir(&dir)?,
            });
        }
        Ok(index)
    }

    fn index_dir(&mut self, dir: &Path) -> Result<Vec<TestFunction>, ScanError> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| ScanError::read(dir, e))? {
            let path = entry.map_err(|e| ScanError::read(dir, e))?.path();
            let qualifies = path
                .file_name()
                .map(|name| is_go_test_file(&name.to_string_lossy()))
                .unwrap_or(false);
            if qualifies && path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        let mut functions = Vec::new();
        for file in files {
            functions.extend(self.index_file(&file)?);
        }
        Ok(functions)
    }

    fn index_file(&mut self, path: &Path) -> Result<Vec<TestFunction>, ScanError> {
        let metadata = fs::metadata(path).map_err(|e| ScanError::read(path, e))?;
        if metadata.len() > self.max_file_size {
            warn!(
                "skipping {}: {} bytes exceeds {} byte limit",
                path.display(),
                metadata.len(),
                self.max_file_size
            );
            return Ok(Vec::new());
        }

        let source = fs::read(path).map_err(|e| ScanError::read(path, e))?;
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| ScanError::parse(path))?;

        let functions = go_tests::extract(&tree, &source, path);
        debug!("{}: {} test functions", path.display(), functions.len());
        Ok(functions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_index_root_and_sub_packages() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(
            root.join("main_test.go"),
            "package main\n\nimport \"testing\"\n\nfunc TestMain(m *testing.M) {}\n",
        )
        .unwrap();
        fs::write(
            root.join("sub/b_test.go"),
            "package sub\n\nfunc ExampleB() {}\n",
        )
        .unwrap();
        fs::write(
            root.join("sub/a_test.go"),
            "package sub\n\nfunc FuzzA(f *testing.F) {}\nfunc TestA(t *testing.T) {}\n",
        )
        .unwrap();
        fs::write(root.join("sub/_skip_test.go"), "package sub\n\nfunc TestSkip() {}\n").unwrap();
        fs::write(root.join("sub/sub.go"), "package sub\n\nfunc TestNotATest() {}\n").unwrap();

        let mut indexer = TestIndexer::new().unwrap();
        let index = indexer
            .index(root, &["".to_string(), "sub".to_string()])
            .unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index[0].package, "");
        assert_eq!(index[0].functions.len(), 1);
        assert_eq!(index[0].functions[0].kind, TestKind::Test);

        let names: Vec<_> = index[1].functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["FuzzA", "TestA", "ExampleB"]);
        assert_eq!(index[1].functions[0].kind, TestKind::Fuzz);
    }

    #[test]
    fn test_oversized_file_contributes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(
            root.join("big_test.go"),
            "package big\n\nfunc TestBig(t *testing.T) {}\n",
        )
        .unwrap();
        fs::write(root.join("small_test.go"), "package big\nfunc TestS() {}\n").unwrap();

        let mut indexer = TestIndexer::new().unwrap().with_max_file_size(30);
        let index = indexer.index(root, &["".to_string()]).unwrap();

        let names: Vec<_> = index[0].functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["TestS"]);
    }

    #[test]
    fn test_index_missing_package_dir() {
        let temp_dir = TempDir::new().unwrap();
        let mut indexer = TestIndexer::new().unwrap();

        let result = indexer.index(temp_dir.path(), &["gone".to_string()]);
        assert!(matches!(result, Err(ScanError::Read { .. })));
    }
}
