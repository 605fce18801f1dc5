use super::config::{IGNORED_PREFIXES, TEST_FILE_SUFFIX};

/// Decides whether a file, by name alone, is a test source.
pub trait TestFileFilter: Send + Sync {
    fn qualifies(&self, file_name: &str) -> bool;
}

/// `go test` file naming: `*_test.go`, minus names the toolchain ignores.
pub struct GoTestFileFilter;

impl TestFileFilter for GoTestFileFilter {
    fn qualifies(&self, file_name: &str) -> bool {
        is_go_test_file(file_name)
    }
}

pub fn is_go_test_file(file_name: &str) -> bool {
    file_name.ends_with(TEST_FILE_SUFFIX) && !file_name.starts_with(IGNORED_PREFIXES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_test_file_qualifies() {
        assert!(is_go_test_file("foo_test.go"));
        assert!(is_go_test_file("a_test.go"));
    }

    #[test]
    fn test_non_test_sources_rejected() {
        assert!(!is_go_test_file("foo.go"));
        assert!(!is_go_test_file("foo_test.go.bak"));
        assert!(!is_go_test_file("footest.go"));
        assert!(!is_go_test_file("foo_TEST.go"));
    }

    #[test]
    fn test_leading_underscore_rejected() {
        assert!(!is_go_test_file("_hidden_test.go"));
        assert!(!is_go_test_file("_test.go"));
    }

    #[test]
    fn test_leading_dot_rejected() {
        assert!(!is_go_test_file(".foo_test.go"));
        assert!(!is_go_test_file("._test.go"));
    }

    #[test]
    fn test_filter_trait_delegates() {
        let filter: &dyn TestFileFilter = &GoTestFileFilter;
        assert!(filter.qualifies("x_test.go"));
        assert!(!filter.qualifies("_x_test.go"));
    }
}
