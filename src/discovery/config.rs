pub const TEST_FILE_SUFFIX: &str = "_test.go";

/// Leading characters the Go toolchain treats as ignored or hidden sources.
pub const IGNORED_PREFIXES: &[char] = &['_', '.'];

pub const PACKAGE_SEPARATOR: &str = "/";

pub const DETECTED_MESSAGE: &str = "Detected tests at package :";
