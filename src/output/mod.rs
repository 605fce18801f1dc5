mod formatter;

pub use formatter::{DiscoveryOutput, OutputFormatter};
