use tracing::info;

use super::config::DETECTED_MESSAGE;

/// Receives one notification per newly discovered package, during a single
/// discovery call.
pub trait DiscoveryObserver {
    fn package_discovered(&mut self, package: &str);
}

/// Reports discoveries as `info` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl DiscoveryObserver for TracingObserver {
    fn package_discovered(&mut self, package: &str) {
        info!("{}", detected_message(package));
    }
}

impl<F: FnMut(&str)> DiscoveryObserver for F {
    fn package_discovered(&mut self, package: &str) {
        self(package)
    }
}

pub fn detected_message(package: &str) -> String {
    format!("{DETECTED_MESSAGE} {package}")
}
