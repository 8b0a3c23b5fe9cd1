use client::{Navigator, Route};
use tracing::{info, warn};

/// Route changes in a terminal: the only one that matters is the bounce to
/// login after the server rejected the session.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        match route {
            Route::Login => {
                warn!("Session is no longer valid, redirected to {}", route.path());
                eprintln!(
                    "Session expired. Sign in again with `tools-admin login --token <TOKEN>`."
                );
            }
            other => info!("Navigating to {} ({})", other.name(), other.path()),
        }
    }
}
