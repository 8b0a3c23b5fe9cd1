use protocol::Route;
use tracing::info;

/// Receives client-side route changes, such as the jump to the login
/// route after a forced logout.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

impl<F> Navigator for F
where
    F: Fn(Route) + Send + Sync,
{
    fn navigate(&self, route: Route) {
        self(route)
    }
}

/// Navigator for headless use: records the route change in the log only
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: Route) {
        info!("Navigating to {} ({})", route.name(), route.path());
    }
}
