pub mod error;
pub mod session;
pub mod session_store;

pub use error::{CommonError, Result};
pub use session::Session;
pub use session_store::{FileSessionStore, MemorySessionStore, SESSION_KEY, SessionStore};

use std::io::{self, IsTerminal};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// With a `log_dir` the output goes to a daily rolling file and the returned
/// guard must be held until exit; otherwise it goes to stderr so command
/// output on stdout stays clean. `RUST_LOG` overrides `log_level`.
pub fn init_tracing(log_dir: Option<&str>, log_file: &str, log_level: &str) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let (writer, ansi, guard) = match log_dir {
        Some(log_dir) => {
            let file_appender = tracing_appender::rolling::daily(log_dir, log_file);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (BoxMakeWriter::new(non_blocking), false, Some(guard))
        }
        None => (BoxMakeWriter::new(io::stderr), io::stderr().is_terminal(), None),
    };

    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_thread_ids(log_dir.is_some())
        .with_line_number(true)
        .with_ansi(ansi);

    if let Err(e) = tracing_subscriber::registry().with(filter).with(layer).try_init() {
        eprintln!("Tracing already initialized: {e}");
    }
    guard
}
