pub mod integration_tests;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use http::{Method, StatusCode};
use mock_backend::{CannedResponse, MockBackend};
use serde_json::json;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "integration-tests")]
#[command(about = "Integration testing tool for the course scheduling tools client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the client scenarios against in-process mock backends
    Integration,
    /// Serve a mock tools API with sample data for manual runs of tools-admin
    MockBackend {
        /// Listen address
        #[arg(short, long, default_value = "127.0.0.1:9090")]
        listen_addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Integration => {
            tracing::info!("Running integration tests");
            let results = integration_tests::run_all_tests().await;
            if results.failed > 0 {
                bail!("{} of {} scenarios failed", results.failed, results.total_tests);
            }
        }
        Commands::MockBackend { listen_addr } => {
            let backend = MockBackend::bind(listen_addr).await?;
            seed_sample_data(&backend);
            tracing::info!("Mock tools API at {}", backend.base_url());
            backend.run_until_shutdown().await?;
        }
    }

    Ok(())
}

fn seed_sample_data(backend: &MockBackend) {
    let ok = |body: serde_json::Value| CannedResponse::json(StatusCode::OK, &body);

    backend.respond(
        Method::GET,
        "terms",
        ok(json!([{"id": 1, "name": "Fall"}, {"id": 2, "name": "Spring"}])),
    );
    backend.respond(
        Method::GET,
        "roles",
        ok(json!([{"id": 1, "name": "Admin"}, {"id": 2, "name": "Faculty"}])),
    );
    backend.respond(Method::GET, "majors", ok(json!([{"id": 1, "name": "Computer Science"}])));
    backend.respond(
        Method::GET,
        "courses",
        ok(json!([{"id": 12, "code": "CMSC 1113", "name": "Programming I"}])),
    );
    backend.respond(
        Method::GET,
        "sections",
        ok(json!([{"id": 3, "courseId": 12, "number": "001", "semesterId": 7}])),
    );
    backend.respond(Method::POST, "sections/import", ok(json!({"message": "Import complete"})));
    backend.respond(Method::POST, "logout", ok(json!({})));
    // Any token the admin client sends here is rejected, to exercise the forced logout
    backend.respond(
        Method::GET,
        "users",
        CannedResponse::json(StatusCode::UNAUTHORIZED, &json!({"message": "Unauthorized"})),
    );
}
