use crate::mock_backend::{CannedResponse, MockBackend};
use anyhow::{Context, Result, bail, ensure};
use client::{
    ApiClient, ClientConfig, ClientError, LoggingNavigator, Payload, QueryParams, Route,
    UploadFile,
};
use common::{MemorySessionStore, Session, SessionStore};
use http::{Method, StatusCode};
use parking_lot::Mutex;
use serde_json::json;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tracing::{error, info};

pub struct IntegrationTestResults {
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub test_details: Vec<TestResult>,
}

pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub error: Option<String>,
    pub duration_ms: u128,
}

/// Run every client scenario against its own in-process mock backend
pub async fn run_all_tests() -> IntegrationTestResults {
    info!("=== Starting Integration Tests ===");

    let mut results = IntegrationTestResults {
        total_tests: 0,
        passed: 0,
        failed: 0,
        test_details: Vec::new(),
    };

    results.add_test(
        run_test("List courses without a session", list_courses_without_session()).await,
    );
    results.add_test(run_test("Update user sends JSON body", update_user_sends_json_body()).await);
    results.add_test(
        run_test("List parameters become the query string", list_params_become_query()).await,
    );
    results.add_test(
        run_test("Non-JSON body is returned raw", non_json_body_is_returned_raw()).await,
    );
    results.add_test(
        run_test("Empty body is returned empty", empty_body_is_returned_empty()).await,
    );
    results.add_test(run_test("Error status keeps the body", error_status_keeps_body()).await);
    results.add_test(
        run_test("Unauthorized body forces logout", unauthorized_body_forces_logout()).await,
    );
    results.add_test(
        run_test("Failed logout still clears session", failed_logout_still_clears_session()).await,
    );
    results.add_test(
        run_test("Rejected logout does not recurse", rejected_logout_does_not_recurse()).await,
    );
    results.add_test(run_test("Request timeout", request_timeout_is_enforced()).await);
    results.add_test(
        run_test("Sections CSV import is multipart", sections_import_is_multipart()).await,
    );
    results.add_test(run_test("Explicit logout", explicit_logout()).await);
    results.add_test(run_test("Faculty schedule", faculty_schedule()).await);

    info!("=== Integration Tests Complete ===");
    info!(
        "Total: {}, Passed: {}, Failed: {}",
        results.total_tests, results.passed, results.failed
    );

    results
}

impl IntegrationTestResults {
    fn add_test(&mut self, result: TestResult) {
        self.total_tests += 1;
        if result.passed {
            self.passed += 1;
            info!("✓ {} - PASSED ({} ms)", result.name, result.duration_ms);
        } else {
            self.failed += 1;
            error!(
                "✗ {} - FAILED: {}",
                result.name,
                result.error.as_deref().unwrap_or("Unknown error")
            );
        }
        self.test_details.push(result);
    }
}

async fn run_test<F>(name: &str, scenario: F) -> TestResult
where
    F: Future<Output = Result<()>>,
{
    let start = Instant::now();
    let outcome = scenario.await;
    TestResult {
        name: name.to_string(),
        passed: outcome.is_ok(),
        error: outcome.err().map(|e| format!("{e:#}")),
        duration_ms: start.elapsed().as_millis(),
    }
}

/// Route change as seen by the navigator, with the store state at that moment
#[derive(Debug, Clone, PartialEq)]
struct Navigation {
    route: Route,
    session_cleared: bool,
}

struct Harness {
    backend: MockBackend,
    store: Arc<MemorySessionStore>,
    navigations: Arc<Mutex<Vec<Navigation>>>,
    client: ApiClient,
}

impl Harness {
    async fn start(session: Option<Session>) -> Result<Self> {
        let backend = MockBackend::start().await?;
        let store = Arc::new(match session {
            Some(session) => MemorySessionStore::with_session(session),
            None => MemorySessionStore::new(),
        });
        let navigations = Arc::new(Mutex::new(Vec::new()));

        let navigator = {
            let store = store.clone();
            let navigations = navigations.clone();
            move |route: Route| {
                navigations.lock().push(Navigation {
                    route,
                    session_cleared: store.get().is_none(),
                });
            }
        };

        let config = ClientConfig::from_base_url(&backend.base_url())?;
        let client = ApiClient::new(config, store.clone(), Arc::new(navigator))?;
        Ok(Self {
            backend,
            store,
            navigations,
            client,
        })
    }

    async fn signed_in(token: &str) -> Result<Self> {
        let session = Session::new(token)
            .with_email("ada@example.edu")
            .with_name("Ada", "Lovelace")
            .with_user_id(42);
        Self::start(Some(session)).await
    }

    fn navigations(&self) -> Vec<Navigation> {
        self.navigations.lock().clone()
    }
}

async fn list_courses_without_session() -> Result<()> {
    let harness = Harness::start(None).await?;
    let courses = json!({"content": [{"id": 1, "code": "CS101"}], "total": 1});
    harness.backend.respond(
        Method::GET,
        "courses",
        CannedResponse::json(StatusCode::OK, &courses),
    );

    let response = harness.client.courses().get_all(QueryParams::new()).await?;
    ensure!(
        response.payload == Payload::Json(courses),
        "unexpected payload {:?}",
        response.payload
    );

    let recorded = harness.backend.requests_to(&Method::GET, "courses");
    ensure!(recorded.len() == 1, "expected one request, got {}", recorded.len());
    ensure!(
        recorded[0].header("authorization") == Some(""),
        "authorization should be present and empty, got {:?}",
        recorded[0].header("authorization")
    );
    ensure!(recorded[0].header("x-requested-with") == Some("XMLHttpRequest"));
    Ok(())
}

async fn update_user_sends_json_body() -> Result<()> {
    let harness = Harness::signed_in("abc").await?;
    harness.backend.respond(
        Method::PUT,
        "users/5",
        CannedResponse::json(StatusCode::OK, &json!({"id": 5, "name": "X"})),
    );

    let response = harness.client.users().update(5, &json!({"name": "X"})).await?;
    ensure!(response.status == StatusCode::OK);

    let recorded = harness.backend.requests_to(&Method::PUT, "users/5");
    ensure!(recorded.len() == 1, "expected one request, got {}", recorded.len());
    let request = &recorded[0];
    ensure!(request.json() == Some(json!({"name": "X"})), "body was {}", request.body_text());
    ensure!(request.header("authorization") == Some("Bearer abc"));
    ensure!(request.header("content-type") == Some("application/json"));
    Ok(())
}

async fn list_params_become_query() -> Result<()> {
    let harness = Harness::signed_in("abc").await?;
    harness.backend.respond(
        Method::GET,
        "sections",
        CannedResponse::json(StatusCode::OK, &json!([])),
    );

    let params: QueryParams = [("semesterId", "7"), ("page", "2")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    harness.client.sections().get_all(params).await?;

    let recorded = harness.backend.requests_to(&Method::GET, "sections");
    let query = recorded.first().and_then(|r| r.query.clone());
    ensure!(query.as_deref() == Some("page=2&semesterId=7"), "query was {:?}", query);
    Ok(())
}

async fn non_json_body_is_returned_raw() -> Result<()> {
    let harness = Harness::signed_in("abc").await?;
    harness.backend.respond(
        Method::GET,
        "roles",
        CannedResponse::text(StatusCode::OK, "<html>maintenance</html>"),
    );

    let response = harness.client.roles().get_all().await?;
    ensure!(
        response.payload == Payload::Raw("<html>maintenance</html>".to_string()),
        "unexpected payload {:?}",
        response.payload
    );
    Ok(())
}

async fn empty_body_is_returned_empty() -> Result<()> {
    let harness = Harness::signed_in("abc").await?;
    harness
        .backend
        .respond(Method::DELETE, "terms/3", CannedResponse::empty(StatusCode::NO_CONTENT));

    let response = harness.client.terms().delete(3).await?;
    ensure!(response.status == StatusCode::NO_CONTENT);
    ensure!(response.payload.is_empty(), "unexpected payload {:?}", response.payload);
    Ok(())
}

async fn error_status_keeps_body() -> Result<()> {
    let harness = Harness::signed_in("abc").await?;
    harness.backend.respond(
        Method::GET,
        "courses/99",
        CannedResponse::json(StatusCode::NOT_FOUND, &json!({"message": "Course not found"})),
    );

    let err = match harness.client.courses().get(99).await {
        Ok(response) => bail!("expected an error, got {:?}", response),
        Err(e) => e,
    };
    ensure!(err.status() == Some(StatusCode::NOT_FOUND), "unexpected error {err}");
    ensure!(err.payload().and_then(Payload::message) == Some("Course not found"));

    harness.client.wait_for_forced_logouts().await;
    ensure!(harness.backend.requests_to(&Method::POST, "logout").is_empty());
    ensure!(harness.store.get().is_some(), "session must survive an ordinary error");
    Ok(())
}

async fn unauthorized_body_forces_logout() -> Result<()> {
    let harness = Harness::signed_in("abc").await?;
    let rejection = json!({"message": "Unauthorized access"});
    harness.backend.respond(
        Method::GET,
        "terms",
        CannedResponse::json(StatusCode::OK, &rejection),
    );
    harness.backend.respond(
        Method::POST,
        "logout",
        CannedResponse::json(StatusCode::OK, &json!({})),
    );

    let response = harness.client.terms().get_all().await?;
    ensure!(response.payload == Payload::Json(rejection), "payload must be handed back unchanged");

    harness.client.wait_for_forced_logouts().await;

    let logouts = harness.backend.requests_to(&Method::POST, "logout");
    ensure!(logouts.len() == 1, "expected one logout request, got {}", logouts.len());
    let body = logouts[0].json().context("logout body is not JSON")?;
    ensure!(body["token"] == json!("abc"), "logout must carry the session, got {body}");
    ensure!(logouts[0].header("authorization") == Some("Bearer abc"));

    ensure!(harness.store.get().is_none(), "session must be cleared");
    ensure!(
        harness.navigations()
            == vec![Navigation {
                route: Route::Login,
                session_cleared: true,
            }],
        "unexpected navigations {:?}",
        harness.navigations()
    );
    Ok(())
}

async fn failed_logout_still_clears_session() -> Result<()> {
    let harness = Harness::signed_in("abc").await?;
    harness.backend.respond(
        Method::GET,
        "majors",
        CannedResponse::json(StatusCode::UNAUTHORIZED, &json!({"message": "Unauthorized"})),
    );
    harness.backend.respond(
        Method::POST,
        "logout",
        CannedResponse::text(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
    );

    match harness.client.majors().get_all().await {
        Err(ClientError::Status { status, payload }) => {
            ensure!(status == StatusCode::UNAUTHORIZED);
            ensure!(payload.message() == Some("Unauthorized"));
        }
        other => bail!("expected a status error, got {:?}", other),
    }

    harness.client.wait_for_forced_logouts().await;

    ensure!(harness.backend.requests_to(&Method::POST, "logout").len() == 1);
    ensure!(harness.store.get().is_none(), "session must be cleared");
    ensure!(harness.navigations().iter().map(|n| n.route).eq([Route::Login]));
    Ok(())
}

async fn rejected_logout_does_not_recurse() -> Result<()> {
    let harness = Harness::signed_in("abc").await?;
    let rejection = json!({"message": "Unauthorized"});
    harness.backend.respond(
        Method::GET,
        "terms",
        CannedResponse::json(StatusCode::OK, &rejection),
    );
    // The logout call itself carries the signal
    harness.backend.respond(
        Method::POST,
        "logout",
        CannedResponse::json(StatusCode::OK, &rejection),
    );

    harness.client.terms().get_all().await?;
    harness.client.wait_for_forced_logouts().await;

    let logouts = harness.backend.requests_to(&Method::POST, "logout");
    ensure!(logouts.len() == 1, "expected one logout request, got {}", logouts.len());
    ensure!(harness.store.get().is_none(), "session must be cleared");
    ensure!(
        harness.navigations()
            == vec![Navigation {
                route: Route::Login,
                session_cleared: true,
            }],
        "unexpected navigations {:?}",
        harness.navigations()
    );
    Ok(())
}

async fn request_timeout_is_enforced() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    // Accepts connections and never answers
    let silent = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    let config = ClientConfig::from_base_url(&format!("http://{addr}/tools/"))?
        .with_request_timeout(Some(Duration::from_millis(300)));
    let client = ApiClient::new(
        config,
        Arc::new(MemorySessionStore::new()),
        Arc::new(LoggingNavigator),
    )?;

    let started = Instant::now();
    let outcome = client.terms().get_all().await;
    let elapsed = started.elapsed();
    silent.abort();

    match outcome {
        Err(ClientError::Http(e)) => ensure!(e.is_timeout(), "expected a timeout, got {e}"),
        other => bail!("expected a transport timeout, got {:?}", other),
    }
    ensure!(elapsed < Duration::from_secs(5), "timeout took {:?}", elapsed);
    Ok(())
}

async fn sections_import_is_multipart() -> Result<()> {
    let harness = Harness::signed_in("abc").await?;
    harness.backend.respond(
        Method::POST,
        "sections/import",
        CannedResponse::json(StatusCode::OK, &json!({"imported": 1})),
    );

    let file = UploadFile::csv("sections.csv", "courseId,number\n12,001\n");
    let response = harness.client.sections().import_csv(file, 7).await?;
    ensure!(response.payload.as_json() == Some(&json!({"imported": 1})));

    let recorded = harness.backend.requests_to(&Method::POST, "sections/import");
    ensure!(recorded.len() == 1, "expected one request, got {}", recorded.len());
    let request = &recorded[0];

    let content_type = request.header("content-type").unwrap_or_default();
    ensure!(
        content_type.starts_with("multipart/form-data; boundary="),
        "content type was {content_type:?}"
    );
    ensure!(request.header("authorization") == Some("Bearer abc"));

    let body = request.body_text();
    ensure!(body.contains(r#"name="file"; filename="sections.csv""#), "body was {body}");
    ensure!(body.contains("courseId,number\n12,001\n"));
    ensure!(body.contains(r#"name="semesterId""#));
    ensure!(body.contains("\r\n\r\n7\r\n"));
    Ok(())
}

async fn explicit_logout() -> Result<()> {
    let harness = Harness::signed_in("abc").await?;
    harness.backend.respond(
        Method::POST,
        "logout",
        CannedResponse::json(StatusCode::OK, &json!({})),
    );

    harness.client.logout().await?;

    ensure!(harness.backend.requests_to(&Method::POST, "logout").len() == 1);
    ensure!(harness.store.get().is_none(), "session must be cleared");
    ensure!(harness.navigations().iter().map(|n| n.route).eq([Route::Login]));
    Ok(())
}

async fn faculty_schedule() -> Result<()> {
    let harness = Harness::signed_in("abc").await?;
    harness.backend.respond(
        Method::GET,
        "courses/user/ada@example.edu",
        CannedResponse::json(StatusCode::OK, &json!([{"id": 1}])),
    );
    harness.backend.respond(
        Method::GET,
        "sections/user/ada@example.edu",
        CannedResponse::json(StatusCode::OK, &json!([{"id": 2}, {"id": 3}])),
    );

    let courses = harness.client.courses();
    let sections = harness.client.sections();
    let (courses, sections) = tokio::try_join!(
        courses.get_by_user_email("ada@example.edu", QueryParams::new()),
        sections.get_by_user_email("ada@example.edu", QueryParams::new()),
    )?;

    ensure!(courses.payload.as_json() == Some(&json!([{"id": 1}])));
    ensure!(sections.payload.as_json() == Some(&json!([{"id": 2}, {"id": 3}])));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_courses_without_session() {
        list_courses_without_session().await.unwrap();
    }

    #[tokio::test]
    async fn test_update_user_sends_json_body() {
        update_user_sends_json_body().await.unwrap();
    }

    #[tokio::test]
    async fn test_list_params_become_query() {
        list_params_become_query().await.unwrap();
    }

    #[tokio::test]
    async fn test_non_json_body_is_returned_raw() {
        non_json_body_is_returned_raw().await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_body_is_returned_empty() {
        empty_body_is_returned_empty().await.unwrap();
    }

    #[tokio::test]
    async fn test_error_status_keeps_body() {
        error_status_keeps_body().await.unwrap();
    }

    #[tokio::test]
    async fn test_unauthorized_body_forces_logout() {
        unauthorized_body_forces_logout().await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_logout_still_clears_session() {
        failed_logout_still_clears_session().await.unwrap();
    }

    #[tokio::test]
    async fn test_rejected_logout_does_not_recurse() {
        rejected_logout_does_not_recurse().await.unwrap();
    }

    #[tokio::test]
    async fn test_request_timeout_is_enforced() {
        request_timeout_is_enforced().await.unwrap();
    }

    #[tokio::test]
    async fn test_sections_import_is_multipart() {
        sections_import_is_multipart().await.unwrap();
    }

    #[tokio::test]
    async fn test_explicit_logout() {
        explicit_logout().await.unwrap();
    }

    #[tokio::test]
    async fn test_faculty_schedule() {
        faculty_schedule().await.unwrap();
    }

    #[tokio::test]
    async fn all_scenarios_pass() {
        let results = run_all_tests().await;
        assert_eq!(results.failed, 0);
        assert_eq!(results.total_tests, results.passed);
    }
}
