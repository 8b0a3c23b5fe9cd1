use crate::cli::Command;
use crate::output::{print_payload, report_error};
use crate::resource_kind::{ImportKind, Operation, ResourceKind};
use anyhow::{Context, Result, anyhow, bail};
use client::{ApiClient, ApiResponse, ClientError, QueryParams, Route, UploadFile};
use common::Session;
use serde_json::{Value, json};
use std::path::Path;
use tracing::{debug, info};

pub async fn run(client: &ApiClient, command: Command) -> Result<()> {
    match command {
        Command::Login {
            token,
            email,
            first_name,
            last_name,
            user_id,
        } => login(client, token, email, first_name, last_name, user_id),
        Command::Logout => {
            client.logout().await.inspect_err(report_error)?;
            info!("Logged out");
            Ok(())
        }
        Command::Whoami => whoami(client),
        Command::List { resource, params } => {
            if !params.is_empty() && !resource.filterable() {
                bail!("{} does not take query parameters", resource.root());
            }
            finish(list(client, resource, params.into_iter().collect()).await)
        }
        Command::Get { resource, id } => {
            ensure_supported(resource, Operation::Get)?;
            finish(client.collection(resource.root()).get(&id).await)
        }
        Command::Create { resource, data } => {
            ensure_supported(resource, Operation::Create)?;
            let body = parse_document(&data)?;
            finish(client.collection(resource.root()).create(&body).await)
        }
        Command::Update { resource, id, data } => {
            ensure_supported(resource, Operation::Update)?;
            let body = parse_document(&data)?;
            finish(client.collection(resource.root()).update(&id, &body).await)
        }
        Command::Delete { resource, id } => {
            ensure_supported(resource, Operation::Delete)?;
            finish(client.collection(resource.root()).delete(&id).await)
        }
        Command::Import {
            kind,
            file,
            semester_id,
        } => {
            let response = import(client, kind, &file, semester_id).await?;
            finish(Ok(response))
        }
        Command::Schedule { email } => schedule(client, email).await,
        Command::Routes => {
            for route in Route::ALL {
                match route.alias() {
                    Some(alias) => {
                        println!("{:<18} {} (alias {})", route.name(), route.path(), alias)
                    }
                    None => println!("{:<18} {}", route.name(), route.path()),
                }
            }
            Ok(())
        }
        Command::InitConfig { .. } => bail!("init-config is handled before the client starts"),
    }
}

fn login(
    client: &ApiClient,
    token: String,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    user_id: Option<i64>,
) -> Result<()> {
    if token.trim().is_empty() {
        bail!("token must not be empty");
    }

    let session = Session {
        email,
        first_name,
        last_name,
        user_id,
        ..Session::new(token.trim())
    };
    client
        .session_store()
        .set(session)
        .context("Failed to store session")?;
    info!("Session stored");
    Ok(())
}

fn whoami(client: &ApiClient) -> Result<()> {
    match client.session_store().get() {
        Some(session) => {
            let identity = json!({
                "email": session.email,
                "name": session.display_name(),
                "userId": session.user_id,
                "hasToken": session.bearer_token().is_some(),
            });
            println!("{}", serde_json::to_string_pretty(&identity)?);
        }
        None => println!("Not signed in"),
    }
    Ok(())
}

async fn list(
    client: &ApiClient,
    resource: ResourceKind,
    params: QueryParams,
) -> client::Result<ApiResponse> {
    debug!("Listing {} with {:?}", resource.root(), params);
    match resource {
        ResourceKind::AssignedCourses => client.assigned_courses().get_all(params).await,
        ResourceKind::Courses => client.courses().get_all(params).await,
        ResourceKind::Majors => client.majors().get_all().await,
        ResourceKind::MeetingTimes => client.meeting_times().get_all(params).await,
        ResourceKind::MenuOptions => client.menu_options().get_all().await,
        ResourceKind::PrefixKeywords => client.prefix_keywords().get_all().await,
        ResourceKind::Roles => client.roles().get_all().await,
        ResourceKind::Sections => client.sections().get_all(params).await,
        ResourceKind::SemesterPlans => client.semester_plans().get_all(params).await,
        ResourceKind::Terms => client.terms().get_all().await,
        ResourceKind::UniversityCourses => client.university_courses().get_all().await,
        ResourceKind::UserSections => client.user_sections().get_all().await,
        ResourceKind::Users => client.users().get_all().await,
    }
}

async fn import(
    client: &ApiClient,
    kind: ImportKind,
    path: &Path,
    semester_id: Option<i64>,
) -> Result<ApiResponse> {
    let file = UploadFile::from_path(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    info!("Importing {} ({} bytes)", file.file_name, file.data.len());

    let response = match kind {
        ImportKind::Sections => {
            let semester_id =
                semester_id.ok_or_else(|| anyhow!("--semester-id is required for sections"))?;
            client.sections().import_csv(file, semester_id).await
        }
        ImportKind::Users => client.users().import_csv(file).await,
        ImportKind::UserSections => client.user_sections().import_csv(file).await,
        ImportKind::SemesterPlans => client.semester_plans().import_csv(file).await,
        ImportKind::UniversityCourses => client.university_courses().import_csv(file).await,
        ImportKind::MeetingTimes => client.meeting_times().import_csv(file).await,
    };
    Ok(response.inspect_err(report_error)?)
}

/// Faculty view: both lists are requested concurrently
async fn schedule(client: &ApiClient, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => client
            .session_store()
            .get()
            .and_then(|session| session.email)
            .ok_or_else(|| anyhow!("no --email given and the stored session has none"))?,
    };

    let courses = client.courses();
    let sections = client.sections();
    let (courses, sections) = tokio::try_join!(
        courses.get_by_user_email(&email, QueryParams::new()),
        sections.get_by_user_email(&email, QueryParams::new()),
    )
    .inspect_err(report_error)?;

    let schedule = json!({
        "email": email,
        "courses": payload_value(courses),
        "sections": payload_value(sections),
    });
    println!("{}", serde_json::to_string_pretty(&schedule)?);
    Ok(())
}

fn payload_value(response: ApiResponse) -> Value {
    match response.into_payload() {
        client::Payload::Json(value) => value,
        client::Payload::Raw(raw) => Value::String(raw),
        client::Payload::Empty => Value::Null,
    }
}

fn ensure_supported(resource: ResourceKind, operation: Operation) -> Result<()> {
    if !resource.supports(operation) {
        bail!("{} does not support {:?}", resource.root(), operation);
    }
    Ok(())
}

fn parse_document(data: &str) -> Result<Value> {
    serde_json::from_str(data).context("--data must be a JSON document")
}

fn finish(response: std::result::Result<ApiResponse, ClientError>) -> Result<()> {
    let response = response.inspect_err(report_error)?;
    print_payload(&response.payload)
}
