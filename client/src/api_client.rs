use crate::auth::Auth;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::navigator::Navigator;
use crate::response::ApiResponse;
use common::SessionStore;
use http::Method;
use protocol::{
    ApiPath, DecodeOutcome, EncodedBody, FormPart, MultipartForm, OutgoingRequest, QueryParams,
    RequestBody, Route, decode_response, encode_request, headers::default_headers,
};
use reqwest::Url;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info, instrument, warn};

/// Single point of egress for every call to the tools API.
///
/// Cheap to clone; clones share the HTTP connection pool, the session store
/// and the forced-logout tasks.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    base_url: Url,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    forced_logouts: TaskTracker,
}

/// Whether the unauthorized signal in a response triggers a forced logout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Watch {
    Enabled,
    Disabled,
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder().cookie_store(true);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        info!("API client using base address {}", config.base_url);

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url: config.base_url,
                store,
                navigator,
                forced_logouts: TaskTracker::new(),
            }),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.inner.store
    }

    pub async fn get(&self, path: ApiPath, query: QueryParams) -> Result<ApiResponse> {
        self.send(OutgoingRequest::new(Method::GET, path).with_query(query))
            .await
    }

    pub async fn post<B>(&self, path: ApiPath, body: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        self.send(OutgoingRequest::new(Method::POST, path).with_body(RequestBody::json(body)?))
            .await
    }

    pub async fn put<B>(&self, path: ApiPath, body: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        self.send(OutgoingRequest::new(Method::PUT, path).with_body(RequestBody::json(body)?))
            .await
    }

    pub async fn delete(&self, path: ApiPath) -> Result<ApiResponse> {
        self.send(OutgoingRequest::new(Method::DELETE, path)).await
    }

    /// POST a multipart form, e.g. a CSV bulk import
    pub async fn upload(&self, path: ApiPath, form: MultipartForm) -> Result<ApiResponse> {
        self.send(OutgoingRequest::new(Method::POST, path).with_body(RequestBody::Multipart(form)))
            .await
    }

    pub async fn send(&self, request: OutgoingRequest) -> Result<ApiResponse> {
        self.execute(request, Watch::Enabled).await
    }

    /// Send without reacting to the unauthorized signal. Used by logout so a
    /// rejected logout cannot start another one.
    pub(crate) async fn send_unwatched(&self, request: OutgoingRequest) -> Result<ApiResponse> {
        self.execute(request, Watch::Disabled).await
    }

    /// Explicit logout: tell the server, then clear the session and go to
    /// the login route whatever the server answered.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        let session = self.inner.store.get();
        let result = Auth::new(self).logout_user(session.as_ref()).await;
        if let Err(e) = &result {
            warn!("Logout request failed: {}", e);
        }

        self.inner.store.clear()?;
        self.inner.navigator.navigate(Route::Login);
        result.map(|_| ())
    }

    /// Wait until every forced logout started so far has finished.
    pub async fn wait_for_forced_logouts(&self) {
        let tracker = &self.inner.forced_logouts;
        tracker.close();
        tracker.wait().await;
        tracker.reopen();
    }

    #[instrument(
        skip(self, request, watch),
        fields(method = %request.method, path = %request.path)
    )]
    async fn execute(&self, request: OutgoingRequest, watch: Watch) -> Result<ApiResponse> {
        let OutgoingRequest {
            method,
            path,
            query,
            body,
        } = request;

        let url = self.resolve(&path)?;
        let session = self.inner.store.get();
        let token = session.as_ref().and_then(|session| session.bearer_token());
        let encoded = encode_request(body, token, default_headers())?;

        let mut builder = self
            .inner
            .http
            .request(method.clone(), url)
            .headers(encoded.headers);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        builder = match encoded.body {
            EncodedBody::Empty => builder,
            EncodedBody::Text(text) => builder.body(text),
            EncodedBody::Multipart(form) => builder.multipart(to_reqwest_form(form)?),
        };

        let response = builder.send().await?;
        let status = response.status();
        let raw = response.text().await?;
        debug!("{} {} -> {} ({} bytes)", method, path, status, raw.len());

        let payload = match decode_response(&raw) {
            DecodeOutcome::Ok(payload) => payload,
            DecodeOutcome::AuthExpired(payload) => {
                match watch {
                    Watch::Enabled => {
                        warn!("Session rejected by server on {} {}", method, path);
                        self.spawn_forced_logout();
                    }
                    Watch::Disabled => {
                        debug!("Ignoring unauthorized signal on {} {}", method, path);
                    }
                }
                payload
            }
        };

        if !status.is_success() {
            return Err(ClientError::Status { status, payload });
        }
        Ok(ApiResponse::new(status, payload))
    }

    fn resolve(&self, path: &ApiPath) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .extend(path.segments());
        Ok(url)
    }

    fn spawn_forced_logout(&self) {
        let client = self.clone();
        self.inner.forced_logouts.spawn(async move {
            client.forced_logout().await;
        });
    }

    /// Logout call, then clear and navigate in that order. Failures are
    /// logged and never stop the later steps.
    async fn forced_logout(&self) {
        let session = self.inner.store.get();
        if let Err(e) = Auth::new(self).logout_user(session.as_ref()).await {
            error!("error during forced logout: {}", e);
        }
        if let Err(e) = self.inner.store.clear() {
            error!("Failed to clear session after forced logout: {}", e);
        }
        self.inner.navigator.navigate(Route::Login);
        info!("Session expired, redirected to {}", Route::Login);
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("store", &self.inner.store)
            .finish_non_exhaustive()
    }
}

fn to_reqwest_form(form: MultipartForm) -> Result<Form> {
    let mut multipart = Form::new();
    for part in form.into_parts() {
        multipart = match part {
            FormPart::Text { name, value } => multipart.text(name, value),
            FormPart::File {
                name,
                file_name,
                mime,
                data,
            } => {
                let part = Part::bytes(data.to_vec())
                    .file_name(file_name)
                    .mime_str(&mime)?;
                multipart.part(name, part)
            }
        };
    }
    Ok(multipart)
}
