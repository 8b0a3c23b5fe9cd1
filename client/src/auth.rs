use crate::api_client::ApiClient;
use crate::error::Result;
use crate::response::ApiResponse;
use common::Session;
use http::Method;
use protocol::{ApiPath, OutgoingRequest, RequestBody};

/// Authentication endpoints
#[derive(Debug, Clone, Copy)]
pub struct Auth<'a> {
    client: &'a ApiClient,
}

impl<'a> Auth<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST logout` with the stored session as body (JSON `null` when absent).
    ///
    /// Never triggers a forced logout itself.
    pub async fn logout_user(&self, session: Option<&Session>) -> Result<ApiResponse> {
        let request = OutgoingRequest::new(Method::POST, ApiPath::new("logout"))
            .with_body(RequestBody::json(&session)?);
        self.client.send_unwatched(request).await
    }
}
