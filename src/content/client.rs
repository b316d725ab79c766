//! GraphQL-over-HTTP client for the content backend.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use super::queries::{GET_HOME, GET_THEME};
use super::{ContentError, ContentSource, HomeData, ThemeData};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlErrorMessage>>,
}

#[derive(Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

/// Posts query documents to a single GraphQL endpoint.
#[derive(Clone, Debug)]
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl GraphQlClient {
    pub fn new(endpoint: Url) -> Result<Self, ContentError> {
        Self::with_timeout(endpoint, REQUEST_TIMEOUT)
    }

    /// Client whose requests give up after `timeout`.
    pub fn with_timeout(endpoint: Url, timeout: Duration) -> Result<Self, ContentError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, endpoint))
    }

    pub fn with_client(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Run a query document and decode its `data` member.
    pub async fn execute<T: DeserializeOwned>(&self, document: &str) -> Result<T, ContentError> {
        tracing::debug!(endpoint = %self.endpoint, "GraphQL query");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&GraphQlRequest {
                query: document,
                variables: serde_json::json!({}),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let decoded: GraphQlResponse<T> = serde_json::from_str(&body)?;

        if let Some(errors) = decoded.errors.filter(|errors| !errors.is_empty()) {
            return Err(ContentError::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        decoded.data.ok_or(ContentError::MissingData)
    }
}

/// Uncached content source backed by the GraphQL client.
#[derive(Clone, Debug)]
pub struct GraphQlContent {
    client: GraphQlClient,
}

impl GraphQlContent {
    pub fn new(client: GraphQlClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentSource for GraphQlContent {
    async fn theme(&self) -> Result<ThemeData, ContentError> {
        self.client.execute(GET_THEME).await
    }

    async fn home(&self) -> Result<HomeData, ContentError> {
        self.client.execute(GET_HOME).await
    }
}
