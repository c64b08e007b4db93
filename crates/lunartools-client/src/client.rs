//! Lunartools HTTP client implementation.

use std::fmt;

use lunartools_core::{AddOrder, AddProduct, Webhook, WebhookResponse};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{ClientOptions, Config};
use crate::error::ClientError;
use crate::types::Identified;

/// Lunartools API client.
///
/// Holds no per-call state; clone it or share it across tasks freely. Each
/// operation validates its input, then sends exactly one request.
#[derive(Clone)]
pub struct LunarClient {
    client: Client,
    base_url: String,
    client_id: String,
    access_token: String,
}

impl LunarClient {
    /// Create a new client with a 30 second request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with default settings).
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_options(config, ClientOptions::default())
    }

    /// Create a new client with custom options.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with default settings).
    #[must_use]
    pub fn with_options(config: Config, options: ClientOptions) -> Self {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.resolved_base_url(),
            client_id: config.client_id,
            access_token: config.access_token,
        }
    }

    /// Base URL that API paths are appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register a product.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] without sending anything if the product
    /// is invalid, otherwise any error from [`LunarClient::send`].
    pub async fn add_product(&self, product: &AddProduct) -> Result<(), ClientError> {
        product.validate()?;

        let body = Identified {
            client_id: &self.client_id,
            access_token: &self.access_token,
            record: product,
        };
        self.send(Method::POST, "/sdk/add-product", &body).await
    }

    /// Register an order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] without sending anything if the order
    /// is invalid, otherwise any error from [`LunarClient::send`].
    pub async fn add_order(&self, order: &AddOrder) -> Result<(), ClientError> {
        order.validate()?;

        let body = Identified {
            client_id: &self.client_id,
            access_token: &self.access_token,
            record: order,
        };
        self.send(Method::POST, "/sdk/add-order", &body).await
    }

    /// Post a message to a Discord-compatible webhook.
    ///
    /// The request goes straight to `url` and carries no Lunartools identity.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] if the payload breaks Discord's limits.
    /// - [`ClientError::Serialization`] if the payload cannot be encoded.
    /// - [`ClientError::Http`] if the URL is malformed or the request fails.
    /// - [`ClientError::Status`] for a non-2xx response.
    /// - [`ClientError::Decode`] if the response is not a [`WebhookResponse`].
    pub async fn webhook(
        &self,
        url: &str,
        payload: &Webhook,
    ) -> Result<WebhookResponse, ClientError> {
        payload.validate()?;

        let body = serde_json::to_vec(payload)?;
        tracing::debug!(
            host = url_host(url).as_deref().unwrap_or("<invalid>"),
            embeds = payload.embeds.len(),
            bytes = body.len(),
            "Sending webhook"
        );

        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        let response = execute(request).await?;
        decode(response).await
    }

    /// Send a JSON body to an API path and discard the response body.
    ///
    /// `path` is appended to the base URL. The identity headers are attached.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Serialization`] if `body` cannot be encoded.
    /// - [`ClientError::Http`] if the request cannot be built or sent.
    /// - [`ClientError::Status`] for a non-2xx response.
    pub async fn send<B>(&self, method: Method, path: &str, body: &B) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(method, path, body).await?;
        Ok(())
    }

    /// Send a JSON body to an API path and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Everything [`LunarClient::send`] returns, plus [`ClientError::Decode`]
    /// if the response body is not a valid `R`.
    pub async fn send_and_decode<B, R>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.dispatch(method, path, body).await?;
        decode(response).await
    }

    async fn dispatch<B>(&self, method: Method, path: &str, body: &B) -> Result<Response, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body)?;
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, path, bytes = body.len(), "Sending request");

        let request = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .header("X-Client-ID", &self.client_id)
            .header("X-Access-Token", &self.access_token)
            .body(body);

        execute(request).await
    }
}

impl fmt::Debug for LunarClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LunarClient")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

/// Send the request and reject non-2xx statuses.
async fn execute(request: RequestBuilder) -> Result<Response, ClientError> {
    let response = request.send().await?;
    let status = response.status();
    tracing::debug!(status = status.as_u16(), "Received response");

    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

/// Host part of a URL. Webhook paths carry the webhook token, so only the host is logged.
fn url_host(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_owned))
}

async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, ClientError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Decode)
}
