//! HTTP client for the records backend with consistent timeouts and error
//! handling. Feature clients go through [`ApiClient`] so every request gets
//! the same base URL joining, bearer-token injection, and envelope
//! unwrapping. A 401 from any endpoint wipes the session and asks the
//! navigator for the sign-in page matching wherever the caller currently is.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{Instrument, info_span, warn};
use url::Url;

use crate::APP_USER_AGENT;
use crate::config::AppConfig;
use crate::errors::Error;
use crate::navigator::{Navigator, login_route_for_path};
use crate::session::{SessionStore, keys};

/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

/// Response wrapper every backend endpoint uses. Null fields are omitted on
/// the wire; error responses carry their text in `message`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Shared client handle. Cheap to clone; the session and navigator are
/// injected so embedders decide where tokens live and how redirects happen.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Builds a client against the configured base URL.
    ///
    /// # Errors
    /// Returns `Error::Config` when the base URL is not an absolute URL or
    /// the underlying client cannot be constructed.
    pub fn new(
        config: &AppConfig,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, Error> {
        let base_url = config.api_base_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|err| Error::Config(format!("invalid API base URL {base_url:?}: {err}")))?;

        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| Error::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url,
            session,
            navigator,
        })
    }

    /// The session store requests authenticate against. Auth flows use this
    /// same handle to persist tokens after a login.
    #[must_use]
    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// Fetches the `data` payload of a JSON envelope.
    ///
    /// # Errors
    /// See [`ApiClient::post_json`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = join_url(&self.base_url, path);
        let response = self.dispatch(self.client.get(&url), "GET", &url).await?;
        decode_json(response).await
    }

    /// Posts JSON and returns the `data` payload of the response envelope.
    ///
    /// # Errors
    /// `Error::Unauthorized` when the backend answers 401 (the session has
    /// been wiped by then), `Error::Http` for other failure statuses or a
    /// `success: false` envelope, `Error::Timeout`/`Error::Network` for
    /// transport problems, `Error::Parse` when the envelope cannot be
    /// decoded or has no `data`.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = join_url(&self.base_url, path);
        let response = self
            .dispatch(self.client.post(&url).json(body), "POST", &url)
            .await?;
        decode_json(response).await
    }

    /// Posts JSON where the caller only cares that the backend accepted it.
    ///
    /// # Errors
    /// See [`ApiClient::post_json`]; a missing `data` is not an error here.
    pub async fn post_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let url = join_url(&self.base_url, path);
        let response = self
            .dispatch(self.client.post(&url).json(body), "POST", &url)
            .await?;
        decode_empty(response).await
    }

    /// Puts JSON where the caller only cares that the backend accepted it.
    ///
    /// # Errors
    /// See [`ApiClient::post_empty`].
    pub async fn put_empty<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), Error> {
        let url = join_url(&self.base_url, path);
        let response = self
            .dispatch(self.client.put(&url).json(body), "PUT", &url)
            .await?;
        decode_empty(response).await
    }

    /// Deletes a resource. Delete endpoints answer with a null `data`.
    ///
    /// # Errors
    /// See [`ApiClient::post_empty`].
    pub async fn delete_empty(&self, path: &str) -> Result<(), Error> {
        let url = join_url(&self.base_url, path);
        let response = self.dispatch(self.client.delete(&url), "DELETE", &url).await?;
        decode_empty(response).await
    }

    /// Attaches the stored bearer token, sends the request inside a span,
    /// and intercepts 401 before any caller sees the response.
    async fn dispatch(
        &self,
        builder: RequestBuilder,
        method: &'static str,
        url: &str,
    ) -> Result<Response, Error> {
        let builder = match self.session.get(keys::AUTH_TOKEN) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let span = info_span!("api.request", http.method = method, url = %url);
        let response = builder
            .send()
            .instrument(span)
            .await
            .map_err(map_transport_error)?;

        if response.status() == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(Error::Unauthorized);
        }

        if !response.status().is_success() {
            warn!("{} {} answered {}", method, url, response.status());
        }

        Ok(response)
    }

    /// Session-expiry path: wipe every stored credential, then send the
    /// user to the sign-in page for the area they were in.
    fn expire_session(&self) {
        self.session.clear_all();
        let login = login_route_for_path(&self.navigator.current_path());
        self.navigator.redirect(login);
    }
}

/// Unwraps a success envelope into its `data` payload.
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !status.is_success() {
        return Err(Error::Http {
            status: status.as_u16(),
            message: failure_message(&body),
        });
    }

    let envelope: ApiEnvelope<T> = serde_json::from_str(&body)
        .map_err(|err| Error::Parse(format!("Failed to decode response: {err}")))?;

    if !envelope.success {
        return Err(Error::Http {
            status: status.as_u16(),
            message: envelope_text(envelope.message, envelope.error),
        });
    }

    envelope
        .data
        .ok_or_else(|| Error::Parse("Response envelope has no data".to_string()))
}

/// Like [`decode_json`] but tolerates envelopes whose `data` is null or
/// absent. A readable body with `success: false` still fails.
async fn decode_empty(response: Response) -> Result<(), Error> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !status.is_success() {
        return Err(Error::Http {
            status: status.as_u16(),
            message: failure_message(&body),
        });
    }

    match serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body) {
        Ok(envelope) if !envelope.success => Err(Error::Http {
            status: status.as_u16(),
            message: envelope_text(envelope.message, envelope.error),
        }),
        _ => Ok(()),
    }
}

/// Best human-readable text for a failure body: the envelope's `message`,
/// then its `error`, then the sanitized raw body.
fn failure_message(body: &str) -> String {
    serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message.or(envelope.error))
        .unwrap_or_else(|| sanitize_body(body))
}

fn envelope_text(message: Option<String>, error: Option<String>) -> String {
    message
        .or(error)
        .unwrap_or_else(|| "Request failed.".to_string())
}

/// Maps transport errors into user-facing variants with timeout detection.
fn map_transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout("Request timed out. Please try again.".to_string())
    } else {
        Error::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Builds a URL from a base URL and the provided path.
fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and
/// truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
