// Contentful GraphQL HTTP client
//
// Wraps `reqwest::Client` with endpoint construction, bearer-token
// selection (delivery vs preview), and `{ data, errors }` envelope
// unwrapping. All content-type fetch methods are implemented as
// inherent methods via separate files under `content/` to keep this
// module focused on transport mechanics.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{GraphqlRequest, GraphqlResponse};

const RATE_LIMIT_RESET_HEADER: &str = "x-contentful-ratelimit-reset";

/// Connection settings for a Contentful space.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub space_id: String,
    pub environment: String,
    pub delivery_token: SecretString,
    pub preview_token: SecretString,
    pub timeout: Duration,
}

/// Async client for the Contentful GraphQL API.
///
/// One client serves every content type; the query documents and
/// response DTOs live in the per-type modules. All methods return
/// unwrapped `data` payloads -- the envelope is stripped and its
/// `errors` array classified before the caller sees anything.
pub struct ContentClient {
    http: reqwest::Client,
    endpoint: Url,
    delivery_token: SecretString,
    preview_token: SecretString,
}

impl ContentClient {
    /// Create a client against the production GraphQL endpoint for the
    /// configured space and environment.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let endpoint = Url::parse(&format!(
            "https://graphql.contentful.com/content/v1/spaces/{}/environments/{}",
            config.space_id, config.environment
        ))?;
        Self::with_endpoint(endpoint, config)
    }

    /// Create a client against an explicit endpoint URL.
    ///
    /// Use this to point at a mock server in tests, or at a regional
    /// Contentful host.
    pub fn with_endpoint(endpoint: Url, config: &ClientConfig) -> Result<Self, Error> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let http = transport.build_client()?;
        Ok(Self {
            http,
            endpoint,
            delivery_token: config.delivery_token.clone(),
            preview_token: config.preview_token.clone(),
        })
    }

    /// The GraphQL endpoint this client posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    // ── Request mechanics ────────────────────────────────────────────

    /// Execute one query document and decode its `data` payload.
    ///
    /// `preview` selects the bearer token (preview token reads draft
    /// content) and is also expected to appear in `variables` so the
    /// query itself requests draft entries.
    pub(crate) async fn query<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: Value,
        preview: bool,
    ) -> Result<T, Error> {
        let token = if preview {
            &self.preview_token
        } else {
            &self.delivery_token
        };

        debug!(endpoint = %self.endpoint, preview, "POST GraphQL query");

        let resp = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(token.expose_secret())
            .json(&GraphqlRequest {
                query: document,
                variables,
            })
            .send()
            .await
            .map_err(Error::Network)?;

        self.handle_response(resp).await
    }

    /// Classify the HTTP status, unwrap the `{ data, errors }` envelope,
    /// and decode `data` into the caller's wrapper type.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::InvalidAccessToken);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = resp
                .headers()
                .get(RATE_LIMIT_RESET_HEADER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(1);
            return Err(Error::RateLimited { retry_after_secs });
        }

        let body = resp.text().await.map_err(Error::Network)?;

        let envelope: GraphqlResponse =
            serde_json::from_str(&body).map_err(|e| Error::Validation {
                message: format!("{e} (body preview: {:?})", truncate(&body)),
                body: body.clone(),
            })?;

        if let Some(first) = envelope.errors.first() {
            let mut message = first.summary();
            if envelope.errors.len() > 1 {
                message.push_str(&format!(" (+{} more)", envelope.errors.len() - 1));
            }
            return Err(Error::Cms { message });
        }

        if !status.is_success() {
            return Err(Error::Cms {
                message: format!("HTTP {status}"),
            });
        }

        let data = envelope.data.unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|e| Error::Validation {
            message: e.to_string(),
            body,
        })
    }
}

/// Bound a raw body to a short prefix for log/error messages,
/// respecting char boundaries.
fn truncate(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_short_body_unchanged() {
        assert_eq!(truncate("{}"), "{}");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(150);
        let cut = truncate(&body);
        assert!(cut.len() <= 200);
        assert!(body.starts_with(cut));
    }
}
