//! Forwarding to the Shopify Storefront GraphQL endpoint.

use axum::body::Bytes;
use secrecy::ExposeSecret;
use serde::de::IgnoredAny;
use storefront_relay_core::GraphQLRequest;
use tracing::instrument;

use crate::config::UpstreamTarget;
use crate::error::RelayError;

/// Header carrying the Storefront access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// POST a query upstream and return the raw response body.
///
/// The body is checked to be JSON and otherwise returned byte-for-byte.
/// The upstream status code and any GraphQL `errors` array are not
/// interpreted.
///
/// # Errors
///
/// Returns `RelayError::Upstream` if the request or body read fails and
/// `RelayError::InvalidUpstreamBody` if the body is not JSON.
#[instrument(skip_all, fields(endpoint = %target.endpoint))]
pub async fn forward(
    client: &reqwest::Client,
    target: &UpstreamTarget<'_>,
    request: &GraphQLRequest,
) -> Result<Bytes, RelayError> {
    let response = client
        .post(&target.endpoint)
        .header(ACCESS_TOKEN_HEADER, target.access_token.expose_secret())
        .header("Content-Type", "application/json")
        .json(request)
        .send()
        .await?;

    let status = response.status();
    let body = response.bytes().await?;

    if let Err(e) = serde_json::from_slice::<IgnoredAny>(&body) {
        tracing::error!(
            status = %status,
            body = %String::from_utf8_lossy(&body).chars().take(500).collect::<String>(),
            "Storefront API returned a non-JSON body"
        );
        return Err(RelayError::InvalidUpstreamBody(e));
    }

    if status.is_success() {
        tracing::debug!(status = %status, bytes = body.len(), "Storefront API responded");
    } else {
        tracing::warn!(
            status = %status,
            "Storefront API returned non-success status; passing body through"
        );
    }

    Ok(body)
}
