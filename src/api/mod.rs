//! HTTP Clients
//!
//! Bindings to the collector point backend and the public geography
//! service, organized by service.

mod collector;
mod geography;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use collector_form::ApiError;

pub use collector::*;
pub use geography::*;

/// Join a base URL and a path without doubling slashes
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Failure while building a request, before anything is sent
fn request_error(err: gloo_net::Error) -> ApiError {
    ApiError::Request(format!("payload serialization: {}", err))
}

/// Reject non-2xx responses, keeping the body text as the message
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.text().await {
        Ok(body) if !body.trim().is_empty() => body,
        _ => response.status_text(),
    };
    Err(ApiError::Rejected { status, message })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_ok(response).await?;
    response.json::<T>().await.map_err(|err| match err {
        gloo_net::Error::SerdeError(e) => ApiError::MalformedResponse(e.to_string()),
        other => ApiError::Network(other.to_string()),
    })
}
