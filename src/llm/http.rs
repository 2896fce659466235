use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};

use crate::error::{Error, Result};

/// Maps a non-success response to the error the retry policy understands.
pub(crate) async fn check_status(provider: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let headers = response.headers().clone();
    let body = response.text().await.unwrap_or_default();
    Err(status_error(provider, status, &headers, &body))
}

fn status_error(provider: &str, status: StatusCode, headers: &HeaderMap, body: &str) -> Error {
    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = headers
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0);
        return Error::RateLimited(retry_after);
    }

    // includes Anthropic's 529 "overloaded"
    if status.is_server_error() {
        return Error::ServerError(status.as_u16());
    }

    Error::LLMApi(format!("{} API error ({}): {}", provider, status, body))
}
