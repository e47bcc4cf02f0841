use gloo_net::http::Request;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LikeResponse {
    pub likes: u32,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    /// Non-2xx response. The like endpoint answers this way when the
    /// visitor is not logged in.
    Status(u16),
    Network(String),
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Status(status) => write!(f, "request failed with status {}", status),
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Like a post and return its updated like count.
pub async fn like_post(id: i64) -> Result<LikeResponse, ApiError> {
    let url = format!("/like_blog/{}", id);
    let response = Request::get(&url)
        .header("X-Requested-With", "XMLHttpRequest")
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_response_parses_count() {
        let response: LikeResponse = serde_json::from_str(r#"{"likes":42}"#).unwrap();
        assert_eq!(response.likes, 42);
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            ApiError::Status(403).to_string(),
            "request failed with status 403"
        );
    }
}
