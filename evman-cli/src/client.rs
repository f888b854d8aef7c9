//! HTTP client for the events API.

use async_trait::async_trait;
use evman_core::{ApiError, ApiResult, Category, EventApi, EventDraft, EventRecord};

/// reqwest-backed implementation of [`EventApi`].
///
/// Non-2xx responses are treated uniformly as failure regardless of what
/// the body says; the payload is only decoded on success.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check_status(resp: &reqwest::Response) -> ApiResult<()> {
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(resp.status().as_u16()))
        }
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn decode(err: reqwest::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

#[async_trait]
impl EventApi for ApiClient {
    /// GET /events?category=<value>
    async fn list_events(&self, category: Option<Category>) -> ApiResult<Vec<EventRecord>> {
        let mut request = self.http.get(self.url("/events"));
        if let Some(category) = category {
            request = request.query(&[("category", category.as_str())]);
        }

        let resp = request.send().await.map_err(transport)?;
        Self::check_status(&resp)?;
        resp.json().await.map_err(decode)
    }

    /// POST /events
    async fn create_event(&self, draft: &EventDraft) -> ApiResult<EventRecord> {
        let resp = self
            .http
            .post(self.url("/events"))
            .json(draft)
            .send()
            .await
            .map_err(transport)?;

        Self::check_status(&resp)?;
        resp.json().await.map_err(decode)
    }

    /// PUT /events/{id}
    async fn update_event(&self, id: &str, draft: &EventDraft) -> ApiResult<EventRecord> {
        let resp = self
            .http
            .put(self.url(&format!("/events/{id}")))
            .json(draft)
            .send()
            .await
            .map_err(transport)?;

        Self::check_status(&resp)?;
        resp.json().await.map_err(decode)
    }

    /// DELETE /events/{id}
    async fn delete_event(&self, id: &str) -> ApiResult<()> {
        let resp = self
            .http
            .delete(self.url(&format!("/events/{id}")))
            .send()
            .await
            .map_err(transport)?;

        Self::check_status(&resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(client.url("/events"), "http://localhost:5000/api/events");
    }

    #[test]
    fn record_paths_embed_the_id() {
        let client = ApiClient::new("http://localhost:5000/api");
        assert_eq!(
            client.url("/events/abc123"),
            "http://localhost:5000/api/events/abc123"
        );
    }
}
