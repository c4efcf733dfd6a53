use reqwest::Client;

use crate::error::FetchError;

/// Retrieves raw weather payloads over HTTP.
///
/// Holds a shared `reqwest::Client`; connection pooling and timeouts are
/// whatever the platform defaults provide.
#[derive(Debug, Clone, Default)]
pub struct WeatherFetcher {
    http: Client,
}

impl WeatherFetcher {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// GET `url` and return the entire response body as text.
    ///
    /// The body is returned for non-2xx statuses as well: an error payload
    /// from the API is still a readable document for the parser. Only
    /// failures to send the request or to read the body are errors here.
    pub async fn fetch_body(&self, url: &str) -> Result<String, FetchError> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request { url: url.to_string(), source })?;

        res.text().await.map_err(|source| FetchError::Body { url: url.to_string(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_full_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/current.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"current":{}}"#))
            .mount(&server)
            .await;

        let fetcher = WeatherFetcher::new();
        let body = fetcher
            .fetch_body(&format!("{}/current.json", server.uri()))
            .await
            .expect("fetch should succeed");

        assert_eq!(body, r#"{"current":{}}"#);
    }

    #[tokio::test]
    async fn returns_body_even_for_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/current.json"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_string(r#"{"error":{"code":2008,"message":"API key disabled."}}"#),
            )
            .mount(&server)
            .await;

        let fetcher = WeatherFetcher::new();
        let body = fetcher
            .fetch_body(&format!("{}/current.json", server.uri()))
            .await
            .expect("a 4xx body is still a body");

        assert!(body.contains("API key disabled."));
    }

    #[tokio::test]
    async fn connection_refused_is_a_request_error() {
        let fetcher = WeatherFetcher::new();
        // Port 1 is never listening.
        let err = fetcher.fetch_body("http://127.0.0.1:1/current.json").await.unwrap_err();

        assert!(matches!(err, FetchError::Request { .. }));
        assert!(err.to_string().contains("Failed to send request"));
    }
}
