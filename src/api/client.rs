//! X API v2 HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{self, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use url::Url;

use crate::api::auth::bearer_header;
use crate::api::model::{Account, Page};
use crate::api::options::{TimelineOptions, UserLookupOptions};
use crate::api::source::TimelineSource;
use crate::api::types::{TimelineResponse, UserLookupResponse};
use crate::error::{Error, Result};

/// Default API host.
pub const API_HOST: &str = "https://api.twitter.com";

/// Header carrying the epoch second at which the rate-limit window resets.
const RATE_LIMIT_RESET: &str = "x-rate-limit-reset";

/// X API client with bearer authorization.
pub struct XApi {
    client: Client,
    host: Url,
    authorization: HeaderValue,
    lookup_options: UserLookupOptions,
}

impl XApi {
    /// Create a new API client.
    pub fn new(token: &str, host: &str, timeout: Duration) -> Result<Self> {
        let host = Url::parse(host)?;
        let authorization = bearer_header(token)?;

        let client = Client::builder()
            .user_agent(concat!("x-harvester/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            host,
            authorization,
            lookup_options: UserLookupOptions::default(),
        })
    }

    /// Make an authenticated GET request.
    async fn get(&self, path: &str, query: &[(&'static str, String)]) -> Result<Response> {
        let url = self.host.join(path)?;

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .query(query)
            .header(header::AUTHORIZATION, self.authorization.clone())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == StatusCode::TOO_MANY_REQUESTS {
            let reset = response
                .headers()
                .get(RATE_LIMIT_RESET)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown")
                .to_string();
            return Err(Error::RateLimited(reset));
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Auth error response: {}", body);
            return Err(Error::Authentication(format!(
                "HTTP {}: {}",
                status,
                if body.is_empty() {
                    "Authentication failed"
                } else {
                    &body
                }
            )));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!("HTTP {}: {}", status, body)));
        }

        Ok(response)
    }

    /// Resolve an account by handle.
    ///
    /// A comma-separated list of handles is accepted; only the first account
    /// returned is used.
    pub async fn lookup_account(&self, handles: &str) -> Result<Account> {
        let names: Vec<&str> = handles
            .split(',')
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .collect();

        if names.is_empty() {
            return Err(Error::Lookup("no account handle given".into()));
        }

        let query = self.lookup_options.query_pairs(&names);
        let result = async {
            let response = self.get("/2/users/by", &query).await?;
            let text = response.text().await?;
            tracing::debug!("User lookup response: {}", text);

            serde_json::from_str::<UserLookupResponse>(&text).map_err(|e| {
                Error::Api(format!(
                    "Failed to parse user lookup: {} - Response: {}",
                    e, text
                ))
            })
        }
        .await
        .map_err(Error::into_lookup)?;

        match result.data.into_iter().next() {
            Some(user) => Ok(Account::from(user)),
            None => {
                for problem in &result.errors {
                    tracing::warn!("User lookup: {}", problem.summary());
                }
                Err(Error::AccountNotFound(handles.to_string()))
            }
        }
    }

    /// Get one page of an account's timeline.
    pub async fn get_timeline(
        &self,
        user_id: &str,
        options: &TimelineOptions,
        pagination_token: Option<&str>,
    ) -> Result<Page> {
        let path = format!("/2/users/{}/tweets", user_id);
        let query = options.query_pairs(pagination_token);

        let response = self.get(&path, &query).await?;
        let text = response.text().await?;
        tracing::debug!("Timeline response length: {} bytes", text.len());

        let timeline: TimelineResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse timeline: {} - Response: {}",
                e,
                text.chars().take(500).collect::<String>()
            ))
        })?;

        // Partial errors (e.g. deleted media) come alongside data.
        if timeline.data.is_empty() && !timeline.errors.is_empty() {
            let summary: Vec<String> = timeline.errors.iter().map(|p| p.summary()).collect();
            return Err(Error::Api(summary.join("; ")));
        }
        for problem in &timeline.errors {
            tracing::debug!("Timeline partial error: {}", problem.summary());
        }

        Ok(Page::from(timeline))
    }
}

#[async_trait]
impl TimelineSource for XApi {
    async fn fetch_page(
        &self,
        account_id: &str,
        options: &TimelineOptions,
        pagination_token: Option<&str>,
    ) -> Result<Page> {
        self.get_timeline(account_id, options, pagination_token)
            .await
            .map_err(Error::into_fetch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve a single canned HTTP response and hand back the raw request head.
    async fn serve_once(
        status_line: &'static str,
        extra_headers: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "{}\r\nContent-Type: application/json\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                extra_headers,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&request).into_owned()
        });

        (addr, handle)
    }

    fn api(host: &str) -> XApi {
        XApi::new("test-token", host, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_host() {
        assert!(matches!(
            XApi::new("t", "not a url", Duration::from_secs(1)),
            Err(Error::UrlParse(_))
        ));
    }

    #[tokio::test]
    async fn test_lookup_uses_first_account() {
        let (host, server) = serve_once(
            "HTTP/1.1 200 OK",
            "",
            r#"{"data":[{"id":"42","username":"alice","description":"bio"},{"id":"43","username":"bob"}]}"#,
        )
        .await;

        let account = api(&host).lookup_account("alice,bob").await.unwrap();
        assert_eq!(account.id, "42");
        assert_eq!(account.description, "bio");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /2/users/by?usernames=alice%2Cbob"));
        assert!(request.to_lowercase().contains("authorization: bearer test-token"));
    }

    #[tokio::test]
    async fn test_lookup_not_found() {
        let (host, _server) = serve_once(
            "HTTP/1.1 200 OK",
            "",
            r#"{"errors":[{"title":"Not Found Error","detail":"Could not find user"}]}"#,
        )
        .await;

        let err = api(&host).lookup_account("nobody").await.unwrap_err();
        assert!(matches!(err, Error::AccountNotFound(ref h) if h == "nobody"));
    }

    #[tokio::test]
    async fn test_timeline_page_and_token() {
        let (host, server) = serve_once(
            "HTTP/1.1 200 OK",
            "",
            r#"{"data":[{"id":"1","public_metrics":{"like_count":3}}],"meta":{"next_token":"n2"}}"#,
        )
        .await;

        let page = api(&host)
            .fetch_page("42", &TimelineOptions::default(), Some("n1"))
            .await
            .unwrap();
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.continuation(), Some("n2"));

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /2/users/42/tweets?"));
        assert!(request.contains("pagination_token=n1"));
    }

    #[tokio::test]
    async fn test_rate_limit_is_reported() {
        let (host, _server) = serve_once(
            "HTTP/1.1 429 Too Many Requests",
            "x-rate-limit-reset: 1700000000\r\n",
            r#"{"title":"Too Many Requests"}"#,
        )
        .await;

        let err = api(&host)
            .fetch_page("42", &TimelineOptions::default(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::RateLimited(ref reset) if reset == "1700000000"));
    }

    #[tokio::test]
    async fn test_server_error_becomes_fetch_error() {
        let (host, _server) =
            serve_once("HTTP/1.1 503 Service Unavailable", "", r#"{"title":"down"}"#).await;

        let err = api(&host)
            .fetch_page("42", &TimelineOptions::default(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fetch(ref m) if m.contains("503")));
    }
}
