use crate::dependency_tree::domain::GitHubRepository;
use crate::ports::outbound::DescriptionRepository;
use crate::shared::error::DescriptionError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct GitHubRepoInfo {
    #[serde(default)]
    description: Option<String>,
}

/// GitHubDescriptionRepository adapter for the GitHub REST API
///
/// Implements the DescriptionRepository port with a single
/// `GET /repos/{owner}/{repo}` per lookup. Requests are anonymous unless a
/// token is configured, in which case it is sent as a bearer token.
///
/// # Failure policy
/// - 10 second timeout per request
/// - No retries: a failed lookup is reported once and left as is
pub struct GitHubDescriptionRepository {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubDescriptionRepository {
    const API_ENDPOINT: &'static str = "https://api.github.com";
    const USER_AGENT: &'static str = "deptree-cli";
    const TIMEOUT_SECONDS: u64 = 10;

    /// Creates a client for api.github.com
    ///
    /// Empty tokens are treated as absent.
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_api_url(Self::API_ENDPOINT, token)
    }

    /// Creates a client for a different API root (e.g., GitHub Enterprise)
    pub fn with_api_url(api_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        Self::with_timeout(
            api_url,
            token,
            Duration::from_secs(Self::TIMEOUT_SECONDS),
        )
    }

    pub(crate) fn with_timeout(
        api_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(Self::USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    #[cfg(test)]
    fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn repository_url(&self, repository: &GitHubRepository) -> String {
        format!(
            "{}/repos/{}/{}",
            self.api_url,
            urlencoding::encode(repository.owner()),
            urlencoding::encode(repository.repo())
        )
    }
}

#[async_trait]
impl DescriptionRepository for GitHubDescriptionRepository {
    async fn fetch_description(&self, repository: &GitHubRepository) -> Result<String> {
        let mut request = self.client.get(self.repository_url(repository));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(DescriptionError::Request)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(DescriptionError::UnexpectedStatus(status.as_u16()).into());
        }

        let body = response.text().await.map_err(DescriptionError::Request)?;
        let info: GitHubRepoInfo = serde_json::from_str(&body).map_err(DescriptionError::Decode)?;

        match info.description {
            Some(description) if !description.is_empty() => Ok(description),
            _ => Err(DescriptionError::NoDescription.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::EnrichDescriptionsUseCase;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serves one canned HTTP response and returns the raw request it received.
    fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (url, handle)
    }

    #[test]
    fn test_github_client_creation() {
        let client = GitHubDescriptionRepository::new(None).unwrap();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_empty_token_is_anonymous() {
        let client = GitHubDescriptionRepository::new(Some(String::new())).unwrap();
        assert!(!client.is_authenticated());

        let client = GitHubDescriptionRepository::new(Some("ghp_test".to_string())).unwrap();
        assert!(client.is_authenticated());
    }

    #[test]
    fn test_repository_url() {
        let client = GitHubDescriptionRepository::with_api_url("https://ghe.example.com/api/v3/", None)
            .unwrap();
        let url = client.repository_url(&GitHubRepository::new("spf13", "cobra"));
        assert_eq!(url, "https://ghe.example.com/api/v3/repos/spf13/cobra");
    }

    #[tokio::test]
    async fn test_fetch_description_success_sends_headers() {
        let (url, server) = serve_once("200 OK", r#"{"description":"A Commander for modern Go CLI interactions"}"#);
        let client =
            GitHubDescriptionRepository::with_api_url(url, Some("ghp_secret".to_string())).unwrap();

        let description = client
            .fetch_description(&GitHubRepository::new("spf13", "cobra"))
            .await
            .unwrap();
        assert_eq!(description, "A Commander for modern Go CLI interactions");

        let request = server.join().unwrap().to_lowercase();
        assert!(request.starts_with("get /repos/spf13/cobra "));
        assert!(request.contains("user-agent: deptree-cli"));
        assert!(request.contains("authorization: bearer ghp_secret"));
    }

    #[tokio::test]
    async fn test_fetch_description_anonymous_has_no_authorization() {
        let (url, server) = serve_once("200 OK", r#"{"description":"pflag"}"#);
        let client = GitHubDescriptionRepository::with_api_url(url, None).unwrap();

        client
            .fetch_description(&GitHubRepository::new("spf13", "pflag"))
            .await
            .unwrap();

        let request = server.join().unwrap().to_lowercase();
        assert!(!request.contains("authorization:"));
    }

    #[tokio::test]
    async fn test_fetch_description_non_200_status() {
        let (url, server) = serve_once("404 Not Found", r#"{"message":"Not Found"}"#);
        let client = GitHubDescriptionRepository::with_api_url(url, None).unwrap();

        let err = client
            .fetch_description(&GitHubRepository::new("gone", "repo"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "GitHub API returned status 404");
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_fetch_description_null_description() {
        let (url, server) = serve_once("200 OK", r#"{"description":null}"#);
        let client = GitHubDescriptionRepository::with_api_url(url, None).unwrap();

        let err = client
            .fetch_description(&GitHubRepository::new("owner", "bare"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "no description set");
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_fetch_description_invalid_json() {
        let (url, server) = serve_once("200 OK", "<html>rate limited</html>");
        let client = GitHubDescriptionRepository::with_api_url(url, None).unwrap();

        let err = client
            .fetch_description(&GitHubRepository::new("owner", "repo"))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to parse response"));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_describe_module_rejects_non_github() {
        let client = GitHubDescriptionRepository::new(None).unwrap();
        let err = client
            .describe_module("golang.org/x/mod@v0.14.0")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "not a GitHub module");
    }

    #[tokio::test]
    async fn test_fetch_description_times_out_on_silent_server() {
        // The kernel completes the handshake from the backlog; nobody ever answers.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let client =
            GitHubDescriptionRepository::with_timeout(url, None, Duration::from_millis(200))
                .unwrap();

        let err = tokio::time::timeout(
            Duration::from_secs(5),
            client.fetch_description(&GitHubRepository::new("owner", "slow")),
        )
        .await
        .expect("request should time out on its own")
        .unwrap_err();
        assert!(err.to_string().starts_with("failed to fetch from GitHub API"));
        drop(listener);
    }

    #[tokio::test]
    async fn test_timed_out_lookup_does_not_block_other_modules() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let client =
            GitHubDescriptionRepository::with_timeout(url, None, Duration::from_millis(200))
                .unwrap();
        let use_case = EnrichDescriptionsUseCase::new(client);

        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            use_case.enrich(
                vec![
                    "github.com/owner/slow@v1.0.0".to_string(),
                    "golang.org/x/mod@v0.14.0".to_string(),
                ],
                None,
            ),
        )
        .await
        .expect("enrichment should finish once the lookup times out");

        assert_eq!(outcome.succeeded, 0);
        assert_eq!(outcome.failed, 2);
        assert!(outcome
            .descriptions
            .get("github.com/owner/slow@v1.0.0")
            .unwrap()
            .starts_with("(failed to fetch from GitHub API"));
        assert_eq!(
            outcome.descriptions.get("golang.org/x/mod@v0.14.0").unwrap(),
            "(not a GitHub module)"
        );
        drop(listener);
    }

    #[tokio::test]
    async fn test_fetch_description_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = GitHubDescriptionRepository::with_api_url(url, None).unwrap();
        let err = client
            .fetch_description(&GitHubRepository::new("owner", "repo"))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to fetch from GitHub API"));
    }
}
