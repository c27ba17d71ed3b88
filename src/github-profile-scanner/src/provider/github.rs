//! GitHub implementation of [`RepositoryProvider`].

use super::{ContentEncoding, FileContent, FileLookup, ProviderError, Repository, RepositoryProvider};
use async_trait::async_trait;
use octocrab::{models, Octocrab, Page};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info};
use url::Url;

/// Results per page when listing repositories.
const RESULTS_PER_PAGE: u8 = 100;

/// Query parameters for `GET /users/{account}/repos`.
#[derive(Serialize)]
struct ListReposParams {
    per_page: u8,
}

/// Repository provider backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubProvider {
    octocrab: Octocrab,
}

impl GitHubProvider {
    /// Builds a provider.
    ///
    /// With a `token` the client is authenticated, otherwise anonymous.
    /// Both modes evaluate identically; they only differ in rate limits.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if `api_url` is rejected or the client
    /// cannot be built.
    pub fn new(token: Option<&str>, api_url: Option<&Url>) -> Result<Self, ProviderError> {
        let mut builder = Octocrab::builder();

        if let Some(url) = api_url {
            builder = builder
                .base_uri(url.as_str())
                .map_err(|e| ProviderError::InvalidApiUrl {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
        }

        let octocrab = match token {
            Some(token) => {
                info!("Using GitHub token");
                builder.personal_token(token.to_string()).build()?
            }
            None => {
                info!("Using unauthenticated client");
                builder.build()?
            }
        };

        Ok(Self { octocrab })
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn from_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }
}

#[async_trait]
impl RepositoryProvider for GitHubProvider {
    async fn list_repositories(&self, account: &str) -> Result<Vec<Repository>, ProviderError> {
        let route = format!("/users/{account}/repos");
        let params = ListReposParams {
            per_page: RESULTS_PER_PAGE,
        };

        let first: Page<models::Repository> = self.octocrab.get(route, Some(&params)).await?;
        let repositories = self.octocrab.all_pages(first).await?;
        debug!(count = repositories.len(), "Fetched repository list");

        repositories.into_iter().map(into_repository).collect()
    }

    async fn get_file_content(
        &self,
        account: &str,
        repository: &str,
        path: &str,
    ) -> Result<FileLookup, ProviderError> {
        let result = self
            .octocrab
            .repos(account, repository)
            .get_content()
            .path(path)
            .send()
            .await;

        match result {
            Ok(items) => Ok(single_file(items.items)),
            Err(e) if is_not_found(&e) => Ok(FileLookup::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}

/// Maps a contents response onto a lookup.
///
/// Only a response holding exactly one `file` entry is a hit; directory
/// listings and empty responses are treated as the file being absent.
fn single_file(items: Vec<models::repos::Content>) -> FileLookup {
    let mut items = items.into_iter();
    match (items.next(), items.next()) {
        (Some(item), None) if item.r#type == "file" => FileLookup::Found(FileContent {
            encoding: ContentEncoding::from_api(item.encoding.as_deref()),
            payload: item.content.unwrap_or_default(),
        }),
        _ => FileLookup::NotFound,
    }
}

/// Checks if an error is a 404 from the API.
fn is_not_found(error: &octocrab::Error) -> bool {
    match error {
        octocrab::Error::GitHub { source, .. } => source.status_code.as_u16() == 404,
        _ => false,
    }
}

/// Validates an API repository into the evaluator's [`Repository`].
fn into_repository(repo: models::Repository) -> Result<Repository, ProviderError> {
    let last_updated = repo
        .updated_at
        .and_then(|t| OffsetDateTime::from_unix_timestamp(t.timestamp()).ok())
        .ok_or_else(|| ProviderError::MissingField {
            repository: repo.name.clone(),
            field: "updated_at",
        })?;

    let default_branch = repo
        .default_branch
        .ok_or_else(|| ProviderError::MissingField {
            repository: repo.name.clone(),
            field: "default_branch",
        })?;

    let language = repo
        .language
        .as_ref()
        .and_then(|value| value.as_str())
        .map(str::to_owned);

    Ok(Repository {
        name: repo.name,
        is_fork: repo.fork.unwrap_or(false),
        description: repo.description.unwrap_or_default(),
        default_branch,
        last_updated,
        language,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api_repository(extra: serde_json::Value) -> models::Repository {
        let mut value = json!({
            "id": 1,
            "name": "scanner",
            "url": "https://api.github.com/repos/octo/scanner",
        });
        if let (Some(base), Some(extra)) = (value.as_object_mut(), extra.as_object()) {
            base.extend(extra.clone());
        }
        serde_json::from_value(value).unwrap()
    }

    /// Serves canned `(status, body)` responses keyed by request path.
    async fn stub_server(routes: Vec<(&'static str, u16, String)>) -> Url {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let request = String::from_utf8_lossy(&request);
                let path = request
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("/")
                    .split('?')
                    .next()
                    .unwrap_or("/")
                    .to_string();
                let (status, body) = routes
                    .iter()
                    .find(|(route, _, _)| *route == path)
                    .map(|(_, status, body)| (*status, body.clone()))
                    .unwrap_or((404, not_found_body()));

                let response = format!(
                    "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Url::parse(&format!("http://{addr}/")).unwrap()
    }

    fn not_found_body() -> String {
        json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })
        .to_string()
    }

    fn content_entry(name: &str, kind: &str, content: Option<&str>) -> serde_json::Value {
        let mut entry = json!({
            "type": kind,
            "size": 12,
            "name": name,
            "path": name,
            "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
            "url": format!("https://api.github.com/repos/octo/scanner/contents/{name}"),
            "git_url": "https://api.github.com/repos/octo/scanner/git/blobs/3d21ec53a331a6f037a91c368710b99387d012c1",
            "html_url": format!("https://github.com/octo/scanner/blob/main/{name}"),
            "download_url": format!("https://raw.githubusercontent.com/octo/scanner/main/{name}"),
            "_links": {
                "git": "https://api.github.com/repos/octo/scanner/git/blobs/3d21ec53a331a6f037a91c368710b99387d012c1",
                "self": format!("https://api.github.com/repos/octo/scanner/contents/{name}"),
                "html": format!("https://github.com/octo/scanner/blob/main/{name}")
            }
        });
        if let (Some(map), Some(content)) = (entry.as_object_mut(), content) {
            map.insert("encoding".to_string(), json!("base64"));
            map.insert("content".to_string(), json!(content));
        }
        entry
    }

    async fn provider_for(routes: Vec<(&'static str, u16, String)>) -> GitHubProvider {
        let url = stub_server(routes).await;
        GitHubProvider::new(None, Some(&url)).unwrap()
    }

    #[tokio::test]
    async fn returns_single_file_content() {
        // "hello world\n"
        let body = content_entry("README.md", "file", Some("aGVsbG8g\nd29ybGQK\n")).to_string();
        let provider =
            provider_for(vec![("/repos/octo/scanner/contents/README.md", 200, body)]).await;

        let lookup = provider
            .get_file_content("octo", "scanner", "README.md")
            .await
            .unwrap();

        assert_eq!(
            lookup,
            FileLookup::Found(FileContent::base64("aGVsbG8g\nd29ybGQK\n"))
        );
    }

    #[tokio::test]
    async fn maps_404_to_not_found() {
        let provider = provider_for(Vec::new()).await;

        let lookup = provider
            .get_file_content("octo", "scanner", "README.md")
            .await
            .unwrap();

        assert_eq!(lookup, FileLookup::NotFound);
    }

    #[tokio::test]
    async fn maps_empty_listing_to_not_found() {
        let provider = provider_for(vec![(
            "/repos/octo/scanner/contents/README.md",
            200,
            "[]".to_string(),
        )])
        .await;

        let lookup = provider
            .get_file_content("octo", "scanner", "README.md")
            .await
            .unwrap();

        assert_eq!(lookup, FileLookup::NotFound);
    }

    #[tokio::test]
    async fn maps_directory_listing_to_not_found() {
        let listing = json!([
            content_entry("intro.md", "file", None),
            content_entry("images", "dir", None),
        ])
        .to_string();
        let provider =
            provider_for(vec![("/repos/octo/scanner/contents/README.md", 200, listing)]).await;

        let lookup = provider
            .get_file_content("octo", "scanner", "README.md")
            .await
            .unwrap();

        assert_eq!(lookup, FileLookup::NotFound);
    }

    #[tokio::test]
    async fn maps_single_directory_entry_to_not_found() {
        let listing = json!([content_entry("README.md", "dir", None)]).to_string();
        let provider =
            provider_for(vec![("/repos/octo/scanner/contents/README.md", 200, listing)]).await;

        let lookup = provider
            .get_file_content("octo", "scanner", "README.md")
            .await
            .unwrap();

        assert_eq!(lookup, FileLookup::NotFound);
    }

    #[tokio::test]
    async fn surfaces_server_errors() {
        let body = json!({ "message": "Server Error", "documentation_url": null }).to_string();
        let provider =
            provider_for(vec![("/repos/octo/scanner/contents/README.md", 500, body)]).await;

        let result = provider.get_file_content("octo", "scanner", "README.md").await;

        assert!(matches!(result, Err(ProviderError::GitHub(_))));
    }

    #[test]
    fn converts_complete_repository() {
        let repo = api_repository(json!({
            "fork": true,
            "description": "A scanner",
            "default_branch": "main",
            "updated_at": "2023-04-05T06:07:08Z",
            "language": "Rust",
        }));

        let converted = into_repository(repo).unwrap();

        assert_eq!(converted.name, "scanner");
        assert!(converted.is_fork);
        assert_eq!(converted.description, "A scanner");
        assert_eq!(converted.default_branch, "main");
        assert_eq!(converted.last_updated.unix_timestamp(), 1_680_674_828);
        assert_eq!(converted.language.as_deref(), Some("Rust"));
    }

    #[test]
    fn fills_optional_fields_with_defaults() {
        let repo = api_repository(json!({
            "default_branch": "master",
            "updated_at": "2023-04-05T06:07:08Z",
        }));

        let converted = into_repository(repo).unwrap();

        assert!(!converted.is_fork);
        assert_eq!(converted.description, "");
        assert_eq!(converted.language, None);
    }

    #[test]
    fn rejects_repository_without_updated_at() {
        let repo = api_repository(json!({ "default_branch": "main" }));

        let result = into_repository(repo);
        assert!(matches!(
            result,
            Err(ProviderError::MissingField {
                field: "updated_at",
                ..
            })
        ));
    }

    #[test]
    fn rejects_repository_without_default_branch() {
        let repo = api_repository(json!({ "updated_at": "2023-04-05T06:07:08Z" }));

        let result = into_repository(repo);
        assert!(matches!(
            result,
            Err(ProviderError::MissingField {
                field: "default_branch",
                ..
            })
        ));
    }
}
