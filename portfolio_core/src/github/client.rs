use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine};
use futures::future::join_all;
use log::{debug, warn};
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, LINK},
    Client, RequestBuilder,
};
use serde_json::Value;

use super::dto::{GithubRepo, GithubUser, ReadmeResponse, RepoDetails, RepoSummary, UserStats};
use crate::helpers::{
    config::GithubConfig,
    utils::{extract_image_from_markdown, last_page_from_link},
};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const TOP_REPOS: usize = 6;

#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    config: GithubConfig,
}

impl GithubClient {
    pub fn new(http: Client, config: GithubConfig) -> Self {
        Self { http, config }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = self
            .http
            .get(format!("{}/{}", self.config.api_url, path))
            .header(ACCEPT, GITHUB_ACCEPT);

        match &self.config.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Most starred original repositories.
    pub async fn top_repos(&self) -> Result<Vec<RepoSummary>> {
        let mut repos: Vec<RepoSummary> = self
            .list_repos()
            .await?
            .into_iter()
            .filter(GithubRepo::is_original)
            .map(RepoSummary::from)
            .collect();

        repos.sort_by(|a, b| b.stars.cmp(&a.stars));
        repos.truncate(TOP_REPOS);

        Ok(repos)
    }

    pub async fn user_stats(&self) -> Result<UserStats> {
        let username = &self.config.username;

        let (user, repos) = tokio::try_join!(
            self.fetch_json::<GithubUser>(self.get(&format!("users/{}", username))),
            self.fetch_json::<Vec<Value>>(
                self.get(&format!("users/{}/repos", username))
                    .query(&[("per_page", "100")])
            ),
        )?;

        let total_repos = repos
            .iter()
            .filter(|repo| {
                !repo["fork"].as_bool().unwrap_or(false)
                    && !repo["archived"].as_bool().unwrap_or(false)
            })
            .count();

        Ok(UserStats {
            followers: user.followers.unwrap_or(0),
            total_repos,
            repos,
        })
    }

    /// Original repositories enriched with commit counts and a README image.
    pub async fn all_repos(&self) -> Result<Vec<RepoDetails>> {
        let repos: Vec<GithubRepo> = self
            .list_repos()
            .await?
            .into_iter()
            .filter(GithubRepo::is_original)
            .collect();

        let details = join_all(repos.into_iter().map(|repo| self.repo_details(repo))).await;

        Ok(details)
    }

    async fn repo_details(&self, repo: GithubRepo) -> RepoDetails {
        let summary = RepoSummary::from(repo);

        match self.commit_count(&summary.name).await {
            Ok(commits) => {
                let image = self.readme_image(&summary.name).await;
                RepoDetails {
                    repo: summary,
                    commits,
                    image,
                }
            }
            Err(e) => {
                warn!("Failed to enrich repository {}: {}", summary.name, e);
                RepoDetails {
                    repo: summary,
                    commits: 0,
                    image: None,
                }
            }
        }
    }

    async fn list_repos(&self) -> Result<Vec<GithubRepo>> {
        let request = self
            .get(&format!("users/{}/repos", self.config.username))
            .query(&[("sort", "updated"), ("per_page", "100")]);

        self.fetch_json(request).await
    }

    pub async fn commit_count(&self, repo: &str) -> Result<u64> {
        let response = self
            .get(&format!("repos/{}/{}/commits", self.config.username, repo))
            .query(&[("per_page", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            debug!("Commits for {} returned {}", repo, response.status());
            return Ok(0);
        }

        if let Some(link) = response.headers().get(LINK) {
            let link = link.to_str()?;
            return Ok(last_page_from_link(link).unwrap_or(1));
        }

        let commits: Vec<Value> = response.json().await?;
        Ok(commits.len() as u64)
    }

    /// First absolute image URL found in the repository README.
    pub async fn readme_image(&self, repo: &str) -> Option<String> {
        match self.fetch_readme(repo).await {
            Ok(readme) => readme.as_deref().and_then(extract_image_from_markdown),
            Err(e) => {
                debug!("README for {} unavailable: {}", repo, e);
                None
            }
        }
    }

    async fn fetch_readme(&self, repo: &str) -> Result<Option<String>> {
        let response = self
            .get(&format!("repos/{}/{}/readme", self.config.username, repo))
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let readme: ReadmeResponse = response.json().await?;
        let encoded: String = readme
            .content
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = STANDARD.decode(encoded)?;

        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "GitHub API returned {} for {}",
                response.status(),
                response.url()
            ));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    fn client(server: &MockServer, token: Option<&str>) -> GithubClient {
        GithubClient::new(
            Client::new(),
            GithubConfig {
                api_url: server.uri(),
                username: "octo".to_string(),
                token: token.map(str::to_string),
            },
        )
    }

    fn repo(id: u64, name: &str, stars: u64, fork: bool, archived: bool) -> Value {
        json!({
            "id": id,
            "name": name,
            "description": null,
            "html_url": format!("https://github.com/octo/{}", name),
            "homepage": null,
            "stargazers_count": stars,
            "forks_count": 1,
            "language": "Rust",
            "topics": ["cli"],
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-02-01T00:00:00Z",
            "fork": fork,
            "archived": archived
        })
    }

    #[tokio::test]
    async fn test_top_repos_filters_and_sorts() {
        let server = MockServer::start().await;

        let repos: Vec<Value> = (0..9)
            .map(|i| repo(i, &format!("repo{}", i), i * 10, false, false))
            .chain([repo(100, "forked", 1000, true, false), repo(101, "old", 999, false, true)])
            .collect();

        Mock::given(method("GET"))
            .and(path("/users/octo/repos"))
            .and(query_param("sort", "updated"))
            .and(header("accept", GITHUB_ACCEPT))
            .respond_with(ResponseTemplate::new(200).set_body_json(repos))
            .expect(1)
            .mount(&server)
            .await;

        let top = client(&server, None).top_repos().await.unwrap();
        let names: Vec<_> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["repo8", "repo7", "repo6", "repo5", "repo4", "repo3"]);
        assert_eq!(top[0].stars, 80);
    }

    #[tokio::test]
    async fn test_user_stats_counts_original_repos() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/octo"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"login": "octo", "followers": 42})))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/users/octo/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![
                repo(1, "a", 1, false, false),
                repo(2, "b", 1, true, false),
                repo(3, "c", 1, false, false),
            ]))
            .mount(&server)
            .await;

        let stats = client(&server, Some("secret")).user_stats().await.unwrap();
        assert_eq!(stats.followers, 42);
        assert_eq!(stats.total_repos, 2);
        assert_eq!(stats.repos.len(), 3);

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["totalRepos"], json!(2));
    }

    #[tokio::test]
    async fn test_user_stats_fails_when_either_request_fails() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/octo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"followers": 1})))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/users/octo/repos"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        assert!(client(&server, None).user_stats().await.is_err());
    }

    #[tokio::test]
    async fn test_all_repos_enrichment() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/octo/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![
                repo(1, "paged", 5, false, false),
                repo(2, "small", 3, false, false),
                repo(3, "broken", 1, false, false),
            ]))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/repos/octo/paged/commits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}])).insert_header(
                "link",
                r#"<https://api.github.com/repositories/1/commits?per_page=1&page=2>; rel="next", <https://api.github.com/repositories/1/commits?per_page=1&page=57>; rel="last""#,
            ))
            .mount(&server)
            .await;

        let readme = STANDARD.encode("# Paged\n\n![hero](https://example.com/hero.png)\n");
        let wrapped = format!("{}\n{}", &readme[..10], &readme[10..]);
        Mock::given(method("GET"))
            .and(path("/repos/octo/paged/readme"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": wrapped, "encoding": "base64"})))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/repos/octo/small/commits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}, {}])))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/repos/octo/small/readme"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/repos/octo/broken/commits"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let repos = client(&server, None).all_repos().await.unwrap();
        assert_eq!(repos.len(), 3);

        assert_eq!(repos[0].repo.name, "paged");
        assert_eq!(repos[0].commits, 57);
        assert_eq!(repos[0].image.as_deref(), Some("https://example.com/hero.png"));

        assert_eq!(repos[1].commits, 2);
        assert!(repos[1].image.is_none());

        assert_eq!(repos[2].commits, 0);
        assert!(repos[2].image.is_none());

        let value = serde_json::to_value(&repos[0]).unwrap();
        assert_eq!(value["stars"], json!(5));
        assert_eq!(value["commits"], json!(57));
    }

    #[tokio::test]
    async fn test_commit_count_failure_status_is_zero() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octo/empty/commits"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&server)
            .await;

        assert_eq!(client(&server, None).commit_count("empty").await.unwrap(), 0);
    }
}
