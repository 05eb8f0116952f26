use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Repository entry of `GET /users/{user}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepo {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
}

impl GithubRepo {
    pub fn is_original(&self) -> bool {
        !self.fork && !self.archived
    }
}

#[derive(Debug, Deserialize)]
pub struct GithubUser {
    pub followers: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct ReadmeResponse {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<GithubRepo> for RepoSummary {
    fn from(repo: GithubRepo) -> Self {
        Self {
            id: repo.id,
            name: repo.name,
            description: repo.description,
            html_url: repo.html_url,
            homepage: repo.homepage,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            language: repo.language,
            topics: repo.topics,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RepoDetails {
    #[serde(flatten)]
    pub repo: RepoSummary,
    pub commits: u64,
    pub image: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserStats {
    pub followers: u64,
    #[serde(rename = "totalRepos")]
    pub total_repos: usize,
    #[schema(value_type = Vec<Object>)]
    pub repos: Vec<Value>,
}
