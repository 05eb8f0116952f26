use anyhow::Result;
use reqwest::{
    header::{ORIGIN, REFERER, USER_AGENT},
    Client,
};
use serde_json::json;

use super::dto::{GraphqlRequest, GraphqlResponse, LeetcodeProfile};
use crate::helpers::config::LeetcodeConfig;

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:141.0) Gecko/20100101 Firefox/141.0";

const PROFILE_QUERY: &str = r#"
    query getUserProfile($username: String!) {
      matchedUser(username: $username) {
        username
        githubUrl
        twitterUrl
        linkedinUrl
        profile {
          ranking
          userAvatar
          realName
          aboutMe
          countryName
          reputation
          solutionCount
          postViewCount
        }
        submitStats {
          acSubmissionNum {
            difficulty
            count
          }
        }
      }
    }
"#;

#[derive(Debug, Clone)]
pub struct LeetcodeClient {
    http: Client,
    config: LeetcodeConfig,
}

impl LeetcodeClient {
    pub fn new(http: Client, config: LeetcodeConfig) -> Self {
        Self { http, config }
    }

    pub async fn profile(&self) -> Result<LeetcodeProfile> {
        let body = GraphqlRequest {
            query: PROFILE_QUERY,
            variables: json!({ "username": self.config.username }),
        };

        let response = self
            .http
            .post(format!("{}/graphql/", self.config.base_url))
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ORIGIN, &self.config.base_url)
            .header(REFERER, format!("{}/", self.config.base_url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "LeetCode returned {}",
                response.status()
            ));
        }

        let data: GraphqlResponse = response.json().await?;

        let user = data
            .data
            .and_then(|data| data.matched_user)
            .ok_or_else(|| anyhow::anyhow!("Invalid LeetCode response"))?;

        Ok(LeetcodeProfile::from(user))
    }
}
