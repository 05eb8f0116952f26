use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    pub data: Option<MatchedUserData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUserData {
    pub matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUser {
    pub username: String,
    pub github_url: Option<String>,
    pub twitter_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub profile: UserProfile,
    pub submit_stats: Option<SubmitStats>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub ranking: Option<u64>,
    pub user_avatar: Option<String>,
    pub real_name: Option<String>,
    pub about_me: Option<String>,
    pub country_name: Option<String>,
    pub reputation: Option<i64>,
    pub solution_count: Option<u64>,
    pub post_view_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStats {
    #[serde(default)]
    pub ac_submission_num: Vec<SubmissionCount>,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionCount {
    pub difficulty: String,
    pub count: u64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeetcodeProfile {
    pub username: String,
    pub ranking: Option<u64>,
    pub reputation: Option<i64>,
    pub solution_count: Option<u64>,
    pub total_solved: u64,
    pub easy: u64,
    pub medium: u64,
    pub hard: u64,
    pub avatar: Option<String>,
    pub real_name: Option<String>,
    pub about_me: Option<String>,
    pub country: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
}

impl From<MatchedUser> for LeetcodeProfile {
    fn from(user: MatchedUser) -> Self {
        let (mut total_solved, mut easy, mut medium, mut hard) = (0, 0, 0, 0);

        for entry in user
            .submit_stats
            .map(|stats| stats.ac_submission_num)
            .unwrap_or_default()
        {
            match entry.difficulty.as_str() {
                "All" => total_solved = entry.count,
                "Easy" => easy = entry.count,
                "Medium" => medium = entry.count,
                "Hard" => hard = entry.count,
                _ => {}
            }
        }

        Self {
            username: user.username,
            ranking: user.profile.ranking,
            reputation: user.profile.reputation,
            solution_count: user.profile.solution_count,
            total_solved,
            easy,
            medium,
            hard,
            avatar: user.profile.user_avatar,
            real_name: user.profile.real_name,
            about_me: user.profile.about_me,
            country: user.profile.country_name,
            github_url: user.github_url,
            linkedin_url: user.linkedin_url,
        }
    }
}
