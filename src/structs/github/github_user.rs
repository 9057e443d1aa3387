use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    pub login: String,
}
