use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GithubLabel {
    pub name: String,
}
