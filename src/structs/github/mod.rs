pub mod github_issue;
pub mod github_label;
pub mod github_user;
