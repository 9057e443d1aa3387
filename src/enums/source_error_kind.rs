use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SourceErrorKind {
    RateLimited,
    NotFound,
    TransientNetwork,
}

impl SourceErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            SourceErrorKind::RateLimited => "RateLimited",
            SourceErrorKind::NotFound => "NotFound",
            SourceErrorKind::TransientNetwork => "TransientNetwork",
        }
    }
}
