use serde::{Deserialize, Serialize};
use crate::enums::source_error_kind::SourceErrorKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailedRepository {
    pub identifier: String,
    pub error_kind: SourceErrorKind,
}
