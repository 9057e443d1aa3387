use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AiMl,
    Security,
    Compliance,
    Other,
}

impl Category {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ai_ml" | "ai-ml" | "ai/ml" => Some(Category::AiMl),
            "security" => Some(Category::Security),
            "compliance" => Some(Category::Compliance),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::AiMl => "AI/ML",
            Category::Security => "Security",
            Category::Compliance => "Compliance",
            Category::Other => "Other",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::AiMl => "ai_ml",
            Category::Security => "security",
            Category::Compliance => "compliance",
            Category::Other => "other",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}
