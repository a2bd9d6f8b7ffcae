use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const SUGGESTION_FALLBACK_TEXT: &str = "Suggestion details unavailable";

/// One unit of feedback. The service sends either a bare string or a record;
/// anything else is kept as-is and rendered with the fallback text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Suggestion {
    PlainText(String),
    Structured(StructuredSuggestion),
    Other(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredSuggestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "lenient_line", skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Line numbers arrive as numbers or numeric strings; anything that is not a
/// positive line number is dropped.
fn lenient_line<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let line = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    Ok(line.filter(|&n| n > 0))
}

impl Suggestion {
    pub fn text(&self) -> &str {
        match self {
            Self::PlainText(text) => text,
            Self::Structured(record) => record
                .description
                .as_deref()
                .or(record.message.as_deref())
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(SUGGESTION_FALLBACK_TEXT),
            Self::Other(_) => SUGGESTION_FALLBACK_TEXT,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Structured(record) => record.code.as_deref(),
            Self::PlainText(_) | Self::Other(_) => None,
        }
    }

    pub const fn line(&self) -> Option<u32> {
        match self {
            Self::Structured(record) => record.line,
            Self::PlainText(_) | Self::Other(_) => None,
        }
    }

    pub fn fix(&self) -> Option<&str> {
        match self {
            Self::Structured(record) => record.suggestion.as_deref(),
            Self::PlainText(_) | Self::Other(_) => None,
        }
    }
}
