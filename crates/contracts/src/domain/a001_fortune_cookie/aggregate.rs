use serde::{Deserialize, Serialize};

/// Maximum length of a phrase typed in the admin screen, in characters
pub const PHRASE_MAX_CHARS: usize = 200;

// ============================================================================
// Wire format
// ============================================================================

/// Fortune cookie as returned by `GET /fortune`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneCookieRecord {
    #[serde(rename = "CookieFortune", default)]
    pub cookie_fortune: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Body of `GET /fortune`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneListResponse {
    #[serde(default)]
    pub fortune: Vec<FortuneCookieRecord>,
}

impl FortuneListResponse {
    /// Project the server shape onto phrase records, keeping server order
    pub fn into_phrases(self) -> Vec<FortunePhrase> {
        self.fortune.into_iter().map(FortunePhrase::from).collect()
    }
}

/// Body of `POST /fortune`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFortuneRequest {
    #[serde(rename = "CookieFortune")]
    pub cookie_fortune: String,
}

impl CreateFortuneRequest {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            cookie_fortune: phrase.into(),
        }
    }
}

// ============================================================================
// Phrase record
// ============================================================================

/// A phrase as shown in the admin table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortunePhrase {
    pub phrase: String,
    pub id: Option<String>,
}

impl FortunePhrase {
    pub fn new(phrase: impl Into<String>, id: Option<String>) -> Self {
        Self {
            phrase: phrase.into(),
            id,
        }
    }

    /// Identifier to delete this phrase by. Rows without one cannot be deleted.
    pub fn delete_target(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

impl From<FortuneCookieRecord> for FortunePhrase {
    fn from(record: FortuneCookieRecord) -> Self {
        Self {
            phrase: record.cookie_fortune,
            id: record.id.filter(|id| !id.is_empty()),
        }
    }
}

// ============================================================================
// Input rules
// ============================================================================

/// Trim user input; `None` when nothing is left to save
pub fn normalize_phrase(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Cut input down to `PHRASE_MAX_CHARS` characters
pub fn clamp_phrase_input(input: &str) -> String {
    match input.char_indices().nth(PHRASE_MAX_CHARS) {
        Some((byte_idx, _)) => input[..byte_idx].to_string(),
        None => input.to_string(),
    }
}
