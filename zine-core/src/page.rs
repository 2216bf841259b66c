//! The page data model.
//!
//! A page is the unit persisted by the backend: one question, the user's
//! answer, the generated musing and artwork, and its 1-based position in
//! the question sequence. Pages are immutable once created; there is no
//! update or delete operation anywhere in the system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype for backend-assigned page identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub String);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A page before persistence: everything except the backend-assigned id.
///
/// Invariant: `page_number` equals the 0-based question index plus one at
/// creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDraft {
    pub question: String,
    pub answer: String,
    pub musing: String,
    pub image_url: String,
    pub page_number: u32,
}

impl PageDraft {
    /// Compose the final page from this draft and the id the backend assigned.
    pub fn into_page(self, id: PageId) -> Page {
        Page {
            id,
            question: self.question,
            answer: self.answer,
            musing: self.musing,
            image_url: self.image_url,
            page_number: self.page_number,
            created_date: None,
        }
    }
}

/// A persisted page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub question: String,
    pub answer: String,
    pub musing: String,
    pub image_url: String,
    pub page_number: u32,
    /// Creation timestamp assigned by the backend. Absent on pages composed
    /// locally from a draft plus a create response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
}
