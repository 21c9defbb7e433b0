//! Journal entries: a dated answer to a reflective question.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Default prompt when no routine supplies a closing question.
pub const DEFAULT_QUESTION: &str = "Qu'est-ce que je n'ai plus besoin d'être ?";

/// Secondary prompt offered alongside the default one.
pub const SECONDARY_QUESTION: &str = "Qu'est-ce que j'accepte de lâcher ?";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Create an entry stamped with the current time.
    ///
    /// # Errors
    ///
    /// Rejects a blank answer.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let answer = answer.into();
        if answer.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "answer".into(),
                message: "journal answer is empty".into(),
            });
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            question: question.into(),
            answer: answer.trim().to_string(),
            created_at: Utc::now(),
        })
    }
}
