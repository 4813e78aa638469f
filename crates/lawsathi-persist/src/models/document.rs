use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// An uploaded document with its full extracted text and the assistant's explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentUpload {
    pub id: String,
    pub session_id: String,
    pub filename: String,
    pub extracted_text: String,
    pub simplified_explanation: String,
    pub timestamp: DateTime<Utc>,
}

impl DocumentUpload {
    pub fn new(
        session_id: impl Into<String>,
        filename: impl Into<String>,
        extracted_text: impl Into<String>,
        simplified_explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            session_id: session_id.into(),
            filename: filename.into(),
            extracted_text: extracted_text.into(),
            simplified_explanation: simplified_explanation.into(),
            timestamp: Utc::now(),
        }
    }
}
