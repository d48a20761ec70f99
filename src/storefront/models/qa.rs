//! # Q&A Model
//!
//! Questions and answers attached to an item, served by `GET /qas/{item_id}`.

use crate::storefront::error::StorefrontResult;
use serde::{Deserialize, Serialize};

/// One question/answer pair (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qa {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub item_id: u64,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub qa_type_id: u32,
}

impl Qa {
    pub fn new(
        id: u64,
        item_id: u64,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id,
            item_id,
            question: question.into(),
            answer: answer.into(),
            qa_type_id: 0,
        }
    }
}

/// `{"qas": [...]}`; the backend sends `null` when an item has none
#[derive(Debug, Deserialize)]
struct QaListEnvelope {
    qas: Option<Vec<Qa>>,
}

/// Decode a Q&A list response body
pub fn decode_qas(body: &str) -> StorefrontResult<Vec<Qa>> {
    let envelope: QaListEnvelope = serde_json::from_str(body)?;
    Ok(envelope.qas.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::error::StorefrontError;

    #[test]
    fn decode_should_read_envelope() {
        let body = r#"{"qas":[{"id":1,"item_id":3,"question":"Size?","answer":"M","qa_type_id":2}]}"#;
        let qas = decode_qas(body).unwrap();
        assert_eq!(qas.len(), 1);
        assert_eq!(qas[0].question, "Size?");
        assert_eq!(qas[0].qa_type_id, 2);
    }

    #[test]
    fn null_list_should_decode_as_empty() {
        assert!(decode_qas(r#"{"qas":null}"#).unwrap().is_empty());
    }

    #[test]
    fn bare_array_should_be_rejected() {
        let err = decode_qas("[]").unwrap_err();
        assert!(matches!(err, StorefrontError::Decode(_)));
    }
}
