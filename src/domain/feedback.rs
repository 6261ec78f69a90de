//! App feedback left by the user.

use serde::{Deserialize, Serialize};

use super::LoupeError;

/// Tags offered in the feedback dialog.
pub const FEEDBACK_TAGS: [&str; 5] = ["Speed", "Accuracy", "Interface", "Support", "Price"];

/// Highest selectable rating.
pub const MAX_RATING: u8 = 5;

/// Feedback about the app, stored once per user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Feedback {
    /// 0–5 stars, 0 meaning "not rated".
    pub rating: u8,
    #[serde(default)]
    pub tags: Vec<String>,
    pub text: String,
}

impl Feedback {
    /// Validates and normalizes a feedback draft.
    ///
    /// # Errors
    ///
    /// Returns `LoupeError::InvalidInput` when the text is blank.
    pub fn new(rating: u8, tags: Vec<String>, text: &str) -> Result<Self, LoupeError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(LoupeError::invalid_input(
                "Please leave at least a text review!",
            ));
        }
        Ok(Self {
            rating: rating.min(MAX_RATING),
            tags,
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_requires_text() {
        let err = Feedback::new(5, vec![], "   ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: Please leave at least a text review!"
        );

        let feedback = Feedback::new(9, vec!["Speed".into()], " great ").unwrap();
        assert_eq!(feedback.rating, MAX_RATING);
        assert_eq!(feedback.text, "great");
    }

    #[test]
    fn test_feedback_serde_shape() {
        let feedback = Feedback::new(4, vec!["Price".into()], "ok").unwrap();
        let json = serde_json::to_string(&feedback).unwrap();
        insta::assert_snapshot!(json, @r#"{"rating":4,"tags":["Price"],"text":"ok"}"#);
    }
}
