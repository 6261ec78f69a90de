//! Error types for LOUPE domain operations.
//!
//! Every user-triggered mutation that can be refused (posting an empty
//! message, removing the team owner, inviting past the plan limit) reports
//! one of these variants instead of silently doing nothing.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for domain and directory operations.
#[derive(Debug, Error)]
pub enum LoupeError {
    /// Entity not found in the directory.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// The type of entity that was not found (e.g., "deal", "member").
        entity: &'static str,
        /// The identifier that was searched for.
        id: String,
    },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The active plan does not grant the requested feature.
    #[error("{feature} is not available on the {plan} plan")]
    PlanRequired {
        /// Short feature name shown to the user.
        feature: &'static str,
        /// Display name of the active plan.
        plan: &'static str,
    },

    /// The team already has as many members as the plan allows.
    #[error("Team is full ({limit} members on the current plan)")]
    TeamFull {
        /// Member limit of the active plan.
        limit: usize,
    },

    /// The operation is not permitted for this entity.
    #[error("Not permitted: {0}")]
    Forbidden(String),
}

impl LoupeError {
    /// Create a new not found error.
    ///
    /// # Arguments
    ///
    /// * `entity` - The type of entity that was not found
    /// * `id` - The identifier that was searched for
    ///
    /// # Returns
    ///
    /// A new `LoupeError::NotFound` variant.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Create a new invalid input error.
    ///
    /// # Arguments
    ///
    /// * `message` - Description of why the input is invalid
    ///
    /// # Returns
    ///
    /// A new `LoupeError::InvalidInput` variant.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new forbidden error.
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loupe_error_display() {
        let not_found = LoupeError::not_found("deal", "42");
        assert_eq!(not_found.to_string(), "deal '42' not found");

        let invalid = LoupeError::invalid_input("message is empty");
        assert_eq!(invalid.to_string(), "Invalid input: message is empty");

        let plan = LoupeError::PlanRequired {
            feature: "Team chat",
            plan: "Free",
        };
        assert_eq!(
            plan.to_string(),
            "Team chat is not available on the Free plan"
        );

        let full = LoupeError::TeamFull { limit: 3 };
        assert_eq!(
            full.to_string(),
            "Team is full (3 members on the current plan)"
        );
    }

    #[test]
    fn test_forbidden_error_creation() {
        let err = LoupeError::forbidden("owner cannot be removed");
        match err {
            LoupeError::Forbidden(msg) => assert_eq!(msg, "owner cannot be removed"),
            _ => panic!("Expected Forbidden variant"),
        }
    }
}
