//! Services - per-entity business rules.
//!
//! Every operation receives the request's [`UnitOfWork`](crate::ports::UnitOfWork)
//! by value. Reads simply drop it; writes stage their change and commit it.
//! Malformed input is rejected before the store is touched.

pub mod comments;
pub mod posts;
pub mod users;

use uuid::Uuid;

use crate::error::DomainError;

/// Reject the nil UUID.
fn require_id(id: Uuid, name: &str) -> Result<(), DomainError> {
    if id.is_nil() {
        return Err(DomainError::Validation(format!(
            "Incorrect parameter {name}: {id}"
        )));
    }
    Ok(())
}

/// Reject empty or whitespace-only text. The text is stored as given.
fn require_text(text: &str, field: &str) -> Result<String, DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::Validation(format!(
            "{field} should not be empty"
        )));
    }
    Ok(text.to_owned())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_keeps_text_as_given() {
        assert_eq!(require_text("  hi ", "Text").unwrap(), "  hi ");
    }

    #[test]
    fn test_require_text_rejects_whitespace() {
        let err = require_text(" \t\n", "Text").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_require_id_rejects_nil() {
        assert!(require_id(Uuid::nil(), "userId").is_err());
        assert!(require_id(Uuid::new_v4(), "userId").is_ok());
    }
}
