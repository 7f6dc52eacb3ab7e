use crate::domain::{entities::ArtifactSet, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// An entity name must start with a letter and contain only letters,
    /// digits, `-`, `_` or `.`.
    pub fn validate_entity_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidEntityName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let first = name.chars().next().ok_or_else(|| invalid("name cannot be empty"))?;
        if !first.is_alphabetic() {
            return Err(invalid("name must start with a letter"));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(invalid(&format!("character '{bad}' is not allowed")));
        }
        Ok(())
    }

    pub fn validate_artifacts(artifacts: &ArtifactSet) -> Result<(), DomainError> {
        artifacts.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_names() {
        for name in ["foo", "userProfile", "user-profile", "data_store", "v2api"] {
            assert!(DomainValidator::validate_entity_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_leading_digit_and_symbols() {
        assert!(DomainValidator::validate_entity_name("1foo").is_err());
        assert!(DomainValidator::validate_entity_name("foo$").is_err());
        assert!(DomainValidator::validate_entity_name("").is_err());
    }
}
