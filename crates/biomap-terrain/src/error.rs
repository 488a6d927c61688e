//! Generation error types.

/// Errors raised before any generation stage runs.
///
/// Generation itself cannot fail once the configuration is accepted, so there
/// is never partial output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    /// A configuration value is outside its documented range.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration {
        /// Name of the offending field, as it appears in the config file.
        field: &'static str,
        /// What was wrong with the value.
        reason: String,
    },
}

impl GenerationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the configuration field that was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { field, .. } => field,
        }
    }
}

/// Check that `value` is finite and lies in `[0.0, 1.0]`.
pub(crate) fn require_unit(field: &'static str, value: f64) -> Result<(), GenerationError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GenerationError::invalid(
            field,
            format!("expected a value in [0, 1], got {value}"),
        ))
    }
}
