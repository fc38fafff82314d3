use thiserror::Error;

/// Result type alias using DiffError
pub type Result<T> = std::result::Result<T, DiffError>;

/// Error taxonomy for differ binding and diff calls
///
/// Unresolvable accessors are deliberately absent from this taxonomy: a
/// field with no readable accessor is excluded inside the binder and never
/// surfaces as an error. Each remaining kind maps to a stable error code
/// for programmatic handling and external payloads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// An instance handed to a diff call is not of the bound record type
    #[error("type mismatch: {which} instance is `{actual}`, differ is bound to `{expected}`")]
    TypeMismatch {
        which: &'static str,
        expected: String,
        actual: String,
    },

    /// A differ declaration does not resolve to a recognizable record type
    #[error("unsupported shape: {reason}")]
    UnsupportedShape { reason: String },

    /// No differ has been bound for the requested record type
    #[error("no differ registered for type `{type_name}`")]
    NotRegistered { type_name: String },
}

impl DiffError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            DiffError::TypeMismatch { .. } => "ERR_TYPE_MISMATCH",
            DiffError::UnsupportedShape { .. } => "ERR_UNSUPPORTED_SHAPE",
            DiffError::NotRegistered { .. } => "ERR_NOT_REGISTERED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (
                DiffError::TypeMismatch {
                    which: "old",
                    expected: "Demo".into(),
                    actual: "Other".into(),
                },
                "ERR_TYPE_MISMATCH",
            ),
            (
                DiffError::UnsupportedShape {
                    reason: "descriptor has no type name".into(),
                },
                "ERR_UNSUPPORTED_SHAPE",
            ),
            (
                DiffError::NotRegistered {
                    type_name: "Demo".into(),
                },
                "ERR_NOT_REGISTERED",
            ),
        ];
        for (err, expected_code) in cases {
            assert_eq!(err.code(), expected_code, "Wrong code for {:?}", err);
        }
    }

    #[test]
    fn test_type_mismatch_display_names_both_types() {
        let err = DiffError::TypeMismatch {
            which: "new",
            expected: "Demo".into(),
            actual: "Widget".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("new"));
        assert!(msg.contains("Demo"));
        assert!(msg.contains("Widget"));
    }
}
