//! Codec errors

use thiserror::Error;

/// Failure to encode or decode a spec document
///
/// `path` names the offending field, e.g. `elements[3].attributes[1].allowed`; `$` is the
/// document root.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Malformed input at {path}: {message}")]
    MalformedInput { path: String, message: String },

    #[error("Encoding failed: {0}")]
    Encode(String),
}

impl CodecError {
    pub(crate) fn malformed(path: impl Into<String>, message: impl ToString) -> Self {
        CodecError::MalformedInput {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Field path of a decode failure
    pub fn path(&self) -> Option<&str> {
        match self {
            CodecError::MalformedInput { path, .. } => Some(path),
            CodecError::Encode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let error = CodecError::malformed("elements[0]", "missing field `tag`");
        assert_eq!(
            error.to_string(),
            "Malformed input at elements[0]: missing field `tag`"
        );
        assert_eq!(error.path(), Some("elements[0]"));
    }
}
