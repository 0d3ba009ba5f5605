//! Content loading errors.

use std::path::PathBuf;

use game_core::{ErrorSeverity, GameError, MapError};

/// Kind of stored document an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DocumentKind {
    Map,
    Campaign,
    Corpus,
}

/// Errors raised while reading or writing content documents.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// No stored document exists for the requested identity.
    #[error("{kind} {id} has no stored document")]
    NotFound { kind: DocumentKind, id: u32 },

    /// The document exists but cannot be parsed or violates its schema.
    #[error("malformed {kind} document {path}: {reason}")]
    Malformed {
        kind: DocumentKind,
        path: String,
        reason: String,
    },

    /// The document's self-declared identity disagrees with the request.
    #[error("{kind} document declares id {found}, expected {expected}")]
    IdentityMismatch {
        kind: DocumentKind,
        expected: u32,
        found: u32,
    },

    /// Records in the document collide or fall outside the grid.
    #[error("invalid map layout: {0}")]
    Layout(#[from] MapError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    pub fn malformed(kind: DocumentKind, path: impl Into<String>, reason: impl ToString) -> Self {
        Self::Malformed {
            kind,
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl GameError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ContentError::NotFound { .. }
            | ContentError::Malformed { .. }
            | ContentError::IdentityMismatch { .. }
            | ContentError::Layout(_) => ErrorSeverity::Validation,
            ContentError::Io { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ContentError::NotFound { .. } => "CONTENT_NOT_FOUND",
            ContentError::Malformed { .. } => "CONTENT_MALFORMED",
            ContentError::IdentityMismatch { .. } => "CONTENT_IDENTITY_MISMATCH",
            ContentError::Layout(_) => "CONTENT_INVALID_LAYOUT",
            ContentError::Io { .. } => "CONTENT_IO",
        }
    }
}
