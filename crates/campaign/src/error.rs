//! Campaign error types.

use game_content::{ContentError, DocumentKind};
use game_core::{ErrorSeverity, GameError, MapError, MapId, Position};

use crate::providers::ChoiceError;
use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, CampaignError>;

/// Errors surfaced by builders, the linker and campaign persistence.
#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    /// Requested map or campaign identity has no stored document.
    #[error("{kind} {id} has no stored document")]
    NotFound { kind: DocumentKind, id: u32 },

    /// Root tag is not the expected kind, or required fields are missing.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// A document's self-declared identity disagrees with the traversal.
    #[error("{kind} identity mismatch: expected {expected}, found {found}")]
    IdentityMismatch {
        kind: DocumentKind,
        expected: u32,
        found: u32,
    },

    /// A campaign door record names a cell that holds no linkable door.
    #[error("door record at {position} does not name a linkable door on {map}")]
    DanglingDoor { map: MapId, position: Position },

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("destination choice failed: {0}")]
    Choice(#[from] ChoiceError),

    #[error("content error: {0}")]
    Content(#[source] ContentError),

    #[error("the map corpus is empty")]
    EmptyCorpus,
}

impl From<ContentError> for CampaignError {
    fn from(error: ContentError) -> Self {
        match error {
            ContentError::NotFound { kind, id } => CampaignError::NotFound { kind, id },
            ContentError::Malformed { .. } | ContentError::Layout(_) => {
                CampaignError::MalformedDocument(error.to_string())
            }
            ContentError::IdentityMismatch {
                kind,
                expected,
                found,
            } => CampaignError::IdentityMismatch {
                kind,
                expected,
                found,
            },
            ContentError::Io { .. } => CampaignError::Content(error),
        }
    }
}

impl From<RepositoryError> for CampaignError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::CorruptedData(reason) => CampaignError::MalformedDocument(reason),
            other => CampaignError::Repository(other),
        }
    }
}

impl CampaignError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CampaignError::NotFound { .. })
    }
}

impl GameError for CampaignError {
    fn severity(&self) -> ErrorSeverity {
        use CampaignError::*;
        match self {
            NotFound { .. } | MalformedDocument(_) | IdentityMismatch { .. } | DanglingDoor { .. } => {
                ErrorSeverity::Validation
            }
            Map(error) => error.severity(),
            Repository(_) | Content(_) | Choice(_) => ErrorSeverity::Fatal,
            EmptyCorpus => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use CampaignError::*;
        match self {
            NotFound { .. } => "CAMPAIGN_NOT_FOUND",
            MalformedDocument(_) => "CAMPAIGN_MALFORMED_DOCUMENT",
            IdentityMismatch { .. } => "CAMPAIGN_IDENTITY_MISMATCH",
            DanglingDoor { .. } => "CAMPAIGN_DANGLING_DOOR",
            Map(error) => error.error_code(),
            Repository(_) => "CAMPAIGN_REPOSITORY",
            Choice(_) => "CAMPAIGN_CHOICE",
            Content(_) => "CAMPAIGN_CONTENT_IO",
            EmptyCorpus => "CAMPAIGN_EMPTY_CORPUS",
        }
    }
}

/// Error confined to one branch of a traversal.
///
/// The offending door (or map record) is left untouched and the traversal
/// continues with its siblings.
#[derive(Debug)]
pub struct BranchFailure {
    pub map: MapId,
    /// Door cell the failure belongs to; `None` for a whole map record.
    pub position: Option<Position>,
    pub destination: Option<MapId>,
    pub error: CampaignError,
}
