//! Repository contract for saving and loading campaign documents.

use game_content::CampaignDocument;
use game_core::CampaignId;

use super::Result;

/// Repository for campaign document persistence, one document per identity.
pub trait CampaignRepository: Send + Sync {
    /// Save (or overwrite) a campaign document.
    fn save(&self, id: CampaignId, document: &CampaignDocument) -> Result<()>;

    /// Load a campaign document by identity.
    fn load(&self, id: CampaignId) -> Result<Option<CampaignDocument>>;

    /// Check if a campaign document exists.
    fn exists(&self, id: CampaignId) -> bool;

    /// Delete a campaign document.
    fn delete(&self, id: CampaignId) -> Result<()>;

    /// List all stored campaign identities, ascending.
    fn list_ids(&self) -> Result<Vec<CampaignId>> {
        Ok(vec![])
    }
}
