//! In-memory CampaignRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use game_content::CampaignDocument;
use game_core::CampaignId;

use crate::repository::{CampaignRepository, RepositoryError, Result};

/// In-memory implementation of CampaignRepository.
#[derive(Default)]
pub struct InMemoryCampaignRepo {
    documents: RwLock<BTreeMap<CampaignId, CampaignDocument>>,
}

impl InMemoryCampaignRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CampaignRepository for InMemoryCampaignRepo {
    fn save(&self, id: CampaignId, document: &CampaignDocument) -> Result<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        documents.insert(id, document.clone());
        Ok(())
    }

    fn load(&self, id: CampaignId) -> Result<Option<CampaignDocument>> {
        let documents = self
            .documents
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(documents.get(&id).cloned())
    }

    fn exists(&self, id: CampaignId) -> bool {
        self.documents
            .read()
            .map(|documents| documents.contains_key(&id))
            .unwrap_or(false)
    }

    fn delete(&self, id: CampaignId) -> Result<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        documents.remove(&id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<CampaignId>> {
        let documents = self
            .documents
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(documents.keys().copied().collect())
    }
}
