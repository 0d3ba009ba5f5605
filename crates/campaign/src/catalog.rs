//! Corpus bookkeeping passed explicitly to the components that need it.

use game_content::{CorpusFile, MapSource};
use game_core::CampaignId;

use crate::error::Result;
use crate::repository::CampaignRepository;

/// Counters describing the stored corpus.
pub trait CorpusMetadata {
    /// Upper bound of map identities offered to authors.
    fn total_maps(&self) -> u32;

    fn total_campaigns(&self) -> u32;

    /// Records the first save of a campaign identity.
    fn record_new_campaign(&mut self, id: CampaignId);

    /// Identity suggested for the next new campaign.
    fn next_campaign_id(&self) -> CampaignId {
        CampaignId(self.total_campaigns() + 1)
    }
}

/// Plain counter implementation of [`CorpusMetadata`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CorpusCatalog {
    total_maps: u32,
    total_campaigns: u32,
}

impl CorpusCatalog {
    pub const fn new(total_maps: u32, total_campaigns: u32) -> Self {
        Self {
            total_maps,
            total_campaigns,
        }
    }

    /// Derives the counters from what is actually stored.
    ///
    /// `total_maps` is the highest stored map identity so that every stored
    /// map is reachable through a `[0, total_maps]` prompt.
    pub fn scan(maps: &dyn MapSource, campaigns: &dyn CampaignRepository) -> Result<Self> {
        let total_maps = maps
            .map_ids()?
            .last()
            .map(|id| id.get())
            .unwrap_or_default();
        let total_campaigns = campaigns.list_ids()?.len() as u32;

        tracing::debug!(total_maps, total_campaigns, "Scanned corpus");

        Ok(Self::new(total_maps, total_campaigns))
    }

    pub fn set_total_maps(&mut self, total_maps: u32) {
        self.total_maps = total_maps;
    }
}

impl From<CorpusFile> for CorpusCatalog {
    fn from(file: CorpusFile) -> Self {
        Self::new(file.total_maps, file.total_campaigns)
    }
}

impl From<CorpusCatalog> for CorpusFile {
    fn from(catalog: CorpusCatalog) -> Self {
        CorpusFile {
            total_maps: catalog.total_maps,
            total_campaigns: catalog.total_campaigns,
        }
    }
}

impl CorpusMetadata for CorpusCatalog {
    fn total_maps(&self) -> u32 {
        self.total_maps
    }

    fn total_campaigns(&self) -> u32 {
        self.total_campaigns
    }

    fn record_new_campaign(&mut self, id: CampaignId) {
        self.total_campaigns += 1;
        tracing::info!(
            "Registered {} (total campaigns: {})",
            id,
            self.total_campaigns
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryCampaignRepo;
    use game_content::{CampaignDocument, InMemoryMapSource, MapDocument};

    #[test]
    fn test_scan_uses_highest_map_id() {
        let maps = InMemoryMapSource::new()
            .with(MapDocument::new(1, 2, 2))
            .with(MapDocument::new(5, 2, 2));
        let campaigns = InMemoryCampaignRepo::new();
        campaigns
            .save(CampaignId(1), &CampaignDocument::new(1))
            .unwrap();

        let catalog = CorpusCatalog::scan(&maps, &campaigns).unwrap();
        assert_eq!(catalog.total_maps(), 5);
        assert_eq!(catalog.total_campaigns(), 1);
        assert_eq!(catalog.next_campaign_id(), CampaignId(2));
    }

    #[test]
    fn test_record_new_campaign() {
        let mut catalog = CorpusCatalog::new(3, 0);
        catalog.record_new_campaign(CampaignId(1));
        assert_eq!(catalog.total_campaigns(), 1);
        assert_eq!(CorpusFile::from(catalog).total_campaigns, 1);
    }
}
