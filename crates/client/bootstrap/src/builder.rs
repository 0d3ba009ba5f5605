//! Builds the content, director, repository and catalog bundle used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use campaign::{
    BuilderVariant, Campaign, CampaignLinker, CorpusCatalog, CorpusMetadata, DestinationProvider,
    FileCampaignRepository, LoadReport, MapDirector, SaveReport, load_campaign, save_campaign,
};
use game_content::{ContentFactory, CorpusFile};
use game_core::CampaignId;

use crate::config::SessionConfig;

/// Builder that assembles a campaign session from configuration.
pub struct SessionBuilder {
    config: SessionConfig,
}

impl SessionBuilder {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<CampaignSession> {
        let content = Arc::new(ContentFactory::new(&self.config.data_dir));

        let repository = FileCampaignRepository::new(content.campaign_dir()).with_context(|| {
            format!(
                "Failed to open campaign directory {}",
                content.campaign_dir().display()
            )
        })?;

        let catalog = match content.load_corpus().context("Failed to read corpus metadata")? {
            Some(file) => {
                let mut catalog = CorpusCatalog::from(file);
                let highest = content
                    .map_ids()
                    .context("Failed to list stored maps")?
                    .last()
                    .map_or(0, |id| id.get());
                if highest > catalog.total_maps() {
                    tracing::info!(
                        "Corpus grew from {} to {} maps",
                        catalog.total_maps(),
                        highest
                    );
                    catalog.set_total_maps(highest);
                }
                catalog
            }
            None => {
                tracing::info!("No corpus metadata found, scanning {}", content.data_dir().display());
                CorpusCatalog::scan(&*content, &repository)
                    .context("Failed to scan map corpus")?
            }
        };

        let variant = BuilderVariant::for_session(self.config.player_context(), content.clone());
        tracing::info!(
            "Session ready: data_dir={}, builder={}, maps={}, campaigns={}",
            content.data_dir().display(),
            variant.name(),
            catalog.total_maps(),
            catalog.total_campaigns()
        );

        Ok(CampaignSession {
            config: self.config,
            director: MapDirector::new(variant),
            content,
            repository,
            catalog,
        })
    }
}

/// Everything a front-end needs to author, inspect and store campaigns.
pub struct CampaignSession {
    pub config: SessionConfig,
    pub content: Arc<ContentFactory>,
    pub director: MapDirector,
    pub repository: FileCampaignRepository,
    pub catalog: CorpusCatalog,
}

impl CampaignSession {
    /// Linker prompting through `provider` with the corpus' map range.
    pub fn linker<'a>(&'a self, provider: &'a mut dyn DestinationProvider) -> CampaignLinker<'a> {
        CampaignLinker::new(&self.director, provider, self.catalog.total_maps())
    }

    pub fn load(&self, id: CampaignId) -> Result<(Campaign, LoadReport)> {
        load_campaign(id, &self.repository, &self.director)
            .with_context(|| format!("Failed to load {id}"))
    }

    /// Saves the campaign and writes the updated corpus counters back.
    ///
    /// Refuses campaigns with unresolved doors, which would be stored as
    /// finish lines. Use [`CampaignSession::save_allowing_unresolved`] to
    /// store them anyway.
    pub fn save(&mut self, campaign: &Campaign) -> Result<SaveReport> {
        let unresolved = campaign.unresolved_doors();
        if let Some((map, position)) = unresolved.first() {
            bail!(
                "{} has {} unresolved door(s), first at {} {}; they would be saved as finish lines",
                campaign.id(),
                unresolved.len(),
                map,
                position
            );
        }
        self.save_allowing_unresolved(campaign)
    }

    pub fn save_allowing_unresolved(&mut self, campaign: &Campaign) -> Result<SaveReport> {
        let report = save_campaign(campaign, &self.repository, &mut self.catalog)
            .with_context(|| format!("Failed to save {}", campaign.id()))?;
        self.persist_catalog()?;
        Ok(report)
    }

    pub fn persist_catalog(&self) -> Result<()> {
        self.content
            .save_corpus(&CorpusFile::from(self.catalog))
            .context("Failed to write corpus metadata")
    }
}
