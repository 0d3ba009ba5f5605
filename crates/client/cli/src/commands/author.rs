//! Author a new campaign interactively.

use anyhow::{Result, bail};
use clap::Parser;
use console::style;

use campaign::{Campaign, CampaignRepository, CorpusMetadata, prompt_start_map};
use client_bootstrap::{SessionBuilder, SessionConfig};
use game_core::{CampaignId, MapId};

use crate::input::ConsoleProvider;

/// Build a new campaign by answering door prompts
#[derive(Parser)]
pub struct Author {
    /// Campaign identity (defaults to the next free number)
    #[arg(long, value_name = "ID")]
    id: Option<u32>,

    /// Starting map (prompted when omitted)
    #[arg(long, value_name = "MAP")]
    start: Option<u32>,

    /// Author for this player (overrides CAMPAIGN_PLAYER)
    #[arg(long, value_name = "NAME")]
    player: Option<String>,

    /// Save even if some doors are still unresolved (they become finish lines)
    #[arg(long)]
    allow_unresolved: bool,
}

impl Author {
    pub fn execute(self, mut config: SessionConfig) -> Result<()> {
        if let Some(player) = self.player {
            config.player = Some(player);
        }
        let mut session = SessionBuilder::new(config).build()?;

        let id = self
            .id
            .map(CampaignId)
            .unwrap_or_else(|| session.catalog.next_campaign_id());
        if session.repository.exists(id) {
            bail!("{id} already exists; use `campaign reroot` to rebuild it");
        }

        let total = session.catalog.total_maps();
        let mut provider = ConsoleProvider::stdio();

        let start = match self.start {
            Some(raw) => match MapId::from_raw(raw) {
                Some(map) if raw <= total => map,
                _ => bail!("Starting map {raw} is outside [1, {total}]"),
            },
            None => prompt_start_map(&mut provider, total)?,
        };

        println!(
            "{} {} from {}",
            style("Authoring").bold().cyan(),
            id,
            start
        );

        let (campaign, report) = {
            let mut linker = session.linker(&mut provider);
            Campaign::build(id, start, &mut linker)?
        };
        super::print_link_report(&report);

        let saved = if self.allow_unresolved {
            session.save_allowing_unresolved(&campaign)?
        } else {
            session.save(&campaign)?
        };
        super::print_save_report(&saved);

        Ok(())
    }
}
