//! Replace the starting map of a stored campaign.

use anyhow::{Context, Result, bail};
use clap::Parser;
use console::style;

use campaign::CorpusMetadata;
use client_bootstrap::{SessionBuilder, SessionConfig};
use game_core::{CampaignId, MapId};

use crate::input::ConsoleProvider;

/// Replace a campaign's starting map and link it again
#[derive(Parser)]
pub struct Reroot {
    /// Campaign to rebuild
    #[arg(value_name = "ID")]
    id: u32,

    /// New starting map
    #[arg(value_name = "MAP")]
    map: u32,

    /// Rebuild for this player (overrides CAMPAIGN_PLAYER)
    #[arg(long, value_name = "NAME")]
    player: Option<String>,

    /// Save even if some doors are still unresolved (they become finish lines)
    #[arg(long)]
    allow_unresolved: bool,
}

impl Reroot {
    pub fn execute(self, mut config: SessionConfig) -> Result<()> {
        if let Some(player) = self.player {
            config.player = Some(player);
        }
        let mut session = SessionBuilder::new(config).build()?;

        let total = session.catalog.total_maps();
        let root = match MapId::from_raw(self.map) {
            Some(map) if self.map <= total => map,
            _ => bail!("Starting map {} is outside [1, {total}]", self.map),
        };

        let (mut campaign, _) = session.load(CampaignId(self.id))?;
        let previous = campaign.root_id();

        let map = session
            .director
            .construct_map(root)
            .with_context(|| format!("Failed to build {root}"))?;

        println!(
            "{} {}: {} -> {}",
            style("Rerooting").bold().cyan(),
            campaign.id(),
            previous,
            root
        );

        let mut provider = ConsoleProvider::stdio();
        let report = {
            let mut linker = session.linker(&mut provider);
            campaign.replace_root(map, &mut linker)?
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
