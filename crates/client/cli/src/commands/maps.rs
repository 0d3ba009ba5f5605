//! List the stored map corpus.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use campaign::CorpusMetadata;
use client_bootstrap::{SessionBuilder, SessionConfig};
use game_core::OccupantKind;

/// List the stored map corpus
#[derive(Parser)]
pub struct Maps {}

impl Maps {
    pub fn execute(self, config: SessionConfig) -> Result<()> {
        let session = SessionBuilder::new(config).build()?;
        let ids = session
            .content
            .map_ids()
            .context("Failed to list stored maps")?;

        println!(
            "{} {} ({} maps stored, {} campaigns)",
            style("Corpus:").bold().cyan(),
            session.content.data_dir().display(),
            ids.len(),
            session.catalog.total_campaigns()
        );
        println!();

        for id in ids {
            let map = match session.director.construct_map(id) {
                Ok(map) => map,
                Err(error) => {
                    println!("  {} {}", style(id).bold(), style(error).red());
                    continue;
                }
            };
            let dimensions = map.dimensions();
            let exits = map.linkable_doors().count();
            println!(
                "  {} {}x{}, {} doors ({} exits), {} walls, {} items, {} enemies, {} friends",
                style(id).bold(),
                dimensions.width,
                dimensions.length,
                map.count(OccupantKind::Door),
                exits,
                map.count(OccupantKind::Wall),
                map.count(OccupantKind::Item),
                map.count(OccupantKind::Enemy),
                map.count(OccupantKind::Friend)
            );
        }

        Ok(())
    }
}
