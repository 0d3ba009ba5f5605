//! Print the topology of a stored campaign.

use anyhow::Result;
use clap::Parser;
use console::style;

use campaign::Campaign;
use client_bootstrap::{SessionBuilder, SessionConfig};
use game_core::{CampaignId, Door, DoorLink};

/// Print the topology of a stored campaign
#[derive(Parser)]
pub struct Show {
    /// Campaign to print
    #[arg(value_name = "ID")]
    id: u32,
}

impl Show {
    pub fn execute(self, config: SessionConfig) -> Result<()> {
        let session = SessionBuilder::new(config).build()?;
        let (campaign, report) = session.load(CampaignId(self.id))?;

        println!(
            "{} {} (start: {}, {} maps)",
            style("Campaign").bold().cyan(),
            campaign.id(),
            campaign.root_id(),
            campaign.len()
        );
        println!();

        print_topology(&campaign);

        if campaign.is_fully_linked() {
            println!("{}", style("All doors are linked").green());
        } else {
            println!(
                "{}",
                style(format!(
                    "{} doors are unresolved",
                    campaign.unresolved_doors().len()
                ))
                .yellow()
            );
        }

        super::print_failures(&report.failures);

        Ok(())
    }
}

fn print_topology(campaign: &Campaign) {
    for id in campaign.reachable_ids() {
        let Some(map) = campaign.map(id) else {
            continue;
        };
        let dimensions = map.dimensions();
        println!(
            "{} ({}x{})",
            style(id).bold().yellow(),
            dimensions.width,
            dimensions.length
        );
        for (position, door) in map.doors() {
            println!("  door {:<10} {}", position.to_string(), describe(door));
        }
    }
    println!();
}

fn describe(door: &Door) -> String {
    if door.is_start() {
        return style("start").dim().to_string();
    }
    match door.link() {
        DoorLink::Leads(next) => format!("-> {next}"),
        DoorLink::Terminal => style("finish line").green().to_string(),
        DoorLink::Unresolved => style("unresolved").red().to_string(),
    }
}
