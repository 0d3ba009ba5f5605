use std::collections::{HashSet, VecDeque};

use game_content::{CampaignDocument, DoorRecord, MapRecord};
use game_core::{DoorLink, MapId};

use crate::campaign::Campaign;
use crate::catalog::CorpusMetadata;
use crate::error::Result;
use crate::repository::CampaignRepository;

/// Summary of a written campaign document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaveReport {
    pub maps: usize,
    pub doors: usize,
    /// Doors written as terminal because they were never resolved.
    pub unresolved: usize,
}

/// Describes the campaign as a link document, one record per reachable map.
pub fn encode_campaign(campaign: &Campaign) -> (CampaignDocument, SaveReport) {
    let mut document = CampaignDocument::new(campaign.root_id().get());
    let mut report = SaveReport::default();

    let mut visited: HashSet<MapId> = HashSet::from([campaign.root_id()]);
    let mut queue = VecDeque::from([campaign.root_id()]);

    while let Some(id) = queue.pop_front() {
        let Some(map) = campaign.map(id) else {
            tracing::warn!("{} is linked but missing from {}", id, campaign.id());
            continue;
        };

        let mut record = MapRecord::new(id.get());
        for (position, door) in map.linkable_doors() {
            let doorid = match door.link() {
                DoorLink::Leads(next) => {
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                    next.get()
                }
                DoorLink::Terminal => MapId::TERMINAL_RAW,
                DoorLink::Unresolved => {
                    tracing::warn!(
                        "{} door {} is unresolved, saving it as terminal",
                        id,
                        position
                    );
                    report.unresolved += 1;
                    MapId::TERMINAL_RAW
                }
            };
            record.doors.push(DoorRecord {
                doorid,
                x: position.x,
                y: position.y,
            });
        }

        report.doors += record.doors.len();
        report.maps += 1;
        document.maps.push(record);
    }

    (document, report)
}

/// Writes the campaign document and registers first-time saves.
pub fn save_campaign(
    campaign: &Campaign,
    repository: &dyn CampaignRepository,
    catalog: &mut dyn CorpusMetadata,
) -> Result<SaveReport> {
    let (document, report) = encode_campaign(campaign);
    let is_new = !repository.exists(campaign.id());

    repository.save(campaign.id(), &document)?;
    if is_new {
        catalog.record_new_campaign(campaign.id());
    }

    tracing::info!(
        "Saved {} ({} maps, {} doors)",
        campaign.id(),
        report.maps,
        report.doors
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CorpusCatalog;
    use crate::repository::InMemoryCampaignRepo;
    use game_core::{CampaignId, Door, MapDimensions, MapLayout, Occupant, Position};

    fn map(id: u32, doors: &[(i32, i32, bool)]) -> game_core::Map {
        let mut layout = MapLayout::new(MapId(id), MapDimensions::new(3, 3));
        for &(x, y, start) in doors {
            layout
                .place(Position::new(x, y), Occupant::Door(Door::new(start)))
                .unwrap();
        }
        layout.finish()
    }

    #[test]
    fn test_encode_writes_each_map_once() {
        let mut campaign =
            Campaign::new_root(CampaignId(1), map(1, &[(0, 0, true), (1, 0, false), (2, 0, false)]));
        campaign.insert(map(2, &[(0, 0, true), (2, 2, false)]));
        campaign
            .resolve_door(MapId(1), Position::new(1, 0), Some(MapId(2)))
            .unwrap();
        campaign
            .resolve_door(MapId(1), Position::new(2, 0), Some(MapId(2)))
            .unwrap();
        campaign
            .resolve_door(MapId(2), Position::new(2, 2), Some(MapId(1)))
            .unwrap();

        let (document, report) = encode_campaign(&campaign);
        assert_eq!(document.start, 1);
        assert_eq!(document.maps.len(), 2);
        assert_eq!(report, SaveReport { maps: 2, doors: 3, unresolved: 0 });

        let root = document.record(1).unwrap();
        assert_eq!(root.start, 1);
        assert_eq!(
            root.doors,
            vec![
                DoorRecord { doorid: 2, x: 1, y: 0 },
                DoorRecord { doorid: 2, x: 2, y: 0 },
            ]
        );
    }

    #[test]
    fn test_unresolved_doors_are_saved_as_terminal() {
        let campaign = Campaign::new_root(CampaignId(1), map(1, &[(1, 1, false)]));
        let (document, report) = encode_campaign(&campaign);
        assert_eq!(report.unresolved, 1);
        assert_eq!(document.maps[0].doors[0].doorid, 0);
    }

    #[test]
    fn test_catalog_counts_first_save_only() {
        let campaign = Campaign::new_root(CampaignId(4), map(1, &[]));
        let repository = InMemoryCampaignRepo::new();
        let mut catalog = CorpusCatalog::new(1, 0);

        save_campaign(&campaign, &repository, &mut catalog).unwrap();
        save_campaign(&campaign, &repository, &mut catalog).unwrap();

        assert_eq!(catalog.total_campaigns(), 1);
        assert!(repository.exists(CampaignId(4)));
    }
}
