use std::collections::{HashSet, VecDeque};

use game_content::{CampaignDocument, DocumentKind};
use game_core::{CampaignId, MapId, Position};

use crate::campaign::Campaign;
use crate::director::MapDirector;
use crate::error::{BranchFailure, CampaignError, Result};
use crate::repository::CampaignRepository;

/// Summary of a reconstructed campaign.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub maps: usize,
    /// Door records applied to the graph.
    pub doors: usize,
    /// Records that were skipped; the rest of the campaign still loaded.
    pub failures: Vec<BranchFailure>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Reads a stored campaign and rebuilds its graph.
pub fn load_campaign(
    id: CampaignId,
    repository: &dyn CampaignRepository,
    director: &MapDirector,
) -> Result<(Campaign, LoadReport)> {
    let document = repository
        .load(id)?
        .ok_or(CampaignError::NotFound {
            kind: DocumentKind::Campaign,
            id: id.get(),
        })?;

    let (campaign, report) = decode_campaign(id, &document, director)?;

    tracing::info!(
        "Loaded {} ({} maps, {} doors, {} skipped records)",
        id,
        report.maps,
        report.doors,
        report.failures.len()
    );

    Ok((campaign, report))
}

/// Rebuilds a campaign graph from its link document.
///
/// Maps are constructed through `director` as they are first referenced, so
/// a campaign only ever holds one node per identity. A map that cannot be
/// constructed fails the whole load. A record that contradicts the map it
/// describes is skipped and reported.
pub fn decode_campaign(
    id: CampaignId,
    document: &CampaignDocument,
    director: &MapDirector,
) -> Result<(Campaign, LoadReport)> {
    let root = MapId::from_raw(document.start).ok_or_else(|| {
        CampaignError::MalformedDocument(format!("{id} declares no starting map"))
    })?;

    let mut campaign = Campaign::new_root(id, director.construct_map(root)?);
    let mut report = LoadReport::default();
    let mut visited = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);

    while let Some(map_id) = queue.pop_front() {
        report.maps += 1;

        let Some(record) = document.record(map_id.get()) else {
            tracing::warn!("{} has no record in {}, its doors stay unresolved", map_id, id);
            continue;
        };

        if record.start != record.id {
            tracing::warn!(
                "Skipping record of {} in {}: Start is {}",
                map_id,
                id,
                record.start
            );
            report.failures.push(BranchFailure {
                map: map_id,
                position: None,
                destination: None,
                error: CampaignError::IdentityMismatch {
                    kind: DocumentKind::Campaign,
                    expected: record.id,
                    found: record.start,
                },
            });
            continue;
        }

        for door in &record.doors {
            let position = Position::new(door.x, door.y);
            let destination = MapId::from_raw(door.doorid);

            if let Err(error) = check_door(&campaign, map_id, position) {
                tracing::warn!("Skipping door record of {} at {}: {}", map_id, position, error);
                report.failures.push(BranchFailure {
                    map: map_id,
                    position: Some(position),
                    destination,
                    error,
                });
                continue;
            }

            if let Some(next) = destination
                && !campaign.contains(next)
            {
                campaign.insert(director.construct_map(next)?);
            }
            campaign.resolve_door(map_id, position, destination)?;
            report.doors += 1;

            if let Some(next) = destination
                && visited.insert(next)
            {
                queue.push_back(next);
            }
        }
    }

    Ok((campaign, report))
}

/// A door record must name an unresolved, non-start door of its map.
fn check_door(campaign: &Campaign, map: MapId, position: Position) -> Result<()> {
    let door = campaign
        .map(map)
        .and_then(|node| node.door(position))
        .filter(|door| !door.is_start() && !door.is_resolved());
    match door {
        Some(_) => Ok(()),
        None => Err(CampaignError::DanglingDoor { map, position }),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::builder::BuilderVariant;
    use crate::repository::InMemoryCampaignRepo;
    use game_content::{DoorRecord, InMemoryMapSource, MapDocument, MapRecord};
    use game_core::DoorLink;

    fn director() -> MapDirector {
        let source = InMemoryMapSource::new()
            .with(
                MapDocument::new(1, 3, 3)
                    .with_door(0, 0, true)
                    .with_door(2, 0, false)
                    .with_door(2, 2, false),
            )
            .with(MapDocument::new(2, 3, 3).with_door(1, 1, false));
        MapDirector::new(BuilderVariant::for_session(None, Arc::new(source)))
    }

    fn record(id: u32, doors: &[(u32, i32, i32)]) -> MapRecord {
        MapRecord {
            doors: doors
                .iter()
                .map(|&(doorid, x, y)| DoorRecord { doorid, x, y })
                .collect(),
            ..MapRecord::new(id)
        }
    }

    #[test]
    fn test_decode_links_records() {
        let mut document = CampaignDocument::new(1);
        document.maps.push(record(1, &[(2, 2, 0), (0, 2, 2)]));
        document.maps.push(record(2, &[(1, 1, 1)]));

        let (campaign, report) = decode_campaign(CampaignId(5), &document, &director()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.maps, 2);
        assert_eq!(report.doors, 3);
        assert_eq!(campaign.len(), 2);
        assert_eq!(
            campaign.destination_of(MapId(1), Position::new(2, 2)),
            Some(DoorLink::Terminal)
        );
        assert_eq!(
            campaign.destination_of(MapId(2), Position::new(1, 1)),
            Some(DoorLink::Leads(MapId(1)))
        );
    }

    #[test]
    fn test_dangling_door_record_is_skipped() {
        let mut document = CampaignDocument::new(1);
        // (0, 0) is the start door and (1, 1) is ground on map 1.
        document.maps.push(record(1, &[(2, 0, 0), (2, 1, 1), (0, 2, 0)]));

        let (campaign, report) = decode_campaign(CampaignId(5), &document, &director()).unwrap();
        assert_eq!(report.doors, 1);
        assert_eq!(report.failures.len(), 2);
        assert!(matches!(
            report.failures[0].error,
            CampaignError::DanglingDoor { .. }
        ));
        assert_eq!(
            campaign.destination_of(MapId(1), Position::ORIGIN),
            Some(DoorLink::Unresolved)
        );
        assert_eq!(campaign.len(), 1);
    }

    #[test]
    fn test_zero_root_is_malformed() {
        let document = CampaignDocument::new(0);
        let err = decode_campaign(CampaignId(5), &document, &director()).unwrap_err();
        assert!(matches!(err, CampaignError::MalformedDocument(_)));
    }

    #[test]
    fn test_missing_campaign_is_not_found() {
        let repository = InMemoryCampaignRepo::new();
        let err = load_campaign(CampaignId(8), &repository, &director()).unwrap_err();
        assert!(matches!(
            err,
            CampaignError::NotFound {
                kind: DocumentKind::Campaign,
                id: 8
            }
        ));
    }

    #[test]
    fn test_missing_destination_fails_load() {
        let mut document = CampaignDocument::new(1);
        document.maps.push(record(1, &[(9, 2, 0)]));

        let err = decode_campaign(CampaignId(5), &document, &director()).unwrap_err();
        assert!(err.is_not_found());
    }
}
