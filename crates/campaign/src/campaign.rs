//! Campaign graph: an arena of maps joined by door links.

use std::collections::{BTreeMap, HashSet, VecDeque};

use game_core::{CampaignId, DoorLink, Map, MapId, Position};

use crate::error::Result;
use crate::linker::{CampaignLinker, LinkReport};

/// Directed graph of maps rooted at a starting map.
///
/// The campaign owns every map reachable from its root. Doors carry
/// [`DoorLink::Leads`] keys into the arena, so a map shared by several doors,
/// or reached again through a cycle, is stored exactly once.
#[derive(Clone, Debug)]
pub struct Campaign {
    id: CampaignId,
    root: MapId,
    maps: BTreeMap<MapId, Map>,
}

impl Campaign {
    /// Fresh campaign holding only its root map. No linking happens.
    pub fn new_root(id: CampaignId, root: Map) -> Self {
        let root_id = root.id();
        let mut maps = BTreeMap::new();
        maps.insert(root_id, root);
        Self {
            id,
            root: root_id,
            maps,
        }
    }

    /// Constructs the root through the linker's director and links the
    /// whole graph below it.
    pub fn build(
        id: CampaignId,
        root: MapId,
        linker: &mut CampaignLinker<'_>,
    ) -> Result<(Self, LinkReport)> {
        let map = linker.director().construct_map(root)?;
        let mut campaign = Self::new_root(id, map);
        let report = linker.link(&mut campaign)?;
        Ok((campaign, report))
    }

    /// Swaps in a new root, drops every previously linked map and links the
    /// new subgraph from scratch.
    pub fn replace_root(&mut self, root: Map, linker: &mut CampaignLinker<'_>) -> Result<LinkReport> {
        tracing::info!("Replacing root of {}: {} -> {}", self.id, self.root, root.id());

        self.root = root.id();
        self.maps.clear();
        self.maps.insert(self.root, root);

        linker.link(self)
    }

    pub fn id(&self) -> CampaignId {
        self.id
    }

    pub fn root_id(&self) -> MapId {
        self.root
    }

    pub fn root(&self) -> &Map {
        // The root entry is inserted on construction and never removed.
        &self.maps[&self.root]
    }

    pub fn map(&self, id: MapId) -> Option<&Map> {
        self.maps.get(&id)
    }

    pub fn contains(&self, id: MapId) -> bool {
        self.maps.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Link state of the door at `position` on `map`, if there is one.
    pub fn destination_of(&self, map: MapId, position: Position) -> Option<DoorLink> {
        self.map(map)?.door(position).map(|door| door.link())
    }

    /// Identities reachable from the root, in breadth-first order.
    pub fn reachable_ids(&self) -> Vec<MapId> {
        let mut order = Vec::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([self.root]);
        visited.insert(self.root);

        while let Some(id) = queue.pop_front() {
            order.push(id);
            let Some(map) = self.map(id) else {
                continue;
            };
            for (_, door) in map.linkable_doors() {
                if let Some(next) = door.destination()
                    && visited.insert(next)
                {
                    queue.push_back(next);
                }
            }
        }

        order
    }

    /// Reachable non-start doors that still have no link.
    pub fn unresolved_doors(&self) -> Vec<(MapId, Position)> {
        self.reachable_ids()
            .into_iter()
            .filter_map(|id| self.map(id))
            .flat_map(|map| {
                map.linkable_doors()
                    .filter(|(_, door)| !door.is_resolved())
                    .map(move |(position, _)| (map.id(), position))
            })
            .collect()
    }

    pub fn is_fully_linked(&self) -> bool {
        self.unresolved_doors().is_empty()
    }

    pub(crate) fn insert(&mut self, map: Map) {
        self.maps.insert(map.id(), map);
    }

    /// Resolves one door of an arena map.
    pub(crate) fn resolve_door(
        &mut self,
        map: MapId,
        position: Position,
        destination: Option<MapId>,
    ) -> Result<()> {
        let Some(node) = self.maps.get_mut(&map) else {
            return Err(game_core::MapError::NotADoor { map, position }.into());
        };
        node.resolve_door(position, destination)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Door, MapDimensions, MapLayout, Occupant};

    fn map(id: u32, doors: &[(i32, i32, bool)]) -> Map {
        let mut layout = MapLayout::new(MapId(id), MapDimensions::new(4, 4));
        for &(x, y, start) in doors {
            layout
                .place(Position::new(x, y), Occupant::Door(Door::new(start)))
                .unwrap();
        }
        layout.finish()
    }

    #[test]
    fn test_new_root() {
        let campaign = Campaign::new_root(CampaignId(3), map(1, &[(0, 0, true)]));
        assert_eq!(campaign.id(), CampaignId(3));
        assert_eq!(campaign.root_id(), MapId(1));
        assert_eq!(campaign.root().id(), MapId(1));
        assert_eq!(campaign.len(), 1);
        assert!(campaign.is_fully_linked());
    }

    #[test]
    fn test_reachability_follows_links_once() {
        let mut campaign = Campaign::new_root(CampaignId(1), map(1, &[(1, 0, false), (2, 0, false)]));
        campaign.insert(map(2, &[(0, 0, true), (3, 3, false)]));
        campaign.insert(map(9, &[(1, 1, false)]));

        campaign
            .resolve_door(MapId(1), Position::new(1, 0), Some(MapId(2)))
            .unwrap();
        campaign
            .resolve_door(MapId(1), Position::new(2, 0), Some(MapId(2)))
            .unwrap();
        campaign
            .resolve_door(MapId(2), Position::new(3, 3), Some(MapId(1)))
            .unwrap();

        assert_eq!(campaign.reachable_ids(), vec![MapId(1), MapId(2)]);
        assert!(campaign.is_fully_linked());
        assert_eq!(
            campaign.destination_of(MapId(2), Position::new(3, 3)),
            Some(DoorLink::Leads(MapId(1)))
        );
        assert_eq!(campaign.destination_of(MapId(2), Position::new(2, 2)), None);
    }

    #[test]
    fn test_unresolved_doors_skip_start_doors() {
        let campaign = Campaign::new_root(CampaignId(1), map(1, &[(0, 0, true), (3, 0, false)]));
        assert_eq!(
            campaign.unresolved_doors(),
            vec![(MapId(1), Position::new(3, 0))]
        );
        assert!(!campaign.is_fully_linked());
    }

    #[test]
    fn test_resolve_door_on_unknown_map() {
        let mut campaign = Campaign::new_root(CampaignId(1), map(1, &[]));
        let err = campaign
            .resolve_door(MapId(5), Position::ORIGIN, None)
            .unwrap_err();
        assert!(matches!(err, crate::CampaignError::Map(_)));
    }
}
