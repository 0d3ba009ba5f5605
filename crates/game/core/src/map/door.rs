use crate::ids::MapId;

/// Link state of a door edge.
///
/// Destinations are identity keys, not owned maps: the campaign arena owns
/// every map and resolves a key to the node it names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DoorLink {
    /// Freshly constructed, not yet visited by a linker or loader.
    #[default]
    Unresolved,
    /// Finish line: resolved to no destination.
    Terminal,
    /// Leads to another map of the campaign.
    Leads(MapId),
}

/// Traversable link occupying a map cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Door {
    start: bool,
    link: DoorLink,
}

impl Door {
    /// Creates an unresolved door. `start` marks the entry door of a map,
    /// which is never linked.
    pub const fn new(start: bool) -> Self {
        Self {
            start,
            link: DoorLink::Unresolved,
        }
    }

    #[inline]
    pub const fn is_start(&self) -> bool {
        self.start
    }

    #[inline]
    pub const fn link(&self) -> DoorLink {
        self.link
    }

    #[inline]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self.link, DoorLink::Unresolved)
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self.link, DoorLink::Terminal)
    }

    pub const fn destination(&self) -> Option<MapId> {
        match self.link {
            DoorLink::Leads(id) => Some(id),
            _ => None,
        }
    }

    /// Sets the link; callers go through [`super::Map::resolve_door`], which
    /// enforces the start-door and resolve-once rules.
    pub(super) fn set_link(&mut self, link: DoorLink) {
        self.link = link;
    }
}
