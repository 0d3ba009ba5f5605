//! Map grid, occupants and door edges.
//!
//! A [`Map`] is always produced through a [`MapLayout`]: the layout accepts
//! placements one cell at a time and [`MapLayout::finish`] back-fills every
//! remaining cell with [`Occupant::Ground`], so a finished map never has an
//! empty cell.

mod door;
mod occupant;

pub use door::{Door, DoorLink};
pub use occupant::{Friend, Occupant, OccupantKind, WallKind};

use crate::error::{ErrorSeverity, GameError};
use crate::ids::{MapId, Position};

/// Grid extent of a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub length: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, length: u32) -> Self {
        Self { width, length }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.length
    }

    /// Row-major cell index, `None` when the position lies outside the grid.
    pub fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some(position.y as usize * self.width as usize + position.x as usize)
    }

    pub const fn area(&self) -> usize {
        self.width as usize * self.length as usize
    }
}

/// Errors raised while assembling a map or resolving its doors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("{position} is outside the bounds of {map}")]
    OutOfBounds { map: MapId, position: Position },

    #[error("{position} on {map} is already occupied")]
    CellOccupied { map: MapId, position: Position },

    #[error("no door at {position} on {map}")]
    NotADoor { map: MapId, position: Position },

    #[error("door at {position} on {map} is a start door and cannot be linked")]
    StartDoor { map: MapId, position: Position },

    #[error("door at {position} on {map} is already resolved")]
    AlreadyResolved { map: MapId, position: Position },
}

impl GameError for MapError {
    fn severity(&self) -> ErrorSeverity {
        use MapError::*;
        match self {
            OutOfBounds { .. } | CellOccupied { .. } | NotADoor { .. } | StartDoor { .. } => {
                ErrorSeverity::Validation
            }
            AlreadyResolved { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use MapError::*;
        match self {
            OutOfBounds { .. } => "MAP_OUT_OF_BOUNDS",
            CellOccupied { .. } => "MAP_CELL_OCCUPIED",
            NotADoor { .. } => "MAP_NOT_A_DOOR",
            StartDoor { .. } => "MAP_START_DOOR",
            AlreadyResolved { .. } => "MAP_DOOR_ALREADY_RESOLVED",
        }
    }
}

/// Map under construction.
#[derive(Clone, Debug)]
pub struct MapLayout {
    id: MapId,
    dimensions: MapDimensions,
    cells: Vec<Option<Occupant>>,
    doors: Vec<Position>,
}

impl MapLayout {
    pub fn new(id: MapId, dimensions: MapDimensions) -> Self {
        Self {
            id,
            dimensions,
            cells: vec![None; dimensions.area()],
            doors: Vec::new(),
        }
    }

    pub fn id(&self) -> MapId {
        self.id
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    /// Places an occupant in an empty cell.
    pub fn place(&mut self, position: Position, occupant: Occupant) -> Result<(), MapError> {
        let index = self
            .dimensions
            .index(position)
            .ok_or(MapError::OutOfBounds {
                map: self.id,
                position,
            })?;

        let cell = &mut self.cells[index];
        if cell.is_some() {
            return Err(MapError::CellOccupied {
                map: self.id,
                position,
            });
        }

        if matches!(occupant, Occupant::Door(_)) {
            self.doors.push(position);
        }
        *cell = Some(occupant);
        Ok(())
    }

    /// Back-fills every empty cell with ground and seals the grid.
    pub fn finish(self) -> Map {
        Map {
            id: self.id,
            dimensions: self.dimensions,
            cells: self
                .cells
                .into_iter()
                .map(Option::unwrap_or_default)
                .collect(),
            doors: self.doors,
        }
    }
}

/// Fully constructed map node of a campaign graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    id: MapId,
    dimensions: MapDimensions,
    cells: Vec<Occupant>,
    doors: Vec<Position>,
}

impl Map {
    pub fn id(&self) -> MapId {
        self.id
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn occupant(&self, position: Position) -> Option<&Occupant> {
        self.dimensions
            .index(position)
            .map(|index| &self.cells[index])
    }

    pub fn door(&self, position: Position) -> Option<&Door> {
        self.occupant(position).and_then(Occupant::as_door)
    }

    pub fn door_mut(&mut self, position: Position) -> Option<&mut Door> {
        let index = self.dimensions.index(position)?;
        self.cells[index].as_door_mut()
    }

    /// Door cell positions in construction order.
    pub fn door_positions(&self) -> &[Position] {
        &self.doors
    }

    /// Doors paired with their positions, in construction order.
    pub fn doors(&self) -> impl Iterator<Item = (Position, &Door)> + '_ {
        self.doors
            .iter()
            .filter_map(|&position| self.door(position).map(|door| (position, door)))
    }

    /// Non-start doors, the only ones that ever carry a link.
    pub fn linkable_doors(&self) -> impl Iterator<Item = (Position, &Door)> + '_ {
        self.doors().filter(|(_, door)| !door.is_start())
    }

    pub fn count(&self, kind: OccupantKind) -> usize {
        self.cells.iter().filter(|cell| cell.kind() == kind).count()
    }

    /// Occupants in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Occupant)> + '_ {
        let width = self.dimensions.width.max(1) as usize;
        self.cells.iter().enumerate().map(move |(index, occupant)| {
            let position = Position::new((index % width) as i32, (index / width) as i32);
            (position, occupant)
        })
    }

    /// Resolves a non-start door exactly once; `None` marks it terminal.
    pub fn resolve_door(
        &mut self,
        position: Position,
        destination: Option<MapId>,
    ) -> Result<(), MapError> {
        let map = self.id;
        let door = self
            .door_mut(position)
            .ok_or(MapError::NotADoor { map, position })?;

        if door.is_start() {
            return Err(MapError::StartDoor { map, position });
        }
        if door.is_resolved() {
            return Err(MapError::AlreadyResolved { map, position });
        }

        door.set_link(match destination {
            Some(id) => DoorLink::Leads(id),
            None => DoorLink::Terminal,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> MapLayout {
        MapLayout::new(MapId(1), MapDimensions::new(4, 3))
    }

    #[test]
    fn test_finish_backfills_ground() {
        let mut layout = layout();
        layout
            .place(Position::new(1, 1), Occupant::Wall(WallKind::Brick))
            .unwrap();
        let map = layout.finish();

        assert_eq!(map.count(OccupantKind::Ground), 11);
        assert_eq!(map.count(OccupantKind::Wall), 1);
        assert_eq!(map.occupant(Position::new(3, 2)), Some(&Occupant::Ground));
        assert_eq!(map.occupant(Position::new(4, 0)), None);
    }

    #[test]
    fn test_place_rejects_out_of_bounds_and_overlap() {
        let mut layout = layout();
        let err = layout
            .place(Position::new(4, 0), Occupant::Item)
            .unwrap_err();
        assert!(matches!(err, MapError::OutOfBounds { .. }));

        layout.place(Position::new(0, 0), Occupant::Item).unwrap();
        let err = layout
            .place(Position::new(0, 0), Occupant::Enemy)
            .unwrap_err();
        assert_eq!(
            err,
            MapError::CellOccupied {
                map: MapId(1),
                position: Position::new(0, 0)
            }
        );
    }

    #[test]
    fn test_doors_keep_construction_order() {
        let mut layout = layout();
        layout
            .place(Position::new(3, 2), Occupant::Door(Door::new(false)))
            .unwrap();
        layout
            .place(Position::new(0, 0), Occupant::Door(Door::new(true)))
            .unwrap();
        let map = layout.finish();

        assert_eq!(
            map.door_positions(),
            &[Position::new(3, 2), Position::new(0, 0)]
        );
        let linkable: Vec<_> = map.linkable_doors().map(|(pos, _)| pos).collect();
        assert_eq!(linkable, vec![Position::new(3, 2)]);
    }

    #[test]
    fn test_resolve_door_rules() {
        let mut layout = layout();
        layout
            .place(Position::new(0, 0), Occupant::Door(Door::new(true)))
            .unwrap();
        layout
            .place(Position::new(1, 0), Occupant::Door(Door::new(false)))
            .unwrap();
        let mut map = layout.finish();

        let err = map
            .resolve_door(Position::new(0, 0), Some(MapId(2)))
            .unwrap_err();
        assert!(matches!(err, MapError::StartDoor { .. }));

        let err = map.resolve_door(Position::new(2, 2), None).unwrap_err();
        assert!(matches!(err, MapError::NotADoor { .. }));

        map.resolve_door(Position::new(1, 0), Some(MapId(2)))
            .unwrap();
        let door = map.door(Position::new(1, 0)).unwrap();
        assert_eq!(door.link(), DoorLink::Leads(MapId(2)));
        assert_eq!(door.destination(), Some(MapId(2)));

        let err = map.resolve_door(Position::new(1, 0), None).unwrap_err();
        assert!(matches!(err, MapError::AlreadyResolved { .. }));
        assert_eq!(err.error_code(), "MAP_DOOR_ALREADY_RESOLVED");
    }

    #[test]
    fn test_terminal_door_has_no_destination() {
        let mut layout = layout();
        layout
            .place(Position::new(2, 1), Occupant::Door(Door::new(false)))
            .unwrap();
        let mut map = layout.finish();
        assert!(!map.door(Position::new(2, 1)).unwrap().is_resolved());

        map.resolve_door(Position::new(2, 1), None).unwrap();
        let door = map.door(Position::new(2, 1)).unwrap();
        assert!(door.is_terminal());
        assert_eq!(door.destination(), None);
    }

    #[test]
    fn test_cells_iterate_row_major() {
        let map = layout().finish();
        let positions: Vec<_> = map.cells().map(|(pos, _)| pos).take(5).collect();
        assert_eq!(positions[4], Position::new(0, 1));
    }
}
