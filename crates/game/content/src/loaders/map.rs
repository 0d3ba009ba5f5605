//! Map document loader.
//!
//! Turns a [`MapDocument`] into a fully populated [`Map`] and back. Entity
//! records only mark placement; entity definitions live outside this crate.

use std::path::Path;

use game_core::{
    Door, Friend, Map, MapDimensions, MapId, MapLayout, Occupant, OccupantKind, Position,
};

use crate::error::{ContentError, DocumentKind};
use crate::formats::{DoorEntry, EnemyEntry, FriendEntry, ItemEntry, MapDocument, WallEntry};
use crate::loaders::{LoadResult, from_ron, read_file};

/// Upper bound on the cell count of a single map.
pub const MAX_MAP_CELLS: u64 = 1 << 20;

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map document from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing the map document
    pub fn load_document(path: &Path) -> LoadResult<MapDocument> {
        let content = read_file(path)?;
        from_ron(DocumentKind::Map, &path.display().to_string(), &content)
    }

    /// Builds a map whose friends are left unbound.
    pub fn assemble(document: &MapDocument, expected: MapId) -> LoadResult<Map> {
        Self::assemble_with(document, expected, |_| Friend::unbound())
    }

    /// Builds a map, asking `friend` to produce each friend occupant.
    ///
    /// Fails with [`ContentError::IdentityMismatch`] when the document declares
    /// another identity, and with [`ContentError::Malformed`] or
    /// [`ContentError::Layout`] when its records are invalid.
    pub fn assemble_with<F>(
        document: &MapDocument,
        expected: MapId,
        mut friend: F,
    ) -> LoadResult<Map>
    where
        F: FnMut(Position) -> Friend,
    {
        if document.id != expected.get() {
            return Err(ContentError::IdentityMismatch {
                kind: DocumentKind::Map,
                expected: expected.get(),
                found: document.id,
            });
        }

        let origin = format!("maps/{}", document.id);
        if document.width == 0 || document.length == 0 {
            return Err(ContentError::malformed(
                DocumentKind::Map,
                origin,
                "map dimensions must be non-zero",
            ));
        }

        let cells = u64::from(document.width) * u64::from(document.length);
        if cells > MAX_MAP_CELLS {
            return Err(ContentError::malformed(
                DocumentKind::Map,
                origin,
                format!(
                    "map of {}x{} cells exceeds the limit of {MAX_MAP_CELLS}",
                    document.width, document.length
                ),
            ));
        }

        let dimensions = MapDimensions::new(document.width, document.length);
        let mut layout = MapLayout::new(expected, dimensions);

        for &DoorEntry { x, y, start } in &document.doors {
            let start = match start {
                0 => false,
                1 => true,
                other => {
                    return Err(ContentError::malformed(
                        DocumentKind::Map,
                        origin,
                        format!("door at ({x}, {y}) has start flag {other}, expected 0 or 1"),
                    ));
                }
            };
            layout.place(Position::new(x, y), Occupant::Door(Door::new(start)))?;
        }

        for &WallEntry { kind, x, y } in &document.walls {
            layout.place(Position::new(x, y), Occupant::Wall(kind))?;
        }

        for &ItemEntry { x, y } in &document.items {
            layout.place(Position::new(x, y), Occupant::Item)?;
        }

        for &EnemyEntry { x, y } in &document.enemies {
            layout.place(Position::new(x, y), Occupant::Enemy)?;
        }

        for &FriendEntry { x, y } in &document.friends {
            let position = Position::new(x, y);
            layout.place(position, Occupant::Friend(friend(position)))?;
        }

        Ok(layout.finish())
    }

    /// Describes a map as a layout document. Door links and companion
    /// bindings are not part of the layout and are dropped.
    pub fn document_of(map: &Map) -> MapDocument {
        let dimensions = map.dimensions();
        let mut document = MapDocument::new(map.id().get(), dimensions.width, dimensions.length);

        for (position, door) in map.doors() {
            document.doors.push(DoorEntry {
                x: position.x,
                y: position.y,
                start: u8::from(door.is_start()),
            });
        }

        for (Position { x, y }, occupant) in map.cells() {
            match occupant {
                Occupant::Wall(kind) => document.walls.push(WallEntry { kind: *kind, x, y }),
                Occupant::Item => document.items.push(ItemEntry { x, y }),
                Occupant::Enemy => document.enemies.push(EnemyEntry { x, y }),
                Occupant::Friend(_) => document.friends.push(FriendEntry { x, y }),
                Occupant::Ground | Occupant::Door(_) => {}
            }
        }

        debug_assert_eq!(document.doors.len(), map.count(OccupantKind::Door));
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{DoorLink, WallKind};

    const SAMPLE: &str = r#"
        Map(
            id: 3,
            width: 4,
            length: 4,
            doors: [(x: 0, y: 0, start: 1), (x: 3, y: 3, start: 0)],
            walls: [(kind: water, x: 1, y: 0), (kind: tree, x: 2, y: 0)],
            items: [(x: 1, y: 1)],
            enemies: [(x: 2, y: 2)],
            friends: [(x: 0, y: 3)],
        )
    "#;

    fn sample() -> MapDocument {
        from_ron(DocumentKind::Map, "sample", SAMPLE).unwrap()
    }

    #[test]
    fn test_assemble_fills_ground() {
        let map = MapLoader::assemble(&sample(), MapId(3)).unwrap();

        assert_eq!(map.dimensions(), MapDimensions::new(4, 4));
        assert_eq!(map.count(OccupantKind::Door), 2);
        assert_eq!(map.count(OccupantKind::Wall), 2);
        assert_eq!(map.count(OccupantKind::Ground), 16 - 7);
        assert_eq!(
            map.occupant(Position::new(1, 0)),
            Some(&Occupant::Wall(WallKind::Water))
        );
        assert!(map.door(Position::new(0, 0)).unwrap().is_start());
        assert_eq!(
            map.door(Position::new(3, 3)).unwrap().link(),
            DoorLink::Unresolved
        );
        assert_eq!(
            map.occupant(Position::new(0, 3)),
            Some(&Occupant::Friend(Friend::unbound()))
        );
    }

    #[test]
    fn test_assemble_with_binds_friends() {
        let map =
            MapLoader::assemble_with(&sample(), MapId(3), |_| Friend::companion_of("ayla"))
                .unwrap();
        assert_eq!(
            map.occupant(Position::new(0, 3)),
            Some(&Occupant::Friend(Friend::companion_of("ayla")))
        );
    }

    #[test]
    fn test_identity_mismatch() {
        let err = MapLoader::assemble(&sample(), MapId(4)).unwrap_err();
        assert!(matches!(
            err,
            ContentError::IdentityMismatch {
                expected: 4,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_start_flag() {
        let document = MapDocument {
            doors: vec![DoorEntry {
                x: 0,
                y: 0,
                start: 2,
            }],
            ..MapDocument::new(1, 2, 2)
        };
        let err = MapLoader::assemble(&document, MapId(1)).unwrap_err();
        assert!(matches!(err, ContentError::Malformed { .. }));
    }

    #[test]
    fn test_oversized_map_is_malformed() {
        let err = MapLoader::assemble(&MapDocument::new(1, u32::MAX, u32::MAX), MapId(1))
            .unwrap_err();
        assert!(matches!(err, ContentError::Malformed { .. }));

        let err = MapLoader::assemble(&MapDocument::new(1, 1 << 11, 1 << 10), MapId(1))
            .unwrap_err();
        assert!(matches!(err, ContentError::Malformed { .. }));

        let map = MapLoader::assemble(&MapDocument::new(1, 1 << 10, 1 << 10), MapId(1)).unwrap();
        assert_eq!(map.dimensions().area() as u64, MAX_MAP_CELLS);
    }

    #[test]
    fn test_overlapping_records_are_rejected() {
        let document = MapDocument::new(1, 3, 3)
            .with_door(1, 1, false)
            .with_wall(WallKind::Brick, 1, 1);
        let err = MapLoader::assemble(&document, MapId(1)).unwrap_err();
        assert!(matches!(err, ContentError::Layout(_)));
    }

    #[test]
    fn test_missing_required_field() {
        let err = from_ron::<MapDocument>(DocumentKind::Map, "broken", "Map(id: 1, width: 2)")
            .unwrap_err();
        assert!(matches!(err, ContentError::Malformed { .. }));
    }

    #[test]
    fn test_document_of_preserves_layout() {
        let document = sample();
        let map = MapLoader::assemble(&document, MapId(3)).unwrap();
        let rebuilt = MapLoader::document_of(&map);

        assert_eq!(rebuilt.doors, document.doors);
        assert_eq!(rebuilt.walls, document.walls);
        assert_eq!(rebuilt.items, document.items);
        assert_eq!(rebuilt.enemies, document.enemies);
        assert_eq!(rebuilt.friends, document.friends);
    }
}
