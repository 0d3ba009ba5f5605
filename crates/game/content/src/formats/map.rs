use game_core::WallKind;
use serde::{Deserialize, Serialize};

/// Per-map layout document.
///
/// ```ron
/// Map(
///     id: 1,
///     width: 5,
///     length: 5,
///     doors: [door(x: 2, y: 3, start: 0)],
///     walls: [wall(kind: brick, x: 0, y: 0)],
/// )
/// ```
///
/// Any cell not covered by a record is ground.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Map")]
pub struct MapDocument {
    pub id: u32,
    pub width: u32,
    pub length: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doors: Vec<DoorEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub walls: Vec<WallEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enemies: Vec<EnemyEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub friends: Vec<FriendEntry>,
}

impl MapDocument {
    /// Empty layout of the given size.
    pub fn new(id: u32, width: u32, length: u32) -> Self {
        Self {
            id,
            width,
            length,
            doors: Vec::new(),
            walls: Vec::new(),
            items: Vec::new(),
            enemies: Vec::new(),
            friends: Vec::new(),
        }
    }

    pub fn with_door(mut self, x: i32, y: i32, start: bool) -> Self {
        self.doors.push(DoorEntry {
            x,
            y,
            start: u8::from(start),
        });
        self
    }

    pub fn with_wall(mut self, kind: WallKind, x: i32, y: i32) -> Self {
        self.walls.push(WallEntry { kind, x, y });
        self
    }
}

/// Door record; `start` is `1` for the entry door, `0` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "door")]
pub struct DoorEntry {
    pub x: i32,
    pub y: i32,
    pub start: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "wall")]
pub struct WallEntry {
    pub kind: WallKind,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "item")]
pub struct ItemEntry {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "enemy")]
pub struct EnemyEntry {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "friend")]
pub struct FriendEntry {
    pub x: i32,
    pub y: i32,
}
