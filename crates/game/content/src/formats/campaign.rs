use serde::{Deserialize, Serialize};

/// Persisted campaign link document.
///
/// ```ron
/// Campaign(
///     start: 1,
///     map: [
///         map(ID: 1, Start: 1, doors: [door(doorid: 2, x: 2, y: 3)]),
///         map(ID: 2, Start: 2, doors: [door(doorid: 0, x: 0, y: 0)]),
///     ],
/// )
/// ```
///
/// One map record per visited map in breadth-first order; `doorid = 0`
/// marks a terminal door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Campaign")]
pub struct CampaignDocument {
    /// Identity of the root map.
    pub start: u32,
    #[serde(rename = "map", default)]
    pub maps: Vec<MapRecord>,
}

impl CampaignDocument {
    pub fn new(start: u32) -> Self {
        Self {
            start,
            maps: Vec::new(),
        }
    }

    /// First record declaring the given map identity.
    pub fn record(&self, id: u32) -> Option<&MapRecord> {
        self.maps.iter().find(|record| record.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "map")]
pub struct MapRecord {
    #[serde(rename = "ID")]
    pub id: u32,
    /// Duplicate of `id` kept as the record's own bookkeeping.
    #[serde(rename = "Start")]
    pub start: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doors: Vec<DoorRecord>,
}

impl MapRecord {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            start: id,
            doors: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "door")]
pub struct DoorRecord {
    pub doorid: u32,
    pub x: i32,
    pub y: i32,
}
