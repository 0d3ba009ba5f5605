use std::fmt;

/// Identity of a map in the stored corpus.
///
/// Identities are unique across the whole corpus. The raw value `0` is
/// reserved: campaign documents use it to mark a terminal door, so it never
/// names a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MapId(pub u32);

impl MapId {
    /// Raw value used by documents to encode "no destination".
    pub const TERMINAL_RAW: u32 = 0;

    /// Returns `None` for the reserved terminal value.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        if raw == Self::TERMINAL_RAW {
            None
        } else {
            Some(Self(raw))
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map#{}", self.0)
    }
}

/// Identity of a persisted campaign document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CampaignId(pub u32);

impl CampaignId {
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "campaign#{}", self.0)
    }
}

/// Discrete grid position expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_raw_is_not_a_map() {
        assert_eq!(MapId::from_raw(0), None);
        assert_eq!(MapId::from_raw(4), Some(MapId(4)));
    }

    #[test]
    fn test_display() {
        assert_eq!(MapId(3).to_string(), "map#3");
        assert_eq!(CampaignId(7).to_string(), "campaign#7");
        assert_eq!(Position::new(2, 3).to_string(), "(2, 3)");
    }
}
