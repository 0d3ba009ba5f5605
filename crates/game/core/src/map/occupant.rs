use super::Door;

/// Content of a single grid cell.
///
/// Every cell of a finished [`super::Map`] holds exactly one occupant; cells
/// not covered by an explicit record are back-filled with [`Occupant::Ground`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Occupant {
    /// Default background cell.
    #[default]
    Ground,
    Wall(WallKind),
    Item,
    Enemy,
    Friend(Friend),
    Door(Door),
}

impl Occupant {
    pub fn kind(&self) -> OccupantKind {
        match self {
            Occupant::Ground => OccupantKind::Ground,
            Occupant::Wall(_) => OccupantKind::Wall,
            Occupant::Item => OccupantKind::Item,
            Occupant::Enemy => OccupantKind::Enemy,
            Occupant::Friend(_) => OccupantKind::Friend,
            Occupant::Door(_) => OccupantKind::Door,
        }
    }

    pub fn as_door(&self) -> Option<&Door> {
        match self {
            Occupant::Door(door) => Some(door),
            _ => None,
        }
    }

    pub fn as_door_mut(&mut self) -> Option<&mut Door> {
        match self {
            Occupant::Door(door) => Some(door),
            _ => None,
        }
    }
}

/// Payload-free discriminant of [`Occupant`], used for counting and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum OccupantKind {
    Ground,
    Wall,
    Item,
    Enemy,
    Friend,
    Door,
}

/// Wall material of a blocking cell.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WallKind {
    Water,
    Tree,
    Brick,
}

/// Friendly character placed on a map.
///
/// Friends are only bound to a companion when the map was built for an
/// active player; replayed maps leave them unbound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Friend {
    pub companion_of: Option<String>,
}

impl Friend {
    pub fn unbound() -> Self {
        Self::default()
    }

    pub fn companion_of(player: impl Into<String>) -> Self {
        Self {
            companion_of: Some(player.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_kind_parses_lowercase() {
        assert_eq!("water".parse::<WallKind>().unwrap(), WallKind::Water);
        assert_eq!("Brick".parse::<WallKind>().unwrap(), WallKind::Brick);
        assert!("lava".parse::<WallKind>().is_err());
        assert_eq!(WallKind::Tree.to_string(), "tree");
    }

    #[test]
    fn test_occupant_kind() {
        assert_eq!(Occupant::Ground.kind(), OccupantKind::Ground);
        assert_eq!(Occupant::Door(Door::new(true)).kind(), OccupantKind::Door);
        assert_eq!(OccupantKind::Enemy.to_string(), "enemy");
    }
}
