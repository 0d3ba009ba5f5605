//! Campaign data model shared across loaders, the campaign runtime and clients.
//!
//! `game-core` defines the canonical map grid, its occupants and the doors
//! that connect maps into a campaign graph. It exposes pure APIs with no I/O;
//! construction and persistence live in `game-content` and `campaign`.
pub mod error;
pub mod ids;
pub mod map;

pub use error::{ErrorSeverity, GameError};
pub use ids::{CampaignId, MapId, Position};
pub use map::{
    Door, DoorLink, Friend, Map, MapDimensions, MapError, MapLayout, Occupant, OccupantKind,
    WallKind,
};
