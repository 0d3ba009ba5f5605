//! Serde shapes of every stored document.
//!
//! Struct names double as root tags: RON output is written with struct names,
//! so a campaign document reads `Campaign(...)` and a map document `Map(...)`.

mod campaign;
mod corpus;
mod map;

pub use campaign::{CampaignDocument, DoorRecord, MapRecord};
pub use corpus::CorpusFile;
pub use map::{DoorEntry, EnemyEntry, FriendEntry, ItemEntry, MapDocument, WallEntry};
