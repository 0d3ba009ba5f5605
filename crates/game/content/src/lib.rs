//! Data-driven map content and document formats.
//!
//! This crate owns every on-disk shape the campaign system reads or writes:
//! - Per-map layouts (`maps/<id>.ron`, RON)
//! - Campaign link documents (`campaign/<id>.ron`, RON)
//! - Corpus bookkeeping (`corpus.toml`, TOML)
//!
//! Loaders turn per-map documents into [`game_core::Map`] values. Linking maps
//! together into a campaign graph is the job of the `campaign` crate.

pub mod error;

#[cfg(feature = "serde")]
pub mod formats;

#[cfg(feature = "loaders")]
pub mod library;
#[cfg(feature = "loaders")]
pub mod loaders;

pub use error::{ContentError, DocumentKind};

#[cfg(feature = "serde")]
pub use formats::{
    CampaignDocument, CorpusFile, DoorRecord, DoorEntry, EnemyEntry, FriendEntry, ItemEntry,
    MapDocument, MapRecord, WallEntry,
};

#[cfg(feature = "loaders")]
pub use library::{InMemoryMapSource, MapSource};
#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, CorpusLoader, LoadResult, MapLoader};
