//! Campaign graph construction, linking and persistence.
//!
//! A [`Campaign`] owns an arena of [`game_core::Map`] nodes keyed by
//! [`game_core::MapId`]; doors store destination keys into that arena, so a
//! map reached through several doors (or through a cycle) exists once.
//!
//! - [`MapDirector`] materializes maps through the active [`BuilderVariant`]
//! - [`CampaignLinker`] resolves unresolved doors depth-first, asking a
//!   [`DestinationProvider`] for each destination
//! - [`persistence`] writes and reads campaign documents breadth-first
//! - [`repository`] stores campaign documents
pub mod builder;
pub mod campaign;
pub mod catalog;
pub mod director;
pub mod error;
pub mod linker;
pub mod persistence;
pub mod providers;
pub mod repository;

pub use builder::{
    AuthoredBuilder, BuilderVariant, CompanionFactory, MapBuilder, PartyCompanions, PlayerContext,
    ReplayBuilder,
};
pub use campaign::Campaign;
pub use catalog::{CorpusCatalog, CorpusMetadata};
pub use director::MapDirector;
pub use error::{BranchFailure, CampaignError, Result};
pub use linker::{CampaignLinker, LinkReport, prompt_start_map};
pub use persistence::{
    LoadReport, SaveReport, decode_campaign, encode_campaign, load_campaign, save_campaign,
};
pub use providers::{ChoiceError, DestinationPrompt, DestinationProvider, ScriptedProvider};
pub use repository::{
    CampaignRepository, FileCampaignRepository, InMemoryCampaignRepo, RepositoryError,
};
