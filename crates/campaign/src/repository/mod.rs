//! Repository layer for campaign documents.
//!
//! Campaign documents are the only data the campaign system writes during a
//! session. Map layouts are static content served by `game-content`.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileCampaignRepository;
pub use memory::InMemoryCampaignRepo;
pub use traits::CampaignRepository;
