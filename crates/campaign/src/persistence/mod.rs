//! Campaign persistence.
//!
//! Campaigns are written and read breadth-first from the root. Each map
//! identity appears at most once in a document, so cycles terminate on both
//! sides.

mod load;
mod save;

pub use load::{LoadReport, decode_campaign, load_campaign};
pub use save::{SaveReport, encode_campaign, save_campaign};
