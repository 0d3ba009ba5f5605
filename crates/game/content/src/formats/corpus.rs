use serde::{Deserialize, Serialize};

/// Corpus bookkeeping stored as `corpus.toml`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusFile {
    pub total_maps: u32,
    pub total_campaigns: u32,
}
