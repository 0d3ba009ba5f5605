//! Corpus bookkeeping loader.

use std::path::Path;

use crate::error::{ContentError, DocumentKind};
use crate::formats::CorpusFile;
use crate::loaders::{LoadResult, read_file, write_file};

/// Loader for corpus counters from TOML files.
pub struct CorpusLoader;

impl CorpusLoader {
    /// Load corpus counters from a TOML file.
    ///
    /// Returns `None` when the file does not exist yet.
    pub fn load(path: &Path) -> LoadResult<Option<CorpusFile>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = read_file(path)?;
        let corpus: CorpusFile = toml::from_str(&content).map_err(|e| {
            ContentError::malformed(DocumentKind::Corpus, path.display().to_string(), e)
        })?;

        Ok(Some(corpus))
    }

    pub fn save(path: &Path, corpus: &CorpusFile) -> LoadResult<()> {
        let content = toml::to_string_pretty(corpus).map_err(|e| {
            ContentError::malformed(DocumentKind::Corpus, path.display().to_string(), e)
        })?;
        write_file(path, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_corpus_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = CorpusLoader::load(&temp_dir.path().join("corpus.toml")).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corpus.toml");
        let corpus = CorpusFile {
            total_maps: 4,
            total_campaigns: 2,
        };

        CorpusLoader::save(&path, &corpus).unwrap();
        assert_eq!(CorpusLoader::load(&path).unwrap(), Some(corpus));
    }

    #[test]
    fn test_malformed_corpus() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corpus.toml");
        std::fs::write(&path, "total_maps = \"many\"").unwrap();

        let err = CorpusLoader::load(&path).unwrap_err();
        assert!(matches!(err, ContentError::Malformed { .. }));
    }
}
