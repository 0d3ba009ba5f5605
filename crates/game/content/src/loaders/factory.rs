//! Content factory rooted at a data directory.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::MapId;

use crate::error::{ContentError, DocumentKind};
use crate::formats::{CorpusFile, MapDocument};
use crate::loaders::{CorpusLoader, LoadResult, MapLoader, to_ron, write_file};

/// Content factory that reads and writes map content in a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── corpus.toml
/// ├── maps/
/// │   ├── 1.ron
/// │   └── 2.ron
/// └── campaign/
///     └── 7.ron
/// ```
#[derive(Clone, Debug)]
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn maps_dir(&self) -> PathBuf {
        self.data_dir.join("maps")
    }

    pub fn campaign_dir(&self) -> PathBuf {
        self.data_dir.join("campaign")
    }

    pub fn corpus_path(&self) -> PathBuf {
        self.data_dir.join("corpus.toml")
    }

    pub fn map_path(&self, id: MapId) -> PathBuf {
        self.maps_dir().join(format!("{}.ron", id.get()))
    }

    /// Load the layout document of a map from `maps/{id}.ron`.
    pub fn load_map_document(&self, id: MapId) -> LoadResult<MapDocument> {
        let path = self.map_path(id);
        if !path.exists() {
            return Err(ContentError::NotFound {
                kind: DocumentKind::Map,
                id: id.get(),
            });
        }
        MapLoader::load_document(&path)
    }

    pub fn save_map_document(&self, document: &MapDocument) -> LoadResult<()> {
        let path = self.map_path(MapId(document.id));
        let content = to_ron(DocumentKind::Map, document)?;
        write_file(&path, &content)
    }

    /// Identities of every stored map, ascending.
    pub fn map_ids(&self) -> LoadResult<Vec<MapId>> {
        let dir = self.maps_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir).map_err(|source| ContentError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ContentError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id_str) = filename.strip_suffix(".ron")
                && let Ok(id) = id_str.parse::<u32>()
                && let Some(id) = MapId::from_raw(id)
            {
                ids.push(id);
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }

    /// Load corpus counters from `corpus.toml`, if present.
    pub fn load_corpus(&self) -> LoadResult<Option<CorpusFile>> {
        CorpusLoader::load(&self.corpus_path())
    }

    pub fn save_corpus(&self, corpus: &CorpusFile) -> LoadResult<()> {
        CorpusLoader::save(&self.corpus_path(), corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::WallKind;
    use tempfile::TempDir;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.map_path(MapId(4)), Path::new("/tmp/data/maps/4.ron"));
        assert_eq!(factory.corpus_path(), Path::new("/tmp/data/corpus.toml"));
    }

    #[test]
    fn test_save_and_load_map_document() {
        let temp_dir = TempDir::new().unwrap();
        let factory = ContentFactory::new(temp_dir.path());
        let document = MapDocument::new(2, 3, 3)
            .with_door(0, 0, true)
            .with_door(2, 2, false)
            .with_wall(WallKind::Brick, 1, 1);

        factory.save_map_document(&document).unwrap();
        let loaded = factory.load_map_document(MapId(2)).unwrap();
        assert_eq!(loaded, document);

        let text = fs::read_to_string(factory.map_path(MapId(2))).unwrap();
        assert!(text.starts_with("Map("));
        assert!(text.contains("door("));
        assert!(text.contains("wall("));
    }

    #[test]
    fn test_missing_map_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let factory = ContentFactory::new(temp_dir.path());
        let err = factory.load_map_document(MapId(9)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_map_ids_skip_foreign_files() {
        let temp_dir = TempDir::new().unwrap();
        let factory = ContentFactory::new(temp_dir.path());
        factory
            .save_map_document(&MapDocument::new(3, 1, 1))
            .unwrap();
        factory
            .save_map_document(&MapDocument::new(1, 1, 1))
            .unwrap();
        fs::write(factory.maps_dir().join("notes.txt"), "x").unwrap();
        fs::write(factory.maps_dir().join("0.ron"), "x").unwrap();

        assert_eq!(factory.map_ids().unwrap(), vec![MapId(1), MapId(3)]);
    }
}
