//! Sources of per-map layout documents.

use std::collections::BTreeMap;

use game_core::MapId;

use crate::error::{ContentError, DocumentKind};
use crate::formats::MapDocument;
use crate::loaders::{ContentFactory, LoadResult};

/// Read access to the stored map corpus.
pub trait MapSource: Send + Sync {
    /// Returns the layout document of a map, or [`ContentError::NotFound`].
    fn map_document(&self, id: MapId) -> LoadResult<MapDocument>;

    /// Identities of every stored map, ascending.
    fn map_ids(&self) -> LoadResult<Vec<MapId>>;
}

impl MapSource for ContentFactory {
    fn map_document(&self, id: MapId) -> LoadResult<MapDocument> {
        self.load_map_document(id)
    }

    fn map_ids(&self) -> LoadResult<Vec<MapId>> {
        ContentFactory::map_ids(self)
    }
}

/// In-memory map corpus, used by tests and authoring tools.
#[derive(Clone, Debug, Default)]
pub struct InMemoryMapSource {
    documents: BTreeMap<MapId, MapDocument>,
}

impl InMemoryMapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, document: MapDocument) {
        self.documents.insert(MapId(document.id), document);
    }

    /// Builder-style [`Self::insert`].
    pub fn with(mut self, document: MapDocument) -> Self {
        self.insert(document);
        self
    }

    /// Stores a document under an identity other than the one it declares.
    pub fn insert_as(&mut self, id: MapId, document: MapDocument) {
        self.documents.insert(id, document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl MapSource for InMemoryMapSource {
    fn map_document(&self, id: MapId) -> LoadResult<MapDocument> {
        self.documents
            .get(&id)
            .cloned()
            .ok_or(ContentError::NotFound {
                kind: DocumentKind::Map,
                id: id.get(),
            })
    }

    fn map_ids(&self) -> LoadResult<Vec<MapId>> {
        Ok(self.documents.keys().copied().collect())
    }
}
