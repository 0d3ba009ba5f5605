//! Content loaders for reading and writing map data files.
//!
//! This module converts the document shapes defined in [`crate::formats`] into
//! [`game_core::Map`] values and back, and owns the on-disk layout of the data
//! directory.

pub mod corpus;
pub mod factory;
pub mod map;

pub use corpus::CorpusLoader;
pub use factory::ContentFactory;
pub use map::MapLoader;

use std::fs;
use std::path::Path;

use ron::ser::PrettyConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ContentError, DocumentKind};

/// Common result type for loaders.
pub type LoadResult<T> = Result<T, ContentError>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes through a temporary sibling and renames it into place.
pub(crate) fn write_file(path: &Path, contents: &str) -> LoadResult<()> {
    let io_err = |source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, contents).map_err(io_err)?;
    fs::rename(&temp_path, path).map_err(io_err)?;
    Ok(())
}

/// Serializes a document as pretty RON with struct names as root tags.
pub fn to_ron<T: Serialize>(kind: DocumentKind, document: &T) -> LoadResult<String> {
    let config = PrettyConfig::new().struct_names(true);
    ron::ser::to_string_pretty(document, config)
        .map_err(|e| ContentError::malformed(kind, "<memory>", e))
}

/// Parses a RON document; `origin` names the source in error messages.
pub fn from_ron<T: DeserializeOwned>(
    kind: DocumentKind,
    origin: &str,
    text: &str,
) -> LoadResult<T> {
    ron::from_str(text).map_err(|e| ContentError::malformed(kind, origin, e))
}
