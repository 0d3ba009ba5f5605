//! File-based CampaignRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_content::loaders::{from_ron, to_ron};
use game_content::{CampaignDocument, ContentError, DocumentKind};
use game_core::CampaignId;

use crate::repository::{CampaignRepository, RepositoryError, Result};

/// File-based implementation of CampaignRepository.
///
/// Stores each campaign as `{id}.ron` in RON format, written through a
/// temporary file and renamed into place.
pub struct FileCampaignRepository {
    base_dir: PathBuf,
}

impl FileCampaignRepository {
    /// Create a new file-based campaign repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Get the path to a campaign file.
    pub fn campaign_path(&self, id: CampaignId) -> PathBuf {
        self.base_dir.join(format!("{}.ron", id.get()))
    }
}

fn content_error(error: ContentError) -> RepositoryError {
    match error {
        ContentError::Io { source, .. } => RepositoryError::Io(source),
        other => RepositoryError::CorruptedData(other.to_string()),
    }
}

impl CampaignRepository for FileCampaignRepository {
    fn save(&self, id: CampaignId, document: &CampaignDocument) -> Result<()> {
        let path = self.campaign_path(id);
        let temp_path = path.with_extension("ron.tmp");

        let text = to_ron(DocumentKind::Campaign, document)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, text)?;

        // Atomic rename
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved {} to {}", id, path.display());

        Ok(())
    }

    fn load(&self, id: CampaignId) -> Result<Option<CampaignDocument>> {
        let path = self.campaign_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&path)?;
        let document: CampaignDocument =
            from_ron(DocumentKind::Campaign, &path.display().to_string(), &text)
                .map_err(content_error)?;

        tracing::debug!(
            "Loaded {} from {} with {} map records",
            id,
            path.display(),
            document.maps.len()
        );

        Ok(Some(document))
    }

    fn exists(&self, id: CampaignId) -> bool {
        self.campaign_path(id).exists()
    }

    fn delete(&self, id: CampaignId) -> Result<()> {
        let path = self.campaign_path(id);

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::info!("Deleted campaign: {}", path.display());
        }

        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<CampaignId>> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let entry = entry?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id_str) = filename.strip_suffix(".ron")
                && let Ok(id) = id_str.parse::<u32>()
            {
                ids.push(CampaignId(id));
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::{DoorRecord, MapRecord};
    use tempfile::TempDir;

    fn sample() -> CampaignDocument {
        let mut first = MapRecord::new(1);
        first.doors.push(DoorRecord {
            doorid: 2,
            x: 2,
            y: 3,
        });
        let mut second = MapRecord::new(2);
        second.doors.push(DoorRecord {
            doorid: 0,
            x: 0,
            y: 0,
        });
        CampaignDocument {
            start: 1,
            maps: vec![first, second],
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileCampaignRepository::new(temp_dir.path()).unwrap();

        assert!(!repo.exists(CampaignId(7)));
        repo.save(CampaignId(7), &sample()).unwrap();
        assert!(repo.exists(CampaignId(7)));

        let loaded = repo.load(CampaignId(7)).unwrap().unwrap();
        assert_eq!(loaded, sample());

        let text = fs::read_to_string(repo.campaign_path(CampaignId(7))).unwrap();
        assert!(text.starts_with("Campaign("));
        assert!(text.contains("ID: 1"));
        assert!(text.contains("doorid: 0"));
    }

    #[test]
    fn test_load_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileCampaignRepository::new(temp_dir.path()).unwrap();
        assert!(repo.load(CampaignId(3)).unwrap().is_none());
    }

    #[test]
    fn test_wrong_root_is_corrupted() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileCampaignRepository::new(temp_dir.path()).unwrap();
        fs::write(
            repo.campaign_path(CampaignId(1)),
            "Map(id: 1, width: 2, length: 2)",
        )
        .unwrap();

        let err = repo.load(CampaignId(1)).unwrap_err();
        assert!(matches!(err, RepositoryError::CorruptedData(_)));
    }

    #[test]
    fn test_list_and_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileCampaignRepository::new(temp_dir.path()).unwrap();
        repo.save(CampaignId(4), &sample()).unwrap();
        repo.save(CampaignId(2), &sample()).unwrap();

        assert_eq!(repo.list_ids().unwrap(), vec![CampaignId(2), CampaignId(4)]);

        repo.delete(CampaignId(2)).unwrap();
        assert_eq!(repo.list_ids().unwrap(), vec![CampaignId(4)]);
    }
}
