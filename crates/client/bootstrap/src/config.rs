//! Session configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use campaign::PlayerContext;

/// Configuration required to open a campaign session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub data_dir: PathBuf,
    /// Active player; selects the authored builder when present.
    pub player: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Self::default_data_dir())
    }
}

impl SessionConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            player: None,
            log_dir: None,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CAMPAIGN_DATA_DIR` - Corpus and campaign directory (default: platform-specific)
    /// - `CAMPAIGN_PLAYER` - Active player name (default: none, replay builder)
    /// - `CAMPAIGN_LOG_DIR` - Write logs to this directory instead of stderr
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an explicit variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();

        if let Some(dir) = read("CAMPAIGN_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.player = read("CAMPAIGN_PLAYER").map(|name| name.trim().to_string());
        config.log_dir = read("CAMPAIGN_LOG_DIR").map(PathBuf::from);

        config
    }

    /// Platform data directory, or `./campaign_data` when none is known.
    ///
    /// - macOS: `~/Library/Application Support/campaign`
    /// - Linux: `~/.local/share/campaign` (or `$XDG_DATA_HOME/campaign`)
    /// - Windows: `%APPDATA%\campaign`
    pub fn default_data_dir() -> PathBuf {
        directories::ProjectDirs::from("", "", "campaign")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./campaign_data"))
    }

    pub fn player_context(&self) -> Option<PlayerContext> {
        self.player.as_deref().map(PlayerContext::new)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_vars() {
        let config = SessionConfig::from_vars(vars(&[
            ("CAMPAIGN_DATA_DIR", "/srv/campaigns"),
            ("CAMPAIGN_PLAYER", " mira "),
        ]));

        assert_eq!(config.data_dir, PathBuf::from("/srv/campaigns"));
        assert_eq!(config.player.as_deref(), Some("mira"));
        assert_eq!(config.log_dir, None);
        assert_eq!(config.player_context(), Some(PlayerContext::new("mira")));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = SessionConfig::from_vars(vars(&[("CAMPAIGN_PLAYER", "  ")]));
        assert_eq!(config.player, None);
        assert_eq!(config.data_dir, SessionConfig::default_data_dir());
    }
}
