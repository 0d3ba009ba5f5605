//! Map builders: turn a map identity into a fully populated [`Map`].
//!
//! Two variants exist. [`ReplayBuilder`] deserializes the stored layout as is.
//! [`AuthoredBuilder`] replays the same layout for an active player and lets a
//! [`CompanionFactory`] populate friends. [`BuilderVariant`] selects between
//! them once per session.

use std::sync::Arc;

use game_content::{MapLoader, MapSource};
use game_core::{Friend, Map, MapId, Position};

use crate::error::Result;

/// Capability to produce a freshly owned map for an identity.
pub trait MapBuilder {
    fn build(&self, id: MapId) -> Result<Map>;
}

/// Player the session is authoring for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerContext {
    pub name: String,
}

impl PlayerContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// External entity factory deciding what a friend cell becomes.
pub trait CompanionFactory: Send + Sync {
    fn friend(&self, player: &PlayerContext, map: MapId, position: Position) -> Friend;
}

/// Binds every friend to the active player's party.
#[derive(Clone, Copy, Debug, Default)]
pub struct PartyCompanions;

impl CompanionFactory for PartyCompanions {
    fn friend(&self, player: &PlayerContext, _map: MapId, _position: Position) -> Friend {
        Friend::companion_of(player.name.clone())
    }
}

/// Builds maps purely from their stored documents.
#[derive(Clone)]
pub struct ReplayBuilder {
    source: Arc<dyn MapSource>,
}

impl ReplayBuilder {
    pub fn new(source: Arc<dyn MapSource>) -> Self {
        Self { source }
    }
}

impl MapBuilder for ReplayBuilder {
    fn build(&self, id: MapId) -> Result<Map> {
        let document = self.source.map_document(id)?;
        Ok(MapLoader::assemble(&document, id)?)
    }
}

/// Builds maps from their stored layout for an active player.
#[derive(Clone)]
pub struct AuthoredBuilder {
    source: Arc<dyn MapSource>,
    player: PlayerContext,
    companions: Arc<dyn CompanionFactory>,
}

impl AuthoredBuilder {
    pub fn new(source: Arc<dyn MapSource>, player: PlayerContext) -> Self {
        Self {
            source,
            player,
            companions: Arc::new(PartyCompanions),
        }
    }

    /// Replace the default [`PartyCompanions`] factory.
    pub fn companions(mut self, factory: impl CompanionFactory + 'static) -> Self {
        self.companions = Arc::new(factory);
        self
    }

    pub fn player(&self) -> &PlayerContext {
        &self.player
    }
}

impl MapBuilder for AuthoredBuilder {
    fn build(&self, id: MapId) -> Result<Map> {
        let document = self.source.map_document(id)?;
        let map = MapLoader::assemble_with(&document, id, |position| {
            self.companions.friend(&self.player, id, position)
        })?;
        Ok(map)
    }
}

/// Builder selected for a session.
#[derive(Clone)]
pub enum BuilderVariant {
    Authored(AuthoredBuilder),
    Replay(ReplayBuilder),
}

impl BuilderVariant {
    /// Authored when a player is active, replay otherwise.
    pub fn for_session(player: Option<PlayerContext>, source: Arc<dyn MapSource>) -> Self {
        match player {
            Some(player) => BuilderVariant::Authored(AuthoredBuilder::new(source, player)),
            None => BuilderVariant::Replay(ReplayBuilder::new(source)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BuilderVariant::Authored(_) => "authored",
            BuilderVariant::Replay(_) => "replay",
        }
    }
}

impl MapBuilder for BuilderVariant {
    fn build(&self, id: MapId) -> Result<Map> {
        match self {
            BuilderVariant::Authored(builder) => builder.build(id),
            BuilderVariant::Replay(builder) => builder.build(id),
        }
    }
}
