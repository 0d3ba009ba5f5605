//! Map build director.

use game_core::{Map, MapId};

use crate::builder::{BuilderVariant, MapBuilder};
use crate::error::Result;

/// Forwards construction requests to the session's active builder, so the
/// linker and persistence never depend on which variant is in use.
#[derive(Clone)]
pub struct MapDirector {
    builder: BuilderVariant,
}

impl MapDirector {
    pub fn new(builder: BuilderVariant) -> Self {
        Self { builder }
    }

    pub fn set_builder(&mut self, builder: BuilderVariant) {
        tracing::debug!("Switching map builder to {}", builder.name());
        self.builder = builder;
    }

    pub fn builder(&self) -> &BuilderVariant {
        &self.builder
    }

    /// Materializes a map through the active builder.
    pub fn construct_map(&self, id: MapId) -> Result<Map> {
        let map = self.builder.build(id)?;
        tracing::debug!(
            "Constructed {} ({}x{}, {} doors) with {} builder",
            id,
            map.dimensions().width,
            map.dimensions().length,
            map.door_positions().len(),
            self.builder.name()
        );
        Ok(map)
    }
}
