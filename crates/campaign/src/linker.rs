//! Depth-first campaign linker.
//!
//! Every unresolved non-start door reachable from the root is asked for a
//! destination. A destination that is not yet in the arena is built through
//! the [`MapDirector`] and entered before the current map's remaining doors,
//! the same order a recursive walk would produce. The walk keeps its own
//! stack of frames so deep campaigns cannot exhaust the call stack.

use std::collections::HashSet;

use game_core::{Map, MapId, Position};

use crate::campaign::Campaign;
use crate::director::MapDirector;
use crate::error::{BranchFailure, CampaignError, Result};
use crate::providers::{DestinationPrompt, DestinationProvider};

/// Outcome of one link pass.
#[derive(Debug, Default)]
pub struct LinkReport {
    /// Doors the provider was asked about (re-prompts not counted).
    pub prompted: usize,
    /// Doors wired to a freshly constructed map.
    pub linked: usize,
    /// Doors wired to a map already in the arena.
    pub reused: usize,
    pub terminal: usize,
    pub failures: Vec<BranchFailure>,
}

impl LinkReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Pending work for one map on the walk stack.
struct Frame {
    map: MapId,
    next_door: usize,
}

/// What to do with the next door of a frame.
enum Step {
    Ask(Position),
    Enter(MapId),
    Done,
}

/// Resolves unresolved doors of a campaign, one door at a time.
pub struct CampaignLinker<'a> {
    director: &'a MapDirector,
    provider: &'a mut dyn DestinationProvider,
    total_known_maps: u32,
}

impl<'a> CampaignLinker<'a> {
    pub fn new(
        director: &'a MapDirector,
        provider: &'a mut dyn DestinationProvider,
        total_known_maps: u32,
    ) -> Self {
        Self {
            director,
            provider,
            total_known_maps,
        }
    }

    pub fn director(&self) -> &MapDirector {
        self.director
    }

    /// Walks the campaign from its root and resolves every unresolved door.
    ///
    /// Doors that are already resolved are left as they are, so linking a
    /// fully linked campaign asks no questions. Construction failures are
    /// confined to their door and reported; a provider failure aborts.
    pub fn link(&mut self, campaign: &mut Campaign) -> Result<LinkReport> {
        let mut report = LinkReport::default();
        let mut entered = HashSet::from([campaign.root_id()]);
        let mut stack = vec![Frame {
            map: campaign.root_id(),
            next_door: 0,
        }];

        tracing::debug!("Linking {} from {}", campaign.id(), campaign.root_id());

        while let Some(frame) = stack.last_mut() {
            let map_id = frame.map;
            let step = match campaign.map(map_id) {
                Some(map) => next_step(map, frame),
                None => Step::Done,
            };

            match step {
                Step::Done => {
                    stack.pop();
                }
                Step::Enter(next) => {
                    if entered.insert(next) {
                        stack.push(Frame {
                            map: next,
                            next_door: 0,
                        });
                    }
                }
                Step::Ask(position) => {
                    report.prompted += 1;
                    let Some(destination) = self.ask(map_id, position)? else {
                        campaign.resolve_door(map_id, position, None)?;
                        report.terminal += 1;
                        tracing::debug!("{} door {} is terminal", map_id, position);
                        continue;
                    };

                    if campaign.contains(destination) {
                        campaign.resolve_door(map_id, position, Some(destination))?;
                        report.reused += 1;
                        tracing::debug!(
                            "{} door {} reuses {}",
                            map_id,
                            position,
                            destination
                        );
                        if entered.insert(destination) {
                            stack.push(Frame {
                                map: destination,
                                next_door: 0,
                            });
                        }
                        continue;
                    }

                    match self.director.construct_map(destination) {
                        Ok(map) => {
                            campaign.insert(map);
                            campaign.resolve_door(map_id, position, Some(destination))?;
                            report.linked += 1;
                            entered.insert(destination);
                            stack.push(Frame {
                                map: destination,
                                next_door: 0,
                            });
                        }
                        Err(error) => {
                            tracing::warn!(
                                "Leaving {} door {} unresolved: {}",
                                map_id,
                                position,
                                error
                            );
                            report.failures.push(BranchFailure {
                                map: map_id,
                                position: Some(position),
                                destination: Some(destination),
                                error,
                            });
                        }
                    }
                }
            }
        }

        tracing::info!(
            "Linked {}: {} prompted, {} built, {} reused, {} terminal, {} failed",
            campaign.id(),
            report.prompted,
            report.linked,
            report.reused,
            report.terminal,
            report.failures.len()
        );

        Ok(report)
    }

    /// Asks until the answer lies in `[0, total_known_maps]`.
    fn ask(&mut self, map: MapId, position: Position) -> Result<Option<MapId>> {
        let prompt = DestinationPrompt {
            map,
            position,
            max: self.total_known_maps,
        };
        loop {
            let answer = self.provider.choose_destination(&prompt)?;
            match in_range(answer, 0, self.total_known_maps) {
                Some(raw) => return Ok(MapId::from_raw(raw)),
                None => {
                    tracing::warn!(
                        "Destination {} for {} door {} is outside [0, {}]",
                        answer,
                        map,
                        position,
                        self.total_known_maps
                    );
                    self.provider.rejected(answer, 0, self.total_known_maps);
                }
            }
        }
    }
}

/// Advances `frame` past start doors and returns the next unit of work.
fn next_step(map: &Map, frame: &mut Frame) -> Step {
    let positions = map.door_positions();
    while let Some(&position) = positions.get(frame.next_door) {
        frame.next_door += 1;
        let Some(door) = map.door(position) else {
            continue;
        };
        if door.is_start() {
            continue;
        }
        if !door.is_resolved() {
            return Step::Ask(position);
        }
        if let Some(next) = door.destination() {
            return Step::Enter(next);
        }
    }
    Step::Done
}

fn in_range(answer: i64, min: u32, max: u32) -> Option<u32> {
    u32::try_from(answer)
        .ok()
        .filter(|value| (min..=max).contains(value))
}

/// Asks for the root map of a new campaign until the answer lies in
/// `[1, total_known_maps]`.
pub fn prompt_start_map(
    provider: &mut dyn DestinationProvider,
    total_known_maps: u32,
) -> Result<MapId> {
    if total_known_maps == 0 {
        return Err(CampaignError::EmptyCorpus);
    }
    loop {
        let answer = provider.choose_start(total_known_maps)?;
        if let Some(id) = in_range(answer, 1, total_known_maps).and_then(MapId::from_raw) {
            return Ok(id);
        }
        tracing::warn!(
            "Start map {} is outside [1, {}]",
            answer,
            total_known_maps
        );
        provider.rejected(answer, 1, total_known_maps);
    }
}
