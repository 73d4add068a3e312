use crate::model::config::SimConfig;
use crate::model::metrics::Metrics;
use crate::model::snapshot::{AgentSnapshot, AgentView, WorldSnapshot};
use flocksim_data::{Agent, AgentRole, Vec2, WorldBounds};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use uuid::Uuid;

pub mod finalize;
pub mod init;
pub mod logic;
pub mod systems;
pub mod update;

/// The agent population and everything needed to advance it one tick at a time.
///
/// The host owns the loop: it calls [`Flock::tick`] once per frame with the
/// elapsed time and that frame's input, then reads [`Flock::snapshot`] or
/// [`Flock::tracked_positions`] for rendering.
pub struct Flock {
    agents: Vec<Agent>,
    /// Agent id to slot in `agents`. Slots never move during a run.
    index: HashMap<Uuid, usize>,
    config: SimConfig,
    bounds: WorldBounds,
    rng: ChaCha8Rng,
    tick: u64,
    metrics: Metrics,

    neighbor_buffer: Vec<AgentSnapshot>,
    threat_buffer: Vec<Vec2>,
}

impl Flock {
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: Uuid) -> Option<&Agent> {
        self.index.get(&id).map(|&slot| &self.agents[slot])
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn alive_count(&self, role: AgentRole) -> usize {
        self.agents
            .iter()
            .filter(|a| a.role == role && a.is_alive())
            .count()
    }

    pub fn ids_by_role(&self, role: AgentRole) -> Vec<Uuid> {
        self.agents
            .iter()
            .filter(|a| a.role == role)
            .map(|a| a.id)
            .collect()
    }

    /// Render-side view of the population.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            bounds: self.bounds,
            agents: self.agents.iter().map(AgentView::from).collect(),
        }
    }

    pub fn snapshot_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Positions of the first chaser and the player agent, for cosmetic
    /// effects that follow them.
    pub fn tracked_positions(&self) -> (Option<Vec2>, Option<Vec2>) {
        let first = |role: AgentRole| {
            self.agents
                .iter()
                .find(|a| a.role == role)
                .map(|a| a.position)
        };
        (
            first(AgentRole::Chaser),
            first(AgentRole::PlayerControlled),
        )
    }
}
