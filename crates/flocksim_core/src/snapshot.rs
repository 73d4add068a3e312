use flocksim_data::{Agent, AgentRole, Vec2, WorldBounds};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only copy of the state other agents may observe during a tick.
///
/// Workers read a slice of these while writing only their own agents, so no
/// agent ever sees a neighbor's already-integrated position mid-tick.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct AgentSnapshot {
    pub id: Uuid,
    pub role: AgentRole,
    pub position: Vec2,
    pub velocity: Vec2,
    pub alive: bool,
}

impl From<&Agent> for AgentSnapshot {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            role: agent.role,
            position: agent.position,
            velocity: agent.velocity,
            alive: agent.is_alive(),
        }
    }
}

/// Sprite heading in degrees: `atan2(vy, vx) - 90`, so zero points up.
#[inline]
pub fn heading_degrees(velocity: Vec2) -> f32 {
    velocity.y.atan2(velocity.x).to_degrees() - 90.0
}

/// Per-agent data handed to a render sink.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AgentView {
    pub id: Uuid,
    pub role: AgentRole,
    pub position: Vec2,
    pub heading: f32,
    pub alive: bool,
    /// Drives a death fade-out on the render side.
    pub time_since_death: Option<f32>,
}

impl From<&Agent> for AgentView {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            role: agent.role,
            position: agent.position,
            heading: heading_degrees(agent.velocity),
            alive: agent.is_alive(),
            time_since_death: agent.time_since_death(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub bounds: WorldBounds,
    pub agents: Vec<AgentView>,
}
