use glam::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Behavioral role of an agent. Role-specific behavior is selected by matching
/// on this tag inside the simulator systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentRole {
    /// Flocks with other prey and steers away from threats. Can be captured.
    Prey,
    /// Seeks the nearest living prey within its chase radius.
    Chaser,
    /// Driven by host input (directional impulses or a target point).
    PlayerControlled,
}

impl AgentRole {
    /// Roles whose positions prey steer away from.
    pub fn is_threat(self) -> bool {
        matches!(self, AgentRole::Chaser | AgentRole::PlayerControlled)
    }
}

/// Liveness of an agent. Only prey ever leave the `Alive` state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Liveness {
    #[default]
    Alive,
    /// `since` counts simulated seconds elapsed since the agent died.
    Dead { since: f32 },
}

/// Persistent wander anchor, kept across ticks to avoid target jitter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WanderState {
    pub target_offset_timer: f32,
    pub current_wander_target: Vec2,
}

/// Per-agent tunables. Validated when an agent is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentParams {
    pub mass: f32,
    pub max_speed: f32,
    pub max_force: f32,
    /// Neighbors closer than this engage separation.
    pub desired_separation: f32,
    /// Neighbors closer than this count for alignment and cohesion.
    pub neighbor_radius: f32,
    /// Farthest distance at which a chaser still considers a target.
    pub chase_radius: f32,
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            mass: 1.0,
            max_speed: 4.0,
            max_force: 0.1,
            desired_separation: 1.5,
            neighbor_radius: 2.5,
            chase_radius: 4.0,
        }
    }
}

/// A single autonomous agent.
///
/// `acceleration` is a transient accumulator owned by the agent: forces are
/// added during a tick and the value is cleared when movement is finalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: Uuid,
    pub role: AgentRole,
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub params: AgentParams,
    #[serde(default)]
    pub liveness: Liveness,
    #[serde(default)]
    pub wander: WanderState,
}

impl Agent {
    #[inline]
    pub fn is_alive(&self) -> bool {
        matches!(self.liveness, Liveness::Alive)
    }

    /// Seconds since death, `None` while alive.
    pub fn time_since_death(&self) -> Option<f32> {
        match self.liveness {
            Liveness::Alive => None,
            Liveness::Dead { since } => Some(since),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(role: AgentRole) -> Agent {
        Agent {
            id: Uuid::nil(),
            role,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            params: AgentParams::default(),
            liveness: Liveness::Alive,
            wander: WanderState::default(),
        }
    }

    #[test]
    fn test_threat_roles() {
        assert!(AgentRole::Chaser.is_threat());
        assert!(AgentRole::PlayerControlled.is_threat());
        assert!(!AgentRole::Prey.is_threat());
    }

    #[test]
    fn test_time_since_death() {
        let mut a = agent(AgentRole::Prey);
        assert!(a.is_alive());
        assert_eq!(a.time_since_death(), None);
        a.liveness = Liveness::Dead { since: 0.25 };
        assert!(!a.is_alive());
        assert_eq!(a.time_since_death(), Some(0.25));
    }

    #[test]
    fn test_liveness_defaults_when_missing() {
        let a = agent(AgentRole::Chaser);
        let mut json = serde_json::to_value(&a).expect("serialize agent");
        json.as_object_mut()
            .expect("agent is an object")
            .remove("liveness");
        let back: Agent = serde_json::from_value(json).expect("deserialize agent");
        assert!(back.is_alive());
    }
}
