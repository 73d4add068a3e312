pub mod macros;

use flocksim_lib::model::config::SimConfig;
use flocksim_lib::model::flock::Flock;
use flocksim_lib::{Agent, AgentParams, AgentRole, Liveness, Vec2};
use flocksim_lib::model::state::WanderState;
use uuid::Uuid;

/// Builds a flock from explicitly placed agents. Random spawning and the
/// respawn policy are off unless a test turns them back on.
#[allow(dead_code)]
pub struct FlockBuilder {
    config: SimConfig,
    agents: Vec<Agent>,
}

#[allow(dead_code)]
impl FlockBuilder {
    pub fn new() -> Self {
        let mut config = SimConfig::default();
        config.world.prey_count = 0;
        config.world.chaser_count = 0;
        config.world.spawn_player = false;
        config.world.seed = Some(0);
        config.respawn.enabled = false;
        Self {
            config,
            agents: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn build(self) -> Flock {
        Flock::with_agents(self.config, self.agents).expect("Failed to create flock in test builder")
    }
}

#[allow(dead_code)]
pub struct AgentBuilder {
    role: AgentRole,
    position: Vec2,
    velocity: Vec2,
    params: AgentParams,
    alive: bool,
    id: Option<Uuid>,
}

#[allow(dead_code)]
impl AgentBuilder {
    pub fn new(role: AgentRole) -> Self {
        Self {
            role,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            params: AgentParams::default(),
            alive: true,
            id: None,
        }
    }

    pub fn prey() -> Self {
        Self::new(AgentRole::Prey)
    }

    pub fn chaser() -> Self {
        Self::new(AgentRole::Chaser)
    }

    pub fn player() -> Self {
        Self::new(AgentRole::PlayerControlled)
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn velocity(mut self, vx: f32, vy: f32) -> Self {
        self.velocity = Vec2::new(vx, vy);
        self
    }

    pub fn params<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AgentParams),
    {
        modifier(&mut self.params);
        self
    }

    pub fn dead(mut self) -> Self {
        self.alive = false;
        self
    }

    pub fn build(self) -> Agent {
        Agent {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            role: self.role,
            position: self.position,
            velocity: self.velocity,
            acceleration: Vec2::ZERO,
            params: self.params,
            liveness: if self.alive {
                Liveness::Alive
            } else {
                Liveness::Dead { since: 0.0 }
            },
            wander: WanderState::default(),
        }
    }
}
