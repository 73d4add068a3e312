use crate::model::flock::Flock;
use crate::model::snapshot::AgentSnapshot;
use flocksim_core::systems::chase::{chase_agent, ChaseContext};
use flocksim_core::systems::flock::{run_flock_phase, FlockContext};
use flocksim_core::systems::player::steer_player;
use flocksim_data::{AgentRole, InputFrame};

impl Flock {
    /// Copies the state other agents may observe this tick: living prey as
    /// flock neighbors and chase targets, living chasers and the player as
    /// threats.
    pub(crate) fn capture_snapshots(&mut self) {
        self.neighbor_buffer.clear();
        self.threat_buffer.clear();
        for agent in self.agents.iter().filter(|a| a.is_alive()) {
            match agent.role {
                AgentRole::Prey => self.neighbor_buffer.push(AgentSnapshot::from(agent)),
                AgentRole::Chaser | AgentRole::PlayerControlled => {
                    self.threat_buffer.push(agent.position)
                }
            }
        }
    }

    /// Parallel flock phase over `worker_count` subsets. Returns the number of
    /// dropped forces.
    pub(crate) fn pass_flock(&mut self) -> u64 {
        let ctx = FlockContext {
            config: &self.config.flock,
            neighbors: &self.neighbor_buffer,
            threats: &self.threat_buffer,
        };
        run_flock_phase(&mut self.agents, self.config.parallel.worker_count, &ctx)
    }

    /// Chaser and player forces, run after the flock phase has joined.
    pub(crate) fn pass_roles(&mut self, dt: f32, input: &InputFrame) -> u64 {
        let ctx = ChaseContext {
            chase: &self.config.chase,
            steering: &self.config.steering,
            population: &self.neighbor_buffer,
        };
        let mut dropped = 0;
        for agent in &mut self.agents {
            match agent.role {
                AgentRole::Prey => {}
                AgentRole::Chaser => {
                    let outcome = chase_agent(agent, &ctx, dt, &mut self.rng);
                    if outcome.dropped {
                        dropped += 1;
                    }
                }
                AgentRole::PlayerControlled => {
                    dropped += steer_player(agent, input, &self.config.chase);
                }
            }
        }
        dropped
    }
}
