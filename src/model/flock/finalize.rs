use crate::model::flock::Flock;
use crate::model::metrics::DROPPED_FORCES;
use crate::model::steering::SteeringLogic;
use flocksim_data::AgentRole;
use std::time::Duration;

impl Flock {
    /// Integrates every agent exactly once. Each agent touches only itself,
    /// so order does not matter.
    pub(crate) fn finalize_movement(&mut self, dt: f32) {
        let bounds = self.bounds;
        for agent in &mut self.agents {
            agent.finalize_movement(dt, &bounds);
        }
    }

    pub(crate) fn finalize_tick(&mut self, elapsed: Duration, dropped: u64) {
        if dropped > 0 {
            tracing::warn!(tick = self.tick, dropped, "Non-finite forces dropped this tick");
        }
        self.metrics.add_to_counter(DROPPED_FORCES, dropped);
        self.metrics.record_tick(
            elapsed,
            self.agents.len(),
            self.alive_count(AgentRole::Prey),
        );
    }
}
