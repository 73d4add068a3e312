use crate::config::{ChaseConfig, SteeringConfig};
use crate::snapshot::AgentSnapshot;
use crate::steering::SteeringLogic;
use crate::systems::apply_finite;
use crate::targeting::nearest_living_prey;
use flocksim_data::{Agent, AgentRole};
use rand::Rng;
use uuid::Uuid;

pub struct ChaseContext<'a> {
    pub chase: &'a ChaseConfig,
    pub steering: &'a SteeringConfig,
    /// Snapshot of the whole population taken before the flock phase.
    pub population: &'a [AgentSnapshot],
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChaseOutcome {
    pub target: Option<Uuid>,
    pub dropped: bool,
}

/// Steers one chaser toward the nearest living prey inside its chase radius.
///
/// With no target the chaser seeks its own position, which is a zero force,
/// unless idle wandering is enabled.
pub fn chase_agent<R: Rng + ?Sized>(
    agent: &mut Agent,
    ctx: &ChaseContext,
    dt: f32,
    rng: &mut R,
) -> ChaseOutcome {
    if agent.role != AgentRole::Chaser || !agent.is_alive() {
        return ChaseOutcome::default();
    }

    let target = nearest_living_prey(agent.position, agent.params.chase_radius, ctx.population)
        .map(|idx| &ctx.population[idx]);

    let force = match target {
        Some(prey) => {
            let min_sq = ctx.chase.pursue_min_distance * ctx.chase.pursue_min_distance;
            if ctx.chase.pursue && agent.position.distance_squared(prey.position) > min_sq {
                agent.pursue(prey.position, prey.velocity, ctx.steering.pursuit_timestep)
            } else {
                agent.seek(prey.position)
            }
        }
        None if ctx.chase.idle_wander => agent.wander(dt, ctx.steering, rng),
        None => agent.seek(agent.position),
    };

    let applied = apply_finite(agent, force * ctx.chase.chase_multiplier, "chase");
    ChaseOutcome {
        target: target.map(|p| p.id),
        dropped: !applied,
    }
}
