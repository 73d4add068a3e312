use crate::config::FlockConfig;
use crate::snapshot::AgentSnapshot;
use crate::steering::SteeringLogic;
use crate::systems::{apply_finite, partition_mut};
use flocksim_data::{Agent, AgentRole, Vec2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Read-only inputs shared by every flock worker.
pub struct FlockContext<'a> {
    pub config: &'a FlockConfig,
    /// Living prey only.
    pub neighbors: &'a [AgentSnapshot],
    /// Positions of living chasers and the player.
    pub threats: &'a [Vec2],
}

/// Accumulates separation, alignment, cohesion and threat avoidance for one
/// living prey. Returns the number of non-finite forces dropped.
pub fn flock_agent(agent: &mut Agent, ctx: &FlockContext) -> u64 {
    if agent.role != AgentRole::Prey || !agent.is_alive() {
        return 0;
    }
    let cfg = ctx.config;
    let mut dropped = 0;

    let sep = agent.separate(ctx.neighbors) * cfg.separation_multiplier;
    let ali = agent.align(ctx.neighbors) * cfg.align_multiplier;
    let coh = agent.cohesion(ctx.neighbors) * cfg.cohesion_multiplier;
    for (force, source) in [(sep, "separate"), (ali, "align"), (coh, "cohesion")] {
        if !apply_finite(agent, force, source) {
            dropped += 1;
        }
    }

    let avoid_radius_sq = cfg.avoid_radius * cfg.avoid_radius;
    for &threat in ctx.threats {
        let dist_sq = agent.position.distance_squared(threat);
        if dist_sq >= avoid_radius_sq || dist_sq == 0.0 {
            continue;
        }
        let force = agent.avoid_point(threat) * cfg.avoid_multiplier / dist_sq.sqrt();
        if !apply_finite(agent, force, "avoid") {
            dropped += 1;
        }
    }
    dropped
}

/// Runs the flock phase over `worker_count` disjoint subsets of `agents`.
///
/// Every worker reads the same context and writes only its own subset, so the
/// result does not depend on `worker_count`. All subsets are finished when
/// this returns.
pub fn run_flock_phase(agents: &mut [Agent], worker_count: usize, ctx: &FlockContext) -> u64 {
    let chunks = partition_mut(agents, worker_count);

    #[cfg(feature = "parallel")]
    let dropped: u64 = chunks
        .into_par_iter()
        .map(|chunk| chunk.iter_mut().map(|a| flock_agent(a, ctx)).sum::<u64>())
        .sum();

    #[cfg(not(feature = "parallel"))]
    let dropped: u64 = chunks
        .into_iter()
        .map(|chunk| chunk.iter_mut().map(|a| flock_agent(a, ctx)).sum::<u64>())
        .sum();

    dropped
}
