use crate::snapshot::AgentSnapshot;
use flocksim_data::{AgentRole, Vec2};

/// Index into `population` of the nearest living prey strictly closer than
/// `radius`.
///
/// Linear scan over squared distances. Ties keep the first entry found.
pub fn nearest_living_prey(
    origin: Vec2,
    radius: f32,
    population: &[AgentSnapshot],
) -> Option<usize> {
    let mut best = None;
    let mut best_dist_sq = radius * radius;
    for (idx, other) in population.iter().enumerate() {
        if !other.alive || other.role != AgentRole::Prey {
            continue;
        }
        let dist_sq = origin.distance_squared(other.position);
        if dist_sq < best_dist_sq {
            best_dist_sq = dist_sq;
            best = Some(idx);
        }
    }
    best
}
