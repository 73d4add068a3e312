use crate::config::ChaseConfig;
use crate::steering::SteeringLogic;
use crate::systems::apply_finite;
use flocksim_data::{Agent, AgentRole, InputFrame};

/// Turns host input into seek impulses on the player agent.
///
/// Each held direction seeks one unit away along that direction; impulses
/// compose additively. A target point adds one more seek. Returns the number
/// of non-finite forces dropped.
pub fn steer_player(agent: &mut Agent, input: &InputFrame, chase: &ChaseConfig) -> u64 {
    if agent.role != AgentRole::PlayerControlled || !agent.is_alive() {
        return 0;
    }
    let mut dropped = 0;
    for dir in input.keys.directions() {
        let force = agent.seek(agent.position + dir) * chase.seek_multiplier;
        if !apply_finite(agent, force, "player_key") {
            dropped += 1;
        }
    }
    if let Some(target) = input.target_point {
        let force = agent.seek(target) * chase.seek_multiplier;
        if !apply_finite(agent, force, "player_target") {
            dropped += 1;
        }
    }
    dropped
}
