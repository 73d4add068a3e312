//! Agent creation and the prey liveness state machine.
//!
//! `Alive -> Dead` through [`die`], `Dead -> Alive` through [`respawn`].
//! Filtering dead agents out of neighbor, threat and target queries is the
//! simulator's job; nothing here assumes it.

use crate::error::{Result, SimError};
use flocksim_data::{Agent, AgentParams, AgentRole, Liveness, Vec2, WanderState};
use rand::Rng;
use uuid::Uuid;

fn check(field: &'static str, value: f32, positive: bool) -> Result<()> {
    if !value.is_finite() {
        return Err(SimError::invalid_parameter(
            field,
            format!("must be finite, got {value}"),
        ));
    }
    if positive && value <= 0.0 {
        return Err(SimError::invalid_parameter(
            field,
            format!("must be positive, got {value}"),
        ));
    }
    if value < 0.0 {
        return Err(SimError::invalid_parameter(
            field,
            format!("must be non-negative, got {value}"),
        ));
    }
    Ok(())
}

/// Rejects tunables that would divide by zero or scale forces nonsensically.
pub fn validate_params(params: &AgentParams) -> Result<()> {
    check("mass", params.mass, true)?;
    check("max_speed", params.max_speed, false)?;
    check("max_force", params.max_force, false)?;
    check("desired_separation", params.desired_separation, false)?;
    check("neighbor_radius", params.neighbor_radius, false)?;
    check("chase_radius", params.chase_radius, false)?;
    Ok(())
}

/// Creates an agent at rest. The id is drawn from `rng` so seeded runs
/// produce the same ids.
pub fn create_agent_with_rng<R: Rng + ?Sized>(
    role: AgentRole,
    position: Vec2,
    params: AgentParams,
    rng: &mut R,
) -> Result<Agent> {
    validate_params(&params)?;
    if !position.is_finite() {
        return Err(SimError::invalid_parameter(
            "position",
            format!("must be finite, got {position}"),
        ));
    }
    Ok(Agent {
        id: Uuid::from_u128(rng.gen::<u128>()),
        role,
        position,
        velocity: Vec2::ZERO,
        acceleration: Vec2::ZERO,
        params,
        liveness: Liveness::Alive,
        wander: WanderState::default(),
    })
}

pub fn create_agent(role: AgentRole, position: Vec2, params: AgentParams) -> Result<Agent> {
    let mut rng = rand::thread_rng();
    create_agent_with_rng(role, position, params, &mut rng)
}

#[inline]
pub fn is_alive(agent: &Agent) -> bool {
    agent.is_alive()
}

/// Marks the agent dead. Returns `true` if it was alive; dying twice is a no-op.
pub fn die(agent: &mut Agent) -> bool {
    if agent.is_alive() {
        agent.liveness = Liveness::Dead { since: 0.0 };
        true
    } else {
        false
    }
}

/// Brings a dead agent back at `position` with zeroed kinematics and a fresh
/// wander anchor.
pub fn respawn(agent: &mut Agent, position: Vec2) -> Result<()> {
    if agent.is_alive() {
        return Err(SimError::invalid_transition(agent.id, "agent is alive"));
    }
    if !position.is_finite() {
        return Err(SimError::invalid_parameter(
            "position",
            format!("must be finite, got {position}"),
        ));
    }
    agent.position = position;
    agent.velocity = Vec2::ZERO;
    agent.acceleration = Vec2::ZERO;
    agent.wander = WanderState::default();
    agent.liveness = Liveness::Alive;
    Ok(())
}
