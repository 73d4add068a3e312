//! Steering primitives over [`Agent`].
//!
//! Every primitive returns a force whose magnitude never exceeds the agent's
//! `max_force`. Only [`SteeringLogic::apply_force`] and
//! [`SteeringLogic::finalize_movement`] change kinematic state;
//! [`SteeringLogic::wander`] additionally updates the agent's own wander anchor.
//!
//! Neighbor filters compare squared distances against squared radii. A true
//! distance is only taken when normalizing a direction. A zero direction
//! (target on top of the agent, coincident neighbors) contributes no force.

use crate::boundary::wrap_position;
use crate::config::SteeringConfig;
use crate::snapshot::AgentSnapshot;
use flocksim_data::{Agent, Liveness, Vec2, WorldBounds};
use rand::Rng;

pub trait SteeringLogic {
    fn seek(&self, target: Vec2) -> Vec2;
    fn flee(&self, target: Vec2) -> Vec2;
    fn pursue(&self, target_pos: Vec2, target_vel: Vec2, pursuit_timestep: f32) -> Vec2;
    fn evade(&self, target_pos: Vec2, target_vel: Vec2, evade_timestep: f32) -> Vec2;
    fn wander<R: Rng + ?Sized>(&mut self, dt: f32, params: &SteeringConfig, rng: &mut R) -> Vec2;
    fn separate(&self, others: &[AgentSnapshot]) -> Vec2;
    fn align(&self, others: &[AgentSnapshot]) -> Vec2;
    fn cohesion(&self, others: &[AgentSnapshot]) -> Vec2;
    fn avoid_point(&self, obstacle: Vec2) -> Vec2;
    fn apply_force(&mut self, force: Vec2);
    fn finalize_movement(&mut self, dt: f32, bounds: &WorldBounds);
}

/// Sum and count of `others` that pass `filter`, skipping `self_id`.
#[inline]
fn accumulate<F>(agent: &Agent, others: &[AgentSnapshot], radius: f32, mut value: F) -> (Vec2, u32)
where
    F: FnMut(&AgentSnapshot) -> Vec2,
{
    let radius_sq = radius * radius;
    let mut sum = Vec2::ZERO;
    let mut count = 0;
    for other in others {
        if other.id == agent.id {
            continue;
        }
        if agent.position.distance_squared(other.position) < radius_sq {
            sum += value(other);
            count += 1;
        }
    }
    (sum, count)
}

/// Reynolds steering: the clamped difference between a desired velocity and
/// the current one.
#[inline]
fn steer_toward(agent: &Agent, desired: Vec2) -> Vec2 {
    (desired - agent.velocity).clamp_length_max(agent.params.max_force)
}

/// Steering toward `direction` at full speed, zero when there is no direction.
#[inline]
fn steer_along(agent: &Agent, direction: Vec2) -> Vec2 {
    let unit = direction.normalize_or_zero();
    if unit == Vec2::ZERO {
        return Vec2::ZERO;
    }
    steer_toward(agent, unit * agent.params.max_speed)
}

impl SteeringLogic for Agent {
    fn seek(&self, target: Vec2) -> Vec2 {
        steer_along(self, target - self.position)
    }

    fn flee(&self, target: Vec2) -> Vec2 {
        steer_along(self, self.position - target)
    }

    fn pursue(&self, target_pos: Vec2, target_vel: Vec2, pursuit_timestep: f32) -> Vec2 {
        self.seek(target_pos + target_vel * pursuit_timestep)
    }

    fn evade(&self, target_pos: Vec2, target_vel: Vec2, evade_timestep: f32) -> Vec2 {
        self.flee(target_pos + target_vel * evade_timestep)
    }

    fn wander<R: Rng + ?Sized>(&mut self, dt: f32, params: &SteeringConfig, rng: &mut R) -> Vec2 {
        if self.wander.target_offset_timer <= 0.0 {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            self.wander.current_wander_target = self.position
                + self.velocity * params.wander_timestep
                + Vec2::from_angle(angle) * params.wander_radius;
            self.wander.target_offset_timer = rng.gen_range(1.0..=params.wander_reset_max.max(1.0));
        } else {
            self.wander.target_offset_timer -= dt;
        }
        self.seek(self.wander.current_wander_target)
    }

    fn separate(&self, others: &[AgentSnapshot]) -> Vec2 {
        let (sum, count) = accumulate(self, others, self.params.desired_separation, |o| {
            (self.position - o.position).normalize_or_zero()
        });
        if count == 0 {
            return Vec2::ZERO;
        }
        steer_along(self, sum / count as f32)
    }

    fn align(&self, others: &[AgentSnapshot]) -> Vec2 {
        let (sum, count) = accumulate(self, others, self.params.neighbor_radius, |o| o.velocity);
        if count == 0 {
            return Vec2::ZERO;
        }
        steer_along(self, sum / count as f32)
    }

    fn cohesion(&self, others: &[AgentSnapshot]) -> Vec2 {
        let (sum, count) = accumulate(self, others, self.params.neighbor_radius, |o| o.position);
        if count == 0 {
            return Vec2::ZERO;
        }
        self.seek(sum / count as f32)
    }

    fn avoid_point(&self, obstacle: Vec2) -> Vec2 {
        ((self.position - obstacle).normalize_or_zero() * self.params.max_speed)
            .clamp_length_max(self.params.max_force)
    }

    #[inline]
    fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force / self.params.mass;
    }

    fn finalize_movement(&mut self, dt: f32, bounds: &WorldBounds) {
        self.velocity += self.acceleration * dt;
        self.velocity = self.velocity.clamp_length_max(self.params.max_speed);
        self.position = wrap_position(self.position + self.velocity * dt, bounds);
        self.acceleration = Vec2::ZERO;
        if let Liveness::Dead { since } = &mut self.liveness {
            *since += dt;
        }
    }
}
