//! # Flocksim
//!
//! Headless predator/prey boids simulation. The host owns the frame loop and
//! drives [`model::flock::Flock`] one tick at a time.

pub mod model;

pub use flocksim_core::{init_logging, Contact, ContactDetector, ProximityDetector, SteeringLogic};
pub use flocksim_data::{
    Agent, AgentParams, AgentRole, DirectionalInput, InputFrame, Liveness, SimEvent, Vec2,
    WorldBounds,
};
pub use model::config::SimConfig;
pub use model::flock::Flock;
