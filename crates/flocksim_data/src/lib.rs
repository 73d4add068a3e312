pub mod data;

pub use data::agent::{Agent, AgentParams, AgentRole, Liveness, WanderState};
pub use data::environment::{DirectionalInput, InputFrame, SimEvent, WorldBounds};
pub use glam::Vec2;
