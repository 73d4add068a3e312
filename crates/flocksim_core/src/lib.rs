//! # Flocksim Core
//!
//! The core simulation engine for Flocksim - a headless predator/prey boids simulation.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Steering primitives (seek, flee, pursue, evade, wander, flocking rules)
//! - Toroidal world-bounds wrapping
//! - Agent lifecycle and the prey liveness state machine
//! - Per-role force systems (flock, chase, player)
//! - Metrics collection and structured logging
//!
//! ## Architecture
//!
//! Each tick is two-phase:
//! - **Accumulate**: systems read an immutable population snapshot and add
//!   forces to the acceleration of agents they own
//! - **Finalize**: every agent integrates its own acceleration exactly once
//!
//! The flock phase fans out over disjoint agent subsets with Rayon when the
//! `parallel` feature is on. Seeded RNGs keep runs reproducible.
//!
//! ## Example
//!
//! ```
//! use flocksim_core::steering::SteeringLogic;
//! use flocksim_core::lifecycle::create_agent_with_rng;
//! use flocksim_data::{AgentParams, AgentRole, Vec2, WorldBounds};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut agent =
//!     create_agent_with_rng(AgentRole::Prey, Vec2::ZERO, AgentParams::default(), &mut rng)
//!         .unwrap();
//!
//! let force = agent.seek(Vec2::new(3.0, 0.0));
//! agent.apply_force(force);
//! agent.finalize_movement(1.0 / 60.0, &WorldBounds::default());
//! assert!(agent.position.x > 0.0);
//! ```

/// Toroidal world-bounds wrapping
pub mod boundary;
/// Configuration management for simulation parameters
pub mod config;
/// Error types
pub mod error;
/// Contact detection between threats and prey
pub mod interaction;
/// Agent creation, death and respawn
pub mod lifecycle;
/// Performance metrics collection and logging
pub mod metrics;
/// Agent snapshots for parallel processing and rendering
pub mod snapshot;
/// Steering force primitives
pub mod steering;
/// Per-role force systems (Flock, Chase, Player)
pub mod systems;
/// Nearest-target queries
pub mod targeting;

pub use error::{Result, SimError};
pub use interaction::{Contact, ContactDetector, ProximityDetector};
pub use metrics::{init_logging, Metrics};
pub use steering::SteeringLogic;
