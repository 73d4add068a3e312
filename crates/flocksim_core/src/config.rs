//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! a `config.toml` file. Every force multiplier and timing constant the
//! simulator uses comes from here; nothing is global.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` content passed to [`SimConfig::from_toml`] (overrides defaults)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! prey_count = 200
//! chaser_count = 2
//! seed = 42
//! deterministic = true
//!
//! [flock]
//! separation_multiplier = 2.5
//!
//! [parallel]
//! worker_count = 8
//! ```

use crate::lifecycle::validate_params;
use anyhow::Context;
use flocksim_data::{AgentParams, WorldBounds};
use serde::{Deserialize, Serialize};

/// World extent, starting population and seeding.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub north: f32,
    pub south: f32,
    pub east: f32,
    pub west: f32,
    pub prey_count: usize,
    pub chaser_count: usize,
    pub spawn_player: bool,
    pub seed: Option<u64>,
    pub deterministic: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        let bounds = WorldBounds::default();
        Self {
            north: bounds.north,
            south: bounds.south,
            east: bounds.east,
            west: bounds.west,
            prey_count: 100,
            chaser_count: 1,
            spawn_player: true,
            seed: None,
            deterministic: false,
        }
    }
}

impl WorldConfig {
    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.north, self.south, self.east, self.west)
    }
}

/// Weights for the prey flocking phase.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FlockConfig {
    pub separation_multiplier: f32,
    pub align_multiplier: f32,
    pub cohesion_multiplier: f32,
    pub avoid_multiplier: f32,
    /// Threats closer than this push prey away.
    pub avoid_radius: f32,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            separation_multiplier: 2.0,
            align_multiplier: 1.75,
            cohesion_multiplier: 0.5,
            avoid_multiplier: 10.0,
            avoid_radius: 2.5,
        }
    }
}

/// Chaser and player steering weights.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ChaseConfig {
    pub chase_multiplier: f32,
    /// Applied to every player seek impulse.
    pub seek_multiplier: f32,
    /// Lead the target by its velocity instead of seeking its current position.
    pub pursue: bool,
    /// Closer than this, a pursuing chaser seeks directly.
    pub pursue_min_distance: f32,
    /// Wander instead of holding course when nothing is in range.
    pub idle_wander: bool,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            chase_multiplier: 1.0,
            seek_multiplier: 1.0,
            pursue: false,
            pursue_min_distance: 3.0,
            idle_wander: false,
        }
    }
}

/// Look-ahead and wander timing used by the steering primitives.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SteeringConfig {
    pub pursuit_timestep: f32,
    pub evade_timestep: f32,
    pub wander_timestep: f32,
    pub wander_radius: f32,
    /// Upper end of the `[1, wander_reset_max]` re-anchor countdown.
    pub wander_reset_max: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            pursuit_timestep: 1.0,
            evade_timestep: 1.0,
            wander_timestep: 5.0,
            wander_radius: 2.0,
            wander_reset_max: 3.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParallelConfig {
    pub worker_count: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self { worker_count: 4 }
    }
}

/// Automatic prey respawn once the living population runs low.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RespawnConfig {
    pub enabled: bool,
    pub population_threshold: usize,
    /// Width of the strip along the east edge where prey reappear.
    pub spawn_band: f32,
}

impl Default for RespawnConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            population_threshold: 20,
            spawn_band: 1.0,
        }
    }
}

/// Per-role agent tunables.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ProfileConfig {
    pub prey: AgentParams,
    pub chaser: AgentParams,
    pub player: AgentParams,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        let chaser = AgentParams {
            max_speed: 6.0,
            ..AgentParams::default()
        };
        Self {
            prey: AgentParams::default(),
            chaser,
            player: chaser,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub flock: FlockConfig,
    pub chase: ChaseConfig,
    pub steering: SteeringConfig,
    pub parallel: ParallelConfig,
    pub respawn: RespawnConfig,
    pub profiles: ProfileConfig,
}

fn ensure_non_negative(name: &str, value: f32) -> anyhow::Result<()> {
    anyhow::ensure!(
        value.is_finite() && value >= 0.0,
        "{name} must be finite and non-negative, got {value}"
    );
    Ok(())
}

impl SimConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    ///
    /// # Validation Rules
    /// - World bounds must be finite with east > west and north > south
    /// - Multipliers, radii and timesteps must be finite and non-negative
    /// - At least one worker
    /// - Profiles follow [`validate_params`]
    pub fn validate(&self) -> anyhow::Result<()> {
        // World validation
        crate::boundary::validate_bounds(&self.world.bounds())?;
        anyhow::ensure!(
            self.world.prey_count <= 100_000,
            "Prey count too large (max 100000)"
        );
        anyhow::ensure!(
            self.world.chaser_count <= 10_000,
            "Chaser count too large (max 10000)"
        );

        // Flock validation
        let f = &self.flock;
        ensure_non_negative("Separation multiplier", f.separation_multiplier)?;
        ensure_non_negative("Align multiplier", f.align_multiplier)?;
        ensure_non_negative("Cohesion multiplier", f.cohesion_multiplier)?;
        ensure_non_negative("Avoid multiplier", f.avoid_multiplier)?;
        ensure_non_negative("Avoid radius", f.avoid_radius)?;

        // Chase validation
        let c = &self.chase;
        ensure_non_negative("Chase multiplier", c.chase_multiplier)?;
        ensure_non_negative("Seek multiplier", c.seek_multiplier)?;
        ensure_non_negative("Pursue min distance", c.pursue_min_distance)?;

        // Steering validation
        let s = &self.steering;
        ensure_non_negative("Pursuit timestep", s.pursuit_timestep)?;
        ensure_non_negative("Evade timestep", s.evade_timestep)?;
        ensure_non_negative("Wander timestep", s.wander_timestep)?;
        ensure_non_negative("Wander radius", s.wander_radius)?;
        anyhow::ensure!(
            s.wander_reset_max.is_finite() && s.wander_reset_max >= 1.0,
            "Wander reset max must be finite and at least 1.0"
        );

        // Parallel validation
        anyhow::ensure!(
            self.parallel.worker_count > 0,
            "Worker count must be positive"
        );
        anyhow::ensure!(
            self.parallel.worker_count <= 1024,
            "Worker count too large (max 1024)"
        );

        // Respawn validation
        ensure_non_negative("Respawn band", self.respawn.spawn_band)?;

        let profiles = [
            ("prey", &self.profiles.prey),
            ("chaser", &self.profiles.chaser),
            ("player", &self.profiles.player),
        ];
        for (name, params) in profiles {
            validate_params(params).with_context(|| format!("Invalid {name} profile"))?;
        }

        Ok(())
    }

    /// Parses and validates configuration from TOML content.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Hash of the behavioral sections. Two runs with the same fingerprint and
    /// seed produce the same trajectories.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.flock).as_bytes());
        hasher.update(format!("{:?}", self.chase).as_bytes());
        hasher.update(format!("{:?}", self.steering).as_bytes());
        hasher.update(format!("{:?}", self.respawn).as_bytes());
        hasher.update(format!("{:?}", self.profiles).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_world_bounds() {
        let config = SimConfig {
            world: WorldConfig {
                east: -20.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = SimConfig {
            parallel: ParallelConfig { worker_count: 0 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_mass_rejected() {
        let mut config = SimConfig::default();
        config.profiles.prey.mass = 0.0;
        assert!(config.validate().is_err());
        config.profiles.prey.mass = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_radius_rejected() {
        let mut config = SimConfig::default();
        config.profiles.chaser.chase_radius = -0.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("chaser"));
    }

    #[test]
    fn test_infinite_tunables_rejected() {
        let mut config = SimConfig::default();
        config.flock.avoid_multiplier = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.steering.wander_timestep = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.chase.chase_multiplier = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.respawn.spawn_band = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.steering.wander_reset_max = f32::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_profile_errors_name_profile_and_field() {
        let mut config = SimConfig::default();
        config.profiles.player.max_force = f32::INFINITY;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("player"));
        assert!(matches!(
            err.downcast_ref::<crate::error::SimError>(),
            Some(crate::error::SimError::InvalidParameter {
                field: "max_force",
                ..
            })
        ));
    }

    #[test]
    fn test_wander_reset_max_below_one() {
        let config = SimConfig {
            steering: SteeringConfig {
                wander_reset_max: 0.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_partial_overrides() {
        let config = SimConfig::from_toml(
            r#"
            [world]
            prey_count = 12
            seed = 7

            [flock]
            align_multiplier = 0.25

            [profiles.prey]
            max_speed = 3.0
            "#,
        )
        .expect("valid toml");
        assert_eq!(config.world.prey_count, 12);
        assert_eq!(config.world.seed, Some(7));
        assert_eq!(config.flock.align_multiplier, 0.25);
        assert_eq!(config.flock.separation_multiplier, 2.0);
        assert_eq!(config.profiles.prey.max_speed, 3.0);
        assert_eq!(config.profiles.prey.mass, 1.0);
        assert_eq!(config.parallel.worker_count, 4);
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        assert!(SimConfig::from_toml("[parallel]\nworker_count = 0\n").is_err());
        assert!(SimConfig::from_toml("not toml at all [").is_err());
    }

    #[test]
    fn test_default_profiles() {
        let p = ProfileConfig::default();
        assert_eq!(p.prey.max_speed, 4.0);
        assert_eq!(p.chaser.max_speed, 6.0);
        assert_eq!(p.chaser.chase_radius, 4.0);
        assert_eq!(p.player, p.chaser);
    }

    #[test]
    fn test_fingerprint_consistency() {
        let config1 = SimConfig::default();
        let config2 = SimConfig::default();
        assert_eq!(config1.fingerprint(), config2.fingerprint());

        let mut config3 = SimConfig::default();
        config3.flock.cohesion_multiplier = 0.9;
        assert_ne!(config1.fingerprint(), config3.fingerprint());
    }
}
