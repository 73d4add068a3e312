use crate::model::boundary::validate_bounds;
use crate::model::error::SimError;
use crate::model::flock::Flock;
use flocksim_data::{InputFrame, SimEvent};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

impl Flock {
    /// Advances the simulation by one tick.
    ///
    /// Order of work:
    /// - Adopt new bounds from `input` and run the respawn policy
    /// - Snapshot living prey and threats
    /// - Flock phase over disjoint subsets, joined before continuing
    /// - Chaser and player forces
    /// - Finalize movement for every agent
    ///
    /// # Arguments
    /// * `dt` - Elapsed simulated seconds, finite and non-negative
    /// * `input` - Bounds, key state and target point supplied by the host
    ///
    /// # Returns
    /// Events (respawns) that occurred this tick
    pub fn tick(&mut self, dt: f32, input: &InputFrame) -> anyhow::Result<Vec<SimEvent>> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimError::InvalidTimestep(dt).into());
        }
        if let Some(bounds) = input.bounds {
            validate_bounds(&bounds)?;
            self.bounds = bounds;
        }

        let start = Instant::now();
        self.tick += 1;
        if self.config.world.deterministic {
            let seed = self
                .config
                .world
                .seed
                .unwrap_or(0)
                .wrapping_add(self.tick)
                .wrapping_add(0x5EED);
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }

        let events = self.apply_respawn_policy()?;

        self.capture_snapshots();
        let mut dropped = self.pass_flock();
        dropped += self.pass_roles(dt, input);
        self.finalize_movement(dt);

        self.finalize_tick(start.elapsed(), dropped);
        Ok(events)
    }
}
