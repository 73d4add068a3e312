use crate::model::boundary::{validate_bounds, wrap_position};
use crate::model::config::SimConfig;
use crate::model::flock::Flock;
use crate::model::lifecycle;
use crate::model::metrics::Metrics;
use flocksim_data::{Agent, AgentRole, Vec2, WorldBounds};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

pub(crate) fn random_position<R: Rng + ?Sized>(bounds: &WorldBounds, rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.gen_range(bounds.west..=bounds.east),
        rng.gen_range(bounds.south..=bounds.north),
    )
}

impl Flock {
    /// Builds a population from `config`: prey, then chasers, then the
    /// optional player, each at a random position inside the world bounds.
    pub fn new(config: SimConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let mut rng = seed_rng(&config);
        let bounds = config.world.bounds();

        let roster = [
            (AgentRole::Prey, config.world.prey_count, config.profiles.prey),
            (
                AgentRole::Chaser,
                config.world.chaser_count,
                config.profiles.chaser,
            ),
            (
                AgentRole::PlayerControlled,
                usize::from(config.world.spawn_player),
                config.profiles.player,
            ),
        ];
        let total = roster.iter().map(|(_, n, _)| n).sum();
        let mut agents = Vec::with_capacity(total);
        for (role, count, params) in roster {
            for _ in 0..count {
                let pos = random_position(&bounds, &mut rng);
                agents.push(lifecycle::create_agent_with_rng(role, pos, params, &mut rng)?);
            }
        }

        tracing::debug!(
            agents = agents.len(),
            fingerprint = %config.fingerprint(),
            "Flock created"
        );
        Self::assemble(config, bounds, agents, rng)
    }

    /// Builds a flock around a caller-supplied population. Agents outside the
    /// world bounds are wrapped in.
    pub fn with_agents(config: SimConfig, mut agents: Vec<Agent>) -> anyhow::Result<Self> {
        config.validate()?;
        let rng = seed_rng(&config);
        let bounds = config.world.bounds();
        for agent in &mut agents {
            lifecycle::validate_params(&agent.params)?;
            anyhow::ensure!(
                agent.position.is_finite() && agent.velocity.is_finite(),
                "agent {} has non-finite kinematics",
                agent.id
            );
            agent.position = wrap_position(agent.position, &bounds);
        }
        Self::assemble(config, bounds, agents, rng)
    }

    fn assemble(
        config: SimConfig,
        bounds: WorldBounds,
        agents: Vec<Agent>,
        rng: ChaCha8Rng,
    ) -> anyhow::Result<Self> {
        validate_bounds(&bounds)?;
        let mut index = HashMap::with_capacity(agents.len());
        for (slot, agent) in agents.iter().enumerate() {
            anyhow::ensure!(
                index.insert(agent.id, slot).is_none(),
                "duplicate agent id {}",
                agent.id
            );
        }
        Ok(Self {
            neighbor_buffer: Vec::with_capacity(agents.len()),
            threat_buffer: Vec::new(),
            agents,
            index,
            config,
            bounds,
            rng,
            tick: 0,
            metrics: Metrics::new(),
        })
    }
}

fn seed_rng(config: &SimConfig) -> ChaCha8Rng {
    if let Some(seed) = config.world.seed {
        ChaCha8Rng::seed_from_u64(seed)
    } else {
        ChaCha8Rng::from_entropy()
    }
}
