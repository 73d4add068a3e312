use crate::model::error::SimError;
use crate::model::flock::init::random_position;
use crate::model::flock::Flock;
use crate::model::interaction::{Contact, ContactDetector};
use crate::model::lifecycle;
use crate::model::metrics::{CAPTURES, RESPAWNS};
use crate::model::snapshot::AgentSnapshot;
use flocksim_data::{AgentRole, SimEvent, Vec2, WorldBounds};
use rand::Rng;
use uuid::Uuid;

impl Flock {
    fn slot(&self, id: Uuid) -> Result<usize, SimError> {
        self.index.get(&id).copied().ok_or(SimError::UnknownAgent(id))
    }

    /// Marks a living prey dead. Returns `None` if it was already dead.
    pub fn capture(&mut self, prey: Uuid, by: Option<Uuid>) -> anyhow::Result<Option<SimEvent>> {
        let slot = self.slot(prey)?;
        let agent = &mut self.agents[slot];
        if agent.role != AgentRole::Prey {
            return Err(SimError::RoleMismatch {
                id: prey,
                expected: AgentRole::Prey,
                found: agent.role,
            }
            .into());
        }
        if !lifecycle::die(agent) {
            return Ok(None);
        }
        let (x, y) = (agent.position.x, agent.position.y);
        self.metrics.increment_counter(CAPTURES);
        tracing::debug!(tick = self.tick, %prey, ?by, "Prey captured");
        Ok(Some(SimEvent::Captured {
            prey,
            by,
            tick: self.tick,
            x,
            y,
        }))
    }

    /// Applies contact reports from a collision collaborator. Contacts naming
    /// an already-dead prey are ignored.
    pub fn apply_contacts(&mut self, contacts: &[Contact]) -> anyhow::Result<Vec<SimEvent>> {
        let mut events = Vec::new();
        for contact in contacts {
            if let Some(event) = self.capture(contact.prey, Some(contact.chaser))? {
                events.push(event);
            }
        }
        Ok(events)
    }

    /// Runs `detector` over the current population and applies its contacts.
    pub fn detect_contacts<D: ContactDetector + ?Sized>(
        &mut self,
        detector: &D,
    ) -> anyhow::Result<Vec<SimEvent>> {
        let population: Vec<AgentSnapshot> =
            self.agents.iter().map(AgentSnapshot::from).collect();
        let contacts = detector.detect(&population);
        self.apply_contacts(&contacts)
    }

    /// Moves an agent between ticks. The position is wrapped into the world;
    /// id, role and pending acceleration stay under the simulator's control.
    pub fn place(&mut self, id: Uuid, position: Vec2, velocity: Vec2) -> anyhow::Result<()> {
        let slot = self.slot(id)?;
        if !position.is_finite() {
            return Err(SimError::invalid_parameter(
                "position",
                format!("must be finite, got {position}"),
            )
            .into());
        }
        if !velocity.is_finite() {
            return Err(SimError::invalid_parameter(
                "velocity",
                format!("must be finite, got {velocity}"),
            )
            .into());
        }
        let agent = &mut self.agents[slot];
        agent.position = crate::model::boundary::wrap_position(position, &self.bounds);
        agent.velocity = velocity;
        Ok(())
    }

    /// Brings a dead agent back at `position` with zeroed kinematics.
    pub fn respawn(&mut self, id: Uuid, position: Vec2) -> anyhow::Result<SimEvent> {
        let slot = self.slot(id)?;
        let position = crate::model::boundary::wrap_position(position, &self.bounds);
        lifecycle::respawn(&mut self.agents[slot], position)?;
        self.metrics.increment_counter(RESPAWNS);
        tracing::debug!(tick = self.tick, %id, x = position.x, y = position.y, "Agent respawned");
        Ok(SimEvent::Respawned {
            id,
            tick: self.tick,
            x: position.x,
            y: position.y,
        })
    }

    /// Once living prey fall to the configured threshold, every dead prey
    /// reappears in a strip along the east edge.
    pub(crate) fn apply_respawn_policy(&mut self) -> anyhow::Result<Vec<SimEvent>> {
        let policy = &self.config.respawn;
        if !policy.enabled || self.alive_count(AgentRole::Prey) > policy.population_threshold {
            return Ok(Vec::new());
        }
        let dead: Vec<Uuid> = self
            .agents
            .iter()
            .filter(|a| a.role == AgentRole::Prey && !a.is_alive())
            .map(|a| a.id)
            .collect();
        if dead.is_empty() {
            return Ok(Vec::new());
        }

        let band = policy.spawn_band;
        let mut events = Vec::with_capacity(dead.len());
        for id in dead {
            let pos = spawn_in_east_band(&self.bounds, band, &mut self.rng);
            events.push(self.respawn(id, pos)?);
        }
        tracing::debug!(tick = self.tick, respawned = events.len(), "Population replenished");
        Ok(events)
    }
}

fn spawn_in_east_band<R: Rng + ?Sized>(bounds: &WorldBounds, band: f32, rng: &mut R) -> Vec2 {
    let strip = WorldBounds {
        west: (bounds.east - band).max(bounds.west),
        ..*bounds
    };
    random_position(&strip, rng)
}
