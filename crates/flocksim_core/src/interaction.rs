//! Contact detection between threats and prey.
//!
//! Hosts with their own collision system report contacts directly; the
//! [`ProximityDetector`] covers headless runs. Either way the simulator's only
//! reaction to a contact is killing the prey.

use crate::snapshot::AgentSnapshot;
use flocksim_data::AgentRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// The chaser or player that touched the prey.
    pub chaser: Uuid,
    pub prey: Uuid,
}

pub trait ContactDetector {
    fn detect(&self, population: &[AgentSnapshot]) -> Vec<Contact>;
}

/// Reports every living threat and living prey pair closer than `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProximityDetector {
    pub radius: f32,
}

impl ProximityDetector {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl Default for ProximityDetector {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl ContactDetector for ProximityDetector {
    fn detect(&self, population: &[AgentSnapshot]) -> Vec<Contact> {
        let radius_sq = self.radius * self.radius;
        let mut contacts = Vec::new();
        for threat in population.iter().filter(|a| a.alive && a.role.is_threat()) {
            for prey in population
                .iter()
                .filter(|a| a.alive && a.role == AgentRole::Prey)
            {
                if threat.position.distance_squared(prey.position) < radius_sq {
                    contacts.push(Contact {
                        chaser: threat.id,
                        prey: prey.id,
                    });
                }
            }
        }
        contacts
    }
}
