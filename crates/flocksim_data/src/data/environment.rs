use glam::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Axis-aligned world rectangle the agents live in. Exiting one edge re-enters
/// at the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub north: f32,
    pub south: f32,
    pub east: f32,
    pub west: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::from_center(Vec2::ZERO, 11.25, 6.25)
    }
}

impl WorldBounds {
    pub fn new(north: f32, south: f32, east: f32, west: f32) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Bounds spanning `half_width` and `half_height` around `center`.
    pub fn from_center(center: Vec2, half_width: f32, half_height: f32) -> Self {
        Self {
            north: center.y + half_height,
            south: center.y - half_height,
            east: center.x + half_width,
            west: center.x - half_width,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.east - self.west
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.north - self.south
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.east + self.west) * 0.5,
            (self.north + self.south) * 0.5,
        )
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.west && p.x <= self.east && p.y >= self.south && p.y <= self.north
    }
}

/// Discrete directional key states for the player-controlled agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DirectionalInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalInput {
    /// Unit direction of every pressed key, in up/down/left/right order.
    pub fn directions(&self) -> impl Iterator<Item = Vec2> {
        [
            (self.up, Vec2::Y),
            (self.down, Vec2::NEG_Y),
            (self.left, Vec2::NEG_X),
            (self.right, Vec2::X),
        ]
        .into_iter()
        .filter_map(|(pressed, dir)| pressed.then_some(dir))
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Everything the host hands the simulation for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct InputFrame {
    /// New world bounds, e.g. after a window resize. `None` keeps the current ones.
    pub bounds: Option<WorldBounds>,
    pub keys: DirectionalInput,
    /// World-space point the player agent should steer toward.
    pub target_point: Option<Vec2>,
}

/// Notable state changes produced by a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A prey agent was captured and is now dead.
    Captured {
        prey: Uuid,
        by: Option<Uuid>,
        tick: u64,
        x: f32,
        y: f32,
    },
    /// A dead agent was brought back at a new position.
    Respawned { id: Uuid, tick: u64, x: f32, y: f32 },
}
