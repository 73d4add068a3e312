//! Toroidal world-bounds policy shared by every agent.

use crate::error::{Result, SimError};
use flocksim_data::{Vec2, WorldBounds};

/// Checks that bounds describe a finite, non-empty rectangle.
pub fn validate_bounds(bounds: &WorldBounds) -> Result<()> {
    let WorldBounds {
        north,
        south,
        east,
        west,
    } = *bounds;
    if ![north, south, east, west].iter().all(|v| v.is_finite()) {
        return Err(SimError::invalid_bounds(format!(
            "bounds must be finite (n={north}, s={south}, e={east}, w={west})"
        )));
    }
    if east <= west {
        return Err(SimError::invalid_bounds(format!(
            "east ({east}) must be greater than west ({west})"
        )));
    }
    if north <= south {
        return Err(SimError::invalid_bounds(format!(
            "north ({north}) must be greater than south ({south})"
        )));
    }
    Ok(())
}

/// Re-enters a coordinate that left `[min, max]` from the opposite side,
/// keeping the overflow distance.
#[inline]
fn wrap_axis(v: f32, min: f32, max: f32) -> f32 {
    if v > max || v < min {
        let wrapped = min + (v - min).rem_euclid(max - min);
        // rem_euclid can round up to the full extent for tiny negative offsets
        wrapped.min(max)
    } else {
        v
    }
}

/// Wraps `position` into `bounds`. Positions already inside are untouched.
#[inline]
pub fn wrap_position(position: Vec2, bounds: &WorldBounds) -> Vec2 {
    Vec2::new(
        wrap_axis(position.x, bounds.west, bounds.east),
        wrap_axis(position.y, bounds.south, bounds.north),
    )
}
