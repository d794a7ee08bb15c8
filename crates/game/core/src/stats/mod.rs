//! Attribute library.
//!
//! Pure integer helpers shared by every rules component: ability-score
//! modifiers, the grid metric, and clamps. Nothing here touches state.

mod attributes;
mod resources;

pub use attributes::{Attribute, AttributeCategory, AttributeScores};
pub use resources::{ResourceKind, ResourceMeter};

/// Ability-score modifier: `floor((score - 10) / 2)`.
///
/// ```
/// use vyuha_core::stats::modifier;
/// assert_eq!(modifier(10), 0);
/// assert_eq!(modifier(8), -1);
/// assert_eq!(modifier(20), 5);
/// ```
#[inline]
pub const fn modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Chebyshev (chessboard) distance between two grid cells.
///
/// Diagonal steps cost the same as orthogonal ones. Used uniformly for range
/// checks, area-of-effect membership and movement cost.
#[inline]
pub const fn grid_distance(x1: i32, y1: i32, x2: i32, y2: i32) -> u32 {
    let dx = x1.abs_diff(x2);
    let dy = y1.abs_diff(y2);
    if dx > dy { dx } else { dy }
}

/// Clamps a signed quantity at zero.
#[inline]
pub const fn clamp_non_negative(value: i32) -> u32 {
    if value < 0 { 0 } else { value as u32 }
}

/// Applies a signed delta to an unsigned base, clamping the result at zero.
#[inline]
pub fn apply_delta(base: u32, delta: i32) -> u32 {
    clamp_non_negative((base as i32).saturating_add(delta))
}
