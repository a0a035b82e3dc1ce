//! Pure hex geometry helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Vec2` inputs. World space follows the canvas
//! convention (origin top-left, y grows downward); Bevy's scene space is
//! y-up, see [`world_to_scene`].

use bevy::prelude::{Vec2, Vec3};
use hexx::Hex;

/// Circumradius of every hex, in world pixels.
pub const HEX_RADIUS: f32 = 50.0;

/// Fraction of [`HEX_RADIUS`] inside which a point counts as a hit.
pub const HIT_RADIUS_FACTOR: f32 = 0.95;

/// Horizontal distance between adjacent hex centres in the same row.
pub fn hex_width() -> f32 {
    3.0_f32.sqrt() * HEX_RADIUS
}

/// Vertex-to-vertex height of a hex.
pub fn hex_height() -> f32 {
    2.0 * HEX_RADIUS
}

/// Converts an axial coordinate into the world-space centre of its hex.
///
/// `x = W * (q + r/2)`, `y = 0.75 * H * r`. Total over all integers.
///
/// # Examples
/// ```
/// # use hex_conquest::math::hex_to_pixel;
/// # use hexx::Hex;
/// assert_eq!(hex_to_pixel(Hex::ZERO), bevy::prelude::Vec2::ZERO);
/// ```
pub fn hex_to_pixel(hex: Hex) -> Vec2 {
    let q = hex.x as f32;
    let r = hex.y as f32;
    Vec2::new(hex_width() * (q + r / 2.0), 0.75 * hex_height() * r)
}

/// The six polygon vertices of a hex centred at `center`.
///
/// Vertex `i` sits at angle `60° * i - 30°`, measured in world space.
pub fn hex_corners(center: Vec2, radius: f32) -> [Vec2; 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f32 - 30.0).to_radians();
        center + Vec2::new(angle.cos(), angle.sin()) * radius
    })
}

/// Maps a world-space (y-down) point into Bevy's y-up scene at depth `z`.
pub fn world_to_scene(world: Vec2, z: f32) -> Vec3 {
    Vec3::new(world.x, -world.y, z)
}

/// Whether `point` lies strictly inside the hit circle of a hex centred at `center`.
pub fn within_hit_radius(center: Vec2, point: Vec2) -> bool {
    center.distance(point) < HEX_RADIUS * HIT_RADIUS_FACTOR
}

/// One translucent halo ring drawn behind a hex to fake a blurred glow.
#[derive(Debug, PartialEq)]
pub struct GlowLayer {
    /// Circumradius of the halo hex.
    pub radius: f32,
    /// Opacity of the halo fill.
    pub alpha: f32,
}

/// Splits a glow of blur radius `glow` into `steps` halos around a hex of `radius`.
///
/// Halos grow linearly out to `radius + glow` while opacity decays as
/// `base_alpha / k`. A non-positive glow (or zero steps) yields no halos.
pub fn glow_layers(radius: f32, glow: f32, steps: u32, base_alpha: f32) -> Vec<GlowLayer> {
    if glow <= 0.0 || steps == 0 {
        return Vec::new();
    }
    (1..=steps)
        .map(|k| GlowLayer {
            radius: radius + glow * k as f32 / steps as f32,
            alpha: base_alpha / k as f32,
        })
        .collect()
}
