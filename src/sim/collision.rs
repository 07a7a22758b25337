//! Collision detection between the player and obstacles
//!
//! Both sides use axis-aligned boxes centered on the sprite and shrunk by
//! `hitbox_scale`, so near misses don't count. Y = 0 is the ground baseline.

use glam::Vec2;

use super::state::{Obstacle, PlayerBody};
use crate::settings::GameTuning;

/// Axis-aligned rectangle given by center and half-size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub center: Vec2,
    pub half_size: Vec2,
}

impl Hitbox {
    /// Box of `size` scaled by `scale` around `center`
    pub fn scaled(center: Vec2, size: Vec2, scale: f32) -> Self {
        Self {
            center,
            half_size: size * scale / 2.0,
        }
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_size
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_size
    }

    /// Strict overlap: boxes that only share an edge don't intersect
    pub fn intersects(&self, other: &Hitbox) -> bool {
        let delta = (self.center - other.center).abs();
        let reach = self.half_size + other.half_size;
        delta.x < reach.x && delta.y < reach.y
    }
}

/// Player hitbox at its fixed slot, lifted by the current vertical position
pub fn player_hitbox(body: &PlayerBody, tuning: &GameTuning) -> Hitbox {
    Hitbox::scaled(
        Vec2::new(tuning.player_x, body.y),
        Vec2::splat(tuning.player_size),
        tuning.hitbox_scale,
    )
}

/// Obstacle hitbox standing on the ground baseline
pub fn obstacle_hitbox(obstacle: &Obstacle, tuning: &GameTuning) -> Hitbox {
    Hitbox::scaled(
        Vec2::new(obstacle.x, 0.0),
        Vec2::new(tuning.obstacle_width, tuning.obstacle_height),
        tuning.hitbox_scale,
    )
}

/// First obstacle overlapping the player, if any
pub fn first_collision<'a>(
    body: &PlayerBody,
    obstacles: &'a [Obstacle],
    tuning: &GameTuning,
) -> Option<&'a Obstacle> {
    let player = player_hitbox(body, tuning);
    obstacles
        .iter()
        .find(|o| player.intersects(&obstacle_hitbox(o, tuning)))
}
