//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seedable RNG only
//! - Obstacles kept in spawn order
//! - No rendering, timer or ledger dependencies

pub mod collision;
pub mod physics;
pub mod scroller;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Hitbox, first_collision, obstacle_hitbox, player_hitbox};
pub use state::{GamePhase, Obstacle, ObstacleKind, PlayerBody, RunSession};
pub use tick::{TickOutcome, tick};
