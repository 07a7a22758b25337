//! Game tuning
//!
//! Every gameplay constant lives here so balance can be adjusted from JSON
//! without touching the simulation. Sign convention: vertical position 0 is the
//! ground, negative values are airborne.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::SIM_DT;
use crate::error::ConfigError;

/// Tunable simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameTuning {
    // === Physics ===
    /// Downward acceleration added to velocity each tick (> 0)
    pub gravity: f32,
    /// Velocity set on jump (< 0, upward)
    pub jump_impulse: f32,
    /// How far above ground a jump is still accepted
    pub jump_tolerance: f32,

    // === Scrolling ===
    /// Horizontal speed at the start of a run
    pub base_speed: f32,
    /// Speed added every tick (no upper bound)
    pub speed_increment: f32,
    /// Background offset wraps back to 0 once it passes `-background_wrap`
    pub background_wrap: f32,

    // === Geometry ===
    /// Fixed horizontal slot of the player
    pub player_x: f32,
    /// Nominal player sprite size (square)
    pub player_size: f32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    /// Hitbox size as a fraction of the sprite size
    pub hitbox_scale: f32,

    // === Spawning ===
    /// Width of the visible play field
    pub field_width: f32,
    /// Spawn once the newest obstacle is this far inside the field
    pub min_spawn_distance: f32,
    pub min_obstacle_distance: f32,
    pub max_obstacle_distance: f32,

    // === Timing ===
    /// Fixed tick period in seconds
    pub tick_period_secs: f32,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_impulse: -12.0,
            jump_tolerance: 5.0,

            base_speed: 1.8,
            speed_increment: 0.002,
            background_wrap: 400.0,

            player_x: 80.0,
            player_size: 40.0,
            obstacle_width: 20.0,
            obstacle_height: 25.0,
            hitbox_scale: 0.8,

            field_width: 400.0,
            min_spawn_distance: 180.0,
            min_obstacle_distance: 180.0,
            max_obstacle_distance: 280.0,

            tick_period_secs: SIM_DT,
        }
    }
}

impl GameTuning {
    /// Coordinate just beyond the visible field where obstacles appear
    pub fn spawn_edge(&self) -> f32 {
        self.field_width + self.obstacle_width
    }

    /// Obstacles left of this coordinate are behind the player and removed
    pub fn despawn_x(&self) -> f32 {
        -self.obstacle_width / 2.0
    }

    /// Check every constant, returning the first offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        positive("gravity", self.gravity)?;
        if !(self.jump_impulse.is_finite() && self.jump_impulse < 0.0) {
            return Err(ConfigError::Invalid {
                field: "jump_impulse",
                reason: "must be negative (upward)",
            });
        }
        if !(self.jump_tolerance.is_finite() && self.jump_tolerance >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "jump_tolerance",
                reason: "must not be negative",
            });
        }
        positive("base_speed", self.base_speed)?;
        positive("speed_increment", self.speed_increment)?;
        positive("background_wrap", self.background_wrap)?;
        positive("player_size", self.player_size)?;
        positive("obstacle_width", self.obstacle_width)?;
        positive("obstacle_height", self.obstacle_height)?;
        positive("hitbox_scale", self.hitbox_scale)?;
        if self.hitbox_scale > 1.0 {
            return Err(ConfigError::Invalid {
                field: "hitbox_scale",
                reason: "must not exceed 1.0",
            });
        }
        positive("field_width", self.field_width)?;
        if !(self.player_x.is_finite()
            && self.player_x > self.despawn_x()
            && self.player_x < self.field_width)
        {
            return Err(ConfigError::Invalid {
                field: "player_x",
                reason: "must lie between the despawn line and the field edge",
            });
        }
        positive("min_spawn_distance", self.min_spawn_distance)?;
        positive("min_obstacle_distance", self.min_obstacle_distance)?;
        positive("max_obstacle_distance", self.max_obstacle_distance)?;
        if self.max_obstacle_distance < self.min_obstacle_distance {
            return Err(ConfigError::Invalid {
                field: "max_obstacle_distance",
                reason: "must be at least min_obstacle_distance",
            });
        }
        positive("tick_period_secs", self.tick_period_secs)?;
        Ok(())
    }

    /// Parse tuning from JSON (missing fields keep their defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = GameTuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.spawn_edge(), 420.0);
        assert_eq!(tuning.despawn_x(), -10.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = GameTuning::from_json(r#"{ "gravity": 0.8 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.base_speed, 1.8);
    }

    #[test]
    fn test_rejects_non_positive_spacing() {
        let err = GameTuning::from_json(r#"{ "min_obstacle_distance": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "min_obstacle_distance",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_inverted_spacing_bounds() {
        let tuning = GameTuning {
            min_obstacle_distance: 300.0,
            max_obstacle_distance: 200.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::Invalid {
                field: "max_obstacle_distance",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_upward_gravity_and_downward_jump() {
        let tuning = GameTuning {
            gravity: -0.6,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());

        let tuning = GameTuning {
            jump_impulse: 12.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_player_slot_must_be_reachable() {
        for json in [
            r#"{ "player_x": -50.0 }"#,
            r#"{ "player_x": 5000.0 }"#,
            r#"{ "player_x": 400.0 }"#,
        ] {
            assert!(matches!(
                GameTuning::from_json(json),
                Err(ConfigError::Invalid {
                    field: "player_x",
                    ..
                })
            ));
        }
        assert!(GameTuning::from_json(r#"{ "player_x": 0.0 }"#).is_ok());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            GameTuning::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
