//! Run state and core simulation types

use serde::{Deserialize, Serialize};

use crate::settings::GameTuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, no run in progress
    #[default]
    Ready,
    /// Active gameplay, ticks advance the run
    Playing,
    /// Run frozen, resumes unchanged
    Paused,
    /// Collision ended the run
    GameOver,
}

/// The player's single vertical degree of freedom
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerBody {
    /// 0 = ground, negative = airborne
    pub y: f32,
    pub vel_y: f32,
    pub is_jumping: bool,
}

impl PlayerBody {
    /// On or within `tolerance` of the ground
    pub fn is_grounded(&self, tolerance: f32) -> bool {
        self.y >= -tolerance
    }
}

/// Obstacle types (expenses to jump over)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    Cup,
    Bag,
    Controller,
    Car,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Cup,
        ObstacleKind::Bag,
        ObstacleKind::Controller,
        ObstacleKind::Car,
    ];

    /// Icon name for the presentation layer
    pub fn icon(&self) -> &'static str {
        match self {
            ObstacleKind::Cup => "cup.and.saucer.fill",
            ObstacleKind::Bag => "bag.fill",
            ObstacleKind::Controller => "gamecontroller.fill",
            ObstacleKind::Car => "car.fill",
        }
    }

    /// Tint as RGB bytes
    pub fn color(&self) -> [u8; 3] {
        match self {
            ObstacleKind::Cup => [0xff, 0x95, 0x00],
            ObstacleKind::Bag => [0xaf, 0x52, 0xde],
            ObstacleKind::Controller => [0x00, 0x7a, 0xff],
            ObstacleKind::Car => [0xff, 0x3b, 0x30],
        }
    }
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Horizontal center
    pub x: f32,
    pub kind: ObstacleKind,
}

/// State of one run, from start until stop or game over
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSession {
    /// Obstacles passed this run
    pub score: u32,
    /// Current scroll speed, never below the base speed
    pub speed: f32,
    pub player: PlayerBody,
    /// Active obstacles in spawn order (ascending x)
    pub obstacles: Vec<Obstacle>,
    /// Cosmetic background scroll, wraps
    pub background_offset: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next obstacle ID
    next_id: u32,
}

impl RunSession {
    /// Fresh session at base speed with an empty field
    pub fn new(tuning: &GameTuning) -> Self {
        Self {
            score: 0,
            speed: tuning.base_speed,
            player: PlayerBody::default(),
            obstacles: Vec::new(),
            background_offset: 0.0,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    pub fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Most recently spawned obstacle still on the field
    pub fn last_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles.last()
    }
}
