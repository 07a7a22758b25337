//! Game state machine
//!
//! Owns the phase, the current run and the RNG. Input events are applied
//! synchronously as they arrive; `tick` only advances the run while Playing.
//! The presentation layer reads `snapshot()` and drains `GameEvent`s.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::POINTS_PER_SESSION_BADGE;
use crate::error::ConfigError;
use crate::reporter::{ScoreReport, ScoreReporter};
use crate::settings::GameTuning;
use crate::sim::{self, GamePhase, ObstacleKind, RunSession, TickOutcome, physics, spawner};

/// Discrete player/UI input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameInput {
    Start,
    /// Tap: jumps while Playing, starts from Ready, resumes from Paused
    Jump,
    Pause,
    Resume,
    Stop,
    PlayAgain,
}

/// Shown to the player when a run ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverSummary {
    pub final_score: u32,
    /// Cosmetic "badges earned this run"; unrelated to the lifetime badge count
    pub session_badge_estimate: u32,
}

impl GameOverSummary {
    pub fn new(final_score: u32) -> Self {
        Self {
            final_score,
            session_badge_estimate: session_badge_estimate(final_score),
        }
    }
}

/// Badges displayed for a score: one per ten points
pub fn session_badge_estimate(score: u32) -> u32 {
    score / POINTS_PER_SESSION_BADGE
}

/// Notifications for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Jumped,
    Paused,
    Resumed,
    Stopped,
    ObstaclePassed { score: u32 },
    GameOver(GameOverSummary),
}

/// Obstacle as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    pub id: u32,
    pub x: f32,
    pub kind: ObstacleKind,
    pub icon: &'static str,
    pub color: [u8; 3],
}

/// Read-only per-frame view of the game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub session_badge_estimate: u32,
    pub speed: f32,
    pub player_x: f32,
    pub player_y: f32,
    pub is_jumping: bool,
    pub background_offset: f32,
    pub obstacles: Vec<ObstacleView>,
}

/// The Budget Jump game
pub struct Game<R> {
    tuning: GameTuning,
    phase: GamePhase,
    session: RunSession,
    rng: Pcg32,
    reporter: R,
    events: Vec<GameEvent>,
    last_summary: Option<GameOverSummary>,
}

impl<R: ScoreReporter> Game<R> {
    /// Create a game in the Ready phase. Invalid tuning is rejected here,
    /// so a game that exists can always start.
    pub fn new(tuning: GameTuning, seed: u64, reporter: R) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let session = RunSession::new(&tuning);
        Ok(Self {
            tuning,
            phase: GamePhase::Ready,
            session,
            rng: Pcg32::seed_from_u64(seed),
            reporter,
            events: Vec::new(),
            last_summary: None,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn session(&self) -> &RunSession {
        &self.session
    }

    pub fn tuning(&self) -> &GameTuning {
        &self.tuning
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Summary of the most recent game over
    pub fn last_summary(&self) -> Option<GameOverSummary> {
        self.last_summary
    }

    /// Take queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply an input event immediately
    pub fn handle_input(&mut self, input: GameInput) {
        match input {
            GameInput::Start => {
                self.start();
            }
            GameInput::Jump => self.jump(),
            GameInput::Pause => self.pause(),
            GameInput::Resume => self.resume(),
            GameInput::Stop => self.stop(),
            GameInput::PlayAgain => self.play_again(),
        }
    }

    /// Ready -> Playing with a fresh run and its first obstacle
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Ready {
            return false;
        }
        self.session = RunSession::new(&self.tuning);
        spawner::spawn(&mut self.session, &self.tuning, &mut self.rng);
        self.phase = GamePhase::Playing;
        self.last_summary = None;
        self.events.push(GameEvent::Started);
        log::info!("Run started");
        true
    }

    /// Phase-dependent tap handling
    pub fn jump(&mut self) {
        match self.phase {
            GamePhase::Playing => {
                if physics::try_jump(&mut self.session.player, &self.tuning) {
                    self.events.push(GameEvent::Jumped);
                }
            }
            GamePhase::Ready => {
                self.start();
            }
            GamePhase::Paused => self.resume(),
            GamePhase::GameOver => {}
        }
    }

    /// Playing -> Paused. No-op in any other phase.
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
            self.events.push(GameEvent::Paused);
            log::info!("Paused at score {}", self.session.score);
        }
    }

    /// Paused -> Playing. No-op in any other phase.
    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
            self.events.push(GameEvent::Resumed);
            log::info!("Resumed");
        }
    }

    /// Abandon the run without reporting a score
    pub fn stop(&mut self) {
        if matches!(self.phase, GamePhase::Playing | GamePhase::Paused) {
            self.session = RunSession::new(&self.tuning);
            self.phase = GamePhase::Ready;
            self.events.push(GameEvent::Stopped);
            log::info!("Run stopped");
        }
    }

    /// GameOver -> Ready, clearing the finished run
    pub fn reset(&mut self) {
        if self.phase == GamePhase::GameOver {
            self.session = RunSession::new(&self.tuning);
            self.phase = GamePhase::Ready;
        }
    }

    /// GameOver -> Ready -> Playing
    pub fn play_again(&mut self) {
        if self.phase == GamePhase::GameOver {
            self.reset();
            self.start();
        }
    }

    /// Advance one fixed step. Ignored unless Playing.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.phase != GamePhase::Playing {
            return None;
        }

        let score_before = self.session.score;
        let outcome = sim::tick(&mut self.session, &self.tuning, &mut self.rng);
        for score in score_before + 1..=self.session.score {
            self.events.push(GameEvent::ObstaclePassed { score });
        }

        if let Some(id) = outcome.collided_with {
            log::debug!("Collided with obstacle #{}", id);
            self.game_over();
        }
        Some(outcome)
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        let summary = GameOverSummary::new(self.session.score);
        log::info!(
            "Game over: score {}, {} badges this run",
            summary.final_score,
            summary.session_badge_estimate
        );
        self.reporter.report(ScoreReport {
            final_score: summary.final_score,
        });
        self.last_summary = Some(summary);
        self.events.push(GameEvent::GameOver(summary));
    }

    /// Everything the renderer needs for one frame
    pub fn snapshot(&self) -> GameSnapshot {
        let session = &self.session;
        GameSnapshot {
            phase: self.phase,
            score: session.score,
            session_badge_estimate: session_badge_estimate(session.score),
            speed: session.speed,
            player_x: self.tuning.player_x,
            player_y: session.player.y,
            is_jumping: session.player.is_jumping,
            background_offset: session.background_offset,
            obstacles: session
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    x: o.x,
                    kind: o.kind,
                    icon: o.kind.icon(),
                    color: o.kind.color(),
                })
                .collect(),
        }
    }
}
