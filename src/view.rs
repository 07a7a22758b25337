//! Game view: binds the tick source to the view's lifetime
//!
//! The view owns the game and a fixed-step accumulator. Frame time goes in,
//! whole ticks come out; leftover time carries to the next frame. The tick
//! source keeps running in every phase and the game ignores ticks unless
//! Playing, so resume needs no re-initialization. Closing the view consumes
//! it, so nothing can tick afterwards.

use crate::consts::MAX_SUBSTEPS;
use crate::game::{Game, GameEvent, GameInput, GameSnapshot};
use crate::reporter::ScoreReporter;

/// A presented game with its own tick source
pub struct GameView<R: ScoreReporter> {
    game: Game<R>,
    accumulator: f32,
    /// Ticks delivered since the view opened (including ignored ones)
    ticks_delivered: u64,
}

impl<R: ScoreReporter> GameView<R> {
    pub fn open(game: Game<R>) -> Self {
        log::info!("Game view opened");
        Self {
            game,
            accumulator: 0.0,
            ticks_delivered: 0,
        }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn ticks_delivered(&self) -> u64 {
        self.ticks_delivered
    }

    /// Forward an input event, applied before the next tick
    pub fn input(&mut self, input: GameInput) {
        self.game.handle_input(input);
    }

    /// Feed elapsed wall time and run the ticks it covers.
    /// Returns the number of ticks delivered.
    pub fn advance(&mut self, elapsed_secs: f32) -> u32 {
        let period = self.game.tuning().tick_period_secs;
        // Bad clock readings count as no time; long stalls are clamped
        let elapsed = if elapsed_secs.is_finite() { elapsed_secs } else { 0.0 };
        self.accumulator += elapsed.clamp(0.0, period * (MAX_SUBSTEPS + 1) as f32);

        let mut substeps = 0;
        while self.accumulator >= period && substeps < MAX_SUBSTEPS {
            self.game.tick();
            self.accumulator -= period;
            substeps += 1;
        }
        self.ticks_delivered += substeps as u64;
        substeps
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.game.drain_events()
    }

    /// Dismiss the view, stopping its tick source, and hand back the game
    pub fn close(self) -> Game<R> {
        log::info!("Game view closed after {} ticks", self.ticks_delivered);
        self.game
    }
}
