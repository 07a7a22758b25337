//! Budget Jump - a side-scrolling runner embedded in a finance tracker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, scrolling, collisions)
//! - `game`: Ready/Playing/Paused/GameOver state machine around the simulation
//! - `reporter`: Fire-and-forget score reporting to the ledger
//! - `ledger`: High score, lifetime badges and the game achievement
//! - `view`: Tick source bound to the lifetime of a game view
//! - `settings`: Data-driven game tuning

pub mod error;
pub mod game;
pub mod ledger;
pub mod reporter;
pub mod settings;
pub mod sim;
pub mod view;

pub use error::{ConfigError, LedgerError};
pub use game::{Game, GameEvent, GameInput, GameOverSummary, GameSnapshot};
pub use ledger::{GameScore, JsonLedger, MemoryLedger, ScoreLedger};
pub use reporter::{BackgroundReporter, LedgerReporter, ScoreReport, ScoreReporter};
pub use settings::GameTuning;
pub use view::GameView;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (~60 Hz)
    pub const SIM_DT: f32 = 0.016;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Lifetime badges needed for the "Financial Focus" achievement
    pub const SPECIAL_TITLE_THRESHOLD: u32 = 10;
    /// Points per displayed in-session badge
    pub const POINTS_PER_SESSION_BADGE: u32 = 10;
}
