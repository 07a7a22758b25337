//! Budget Jump headless runner
//!
//! Plays a few rounds with a simple autopilot and reports every score to the
//! ledger. Usage: `budget-jump [seed] [tuning.json] [ledger.json]`

use budget_jump::reporter::BackgroundReporter;
use budget_jump::sim::GamePhase;
use budget_jump::{
    Game, GameEvent, GameInput, GameSnapshot, GameTuning, GameView, JsonLedger, MemoryLedger,
};

/// Rounds to play before exiting
const ROUNDS: u32 = 5;
/// Give up on a round after this many frames
const MAX_FRAMES_PER_ROUND: u32 = 20_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Budget Jump (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let tuning = match args.next() {
        Some(path) => GameTuning::load(path)?,
        None => GameTuning::default(),
    };
    let reporter = match args.next() {
        Some(path) => BackgroundReporter::spawn(JsonLedger::open(path)?),
        None => BackgroundReporter::spawn(MemoryLedger::new()),
    };

    let frame = tuning.tick_period_secs;
    let mut view = GameView::open(Game::new(tuning, seed, reporter)?);
    view.input(GameInput::Start);

    let mut round = 1;
    let mut frames = 0;
    while round <= ROUNDS {
        if autopilot_should_jump(&view.snapshot()) {
            view.input(GameInput::Jump);
        }
        view.advance(frame);
        frames += 1;

        for event in view.drain_events() {
            if let GameEvent::GameOver(summary) = event {
                println!(
                    "Round {}: score {}, badges earned {}",
                    round, summary.final_score, summary.session_badge_estimate
                );
            }
        }

        let phase = view.snapshot().phase;
        if phase != GamePhase::GameOver && frames < MAX_FRAMES_PER_ROUND {
            continue;
        }
        if phase != GamePhase::GameOver {
            println!("Round {}: still running after {} frames, stopping", round, frames);
            view.input(GameInput::Stop);
        }
        round += 1;
        frames = 0;
        if round <= ROUNDS {
            view.input(GameInput::PlayAgain);
            view.input(GameInput::Start);
        }
    }

    // Stops the tick source, then flushes queued reports
    let mut game = view.close();
    game.reporter_mut().shutdown();
    log::info!("Done");
    Ok(())
}

/// Jump once the nearest obstacle ahead is about to reach the player
fn autopilot_should_jump(snapshot: &GameSnapshot) -> bool {
    if snapshot.phase != GamePhase::Playing || snapshot.is_jumping {
        return false;
    }
    snapshot
        .obstacles
        .iter()
        .map(|o| o.x - snapshot.player_x)
        .find(|&gap| gap > 0.0)
        .is_some_and(|gap| gap <= 40.0)
}
