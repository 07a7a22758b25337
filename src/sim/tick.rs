//! Fixed timestep simulation tick
//!
//! Advances one run deterministically: physics, scrolling, spawning,
//! collision, speed ramp. Phase handling lives in `game`.

use rand::Rng;

use super::state::RunSession;
use super::{collision, physics, scroller, spawner};
use crate::settings::GameTuning;

/// What happened during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Obstacles passed (and scored) this tick
    pub passed: u32,
    /// ID of a newly spawned obstacle
    pub spawned: Option<u32>,
    /// ID of the obstacle the player ran into
    pub collided_with: Option<u32>,
}

/// Advance the run by one fixed step
pub fn tick<R: Rng>(session: &mut RunSession, tuning: &GameTuning, rng: &mut R) -> TickOutcome {
    session.time_ticks += 1;

    physics::integrate(&mut session.player, tuning);
    let passed = scroller::scroll(session, tuning);
    let spawned = spawner::spawn_if_needed(session, tuning, rng).map(|o| o.id);
    let collided_with =
        collision::first_collision(&session.player, &session.obstacles, tuning).map(|o| o.id);
    scroller::ramp_speed(session, tuning);

    TickOutcome {
        passed,
        spawned,
        collided_with,
    }
}
