//! Horizontal world scrolling

use super::state::RunSession;
use crate::settings::GameTuning;

/// Move the background and every obstacle left by the current speed.
///
/// Obstacles that end up fully behind the player are removed and each one
/// scores a point. Returns how many were passed this tick.
pub fn scroll(session: &mut RunSession, tuning: &GameTuning) -> u32 {
    let speed = session.speed;

    session.background_offset -= speed;
    if session.background_offset <= -tuning.background_wrap {
        session.background_offset = 0.0;
    }

    for obstacle in &mut session.obstacles {
        obstacle.x -= speed;
    }

    let despawn_x = tuning.despawn_x();
    let before = session.obstacles.len();
    session.obstacles.retain(|o| o.x >= despawn_x);
    let passed = (before - session.obstacles.len()) as u32;
    session.score += passed;

    passed
}

/// Escalate difficulty: speed grows by a fixed step every tick, uncapped
pub fn ramp_speed(session: &mut RunSession, tuning: &GameTuning) {
    session.speed += tuning.speed_increment;
}
