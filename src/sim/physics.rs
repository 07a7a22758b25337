//! Vertical physics for the player body

use super::state::PlayerBody;
use crate::settings::GameTuning;

/// Integrate one tick of gravity, then clamp to the ground
pub fn integrate(body: &mut PlayerBody, tuning: &GameTuning) {
    body.vel_y += tuning.gravity;
    body.y += body.vel_y;

    // Landed (or never left)
    if body.y >= 0.0 {
        body.y = 0.0;
        body.vel_y = 0.0;
        body.is_jumping = false;
    }
}

/// Apply the jump impulse if the body is on or near the ground.
///
/// Returns false (and changes nothing) while airborne: no double jump.
pub fn try_jump(body: &mut PlayerBody, tuning: &GameTuning) -> bool {
    if !body.is_grounded(tuning.jump_tolerance) {
        return false;
    }
    body.vel_y = tuning.jump_impulse;
    body.is_jumping = true;
    true
}
