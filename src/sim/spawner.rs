//! Procedural obstacle generation
//!
//! The random source is injected so runs can be replayed from a seed.

use rand::Rng;

use super::state::{Obstacle, ObstacleKind, RunSession};
use crate::settings::GameTuning;

/// True when the field is empty or the newest obstacle has scrolled far enough in
pub fn should_spawn(session: &RunSession, tuning: &GameTuning) -> bool {
    match session.last_obstacle() {
        None => true,
        Some(last) => last.x < tuning.field_width - tuning.min_spawn_distance,
    }
}

/// Spawn one obstacle with a random kind and random spacing behind the newest one
pub fn spawn<R: Rng>(session: &mut RunSession, tuning: &GameTuning, rng: &mut R) -> Obstacle {
    let kind = ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())];
    let spacing = rng.random_range(tuning.min_obstacle_distance..=tuning.max_obstacle_distance);

    let spawn_edge = tuning.spawn_edge();
    let x = match session.last_obstacle() {
        Some(last) => (last.x + spacing).max(spawn_edge),
        None => spawn_edge,
    };

    let obstacle = Obstacle {
        id: session.next_obstacle_id(),
        x,
        kind,
    };
    session.obstacles.push(obstacle);
    log::debug!("Spawned {:?} #{} at x={:.1}", kind, obstacle.id, x);
    obstacle
}

/// Spawn if needed. Returns the new obstacle, if any.
pub fn spawn_if_needed<R: Rng>(
    session: &mut RunSession,
    tuning: &GameTuning,
    rng: &mut R,
) -> Option<Obstacle> {
    should_spawn(session, tuning).then(|| spawn(session, tuning, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_first_spawn_at_spawn_edge() {
        let tuning = GameTuning::default();
        let mut session = RunSession::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        let obstacle = spawn_if_needed(&mut session, &tuning, &mut rng).unwrap();
        assert_eq!(obstacle.x, tuning.spawn_edge());
        assert_eq!(session.obstacles.len(), 1);
    }

    #[test]
    fn test_no_spawn_while_last_is_near_edge() {
        let tuning = GameTuning::default();
        let mut session = RunSession::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        spawn(&mut session, &tuning, &mut rng);
        assert!(spawn_if_needed(&mut session, &tuning, &mut rng).is_none());

        session.obstacles[0].x = tuning.field_width - tuning.min_spawn_distance - 1.0;
        assert!(spawn_if_needed(&mut session, &tuning, &mut rng).is_some());
    }

    #[test]
    fn test_spacing_respects_bounds_beyond_edge() {
        let tuning = GameTuning::default();
        let mut session = RunSession::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(7);
        spawn(&mut session, &tuning, &mut rng);
        // Both far past the edge: spacing alone decides
        for _ in 0..20 {
            let prev = session.last_obstacle().unwrap().x;
            let next = spawn(&mut session, &tuning, &mut rng).x;
            let gap = next - prev;
            assert!(gap >= tuning.min_obstacle_distance);
            assert!(gap <= tuning.max_obstacle_distance + 1e-3);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let tuning = GameTuning::default();
        let run = |seed| {
            let mut session = RunSession::new(&tuning);
            let mut rng = Pcg32::seed_from_u64(seed);
            (0..10)
                .map(|_| {
                    let o = spawn(&mut session, &tuning, &mut rng);
                    (o.kind, o.x)
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }
}
