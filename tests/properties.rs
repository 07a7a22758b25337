//! Property tests for the simulation invariants

use budget_jump::sim::{self, GamePhase, PlayerBody, RunSession, physics, spawner};
use budget_jump::{Game, GameInput, GameTuning, ScoreReport, ScoreReporter};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

#[derive(Default)]
struct Recorder(Vec<ScoreReport>);

impl ScoreReporter for Recorder {
    fn report(&mut self, report: ScoreReport) {
        self.0.push(report);
    }
}

fn any_input() -> impl Strategy<Value = GameInput> {
    prop_oneof![
        Just(GameInput::Start),
        Just(GameInput::Jump),
        Just(GameInput::Pause),
        Just(GameInput::Resume),
        Just(GameInput::Stop),
        Just(GameInput::PlayAgain),
    ]
}

proptest! {
    #[test]
    fn player_never_below_ground(jumps in prop::collection::vec(any::<bool>(), 1..400)) {
        let tuning = GameTuning::default();
        let mut body = PlayerBody::default();
        for jump in jumps {
            if jump {
                physics::try_jump(&mut body, &tuning);
            }
            physics::integrate(&mut body, &tuning);
            prop_assert!(body.y <= 0.0);
            if body.y == 0.0 {
                prop_assert!(!body.is_jumping);
                prop_assert_eq!(body.vel_y, 0.0);
            }
        }
    }

    #[test]
    fn airborne_jump_is_ignored(y in -300.0f32..-5.01, vel_y in -12.0f32..12.0) {
        let tuning = GameTuning::default();
        let mut body = PlayerBody { y, vel_y, is_jumping: true };
        prop_assert!(!physics::try_jump(&mut body, &tuning));
        prop_assert_eq!(body.vel_y, vel_y);
    }

    #[test]
    fn run_invariants_hold(seed in any::<u64>(), jumps in prop::collection::vec(any::<bool>(), 2000)) {
        let tuning = GameTuning::default();
        let mut session = RunSession::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(seed);
        spawner::spawn(&mut session, &tuning, &mut rng);

        // Raw simulation keeps going through collisions
        for jump in jumps {
            if jump {
                physics::try_jump(&mut session.player, &tuning);
            }
            let score = session.score;
            let speed = session.speed;
            let outcome = sim::tick(&mut session, &tuning, &mut rng);

            prop_assert!(session.speed > speed);
            prop_assert_eq!(session.score, score + outcome.passed);

            if outcome.spawned.is_some() && session.obstacles.len() >= 2 {
                let n = session.obstacles.len();
                let gap = session.obstacles[n - 1].x - session.obstacles[n - 2].x;
                prop_assert!(gap >= tuning.min_obstacle_distance);
            }
            prop_assert!(session.obstacles.windows(2).all(|w| w[0].x < w[1].x));
            prop_assert!(session.obstacles.iter().all(|o| o.x >= tuning.despawn_x()));
        }
    }

    #[test]
    fn inputs_follow_state_machine(seed in any::<u64>(), steps in prop::collection::vec((any_input(), 0u8..20), 1..60)) {
        let mut game = Game::new(GameTuning::default(), seed, Recorder::default()).unwrap();
        let mut game_overs = 0;

        for (input, ticks) in steps {
            let before = game.phase();
            let score_before = game.session().score;
            game.handle_input(input);
            let after = game.phase();

            match (input, before) {
                (GameInput::Pause, GamePhase::Paused) | (GameInput::Resume, GamePhase::Playing) => {
                    prop_assert_eq!(after, before);
                }
                (GameInput::Stop, GamePhase::Playing | GamePhase::Paused) => {
                    prop_assert_eq!(after, GamePhase::Ready);
                    prop_assert_eq!(game.session().score, 0);
                }
                (GameInput::Jump, GamePhase::Ready) | (GameInput::Jump, GamePhase::Paused) => {
                    prop_assert_eq!(after, GamePhase::Playing);
                }
                (GameInput::PlayAgain, GamePhase::GameOver) => {
                    prop_assert_eq!(after, GamePhase::Playing);
                    prop_assert_eq!(game.session().score, 0);
                }
                (_, GamePhase::GameOver) => prop_assert_eq!(after, GamePhase::GameOver),
                _ => {}
            }
            if after == before && after != GamePhase::Ready {
                prop_assert!(game.session().score >= score_before);
            }

            for _ in 0..ticks {
                let playing = game.phase() == GamePhase::Playing;
                prop_assert_eq!(game.tick().is_some(), playing);
                if playing && game.phase() == GamePhase::GameOver {
                    game_overs += 1;
                }
            }
        }

        // Exactly one report per game over, none for stops
        prop_assert_eq!(game.reporter().0.len(), game_overs);
    }
}
