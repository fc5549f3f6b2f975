//! End-to-end scenarios and invariants for the simulation step

use brick_breaker::GameConfig;
use brick_breaker::consts::SIM_DT;
use brick_breaker::sim::{GamePhase, GameState, TickInput, tick};
use glam::DVec2;
use proptest::prelude::*;

fn new_game() -> GameState {
    GameState::new(GameConfig::default()).unwrap()
}

fn reset_input() -> TickInput {
    TickInput {
        reset: true,
        ..Default::default()
    }
}

#[test]
fn scenario_a_first_step_misses_bricks() {
    let state = new_game();
    let next = tick(&state, &TickInput::paddle(250.0), SIM_DT);

    assert_eq!(next.ball().pos, DVec2::new(201.0, 147.0));
    assert_eq!(next.score(), 0);
    assert_eq!(next.bricks().alive_count(), 36);
}

#[test]
fn scenario_b_ball_on_alive_brick() {
    // Center of brick (3, 4): rect x 305..380, y 49..64
    let state = new_game().with_ball(DVec2::new(342.5, 56.5), DVec2::new(1.0, -3.0));
    let next = tick(&state, &TickInput::paddle(250.0), SIM_DT);

    assert!(!next.bricks().is_alive(3, 4));
    assert_eq!(next.score(), 1);
    assert_eq!(next.ball().vel, DVec2::new(1.0, 3.0));
}

#[test]
fn scenario_c_paddle_under_ball() {
    let state = new_game()
        .with_ball(DVec2::new(300.0, 289.0), DVec2::new(1.0, 5.0))
        .with_paddle_x(260.0);
    assert!(state.paddle().spans(state.ball().pos.x));
    let next = tick(&state, &TickInput::paddle(260.0), SIM_DT);

    assert_eq!(next.ball().vel.y, -5.0);
    assert_eq!(next.phase(), GamePhase::Running);
}

#[test]
fn scenario_d_paddle_away_from_ball() {
    let state = new_game()
        .with_ball(DVec2::new(300.0, 289.0), DVec2::new(1.0, 5.0))
        .with_paddle_x(0.0);
    assert!(!state.paddle().spans(state.ball().pos.x));
    let next = tick(&state, &TickInput::paddle(0.0), SIM_DT);

    assert_eq!(next.ball().vel.y, 5.0);
    // 294 is still inside the arena
    assert_eq!(next.phase(), GamePhase::Running);

    // 299 still fits; the tick after that projects to 304 and ends the game
    let almost = tick(&next, &TickInput::paddle(0.0), SIM_DT);
    assert_eq!(almost.phase(), GamePhase::Running);
    let last = tick(&almost, &TickInput::paddle(0.0), SIM_DT);
    assert_eq!(last.phase(), GamePhase::GameOver);

    // Nothing moves after the game ends
    let after = tick(&last, &TickInput::paddle(200.0), SIM_DT);
    assert_eq!(after, last);
}

#[test]
fn reset_is_idempotent() {
    let played = (0..50).fold(new_game(), |s, _| tick(&s, &TickInput::paddle(120.0), SIM_DT));
    let once = tick(&played, &reset_input(), SIM_DT);
    let twice = tick(&once, &reset_input(), SIM_DT);

    assert_eq!(once, twice);
    assert_eq!(once, new_game());
}

#[test]
fn retained_snapshots_are_independent() {
    let state = new_game().with_ball(DVec2::new(40.0, 8.0), DVec2::new(1.0, 3.0));
    let next = tick(&state, &TickInput::paddle(250.0), SIM_DT);

    assert!(state.bricks().is_alive(0, 0));
    assert!(!next.bricks().is_alive(0, 0));
}

#[test]
fn smaller_arena_layout() {
    let config = GameConfig {
        arena_width: 200.0,
        arena_height: 120.0,
        rows: 2,
        cols: 3,
        brick_width: 60.0,
        brick_height: 10.0,
        paddle_width: 40.0,
        ball_start: [100.0, 60.0],
        ..Default::default()
    };
    let state = GameState::new(config).unwrap();
    assert_eq!(state.bricks().alive_count(), 6);
    assert_eq!(state.paddle().x, 100.0);

    // Brick (1, 2) covers cell x [122, 183), y [11, 22)
    let state = state.with_ball(DVec2::new(150.0, 15.0), DVec2::new(-1.0, -2.0));
    let next = tick(&state, &TickInput::paddle(0.0), SIM_DT);
    assert!(!next.bricks().is_alive(1, 2));
    assert_eq!(next.ball().pos, DVec2::new(149.0, 17.0));
}

fn arb_input() -> impl Strategy<Value = TickInput> {
    (-200.0f64..700.0, prop::bool::weighted(0.05), prop::bool::weighted(0.01)).prop_map(
        |(target_paddle_x, toggle_pause, reset)| TickInput {
            target_paddle_x,
            toggle_pause,
            reset,
        },
    )
}

fn arb_ball() -> impl Strategy<Value = (DVec2, DVec2)> {
    (0.0f64..500.0, 0.0f64..300.0, -4i32..=4, -6i32..=6).prop_map(|(x, y, dx, dy)| {
        (DVec2::new(x, y), DVec2::new(dx as f64, dy as f64))
    })
}

proptest! {
    #[test]
    fn frozen_phases_change_nothing(
        (pos, vel) in arb_ball(),
        target in -200.0f64..700.0,
        game_over in any::<bool>(),
    ) {
        let phase = if game_over { GamePhase::GameOver } else { GamePhase::Paused };
        let state = new_game().with_ball(pos, vel).with_phase(phase);
        let next = tick(&state, &TickInput::paddle(target), SIM_DT);
        prop_assert_eq!(next, state);
    }

    #[test]
    fn bricks_never_revive_and_score_tracks_kills(
        inputs in prop::collection::vec(arb_input(), 1..300),
    ) {
        let mut state = new_game();
        for input in &inputs {
            let next = tick(&state, input, SIM_DT);
            if input.reset {
                prop_assert_eq!(&next, &new_game());
            } else {
                let before = state.bricks().alive_count();
                let after = next.bricks().alive_count();
                prop_assert!(after <= before);
                prop_assert!(before - after <= 1);
                prop_assert_eq!(next.score() - state.score(), (before - after) as u64);
                for row in 0..6 {
                    for col in 0..6 {
                        if !state.bricks().is_alive(row, col) {
                            prop_assert!(!next.bricks().is_alive(row, col));
                        }
                    }
                }
            }
            state = next;
        }
    }

    #[test]
    fn paddle_always_inside_arena(inputs in prop::collection::vec(arb_input(), 1..100)) {
        let mut state = new_game();
        for input in &inputs {
            state = tick(&state, input, SIM_DT);
            let x = state.paddle().x;
            prop_assert!((0.0..=425.0).contains(&x));
        }
    }

    #[test]
    fn horizontal_flip_iff_leaving_arena((pos, vel) in arb_ball(), target in 0.0f64..425.0) {
        let state = new_game().with_ball(pos, vel);
        let next = tick(&state, &TickInput::paddle(target), SIM_DT);
        let leaves = pos.x + vel.x > 500.0 || pos.x + vel.x < 0.0;
        prop_assert_eq!(next.ball().vel.x, if leaves { -vel.x } else { vel.x });
    }

    #[test]
    fn game_over_iff_projected_past_bottom((pos, vel) in arb_ball(), target in 0.0f64..425.0) {
        // Below the brick field so only walls and paddle matter
        prop_assume!(pos.y >= 96.0);
        let state = new_game().with_ball(pos, vel);
        let next = tick(&state, &TickInput::paddle(target), SIM_DT);

        let next_y = pos.y + vel.y;
        let paddle_x = target;
        let caught = next_y > 290.0 && pos.x > paddle_x && pos.x < paddle_x + 75.0;
        let expected = next_y > 300.0;
        prop_assert_eq!(next.phase() == GamePhase::GameOver, expected);
        let flips = next_y < 0.0 || caught;
        prop_assert_eq!(next.ball().vel.y, if flips { -vel.y } else { vel.y });
    }
}
