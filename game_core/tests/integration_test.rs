use game_core::*;
use glam::IVec2;
use hecs::World;
use rstest::rstest;

fn start_input() -> InputSnapshot {
    InputSnapshot {
        start: true,
        ..InputSnapshot::new()
    }
}

fn restart_input() -> InputSnapshot {
    InputSnapshot {
        restart: true,
        ..InputSnapshot::new()
    }
}

/// Step an already started game until the round ends
fn play_until_game_over(game: &mut Game, max_frames: usize) -> Option<(Player, usize)> {
    let idle = InputSnapshot::new();
    for frame in 1..=max_frames {
        if let FsmState::GameOver(winner) = game.update(&idle, 1) {
            return Some((winner, frame));
        }
    }
    None
}

#[test]
fn test_step_moves_paddles_and_ball() {
    let mut world = World::new();
    let mut time = Time::new(1);
    let config = Config::new();
    let mut events = Events::new();

    create_paddle(&mut world, Player::One, 260);
    create_paddle(&mut world, Player::Two, 260);
    let ball = create_ball(&mut world, IVec2::new(400, 300), IVec2::new(5, 2));

    let input = InputSnapshot {
        p1_down: true,
        p2_up: true,
        ..InputSnapshot::new()
    };
    step(&mut world, &mut time, &config, &input, &mut events);

    let ball = *world.get::<&Ball>(ball).unwrap();
    assert_eq!(ball.pos, IVec2::new(405, 302));
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.player {
            Player::One => assert_eq!(paddle.y, 270),
            Player::Two => assert_eq!(paddle.y, 250),
        }
    }
    assert_eq!(time.ticks, 1);
    assert_eq!(events, Events::new());
}

#[test]
fn test_bounce_uses_position_before_move() {
    let mut world = World::new();
    let mut time = Time::new(1);
    let config = Config::new();
    let mut events = Events::new();

    // Ball at y = 6 heading up: not yet inside the half-radius margin
    let ball = create_ball(&mut world, IVec2::new(400, 6), IVec2::new(5, -4));
    step(&mut world, &mut time, &config, &InputSnapshot::new(), &mut events);
    let after_first = *world.get::<&Ball>(ball).unwrap();
    assert_eq!(after_first.pos.y, 2, "Moved past the margin this frame");
    assert_eq!(after_first.vel.y, -4, "Flip is decided from the old position");
    assert!(!events.ball_hit_wall);

    step(&mut world, &mut time, &config, &InputSnapshot::new(), &mut events);
    let after_second = *world.get::<&Ball>(ball).unwrap();
    assert_eq!(after_second.vel.y, 4);
    assert_eq!(after_second.pos.y, 6);
    assert!(events.ball_hit_wall);
}

#[test]
fn test_ball_at_left_edge_region_bounces_off_player_one() {
    let mut world = World::new();
    let mut time = Time::new(1);
    let config = Config::new();
    let mut events = Events::new();

    create_paddle(&mut world, Player::One, 260);
    let ball = create_ball(&mut world, IVec2::new(5, 300), IVec2::new(-5, 2));

    step(&mut world, &mut time, &config, &InputSnapshot::new(), &mut events);

    let ball = *world.get::<&Ball>(ball).unwrap();
    assert_eq!(ball.vel.x, 5);
    assert_eq!(ball.pos, IVec2::new(10, 302));
    assert!(events.ball_hit_paddle);
    assert_eq!(events.missed, None);
}

#[test]
fn test_paddle_moved_this_frame_is_used_for_bounce() {
    let mut world = World::new();
    let mut time = Time::new(1);
    let config = Config::new();
    let mut events = Events::new();

    // Paddle spans 200..280 before moving and 210..290 after
    create_paddle(&mut world, Player::One, 200);
    let ball = create_ball(&mut world, IVec2::new(10, 285), IVec2::new(-5, 0));
    let input = InputSnapshot {
        p1_down: true,
        ..InputSnapshot::new()
    };

    step(&mut world, &mut time, &config, &input, &mut events);

    assert_eq!(world.get::<&Ball>(ball).unwrap().vel.x, 5);
}

#[rstest]
#[case(5, Player::One)]
#[case(-5, Player::Two)]
fn test_unreturned_ball_ends_round_with_winner(#[case] vx: i32, #[case] winner: Player) {
    let mut game = Game::new(Config::new(), GameRng::new(99));
    game.update(&start_input(), 1);
    game.set_ball(Ball::new(IVec2::new(400, 300), IVec2::new(vx, 2)));

    let (got, frames) = play_until_game_over(&mut game, 1_000).expect("ball never left");

    assert_eq!(got, winner);
    assert_eq!(winner.number(), if vx < 0 { 2 } else { 1 });
    // 400 px at 5 px/frame; exits one frame after crossing the edge
    assert_eq!(frames, 81);
    let ball = game.ball().unwrap();
    assert!(ball.pos.x < 0 || ball.pos.x > 800);
}

#[test]
fn test_restart_resets_positions_and_serves_again() {
    let mut game = Game::new(Config::new(), GameRng::new(2024));
    game.update(&start_input(), 1);

    let input = InputSnapshot {
        p1_down: true,
        p2_up: true,
        ..InputSnapshot::new()
    };
    game.set_ball(Ball::new(IVec2::new(3, 30), IVec2::new(-6, 3)));
    game.update(&input, 1);
    assert_eq!(game.state(), FsmState::GameOver(Player::Two));
    assert_ne!(game.paddle_y(Player::One), Some(260));

    assert_eq!(game.update(&restart_input(), 1), FsmState::Playing);

    let config = Config::new();
    let ball = game.ball().unwrap();
    assert_eq!(ball.pos, IVec2::new(400, 300));
    assert!(config.ball_speed_x.contains(&ball.vel.x.abs()));
    assert!(config.ball_speed_y.contains(&ball.vel.y.abs()));
    assert_eq!(ball.vel.x % 2 == 0, ball.vel.x < 0);
    assert_eq!(ball.vel.y % 2 == 0, ball.vel.y < 0);
    assert_eq!(game.paddle_y(Player::One), Some(260));
    assert_eq!(game.paddle_y(Player::Two), Some(260));
}

#[test]
fn test_restart_draws_fresh_velocity() {
    let mut game = Game::new(Config::new(), GameRng::new(5));
    game.update(&start_input(), 1);

    let mut serves = Vec::new();
    for _ in 0..20 {
        game.set_ball(Ball::new(IVec2::new(-1, 100), IVec2::new(-5, 0)));
        game.update(&InputSnapshot::new(), 1);
        game.update(&restart_input(), 1);
        serves.push(game.ball().unwrap().vel);
    }

    serves.sort_by_key(|v| (v.x, v.y));
    serves.dedup();
    assert!(serves.len() > 1, "Every restart should draw a new serve");
}

#[test]
fn test_full_session_flow() {
    let mut game = Game::new(Config::new(), GameRng::new(3));
    let quit = InputSnapshot {
        quit: true,
        ..InputSnapshot::new()
    };

    // Quit is ignored outside the game-over screen
    assert_eq!(game.update(&quit, 1), FsmState::Start);
    assert_eq!(game.update(&start_input(), 1), FsmState::Playing);
    assert_eq!(game.update(&quit, 1), FsmState::Playing);

    game.set_ball(Ball::new(IVec2::new(798, 450), IVec2::new(5, 1)));
    assert_eq!(
        game.update(&InputSnapshot::new(), 1),
        FsmState::GameOver(Player::One)
    );
    assert_eq!(game.update(&quit, 1), FsmState::Terminated);
    assert_eq!(game.update(&start_input(), 1), FsmState::Terminated);
}

#[test]
fn test_small_window_config() {
    let config = Config::with_window(200, 120);
    let mut game = Game::new(config.clone(), GameRng::new(8));
    assert_eq!(game.ball().unwrap().pos, IVec2::new(100, 60));
    assert_eq!(game.paddle_y(Player::Two), Some(20));

    game.update(&start_input(), 1);
    let down = InputSnapshot {
        p2_down: true,
        ..InputSnapshot::new()
    };
    game.set_ball(Ball::new(IVec2::new(100, 60), IVec2::new(0, 0)));
    for _ in 0..10 {
        game.update(&down, 3);
    }
    assert_eq!(game.paddle_y(Player::Two), Some(config.paddle_max_y()));
}
