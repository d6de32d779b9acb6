use crate::{Ball, Config, Events, Paddle, Player};
use hecs::World;

/// Flip ball velocity on wall and paddle contact.
///
/// Runs before the ball moves, so every check sees the ball's position from
/// the previous frame. Walls bounce at half a radius from the edge. A paddle
/// only bounces the ball while its y is strictly inside the paddle span.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let mut left_y = None;
    let mut right_y = None;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.player {
            Player::One => left_y = Some(paddle.y),
            Player::Two => right_y = Some(paddle.y),
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls
        let margin = config.wall_margin();
        if ball.pos.y < margin {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
        if ball.pos.y > config.window_height - margin {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        // Paddles
        if let Some(paddle_y) = right_y {
            if ball.pos.x > config.window_width - config.paddle_width
                && within_span(ball.pos.y, paddle_y, config)
            {
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
            }
        }
        if let Some(paddle_y) = left_y {
            if ball.pos.x < config.paddle_width && within_span(ball.pos.y, paddle_y, config) {
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Open interval: touching the exact top or bottom edge is a miss
fn within_span(ball_y: i32, paddle_y: i32, config: &Config) -> bool {
    paddle_y < ball_y && ball_y < paddle_y + config.paddle_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::IVec2;
    use rstest::rstest;

    fn setup_world() -> (hecs::World, Config, Events) {
        let world = hecs::World::new();
        let config = Config::new();
        let events = Events::new();
        (world, config, events)
    }

    fn ball(world: &World) -> Ball {
        world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap()
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    fn test_ball_bounces_off_top_wall(#[case] y: i32) {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, IVec2::new(400, y), IVec2::new(5, -2));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel, IVec2::new(5, 2), "Only Y velocity should flip");
        assert_eq!(ball.pos, IVec2::new(400, y), "Position is untouched");
        assert!(events.ball_hit_wall);
    }

    #[rstest]
    #[case(596)]
    #[case(600)]
    #[case(605)]
    fn test_ball_bounces_off_bottom_wall(#[case] y: i32) {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, IVec2::new(400, y), IVec2::new(-5, 3));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel, IVec2::new(-5, -3));
        assert!(events.ball_hit_wall);
    }

    #[rstest]
    #[case(5)]
    #[case(300)]
    #[case(595)]
    fn test_no_wall_bounce_at_half_radius_or_beyond(#[case] y: i32) {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, IVec2::new(400, y), IVec2::new(5, 2));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel, IVec2::new(5, 2));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_wall_flip_happens_once_per_frame() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, IVec2::new(400, 2), IVec2::new(5, -4));

        check_collisions(&mut world, &config, &mut events);
        assert_eq!(ball(&world).vel.y, 4, "One check, one flip");
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Player::One, 260);
        create_ball(&mut world, IVec2::new(5, 300), IVec2::new(-5, 2));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel, IVec2::new(5, 2));
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Player::Two, 260);
        create_ball(&mut world, IVec2::new(785, 261), IVec2::new(6, -1));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel, IVec2::new(-6, -1));
        assert!(events.ball_hit_paddle);
    }

    #[rstest]
    #[case(260)] // exactly on the top edge
    #[case(340)] // exactly on the bottom edge
    #[case(100)]
    fn test_paddle_edges_are_excluded(#[case] ball_y: i32) {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Player::One, 260);
        create_ball(&mut world, IVec2::new(5, ball_y), IVec2::new(-5, 2));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.x, -5);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_left_paddle_ignores_ball_on_right_side() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Player::One, 260);
        create_ball(&mut world, IVec2::new(20, 300), IVec2::new(-5, 0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.x, -5, "x == paddle width is not a hit");
    }

    #[test]
    fn test_flip_ignores_travel_direction() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Player::One, 260);
        create_ball(&mut world, IVec2::new(10, 300), IVec2::new(5, 0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.x, -5);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Player::One, 260);

        check_collisions(&mut world, &config, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
