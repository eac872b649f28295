use game_core::*;
use glam::IVec2;
use hecs::World;

fn idle() -> TickInput {
    TickInput::new()
}

#[test]
fn test_step_order_input_then_ball() {
    let mut world = World::new();
    let config = Config::new();
    let mut score = Score::new();
    let mut events = Events::new();

    create_paddle(&mut world, Side::Left, config.paddle_spawn(Side::Left));
    create_ball(&mut world, Rect::new(100, 100, 15, 15), IVec2::new(-5, 5));

    let input = TickInput {
        left: PaddleInput { up: true, down: false },
        ..TickInput::default()
    };
    step(&mut world, &config, &input, &mut score, &mut events);

    for (_e, paddle) in world.query::<&Paddle>().iter() {
        assert_eq!(paddle.rect.top(), 240);
    }
    for (_e, ball) in world.query::<&Ball>().iter() {
        assert_eq!(ball.rect.pos, IVec2::new(95, 105));
    }
}

#[test]
fn test_ball_advances_into_paddle_then_reflects() {
    let mut world = World::new();
    let config = Config::new();
    let mut score = Score::new();
    let mut events = Events::new();

    create_paddle(&mut world, Side::Right, config.paddle_spawn(Side::Right));
    // One tick away from touching the right paddle at x=760
    create_ball(&mut world, Rect::new(740, 290, 15, 15), IVec2::new(5, 5));

    step(&mut world, &config, &idle(), &mut score, &mut events);

    assert!(events.ball_hit_paddle);
    for (_e, ball) in world.query::<&Ball>().iter() {
        assert_eq!(ball.vel, IVec2::new(-5, 5));
        assert_eq!(ball.rect.right(), 760);
    }
    assert_eq!(score, Score::new());
}

#[test]
fn test_score_then_serve_toward_other_side() {
    let mut world = World::new();
    let config = Config::new();
    let mut score = Score::new();
    let mut events = Events::new();

    create_ball(&mut world, Rect::new(783, 100, 15, 15), IVec2::new(5, 5));

    step(&mut world, &config, &idle(), &mut score, &mut events);

    assert_eq!(score.left, 1);
    assert_eq!(score.right, 0);
    assert!(events.left_scored && !events.right_scored);
    for (_e, ball) in world.query::<&Ball>().iter() {
        assert_eq!(ball.rect.pos, IVec2::new(393, 293));
        assert_eq!(ball.vel, IVec2::new(-5, 5));
    }

    // Events are cleared at the start of the next tick
    step(&mut world, &config, &idle(), &mut score, &mut events);
    assert!(!events.left_scored);
    assert_eq!(score.left, 1);
}

#[test]
fn test_long_run_keeps_invariants() {
    let mut game = Game::default();
    let height = game.config().screen_height;
    let mut previous = game.score();
    let mut total_points = 0;

    // Alternate inputs so the paddles sweep the full height
    for tick in 0..20_000u32 {
        let phase = (tick / 90) % 4;
        let input = TickInput {
            left: PaddleInput {
                up: phase == 0,
                down: phase == 2,
            },
            right: PaddleInput {
                up: phase == 1,
                down: phase == 3,
            },
        };
        game.tick(&input);

        let snapshot = game.snapshot();
        for paddle in [snapshot.left_paddle, snapshot.right_paddle] {
            assert!(paddle.top() >= 0 && paddle.bottom() <= height);
            assert_eq!(paddle.size, IVec2::new(10, 100));
        }

        let ball = game.ball();
        assert_eq!(ball.vel.abs(), IVec2::new(5, 5), "Speed never changes");
        assert_eq!(ball.rect.size, IVec2::new(15, 15));
        assert!(ball.rect.top() >= -5 && ball.rect.bottom() <= height + 5);

        let score = snapshot.score;
        assert!(score.left >= previous.left && score.right >= previous.right);
        let gained = (score.left - previous.left) + (score.right - previous.right);
        assert!(gained <= 1, "At most one point per tick");
        total_points += gained;
        previous = score;
    }

    assert_eq!(total_points, previous.left + previous.right);
}

#[test]
fn test_idle_paddles_eventually_concede() {
    let mut game = Game::default();

    // Nobody moves: the ball must reach a side wall at some point
    let mut ticks = 0;
    while game.score() == Score::new() {
        game.tick(&idle());
        ticks += 1;
        assert!(ticks < 10_000, "Ball never scored");
    }

    let snapshot = game.snapshot();
    assert_eq!(snapshot.score.left + snapshot.score.right, 1);
    assert_eq!(snapshot.ball, game.config().ball_spawn());
}
