use crate::{Ball, Config, Events, Score, Side};
use hecs::World;

/// Check if ball reached a side wall (scoring).
///
/// The left wall is checked before the right wall and both checks always run.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    let screen_size = config.screen_size();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.left() <= 0 {
            award_point(Side::Right, ball, screen_size, score, events);
        }
        if ball.rect.right() >= config.screen_width {
            award_point(Side::Left, ball, screen_size, score, events);
        }
    }
}

fn award_point(
    side: Side,
    ball: &mut Ball,
    screen_size: glam::IVec2,
    score: &mut Score,
    events: &mut Events,
) {
    score.increment(side);
    events.scored(side);
    log::info!(
        "{:?} player scores ({} - {})",
        side,
        score.left,
        score.right
    );
    ball.reset(screen_size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Rect};
    use glam::IVec2;

    fn setup_world() -> (World, Config, Score, Events) {
        (World::new(), Config::new(), Score::new(), Events::new())
    }

    fn ball(world: &World) -> Ball {
        world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap()
    }

    #[test]
    fn test_right_player_scores_when_ball_reaches_left_wall() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Rect::new(0, 300, 15, 15), IVec2::new(-5, 5));

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");
    }

    #[test]
    fn test_left_player_scores_when_ball_reaches_right_wall() {
        let (mut world, config, mut score, mut events) = setup_world();
        // right edge == 800
        create_ball(&mut world, Rect::new(785, 300, 15, 15), IVec2::new(5, 5));

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.left_scored, "Should trigger left_scored event");

        let ball = ball(&world);
        assert_eq!(ball.rect.pos, IVec2::new(393, 293), "Ball served from centre");
        assert_eq!(ball.vel, IVec2::new(-5, 5), "Serve heads the other way");
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Rect::new(-3, 12, 15, 15), IVec2::new(-5, -5));

        check_scoring(&mut world, &config, &mut score, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.rect.center(), IVec2::new(400, 300));
        assert_eq!(ball.vel, IVec2::new(5, -5), "Vertical velocity unchanged");
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Rect::new(1, 300, 15, 15), IVec2::new(-5, 5));
        create_ball(&mut world, Rect::new(784, 300, 15, 15), IVec2::new(5, 5));

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert!(
            !events.left_scored && !events.right_scored,
            "No scoring events"
        );
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events) = setup_world();

        create_ball(&mut world, Rect::new(790, 300, 15, 15), IVec2::new(5, 0));
        check_scoring(&mut world, &config, &mut score, &mut events);
        events.clear();
        world.clear();

        create_ball(&mut world, Rect::new(790, 300, 15, 15), IVec2::new(5, 0));
        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
    }
}
