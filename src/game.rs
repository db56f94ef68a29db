use tracing::{debug, info, trace};

use crate::config::SimConfig;
use crate::geometry::{Direction, Vec2f};
use crate::snake::{Segment, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Active,
    Over,
}

/// What ended the most recent run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfBite,
}

/// Complete mutable game state for one process run.
///
/// Driven once per frame: [`Simulation::set_pending_direction`] with the
/// sampled input, then [`Simulation::advance`] with the elapsed time. The
/// simulation never reads a clock itself.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    snake: Snake,
    fruit: (i32, i32),
    pending_direction: Direction,
    score: u32,
    high_score: u32,
    status: GameStatus,
    last_collision: Option<Collision>,
    deaths: u32,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimConfig::DEFAULT)
    }
}

impl Simulation {
    /// Creates a simulation with a single resting head in the middle of the
    /// arena and the fruit at its configured start.
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        let snake = Snake::new(config.arena.center_start(), config.arena.total_cells());

        Self {
            config,
            snake,
            fruit: config.fruit_start,
            pending_direction: Direction::NONE,
            score: 0,
            high_score: 0,
            status: GameStatus::Active,
            last_collision: None,
            deaths: 0,
        }
    }

    /// Replaces the snake body. Used to stage scenarios.
    #[must_use]
    pub fn with_snake(mut self, snake: Snake) -> Self {
        self.snake = snake;
        self
    }

    /// Moves the fruit. Used to stage scenarios; play itself never relocates it.
    #[must_use]
    pub fn with_fruit(mut self, fruit: (i32, i32)) -> Self {
        self.fruit = fruit;
        self
    }

    /// Buffers a heading for the next [`Simulation::advance`].
    ///
    /// A multi-segment snake ignores a request for the exact reverse of its
    /// current head direction. A lone head may turn around freely.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if self.snake.len() > 1 && direction == self.snake.head().direction.reversed() {
            trace!(?direction, "reverse turn ignored");
            return;
        }

        self.pending_direction = direction;
    }

    /// Advances the simulation by `delta_seconds`, clamped to
    /// `[0, config.max_delta]`.
    pub fn advance(&mut self, delta_seconds: f32) {
        let delta = self.clamp_delta(delta_seconds);

        self.snake.steer_head(self.pending_direction);
        self.snake.move_segments(self.config.speed * delta);
        self.snake.propagate_directions();
        self.check_collisions();
    }

    fn clamp_delta(&self, delta_seconds: f32) -> f32 {
        if delta_seconds > self.config.max_delta {
            trace!(delta_seconds, "frame delta clamped");
            return self.config.max_delta;
        }

        // NaN fails both comparisons and is treated as no time passing.
        if delta_seconds >= 0.0 {
            delta_seconds
        } else {
            0.0
        }
    }

    fn check_collisions(&mut self) {
        let head = self.snake.head().position;

        if !self.config.arena.contains_cell(head) {
            self.end_run(Collision::Wall);
            return;
        }

        if self.snake.head_overlaps_body() {
            self.end_run(Collision::SelfBite);
            return;
        }

        if head.equals_pixel(self.fruit) {
            self.eat_fruit();
        }
    }

    fn eat_fruit(&mut self) {
        self.snake.grow();
        self.score += 1;
        info!(score = self.score, length = self.snake.len(), "fruit eaten");

        if self.score > self.high_score {
            self.high_score = self.score;
            info!(high_score = self.high_score, "new high score");
        }
    }

    fn end_run(&mut self, collision: Collision) {
        self.status = GameStatus::Over;
        self.last_collision = Some(collision);
        self.deaths += 1;
        debug!(
            ?collision,
            score = self.score,
            length = self.snake.len(),
            "run ended"
        );

        self.reset();
    }

    fn reset(&mut self) {
        self.snake.reset(self.config.arena.center_start());
        self.score = 0;
        self.status = GameStatus::Active;
    }

    /// Segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        self.snake.segments()
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn head(&self) -> Segment {
        self.snake.head()
    }

    /// Fruit top-left corner in pixels.
    #[must_use]
    pub fn fruit(&self) -> (i32, i32) {
        self.fruit
    }

    #[must_use]
    pub fn fruit_position(&self) -> Vec2f {
        Vec2f::from_pixels(self.fruit.0, self.fruit.1)
    }

    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Reason the most recent run ended, if any run has ended yet.
    #[must_use]
    pub fn last_collision(&self) -> Option<Collision> {
        self.last_collision
    }

    /// Number of runs ended by a fatal collision.
    #[must_use]
    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SimConfig;
    use crate::geometry::{Direction, Vec2f};
    use crate::snake::{Segment, Snake};

    use super::{Collision, GameStatus, Simulation};

    const START: Vec2f = Vec2f::new(280.0, 280.0);

    fn segment(x: f32, y: f32, direction: Direction) -> Segment {
        Segment::new(Vec2f::new(x, y), direction)
    }

    fn sim_with(segments: Vec<Segment>) -> Simulation {
        Simulation::new(SimConfig::DEFAULT).with_snake(Snake::from_segments(segments))
    }

    fn assert_reset(sim: &Simulation) {
        assert_eq!(sim.segments(), &[Segment::resting(START)]);
        assert_eq!(sim.status(), GameStatus::Active);
    }

    #[test]
    fn new_simulation_starts_centered_and_active() {
        let sim = Simulation::default();

        assert_eq!(sim.segments(), &[Segment::resting(START)]);
        assert_eq!(sim.fruit(), (0, 0));
        assert_eq!(sim.status(), GameStatus::Active);
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.high_score(), 0);
        assert_eq!(sim.last_collision(), None);
    }

    #[test]
    fn pending_direction_applies_only_on_advance() {
        let mut sim = Simulation::default();

        sim.set_pending_direction(Direction::RIGHT);
        assert_eq!(sim.head().direction, Direction::NONE);
        assert_eq!(sim.head().position, START);

        sim.advance(0.05);
        assert_eq!(sim.head().direction, Direction::RIGHT);
        assert_eq!(sim.head().position, Vec2f::new(285.0, 280.0));
    }

    #[test]
    fn reverse_request_is_ignored_for_long_snake() {
        let mut sim = sim_with(vec![
            segment(200.0, 200.0, Direction::RIGHT),
            segment(160.0, 200.0, Direction::RIGHT),
        ]);
        sim.set_pending_direction(Direction::RIGHT);
        sim.advance(0.01);

        sim.set_pending_direction(Direction::LEFT);
        sim.advance(0.01);

        assert_eq!(sim.pending_direction(), Direction::RIGHT);
        assert_eq!(sim.head().direction, Direction::RIGHT);
    }

    #[test]
    fn lone_head_may_reverse() {
        let mut sim = sim_with(vec![segment(200.0, 200.0, Direction::RIGHT)]);

        sim.set_pending_direction(Direction::LEFT);
        sim.advance(0.01);

        assert_eq!(sim.head().direction, Direction::LEFT);
    }

    #[test]
    fn perpendicular_turn_is_accepted_for_long_snake() {
        let mut sim = sim_with(vec![
            segment(200.0, 200.0, Direction::RIGHT),
            segment(160.0, 200.0, Direction::RIGHT),
        ]);

        sim.set_pending_direction(Direction::UP);
        sim.advance(0.01);

        assert_eq!(sim.head().direction, Direction::UP);
        assert_eq!(sim.segments()[1].direction, Direction::UP);
    }

    #[test]
    fn body_turns_one_step_behind_head() {
        let mut sim = sim_with(vec![
            segment(200.0, 200.0, Direction::RIGHT),
            segment(160.0, 200.0, Direction::RIGHT),
            segment(120.0, 200.0, Direction::RIGHT),
        ]);

        sim.set_pending_direction(Direction::DOWN);
        sim.advance(0.05);

        // Head moved down, body still moved right this step.
        assert_eq!(sim.segments()[0].position, Vec2f::new(200.0, 205.0));
        assert_eq!(sim.segments()[1].position, Vec2f::new(165.0, 200.0));
        assert_eq!(sim.segments()[2].position, Vec2f::new(125.0, 200.0));
        assert_eq!(sim.segments()[1].direction, Direction::DOWN);
        assert_eq!(sim.segments()[2].direction, Direction::RIGHT);

        sim.advance(0.05);
        assert_eq!(sim.segments()[1].position, Vec2f::new(165.0, 205.0));
        assert_eq!(sim.segments()[2].position, Vec2f::new(130.0, 200.0));
        assert_eq!(sim.segments()[2].direction, Direction::DOWN);
    }

    #[test]
    fn wall_collision_on_each_edge_resets_snake() {
        for head in [
            Vec2f::new(-1.0, 200.0),
            Vec2f::new(561.0, 200.0),
            Vec2f::new(200.0, -1.0),
            Vec2f::new(200.0, 561.0),
        ] {
            let mut sim = sim_with(vec![
                Segment::resting(head),
                segment(120.0, 120.0, Direction::NONE),
            ]);

            sim.advance(0.01);

            assert_reset(&sim);
            assert_eq!(sim.last_collision(), Some(Collision::Wall));
            assert_eq!(sim.deaths(), 1);
        }
    }

    #[test]
    fn head_on_last_cell_is_not_a_wall_hit() {
        let mut sim = sim_with(vec![Segment::resting(Vec2f::new(560.0, 560.0))]);

        sim.advance(0.01);

        assert_eq!(sim.head().position, Vec2f::new(560.0, 560.0));
        assert_eq!(sim.last_collision(), None);
    }

    #[test]
    fn self_collision_resets_snake() {
        let mut sim = sim_with(vec![
            segment(120.0, 120.0, Direction::NONE),
            segment(160.0, 120.0, Direction::NONE),
            segment(120.0, 120.0, Direction::NONE),
        ]);

        sim.advance(0.02);

        assert_reset(&sim);
        assert_eq!(sim.last_collision(), Some(Collision::SelfBite));
    }

    #[test]
    fn wall_check_wins_over_self_and_fruit() {
        let mut sim = sim_with(vec![
            segment(-40.0, 0.0, Direction::NONE),
            segment(-40.0, 0.0, Direction::NONE),
        ])
        .with_fruit((-40, 0));

        sim.advance(0.01);

        assert_eq!(sim.last_collision(), Some(Collision::Wall));
        assert_eq!(sim.high_score(), 0);
    }

    #[test]
    fn fruit_grows_snake_and_scores() {
        let mut sim = sim_with(vec![
            segment(40.0, 0.0, Direction::NONE),
            segment(80.0, 0.0, Direction::NONE),
        ])
        .with_fruit((40, 0));
        let tail_before = sim.snake().tail().position;

        sim.advance(0.02);

        assert_eq!(sim.segments().len(), 3);
        assert_eq!(sim.score(), 1);
        assert_eq!(sim.high_score(), 1);
        assert_eq!(sim.snake().tail(), Segment::resting(tail_before));
    }

    #[test]
    fn fruit_stays_put_after_being_eaten() {
        let mut sim = sim_with(vec![segment(40.0, 0.0, Direction::NONE)]).with_fruit((40, 0));

        sim.advance(0.02);

        assert_eq!(sim.fruit(), (40, 0));
    }

    #[test]
    fn reset_clears_score_but_keeps_high_score() {
        let mut sim = sim_with(vec![
            segment(0.0, 0.0, Direction::NONE),
            segment(40.0, 0.0, Direction::NONE),
        ]);
        sim.advance(0.01);
        sim.advance(0.01);
        assert_eq!(sim.score(), 2);

        sim.set_pending_direction(Direction::UP);
        sim.advance(0.05);

        assert_eq!(sim.last_collision(), Some(Collision::Wall));
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.high_score(), 2);
    }

    #[test]
    fn pending_direction_survives_reset() {
        let mut sim = sim_with(vec![segment(0.0, 200.0, Direction::LEFT)]);
        sim.set_pending_direction(Direction::LEFT);

        sim.advance(0.05);
        assert_reset(&sim);
        assert_eq!(sim.pending_direction(), Direction::LEFT);

        sim.advance(0.05);
        assert_eq!(sim.head().position, Vec2f::new(275.0, 280.0));
    }

    #[test]
    fn oversized_delta_is_clamped() {
        let mut clamped = Simulation::default();
        let mut capped = Simulation::default();
        clamped.set_pending_direction(Direction::UP);
        capped.set_pending_direction(Direction::UP);

        clamped.advance(10.0);
        capped.advance(0.05);

        assert_eq!(clamped.head().position, capped.head().position);
        assert_eq!(clamped.head().position, Vec2f::new(280.0, 275.0));
    }

    #[test]
    fn negative_delta_does_not_move_snake() {
        let mut sim = Simulation::default();
        sim.set_pending_direction(Direction::UP);

        sim.advance(-1.0);

        assert_eq!(sim.head().position, START);
        assert_eq!(sim.head().direction, Direction::UP);
    }

    #[test]
    fn high_score_never_drops_below_score() {
        let mut sim = sim_with(vec![
            segment(0.0, 0.0, Direction::NONE),
            segment(40.0, 0.0, Direction::NONE),
        ]);
        let mut previous_high = 0;

        for step in 0..40 {
            if step == 20 {
                sim.set_pending_direction(Direction::LEFT);
            }
            sim.advance(0.02);

            assert!(sim.high_score() >= sim.score());
            assert!(sim.high_score() >= previous_high);
            assert!(!sim.segments().is_empty());
            previous_high = sim.high_score();
        }
    }
}
