use crate::geometry::{Direction, Vec2f};

/// One body unit: top-left pixel position plus the heading it moves along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub position: Vec2f,
    pub direction: Direction,
}

impl Segment {
    #[must_use]
    pub fn new(position: Vec2f, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// A motionless segment at `position`.
    #[must_use]
    pub fn resting(position: Vec2f) -> Self {
        Self::new(position, Direction::NONE)
    }
}

/// Ordered body segments, head first.
///
/// Every segment integrates its own direction; turning travels down the body
/// one segment per step through [`Snake::propagate_directions`].
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Segment>,
}

impl Snake {
    /// Creates a one-segment, motionless snake at `start` with room for
    /// `capacity` segments.
    #[must_use]
    pub fn new(start: Vec2f, capacity: usize) -> Self {
        let mut body = Vec::with_capacity(capacity.max(1));
        body.push(Segment::resting(start));
        Self { body }
    }

    /// Creates a snake from explicit segments (index 0 is the head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        assert!(
            !segments.is_empty(),
            "snake body must always contain at least one segment"
        );
        Self { body: segments }
    }

    /// Drops every segment and starts over with a single resting head.
    pub fn reset(&mut self, start: Vec2f) {
        self.body.clear();
        self.body.push(Segment::resting(start));
    }

    /// Points the head along `direction`. The body is left untouched.
    pub fn steer_head(&mut self, direction: Direction) {
        self.body[0].direction = direction;
    }

    /// Moves every segment `distance` pixels along its own direction.
    pub fn move_segments(&mut self, distance: f32) {
        for segment in &mut self.body {
            segment.position = segment.position.displaced(segment.direction, distance);
        }
    }

    /// Hands each segment the direction of the one ahead of it.
    ///
    /// Walks tail to head so every segment reads its neighbour's previous
    /// direction before that neighbour is overwritten.
    pub fn propagate_directions(&mut self) {
        for index in (1..self.body.len()).rev() {
            self.body[index].direction = self.body[index - 1].direction;
        }
    }

    /// Appends a resting segment on top of the current tail.
    pub fn grow(&mut self) {
        let tail = self.tail().position;
        self.body.push(Segment::resting(tail));
    }

    #[must_use]
    pub fn head(&self) -> Segment {
        self.body[0]
    }

    #[must_use]
    pub fn tail(&self) -> Segment {
        self.body[self.body.len() - 1]
    }

    /// Returns true if any non-head segment sits exactly on the head.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head().position;
        self.body.iter().skip(1).any(|segment| segment.position == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.body
    }
}
