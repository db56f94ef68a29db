/// Continuous position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Builds a position from integer pixel coordinates.
    #[must_use]
    pub fn from_pixels(x: i32, y: i32) -> Self {
        Self {
            x: x as f32,
            y: y as f32,
        }
    }

    /// Returns this position moved `distance` pixels along `direction`.
    #[must_use]
    pub fn displaced(self, direction: Direction, distance: f32) -> Self {
        Self {
            x: self.x + f32::from(direction.x) * distance,
            y: self.y + f32::from(direction.y) * distance,
        }
    }

    /// Exact, bit-for-bit comparison against an integer pixel point.
    #[must_use]
    pub fn equals_pixel(self, (x, y): (i32, i32)) -> bool {
        self.x == x as f32 && self.y == y as f32
    }
}

/// Discrete heading with components in `{-1, 0, 1}`.
///
/// Unlike a four-way enum this includes [`Direction::NONE`], the heading of a
/// freshly reset snake and of a segment appended by growth.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct Direction {
    x: i8,
    y: i8,
}

impl Direction {
    pub const NONE: Self = Self { x: 0, y: 0 };
    pub const UP: Self = Self { x: 0, y: -1 };
    pub const DOWN: Self = Self { x: 0, y: 1 };
    pub const LEFT: Self = Self { x: -1, y: 0 };
    pub const RIGHT: Self = Self { x: 1, y: 0 };

    #[must_use]
    pub fn x(self) -> i8 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> i8 {
        self.y
    }

    /// Returns the opposite heading. `NONE` stays `NONE`.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}
