use crate::geometry::Vec2f;

/// Viewport width in pixels.
pub const SCREEN_WIDTH: i32 = 600;

/// Viewport height in pixels.
pub const SCREEN_HEIGHT: i32 = 600;

/// Edge length of one grid cell in pixels. Segments and fruit share this extent.
pub const CELL_SIZE: i32 = 40;

/// Grid width in cells.
pub const GRID_WIDTH: i32 = 15;

/// Grid height in cells.
pub const GRID_HEIGHT: i32 = 15;

/// Snake movement speed in pixels per second.
pub const SNAKE_SPEED: f32 = 100.0;

/// Upper bound on the time step fed into one simulation advance.
pub const MAX_DELTA_SECONDS: f32 = 0.05;

/// Minimum wall-clock interval between two loop iterations.
pub const TICK_INTERVAL_MS: u64 = 16;

/// Initial fruit position in pixels. The fruit never moves after construction.
pub const FRUIT_START: (i32, i32) = (0, 0);

/// Pixel-space play field.
///
/// Keeps width, height, and cell size together so bounds checks never mix
/// up axes at call sites.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
    pub cell: i32,
}

impl Arena {
    /// Arena built from the viewport constants.
    pub const DEFAULT: Self = Self {
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
        cell: CELL_SIZE,
    };

    /// Number of whole cells along each axis.
    #[must_use]
    pub fn cells(self) -> (i32, i32) {
        (self.width / self.cell, self.height / self.cell)
    }

    /// Total cell count; used to size the segment buffer.
    #[must_use]
    pub fn total_cells(self) -> usize {
        let (columns, rows) = self.cells();
        usize::try_from(columns.max(0) * rows.max(0)).unwrap_or(0)
    }

    /// Top-left pixel of the centered start cell.
    #[must_use]
    pub fn center_start(self) -> Vec2f {
        Vec2f::from_pixels((self.width - self.cell) / 2, (self.height - self.cell) / 2)
    }

    /// Returns true when a cell whose top-left corner is at `position` lies
    /// entirely inside the arena.
    #[must_use]
    pub fn contains_cell(self, position: Vec2f) -> bool {
        let max_x = (self.width - self.cell) as f32;
        let max_y = (self.height - self.cell) as f32;
        position.x >= 0.0 && position.x <= max_x && position.y >= 0.0 && position.y <= max_y
    }
}

/// Tunables for one simulation instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub arena: Arena,
    /// Pixels per second.
    pub speed: f32,
    /// Largest delta, in seconds, a single advance will integrate.
    pub max_delta: f32,
    pub fruit_start: (i32, i32),
}

impl SimConfig {
    pub const DEFAULT: Self = Self {
        arena: Arena::DEFAULT,
        speed: SNAKE_SPEED,
        max_delta: MAX_DELTA_SECONDS,
        fruit_start: FRUIT_START,
    };
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, GRID_HEIGHT, GRID_WIDTH};
    use crate::geometry::Vec2f;

    #[test]
    fn default_arena_matches_grid_constants() {
        assert_eq!(Arena::DEFAULT.cells(), (GRID_WIDTH, GRID_HEIGHT));
        assert_eq!(Arena::DEFAULT.total_cells(), 225);
    }

    #[test]
    fn center_start_is_integer_centered() {
        assert_eq!(Arena::DEFAULT.center_start(), Vec2f::new(280.0, 280.0));
    }

    #[test]
    fn cell_bounds_are_inclusive_of_last_cell() {
        let arena = Arena::DEFAULT;

        assert!(arena.contains_cell(Vec2f::new(0.0, 0.0)));
        assert!(arena.contains_cell(Vec2f::new(560.0, 560.0)));
        assert!(!arena.contains_cell(Vec2f::new(-1.0, 10.0)));
        assert!(!arena.contains_cell(Vec2f::new(561.0, 10.0)));
        assert!(!arena.contains_cell(Vec2f::new(10.0, -0.5)));
        assert!(!arena.contains_cell(Vec2f::new(10.0, 560.25)));
    }
}
