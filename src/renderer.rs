use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::config::Arena;
use crate::game::Simulation;
use crate::geometry::Vec2f;
use crate::ui::hud::render_hud;

/// Terminal columns used for one grid cell; keeps cells roughly square.
pub const COLUMNS_PER_CELL: u16 = 2;

const GLYPH_FILLED: &str = "██";
const GLYPH_GRID: &str = "· ";
const GLYPH_EMPTY: &str = "  ";

/// Per-run rendering switches from the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RenderOptions {
    pub show_grid: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { show_grid: true }
    }
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, sim: &Simulation, options: RenderOptions) {
    let arena = sim.config().arena;
    let (board_area, hud_area) = layout(frame.area(), arena);

    let block = Block::bordered()
        .title(" pixel-snake ")
        .border_style(Style::new().fg(Color::Gray));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let buffer = frame.buffer_mut();
    render_grid(buffer, inner, arena, options);
    render_fruit(buffer, inner, arena, sim.fruit_position());
    render_snake(buffer, inner, arena, sim);

    render_hud(frame, hud_area, sim);
}

/// Splits `area` into a centered board (grid plus border) and a HUD row
/// directly below it.
#[must_use]
pub fn layout(area: Rect, arena: Arena) -> (Rect, Rect) {
    let (columns, rows) = board_cells(arena);
    let board_width = columns.saturating_mul(COLUMNS_PER_CELL).saturating_add(2);
    let board_height = rows.saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(area);
    let [board, hud] =
        Layout::vertical([Constraint::Length(board_height), Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(column);

    (board, hud)
}

fn render_grid(buffer: &mut Buffer, inner: Rect, arena: Arena, options: RenderOptions) {
    let glyph = if options.show_grid {
        GLYPH_GRID
    } else {
        GLYPH_EMPTY
    };
    let style = Style::new().fg(Color::DarkGray);
    let (columns, rows) = board_cells(arena);

    for row in 0..rows {
        for column in 0..columns {
            if let Some((x, y)) = cell_to_terminal(inner, (column, row)) {
                buffer.set_string(x, y, glyph, style);
            }
        }
    }
}

fn render_fruit(buffer: &mut Buffer, inner: Rect, arena: Arena, fruit: Vec2f) {
    let Some((x, y)) = pixel_to_cell(arena, fruit).and_then(|cell| cell_to_terminal(inner, cell))
    else {
        return;
    };

    buffer.set_string(x, y, GLYPH_FILLED, Style::new().fg(Color::Red));
}

fn render_snake(buffer: &mut Buffer, inner: Rect, arena: Arena, sim: &Simulation) {
    let body_style = Style::new().fg(Color::Green);
    let head_style = Style::new()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD);

    // Tail first so the head ends up on top of any overlap.
    for (index, segment) in sim.segments().iter().enumerate().rev() {
        let Some((x, y)) =
            pixel_to_cell(arena, segment.position).and_then(|cell| cell_to_terminal(inner, cell))
        else {
            continue;
        };

        let style = if index == 0 { head_style } else { body_style };
        buffer.set_string(x, y, GLYPH_FILLED, style);
    }
}

/// Maps a pixel position to the cell containing its top-left corner.
///
/// Returns `None` for positions outside the arena.
#[must_use]
pub fn pixel_to_cell(arena: Arena, position: Vec2f) -> Option<(u16, u16)> {
    let cell = arena.cell as f32;
    let column = (position.x / cell).floor();
    let row = (position.y / cell).floor();
    let (columns, rows) = arena.cells();

    if column < 0.0 || row < 0.0 || column >= columns as f32 || row >= rows as f32 {
        return None;
    }

    Some((column as u16, row as u16))
}

fn cell_to_terminal(inner: Rect, (column, row): (u16, u16)) -> Option<(u16, u16)> {
    let x = inner
        .x
        .saturating_add(column.saturating_mul(COLUMNS_PER_CELL));
    let y = inner.y.saturating_add(row);

    if x.saturating_add(COLUMNS_PER_CELL) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

fn board_cells(arena: Arena) -> (u16, u16) {
    let (columns, rows) = arena.cells();
    (
        u16::try_from(columns).unwrap_or(0),
        u16::try_from(rows).unwrap_or(0),
    )
}
