use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::Simulation;

/// Draws the single status row under the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, sim: &Simulation) {
    frame.render_widget(
        Paragraph::new(status_line(sim)).alignment(Alignment::Center),
        area,
    );
}

/// Builds `Score n  Hi n  Len n  Deaths n`.
#[must_use]
pub fn status_line(sim: &Simulation) -> Line<'static> {
    let label = Style::new().fg(Color::DarkGray);
    let value = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

    let fields = [
        ("Score", sim.score().to_string()),
        ("Hi", sim.high_score().to_string()),
        ("Len", sim.segments().len().to_string()),
        ("Deaths", sim.deaths().to_string()),
    ];

    let mut spans = Vec::with_capacity(fields.len() * 3);
    for (index, (name, number)) in fields.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("{name} "), label));
        spans.push(Span::styled(number, value));
    }

    Line::from(spans)
}
