use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{CellKind, GameStatus, World};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render<R>(&self, frame: &mut Frame, world: &World<R>, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(world, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the board horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if world.is_terminal() {
            let game_over = self.render_game_over(world, metrics);
            frame.render_widget(game_over, game_area);
        } else {
            let grid = self.render_grid(world);
            frame.render_widget(grid, game_area);
        }

        let controls = self.render_controls(world.status());
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid<R>(&self, world: &World<R>) -> Paragraph<'static> {
        let cells = world.cells();

        let lines: Vec<Line> = cells
            .chunks(world.width())
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| match cell {
                        CellKind::Head => Span::styled(
                            "■ ",
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        CellKind::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
                        CellKind::Reward => Span::styled(
                            "O ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        ),
                        CellKind::Empty => {
                            Span::styled(". ", Style::default().fg(Color::DarkGray))
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats<R>(&self, world: &World<R>, metrics: &GameMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(world.score().to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(
                format!("{}/{}", world.snake_len(), world.win_length()),
                value,
            ),
            Span::raw("    "),
            Span::styled("Steps: ", label),
            Span::styled(world.steps().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over<R>(&self, world: &World<R>, metrics: &GameMetrics) -> Paragraph<'static> {
        let accent = match world.status() {
            GameStatus::Won => Color::Green,
            _ => Color::Red,
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                world.status().text(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    world.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Games: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{} played, {} won", metrics.games_played, metrics.games_won),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent)),
        )
    }

    fn render_controls(&self, status: GameStatus) -> Paragraph<'static> {
        let mut spans = vec![
            Span::styled(status.text(), Style::default().fg(Color::White)),
            Span::raw(" | "),
        ];

        if status == GameStatus::Unstarted {
            spans.push(Span::styled("Space", Style::default().fg(Color::Green)));
            spans.push(Span::raw(" to start | "));
        }

        spans.extend([
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
