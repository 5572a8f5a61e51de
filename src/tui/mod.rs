//! TUI module - Terminal table of workout reports with ratatui

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use std::io::{stdout, Stdout};

use crate::message::InfoMessage;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// App state for TUI
pub struct App {
    messages: Vec<InfoMessage>,
    should_quit: bool,
}

impl App {
    pub fn new(messages: Vec<InfoMessage>) -> Self {
        Self {
            messages,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
        }

        restore_terminal()?;
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(area);

        let header = Paragraph::new("workout-report - Sensor Summary")
            .style(Style::default().fg(Color::Cyan).bold())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let rows: Vec<Row> = self.messages.iter().map(|m| Row::new(table_cells(m))).collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Length(12),
                Constraint::Length(14),
                Constraint::Length(16),
                Constraint::Min(12),
            ],
        )
        .header(Row::new(vec!["Workout", "Duration, h", "Distance, km", "Speed, km/h", "Calories"])
            .style(Style::default().bold()))
        .block(Block::default().borders(Borders::ALL).title("Workouts"));

        frame.render_widget(table, chunks[1]);

        let footer = Paragraph::new("q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    self.should_quit = true;
                }
        Ok(())
    }
}

/// Table cells for one report, same precision as the text report
fn table_cells(message: &InfoMessage) -> Vec<Cell<'static>> {
    vec![
        Cell::from(message.training_type.clone()),
        Cell::from(format!("{:.3}", message.duration)),
        Cell::from(format!("{:.3}", message.distance)),
        Cell::from(format!("{:.3}", message.speed)),
        Cell::from(format!("{:.3}", message.calories)),
    ]
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn sample() -> InfoMessage {
        InfoMessage {
            training_type: "Swimming".to_string(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        }
    }

    #[test]
    fn test_table_cells_count() {
        assert_eq!(table_cells(&sample()).len(), 5);
    }

    #[test]
    fn test_render_shows_reports() {
        let app = App::new(vec![sample()]);
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Swimming"), "Screen: {}", text);
        assert!(text.contains("0.994"), "Screen: {}", text);
        assert!(text.contains("336.000"), "Screen: {}", text);
    }
}
