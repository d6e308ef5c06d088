use super::display::Display;
use anyhow::Result;
use cellevo_core::PopulationSnapshot;
use cellevo_tui::views::{StatusWidget, WorldWidget};
use cellevo_tui::Tui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout};
use std::time::Duration;

/// Interactive terminal display. `q`, `Esc` or `Ctrl-C` quits.
pub struct TuiDisplay {
    tui: Tui,
}

impl TuiDisplay {
    pub fn new() -> Result<Self> {
        let mut tui = Tui::new()?;
        tui.init()?;
        Ok(Self { tui })
    }

    pub fn exit(mut self) -> Result<()> {
        self.tui.exit()
    }
}

impl Display for TuiDisplay {
    fn render(&mut self, snapshot: &PopulationSnapshot) -> Result<()> {
        self.tui.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(2)])
                .split(f.area());
            f.render_widget(WorldWidget::new(snapshot), chunks[0]);
            f.render_widget(
                StatusWidget {
                    stats: &snapshot.stats,
                },
                chunks[1],
            );
        })?;
        Ok(())
    }

    fn poll_quit(&mut self) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL));
                if quit {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}
