use cellevo_core::PopulationStats;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Widget};

pub struct StatusWidget<'a> {
    pub stats: &'a PopulationStats,
}

impl<'a> Widget for StatusWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let stats = self.stats;
        Paragraph::new(format!(
            "Gen: {} | Tick: {} | Cells: {} | Food: {}",
            stats.generation, stats.tick, stats.population, stats.food
        ))
        .style(Style::default().fg(Color::Cyan))
        .render(lines[0], buf);

        Paragraph::new(format!(
            "Health: {:.1} | Energy: {:.1} | Size: {:.1} | [q] quit",
            stats.mean_health, stats.mean_energy, stats.mean_size
        ))
        .render(lines[1], buf);
    }
}
