use crate::game::GameMode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, selected: usize, muted: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Options
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let mut lines = vec![Line::from("")];
    for (idx, mode) in GameMode::ALL.iter().enumerate() {
        let label = format!(" {}. {} ", idx + 1, mode.label());
        if idx == selected {
            lines.push(Line::from(Span::styled(
                format!("> {label} <"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )));
        } else {
            lines.push(Line::from(format!("  {label}  ")));
        }
        lines.push(Line::from(""));
    }
    let options = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Mode"));
    frame.render_widget(options, chunks[1]);

    let sound = if muted { "M: Unmute" } else { "M: Mute" };
    let controls = Paragraph::new(format!(
        "↑/↓: Select  |  Enter: Start  |  {sound}  |  Q: Quit"
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[2]);
}
