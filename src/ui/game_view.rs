use crate::game::{Board, Cell, GameMode, GameOutcome, GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    cursor: usize,
    message: Option<&str>,
    game_mode: GameMode,
    muted: bool,
) {
    let size = game_state.grid().size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(size as u16 + 3), // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, game_mode, chunks[0]);
    render_board(frame, game_state, cursor, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, muted, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Red,
        Player::O => Color::Yellow,
    }
}

/// Status line shown above the board
pub fn status_text(game_state: &GameState) -> String {
    match game_state.outcome() {
        GameOutcome::Won(player) => format!("{player} Wins!"),
        GameOutcome::Draw => "It's a Draw!".to_string(),
        GameOutcome::InProgress => format!("Next Turn: {}", game_state.current_player()),
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, game_mode: GameMode, area: Rect) {
    let color = match game_state.outcome() {
        GameOutcome::Draw => Color::White,
        _ => player_color(game_state.current_player()),
    };
    let spec = game_state.grid();

    let header = Paragraph::new(status_text(game_state))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(format!(
            "{}  |  {}x{}, {} in a row",
            game_mode,
            spec.size(),
            spec.size(),
            spec.run_length()
        )));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, cursor: usize, area: Rect) {
    let board: &Board = game_state.board();
    let size = board.size();
    let winning = game_state.winning_line();
    let mut lines = Vec::new();

    // Column letters
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..size {
        let letter = (b'A' + col as u8) as char;
        col_line.push(Span::raw(format!(" {letter} ")));
    }
    lines.push(Line::from(col_line));

    for row in 0..size {
        let mut row_spans = vec![Span::raw(format!("{:>2} ", row + 1))];

        for col in 0..size {
            let position = board.index(row, col);
            let (symbol, mut style) = match board.get_at(row, col) {
                Cell::Empty => (" · ", Style::default().fg(Color::DarkGray)),
                Cell::X => (" X ", Style::default().fg(player_color(Player::X))),
                Cell::O => (" O ", Style::default().fg(player_color(Player::O))),
            };
            if winning.is_some_and(|line| line.contains(position)) {
                style = style.bg(Color::Green).add_modifier(Modifier::BOLD);
            }
            if position == cursor && !game_state.is_terminal() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        lines.push(Line::from(row_spans));
    }

    let board_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, muted: bool, area: Rect) {
    let sound = if muted { "M: Unmute" } else { "M: Mute" };
    let controls = Paragraph::new(format!(
        "Arrows: Move  |  Enter: Place  |  R: Restart  |  Esc: Menu  |  {sound}  |  Q: Quit"
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
