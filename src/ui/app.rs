use crate::config::UiConfig;
use crate::game::{Cue, GameMode, GameOutcome, GameState, GridSpec, MoveError, Transition};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Mode selection, with the highlighted entry
    Menu { selected: usize },
    Game { mode: GameMode },
}

pub struct App {
    screen: Screen,
    game_state: GameState,
    cursor: usize,
    muted: bool,
    should_quit: bool,
    message: Option<String>,
    pending_cues: Vec<Cue>,
}

impl App {
    pub fn new(spec: GridSpec, ui: &UiConfig) -> Self {
        let mut app = App {
            screen: Screen::Menu { selected: 0 },
            game_state: GameState::with_grid(spec),
            cursor: Self::center(spec),
            muted: ui.muted,
            should_quit: false,
            message: None,
            pending_cues: Vec::new(),
        };
        if let Some(mode) = ui.start_mode {
            app.start(mode);
            app.pending_cues.clear();
        }
        app
    }

    fn center(spec: GridSpec) -> usize {
        let mid = spec.size() / 2;
        mid * spec.size() + mid
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Cues produced since the last call, silenced ones dropped
    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.pending_cues)
    }

    /// Main application loop
    pub fn run<B: Backend + Write>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.draw(terminal)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Draw one frame, then ring the bell once per pending cue
    pub fn draw<B: Backend + Write>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|f| self.render(f))?;

        for cue in self.take_cues() {
            log::trace!("cue {cue:?}");
            // Terminal bell stands in for both click and win sounds
            terminal.backend_mut().write_all(b"\x07")?;
        }
        Write::flush(terminal.backend_mut())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match self.screen {
            Screen::Menu { selected } => self.handle_menu_key(key, selected),
            Screen::Game { .. } => self.handle_game_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent, selected: usize) {
        let count = GameMode::ALL.len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.screen = Screen::Menu {
                    selected: (selected + count - 1) % count,
                };
            }
            KeyCode::Down | KeyCode::Tab => {
                self.screen = Screen::Menu {
                    selected: (selected + 1) % count,
                };
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.start(GameMode::ALL[selected]),
            KeyCode::Char('1') => self.start(GameMode::SinglePlayer),
            KeyCode::Char('2') => self.start(GameMode::TwoPlayer),
            KeyCode::Char('m') => self.toggle_mute(),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        let size = self.game_state.grid().size();
        let (row, col) = self.game_state.board().coords(self.cursor);

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Char('c') => {
                self.screen = Screen::Menu { selected: 0 };
            }
            KeyCode::Left if col > 0 => self.cursor -= 1,
            KeyCode::Right if col + 1 < size => self.cursor += 1,
            KeyCode::Up if row > 0 => self.cursor -= size,
            KeyCode::Down if row + 1 < size => self.cursor += size,
            KeyCode::Enter | KeyCode::Char(' ') => self.place_mark(),
            KeyCode::Char('r') => {
                self.cue(Cue::Click);
                self.game_state.reset();
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('m') => self.toggle_mute(),
            _ => {}
        }
    }

    /// Leave the menu for a fresh game in `mode`
    pub fn start(&mut self, mode: GameMode) {
        log::info!("starting {mode} game");
        self.cue(Cue::Click);
        self.screen = Screen::Game { mode };
        self.game_state.reset();
        self.cursor = Self::center(self.game_state.grid());
    }

    fn toggle_mute(&mut self) {
        // The click is heard only when going from sound to silence
        self.cue(Cue::Click);
        self.muted = !self.muted;
    }

    fn cue(&mut self, cue: Cue) {
        if !self.muted {
            self.pending_cues.push(cue);
        }
    }

    /// Place the current player's mark under the cursor
    fn place_mark(&mut self) {
        let result = self.game_state.apply_move(self.cursor);
        let transition = Transition::classify(&self.game_state, &result);
        for &cue in transition.cues() {
            self.cue(cue);
        }

        match result {
            Ok(next) => {
                self.game_state = next;
                self.message = match self.game_state.outcome() {
                    GameOutcome::Won(player) => Some(format!("{player} Wins!")),
                    GameOutcome::Draw => Some("It's a Draw!".to_string()),
                    GameOutcome::InProgress => None,
                };
            }
            Err(MoveError::Occupied(_)) => {
                self.message = Some("That cell is taken!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(MoveError::OutOfRange { .. }) => {
                self.message = Some("Invalid cell!".to_string());
            }
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Menu { selected } => super::menu_view::render(frame, selected, self.muted),
            Screen::Game { mode } => super::game_view::render(
                frame,
                &self.game_state,
                self.cursor,
                self.message(),
                mode,
                self.muted,
            ),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GridSpec::STANDARD, &UiConfig::default())
    }
}
