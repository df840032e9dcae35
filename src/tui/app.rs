//! Main application state and rendering

use crate::data::{Direction as Move, MessageKind, MAX_CLUE_LEN, MAX_SUSPECT_LEN};
use crate::game::{investigation, Game, GameConfig, GameMessage};
use crate::tui::widgets::{ClueGauge, DramaticBox};
use crate::tui::{create_content_layout, create_main_area_layout, create_main_layout};
use crate::tui::{kind_color, styled_block, Theme, HELP_TEXT, LOGO, SMALL_LOGO};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Main menu entries, in order
const MENU_ITEMS: [&str; 7] = [
    "[1] Explore the mansion",
    "[2] View collected clues (in order)",
    "[3] Register clue → suspect",
    "[4] Look up a clue's suspects",
    "[5] View all associations",
    "[6] Reveal the prime suspect",
    "[0] Leave the game",
];

/// Application state
pub struct App {
    pub game: Game,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub current_screen: Screen,
    pub menu_state: ListState,
    pub input_buffer: String,
    pub input_mode: InputMode,
    /// Clue typed in the first step of the registration form
    pub pending_clue: Option<String>,
    /// Last lookup: the clue asked about and who it points to
    pub query_result: Option<(String, Vec<String>)>,
}

/// Current screen being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Exploring,
    Catalog,
    Register,
    Query,
    Associations,
    Analysis,
}

/// Which text field is taking keystrokes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Clue,
    Suspect,
}

impl InputMode {
    fn max_len(&self) -> usize {
        match self {
            InputMode::Normal => 0,
            InputMode::Clue => MAX_CLUE_LEN,
            InputMode::Suspect => MAX_SUSPECT_LEN,
        }
    }
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        Self {
            game: Game::new(&config),
            theme: Theme::default(),
            running: true,
            show_help: false,
            current_screen: Screen::MainMenu,
            menu_state,
            input_buffer: String::new(),
            input_mode: InputMode::Normal,
            pending_clue: None,
            query_result: None,
        }
    }

    /// Poll the terminal for a key and act on it
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                return Ok(self.handle_key(key));
            }
        }
        Ok(self.running)
    }

    /// React to a key press. Returns false once the player has quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return self.running;
        }

        // Text fields swallow every key
        if self.input_mode != InputMode::Normal {
            self.handle_text_input(key.code);
            return self.running;
        }

        if key.code == KeyCode::Char('?') {
            self.show_help = !self.show_help;
            return self.running;
        }
        if self.show_help {
            if key.code == KeyCode::Esc {
                self.show_help = false;
            }
            return self.running;
        }

        match self.current_screen {
            Screen::MainMenu => self.handle_menu_key(key.code),
            Screen::Exploring => self.handle_exploration_key(key.code),
            _ => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                    self.back_to_menu()
                }
                _ => {}
            },
        }

        self.running
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.navigate_up(),
            KeyCode::Down => self.navigate_down(),
            KeyCode::Enter => {
                if let Some(i) = self.menu_state.selected() {
                    self.select_menu_item(i);
                }
            }
            KeyCode::Char('q') | KeyCode::Char('0') => self.select_menu_item(6),
            KeyCode::Char(c @ '1'..='6') => {
                let i = c as usize - '1' as usize;
                self.menu_state.select(Some(i));
                self.select_menu_item(i);
            }
            _ => {}
        }
    }

    fn select_menu_item(&mut self, index: usize) {
        match index {
            0 => {
                self.game.begin_exploration();
                self.current_screen = Screen::Exploring;
            }
            1 => self.current_screen = Screen::Catalog,
            2 => {
                self.pending_clue = None;
                self.start_typing(InputMode::Clue);
                self.current_screen = Screen::Register;
            }
            3 => {
                self.query_result = None;
                self.start_typing(InputMode::Clue);
                self.current_screen = Screen::Query;
            }
            4 => self.current_screen = Screen::Associations,
            5 => {
                let analysis = self.game.analysis();
                let verdict = match &analysis.prime_suspect {
                    Some(prime) => format!(
                        "Prime suspect: {} ({} clues found)",
                        prime.suspect, prime.count
                    ),
                    None => "No suspect has been registered yet.".to_string(),
                };
                self.game.add_message(GameMessage::new(MessageKind::Verdict, &verdict));
                self.current_screen = Screen::Analysis;
            }
            6 => {
                tracing::info!(status = %self.game.check_status(), "player left the game");
                self.running = false;
            }
            _ => {}
        }
    }

    fn handle_exploration_key(&mut self, code: KeyCode) {
        let direction = match code {
            KeyCode::Left => Some(Move::Left),
            KeyCode::Right => Some(Move::Right),
            KeyCode::Esc => Some(Move::Leave),
            KeyCode::Char(c) => Move::from_key(c),
            _ => None,
        };
        let Some(direction) = direction else {
            return;
        };

        match self.game.explore(direction) {
            Ok(_) if self.game.exploration.is_none() => self.back_to_menu(),
            Ok(_) => {}
            Err(err) => {
                self.game.add_message(GameMessage::new(MessageKind::Warning, &err.to_string()));
                self.back_to_menu();
            }
        }
    }

    fn start_typing(&mut self, mode: InputMode) {
        self.input_buffer.clear();
        self.input_mode = mode;
    }

    fn handle_text_input(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                if self.input_buffer.chars().count() < self.input_mode.max_len() {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Esc => {
                self.pending_clue = None;
                self.back_to_menu();
            }
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
    }

    fn submit_input(&mut self) {
        match (self.current_screen.clone(), self.input_mode.clone()) {
            (Screen::Register, InputMode::Clue) => {
                match investigation::normalize_clue(&self.input_buffer) {
                    Ok(clue) => {
                        self.pending_clue = Some(clue.to_string());
                        self.start_typing(InputMode::Suspect);
                    }
                    Err(err) => self.warn(&err.to_string()),
                }
            }
            (Screen::Register, InputMode::Suspect) => {
                let clue = self.pending_clue.clone().unwrap_or_default();
                match self.game.register_association(&clue, &self.input_buffer) {
                    Ok(_) => {
                        self.pending_clue = None;
                        self.back_to_menu();
                    }
                    Err(err) => self.warn(&err.to_string()),
                }
            }
            (Screen::Query, InputMode::Clue) => {
                let clue = self.input_buffer.trim().to_string();
                match self.game.suspects_for(&clue) {
                    Ok(suspects) => {
                        if suspects.is_empty() {
                            self.game.add_message(GameMessage::new(
                                MessageKind::Warning,
                                "No suspect is linked to this clue.",
                            ));
                        } else {
                            for suspect in &suspects {
                                self.game.add_message(GameMessage::new(
                                    MessageKind::Clue,
                                    &format!("Suspect: {}", suspect),
                                ));
                            }
                        }
                        self.query_result = Some((clue, suspects));
                        self.start_typing(InputMode::Normal);
                    }
                    Err(err) => self.warn(&err.to_string()),
                }
            }
            _ => self.start_typing(InputMode::Normal),
        }
    }

    fn warn(&mut self, message: &str) {
        self.game.add_message(GameMessage::new(MessageKind::Warning, message));
    }

    fn back_to_menu(&mut self) {
        self.input_buffer.clear();
        self.input_mode = InputMode::Normal;
        self.current_screen = Screen::MainMenu;
    }

    fn navigate_up(&mut self) {
        let i = self.menu_state.selected().unwrap_or(0);
        if i > 0 {
            self.menu_state.select(Some(i - 1));
        }
    }

    fn navigate_down(&mut self) {
        let i = self.menu_state.selected().unwrap_or(0);
        if i + 1 < MENU_ITEMS.len() {
            self.menu_state.select(Some(i + 1));
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        match self.current_screen {
            Screen::MainMenu => self.render_main_menu(frame),
            _ => self.render_game(frame),
        }

        // Overlay help if showing
        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn menu_list(&self) -> List<'static> {
        let items: Vec<ListItem> = MENU_ITEMS
            .iter()
            .map(|item| ListItem::new(format!("  {}", item)))
            .collect();

        List::new(items)
            .block(styled_block("Main Menu", &self.theme))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .highlight_symbol("→ ")
    }

    fn render_main_menu(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Background
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.bg)),
            area,
        );

        let menu_height = MENU_ITEMS.len() as u16 + 2;
        let logo_height = LOGO.lines().count() as u16;

        // Small terminals get a one-line title instead of the big logo
        let compact = area.height < logo_height + menu_height + 2;
        let (title_height, title): (u16, Paragraph) = if compact {
            (
                2,
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        "═══ DETECTIVE QUEST ═══",
                        Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        self.game.case.title,
                        Style::default().fg(self.theme.header),
                    )),
                ]),
            )
        } else {
            (
                logo_height,
                Paragraph::new(LOGO).style(Style::default().fg(self.theme.accent)),
            )
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(title_height),
                Constraint::Length(1),
                Constraint::Length(menu_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(title.alignment(Alignment::Center), chunks[0]);

        let menu_area = Rect::new(
            area.x + area.width / 4,
            chunks[2].y,
            (area.width / 2).max(20).min(area.width),
            chunks[2].height,
        )
        .intersection(area);
        let menu = self.menu_list();
        frame.render_stateful_widget(menu, menu_area, &mut self.menu_state);

        let footer = Paragraph::new("↑/↓ to select, Enter to confirm | ? for help | q to quit")
            .style(Style::default().fg(self.theme.border))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[4]);
    }

    fn render_game(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let layout = create_main_layout(area);

        // Header
        self.render_header(frame, layout[0]);

        // Content area
        let content_layout = create_content_layout(layout[1]);

        // Side panel (case progress / current room)
        self.render_side_panel(frame, content_layout[0]);

        // Main area
        let main_layout = create_main_area_layout(content_layout[1]);
        self.render_screen_body(frame, main_layout[0]);
        self.render_messages(frame, main_layout[1]);

        // Status bar
        self.render_status_bar(frame, layout[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(20),
                Constraint::Min(20),
                Constraint::Length(24),
            ])
            .split(area);

        let frame_block = || {
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.border))
        };

        // Logo
        let logo = Paragraph::new(SMALL_LOGO)
            .style(Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
            .block(frame_block());
        frame.render_widget(logo, header_layout[0]);

        // Case title
        let title = Paragraph::new(self.game.case.title)
            .style(Style::default().fg(self.theme.warning))
            .alignment(Alignment::Center)
            .block(frame_block());
        frame.render_widget(title, header_layout[1]);

        // Screen name
        let screen = Paragraph::new(format!(" {} ", self.screen_title()))
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Right)
            .block(frame_block());
        frame.render_widget(screen, header_layout[2]);
    }

    fn screen_title(&self) -> &'static str {
        match self.current_screen {
            Screen::MainMenu => "Main Menu",
            Screen::Exploring => "Exploring",
            Screen::Catalog => "Clue Catalog",
            Screen::Register => "New Association",
            Screen::Query => "Clue Lookup",
            Screen::Associations => "Associations",
            Screen::Analysis => "Suspect Analysis",
        }
    }

    fn render_side_panel(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(13),  // Case progress
                Constraint::Min(4),      // Path walked
            ])
            .split(area);

        let block = styled_block("Case", &self.theme);
        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);

        let (found, total) = self.game.discovery_progress();
        let gauge_area = Rect::new(inner.x, inner.y, inner.width, inner.height.min(2));
        frame.render_widget(
            ClueGauge::new("Clues found", found, total)
                .color(self.theme.accent)
                .complete_color(self.theme.success),
            gauge_area,
        );

        let stats = &self.game.stats;
        let stat = |label: &str, value: String, color: Color| {
            Line::from(vec![
                Span::raw(format!("{}: ", label)),
                Span::styled(value, Style::default().fg(color)),
            ])
        };
        let stats_text = vec![
            stat("Catalogued", self.game.catalog.len().to_string(), Color::Cyan),
            stat("Associations", self.game.suspects.len().to_string(), Color::Cyan),
            stat("Explorations", stats.explorations.to_string(), Color::Green),
            stat("Rooms visited", stats.rooms_visited.to_string(), Color::Green),
            stat("New clues found", stats.clues_discovered.to_string(), Color::Green),
            stat("Wrong turns", stats.invalid_moves.to_string(), Color::Yellow),
            stat("Links registered", stats.associations_registered.to_string(), Color::Cyan),
            stat("Lookups", stats.queries.to_string(), Color::Cyan),
        ];
        let stats_area = Rect::new(
            inner.x,
            inner.y + gauge_area.height,
            inner.width,
            inner.height.saturating_sub(gauge_area.height),
        );
        frame.render_widget(Paragraph::new(stats_text), stats_area);

        // Rooms walked through on the current exploration
        let path: Vec<ListItem> = match &self.game.exploration {
            Some(session) => session
                .path()
                .iter()
                .filter_map(|id| self.game.mansion.get(*id))
                .map(|room| ListItem::new(format!("  {}", room.name)))
                .collect(),
            None => vec![ListItem::new(Span::styled(
                "  Not in the mansion",
                Style::default().fg(Color::DarkGray),
            ))],
        };
        frame.render_widget(List::new(path).block(styled_block("Path", &self.theme)), chunks[1]);
    }

    fn render_screen_body(&self, frame: &mut Frame, area: Rect) {
        match self.current_screen {
            Screen::Exploring => self.render_room(frame, area),
            Screen::Catalog => self.render_catalog(frame, area),
            Screen::Register => self.render_register_form(frame, area),
            Screen::Query => self.render_query(frame, area),
            Screen::Associations => self.render_associations(frame, area),
            Screen::Analysis => self.render_analysis(frame, area),
            Screen::MainMenu => {}
        }
    }

    fn render_room(&self, frame: &mut Frame, area: Rect) {
        let Some(room) = self.game.current_room() else {
            frame.render_widget(Paragraph::new("").block(styled_block("Room", &self.theme)), area);
            return;
        };

        let mut text = vec![
            Line::from(vec![
                Span::raw("You are in: "),
                Span::styled(
                    room.name.as_str(),
                    Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
        ];
        if let Some(clue) = room.clue() {
            text.push(Line::from(vec![
                Span::raw("Clue here: "),
                Span::styled(format!("\"{}\"", clue), Style::default().fg(Color::Cyan)),
            ]));
            text.push(Line::from(""));
        }

        text.push(Line::from("Where do you want to go?"));
        let door = |id: Option<crate::data::RoomId>| id.and_then(|id| self.game.mansion.get(id));
        if let Some(left) = door(room.left) {
            text.push(Line::from(format!("  [e/←] Left  → {}", left.name)));
        }
        if let Some(right) = door(room.right) {
            text.push(Line::from(format!("  [d/→] Right → {}", right.name)));
        }
        text.push(Line::from("  [s/Esc] Leave the exploration"));

        let body = Paragraph::new(text)
            .block(styled_block("Room", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(body, area);
    }

    fn render_catalog(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = if self.game.catalog.is_empty() {
            vec![ListItem::new("  No clues collected yet.")]
        } else {
            self.game
                .catalog
                .inorder()
                .map(|clue| ListItem::new(format!("  • {}", clue)))
                .collect()
        };
        let title = format!("Collected Clues ({}, alphabetical)", self.game.catalog.len());
        frame.render_widget(List::new(items).block(styled_block(&title, &self.theme)), area);
    }

    fn input_line(&self, label: &str, value: &str, active: bool) -> Line<'static> {
        let (value, style) = if active {
            (format!("{}_", value), Style::default().fg(self.theme.success))
        } else {
            (value.to_string(), Style::default().fg(self.theme.fg))
        };
        Line::from(vec![Span::raw(format!("{}: ", label)), Span::styled(value, style)])
    }

    fn render_register_form(&self, frame: &mut Frame, area: Rect) {
        let typing_clue = self.input_mode == InputMode::Clue;
        let clue = if typing_clue {
            self.input_buffer.as_str()
        } else {
            self.pending_clue.as_deref().unwrap_or("")
        };
        let suspect = if self.input_mode == InputMode::Suspect {
            self.input_buffer.as_str()
        } else {
            ""
        };

        let text = vec![
            self.input_line("Clue", clue, typing_clue),
            self.input_line("Suspect", suspect, self.input_mode == InputMode::Suspect),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "Enter to confirm, Esc to cancel (clue ≤ {} chars, suspect ≤ {} chars)",
                    MAX_CLUE_LEN, MAX_SUSPECT_LEN
                ),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let form = Paragraph::new(text)
            .block(styled_block("Register Clue → Suspect", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(form, area);
    }

    fn render_query(&self, frame: &mut Frame, area: Rect) {
        let mut text = Vec::new();
        match &self.query_result {
            Some((clue, suspects)) => {
                text.push(self.input_line("Clue", clue, false));
                text.push(Line::from(""));
                if suspects.is_empty() {
                    text.push(Line::from(Span::styled(
                        "No suspect is linked to this clue.",
                        Style::default().fg(self.theme.warning),
                    )));
                }
                for suspect in suspects {
                    text.push(Line::from(format!("  Suspect: {}", suspect)));
                }
                text.push(Line::from(""));
                text.push(Line::from(Span::styled(
                    "Esc to go back",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            None => {
                text.push(self.input_line("Clue", &self.input_buffer, true));
                text.push(Line::from(""));
                text.push(Line::from(Span::styled(
                    "Type the exact clue text and press Enter",
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        let body = Paragraph::new(text)
            .block(styled_block("Look Up Suspects", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(body, area);
    }

    fn render_associations(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = if self.game.suspects.is_empty() {
            vec![ListItem::new("  No associations registered yet.")]
        } else {
            self.game
                .suspects
                .enumerate_all()
                .map(|(clue, suspect)| ListItem::new(format!("  \"{}\" → {}", clue, suspect)))
                .collect()
        };
        let title = format!("All Associations ({})", self.game.suspects.len());
        frame.render_widget(List::new(items).block(styled_block(&title, &self.theme)), area);
    }

    fn render_analysis(&self, frame: &mut Frame, area: Rect) {
        let analysis = self.game.analysis();
        let color = if analysis.prime_suspect.is_some() {
            self.theme.alert
        } else {
            self.theme.border
        };
        frame.render_widget(Clear, area);
        frame.render_widget(
            DramaticBox::new("SUSPECT ANALYSIS")
                .content(analysis.lines())
                .border_color(color),
            area,
        );
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect) {
        let visible_lines = area.height.saturating_sub(2) as usize;
        let log = &self.game.message_log;
        let start = log.len().saturating_sub(visible_lines);

        let lines: Vec<Line> = log[start..]
            .iter()
            .map(|msg| {
                let style = Style::default().fg(kind_color(&msg.kind));
                let style = if msg.kind == MessageKind::Verdict {
                    style.add_modifier(Modifier::BOLD)
                } else {
                    style
                };
                Line::from(vec![
                    Span::styled(
                        format!("{} ", msg.timestamp.format("%H:%M:%S")),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(format!("{} {}", msg.kind.symbol(), msg.message), style),
                ])
            })
            .collect();

        let messages = Paragraph::new(lines)
            .block(styled_block("Notebook", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(messages, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status_text = format!(" {} | Press ? for help ", self.game.check_status());
        let status = Paragraph::new(status_text)
            .style(Style::default().fg(self.theme.fg).bg(Color::DarkGray));
        frame.render_widget(status, area);
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_width = 70.min(area.width.saturating_sub(4));
        let popup_height = 28.min(area.height.saturating_sub(4));
        let popup_area = Rect::new(
            area.x + (area.width - popup_width) / 2,
            area.y + (area.height - popup_height) / 2,
            popup_width,
            popup_height,
        );

        frame.render_widget(Clear, popup_area);

        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent)),
            );
        frame.render_widget(help, popup_area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
