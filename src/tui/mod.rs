//! Terminal User Interface
//!
//! The detective's notebook, drawn with ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use crate::data::MessageKind;

/// Color scheme for the game
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Yellow,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::LightYellow,
            border: Color::DarkGray,
            header: Color::Magenta,
        }
    }
}

/// Get color for a message kind
pub fn kind_color(kind: &MessageKind) -> Color {
    match kind {
        MessageKind::Info => Color::Gray,
        MessageKind::Clue => Color::Cyan,
        MessageKind::Warning => Color::Yellow,
        MessageKind::Verdict => Color::Red,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔═══════════════════════════════════════════════════════╗
║                                                       ║
║     ___  ___ _____ ___ ___ _____ _____   _____        ║
║    |   \| __|_   _| __/ __|_   _|_ _\ \ / / __|       ║
║    | |) | _|  | | | _| (__  | |  | | \ V /| _|        ║
║    |___/|___| |_| |___\___| |_| |___| \_/ |___|       ║
║                                                       ║
║              ___  _   _ ___ ___ _____                 ║
║             / _ \| | | | __/ __|_   _|                ║
║            | (_) | |_| | _|\__ \ | |                  ║
║             \__\_\\___/|___|___/ |_|                  ║
║                                                       ║
║                 The Mansion Murder                    ║
╚═══════════════════════════════════════════════════════╝
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " DETECTIVE QUEST ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════════════════════╗
║                       CONTROLS                                ║
╠═══════════════════════════════════════════════════════════════╣
║  ↑/↓   Navigate the main menu                                 ║
║  Enter Select option / Confirm                                ║
║  1-6   Jump to a menu option                                  ║
║  Esc   Go back / Cancel                                       ║
║  ?     Toggle this help                                       ║
║  q/0   Quit game (from the main menu)                         ║
╠═══════════════════════════════════════════════════════════════╣
║                     IN THE MANSION                            ║
╠═══════════════════════════════════════════════════════════════╣
║  ←  e  l   Take the left door                                 ║
║  →  d  r   Take the right door                                ║
║  s  q  Esc Leave the exploration                              ║
╠═══════════════════════════════════════════════════════════════╣
║                      CASE NOTES                               ║
╠═══════════════════════════════════════════════════════════════╣
║  Clues are kept in alphabetical order, without repeats.       ║
║  Every clue/suspect link counts as one citation.              ║
║  The most cited suspect is your prime suspect.                ║
╚═══════════════════════════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(1),   // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (left panel + main area)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),  // Side panel
            Constraint::Percentage(65),  // Main area
        ])
        .split(area)
        .to_vec()
}

/// Create the main area layout (screen body + message log)
pub fn create_main_area_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60),  // Screen body
            Constraint::Percentage(40),  // Message log
        ])
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_cover_area() {
        let area = Rect::new(0, 0, 100, 40);
        let main = create_main_layout(area);
        assert_eq!(main.len(), 3);
        assert_eq!(main[0].height + main[1].height + main[2].height, 40);

        let content = create_content_layout(main[1]);
        assert_eq!(content[0].width + content[1].width, 100);
    }
}
