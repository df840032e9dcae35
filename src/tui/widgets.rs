//! Custom widgets for the game UI

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
    buffer::Buffer,
};

/// A progress bar for clues found out of clues hidden
pub struct ClueGauge {
    found: usize,
    total: usize,
    label: String,
    color: Color,
    complete_color: Color,
}

impl ClueGauge {
    pub fn new(label: &str, found: usize, total: usize) -> Self {
        Self {
            found,
            total,
            label: label.to_string(),
            color: Color::Cyan,
            complete_color: Color::Green,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn complete_color(mut self, color: Color) -> Self {
        self.complete_color = color;
        self
    }

    /// Cells to fill out of `width`
    fn filled(&self, width: u16) -> u16 {
        if self.total == 0 {
            return 0;
        }
        let found = self.found.min(self.total);
        (found * width as usize / self.total) as u16
    }
}

impl Widget for ClueGauge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let color = if self.total > 0 && self.found >= self.total {
            self.complete_color
        } else {
            self.color
        };

        // Render label
        let label = format!("{}: {}/{}", self.label, self.found, self.total);
        buf.set_stringn(area.x, area.y, &label, area.width as usize, Style::default().fg(color));

        // Render bar if there's room
        if area.height > 1 {
            let inner = area.width - 2;
            let filled = self.filled(inner);
            let bar_y = area.y + 1;
            buf.set_string(area.x, bar_y, "[", Style::default());
            buf.set_string(area.x + area.width - 1, bar_y, "]", Style::default());

            for x in 0..filled {
                buf.set_string(area.x + 1 + x, bar_y, "█", Style::default().fg(color));
            }
            for x in filled..inner {
                buf.set_string(area.x + 1 + x, bar_y, "░", Style::default().fg(Color::DarkGray));
            }
        }
    }
}

/// Double-lined box for the big reveal
pub struct DramaticBox {
    title: String,
    content: Vec<String>,
    border_color: Color,
}

impl DramaticBox {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
            border_color: Color::Red,
        }
    }

    pub fn content(mut self, lines: Vec<String>) -> Self {
        self.content = lines;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }
}

impl Widget for DramaticBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 2 {
            return;
        }
        let style = Style::default().fg(self.border_color);
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        // Top and bottom borders
        buf.set_string(area.x, area.y, "╔", style);
        buf.set_string(area.x, bottom, "╚", style);
        for x in 1..area.width - 1 {
            buf.set_string(area.x + x, area.y, "═", style);
            buf.set_string(area.x + x, bottom, "═", style);
        }
        buf.set_string(right, area.y, "╗", style);
        buf.set_string(right, bottom, "╝", style);

        // Title, centered on the top border
        let title = format!(" {} ", self.title);
        let title_width = title.chars().count() as u16;
        if title_width < area.width - 2 {
            let title_x = area.x + (area.width - title_width) / 2;
            buf.set_string(title_x, area.y, &title, style);
        }

        // Sides
        for y in 1..area.height - 1 {
            buf.set_string(area.x, area.y + y, "║", style);
            buf.set_string(right, area.y + y, "║", style);
        }

        // Content
        for (i, line) in self.content.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= bottom {
                break;
            }
            buf.set_stringn(
                area.x + 2,
                y,
                line,
                area.width.saturating_sub(4) as usize,
                Style::default().fg(Color::White),
            );
        }
    }
}
