use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::content::entry::CharacterEntry;
use crate::content::level::Level;
use crate::ui::theme::Theme;

/// Popup with the full record for one character.
pub struct DetailCard<'a> {
    pub level: Level,
    pub entry: &'a CharacterEntry,
    pub theme: &'a Theme,
}

impl<'a> DetailCard<'a> {
    pub fn new(level: Level, entry: &'a CharacterEntry, theme: &'a Theme) -> Self {
        Self {
            level,
            entry,
            theme,
        }
    }
}

impl Widget for &DetailCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Clear.render(area, buf);
        let block = Block::bordered()
            .title(Line::from(Span::styled(
                " Character ",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )))
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        Paragraph::new(Line::from(Span::styled(
            &*self.entry.glyph,
            Style::default()
                .fg(colors.glyph())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(layout[1], buf);

        Paragraph::new(Line::from(Span::styled(
            format!("{} {}", self.entry.gloss, self.entry.reading),
            Style::default().fg(colors.fg()),
        )))
        .alignment(Alignment::Center)
        .render(layout[2], buf);

        Paragraph::new(Line::from(Span::styled(
            format!("{} | {} strokes", self.level.label(), self.entry.strokes),
            Style::default().fg(colors.dim()),
        )))
        .alignment(Alignment::Center)
        .render(layout[3], buf);

        Paragraph::new(Line::from(Span::styled(
            " [Esc] Close ",
            Style::default().fg(colors.dim()),
        )))
        .alignment(Alignment::Center)
        .render(layout[4], buf);
    }
}
