use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::content::level::LEVEL_ORDER;
use crate::content::library::Library;
use crate::ui::theme::Theme;

pub struct LevelList<'a> {
    pub library: &'a Library,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> LevelList<'a> {
    pub fn new(library: &'a Library, selected: usize, theme: &'a Theme) -> Self {
        Self {
            library,
            selected,
            theme,
        }
    }
}

impl Widget for &LevelList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(Line::from(Span::styled(
                " Levels ",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for (i, level) in LEVEL_ORDER.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { ">" } else { " " };
            let count = self.library.character_count(*level);

            // Hangul cells are two terminal columns wide, so pad by
            // display width instead of char count.
            let label = level.label();
            let label_width: usize = label.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum();
            let pad = " ".repeat(8usize.saturating_sub(label_width));

            let row = if count > 0 {
                format!(" {indicator} {label}{pad}{count:>4} characters")
            } else {
                format!(" {indicator} {label}{pad}still in preparation")
            };

            let style = if is_selected {
                Style::default()
                    .fg(colors.accent())
                    .bg(colors.accent_dim())
                    .add_modifier(Modifier::BOLD)
            } else if count > 0 {
                Style::default().fg(colors.fg())
            } else {
                Style::default().fg(colors.dim())
            };

            lines.push(Line::from(Span::styled(row, style)));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
