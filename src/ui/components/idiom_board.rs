use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::content::entry::IdiomEntry;
use crate::ui::theme::Theme;

pub struct IdiomBoard<'a> {
    pub idioms: &'a [IdiomEntry],
    pub date: &'a str,
    pub theme: &'a Theme,
}

impl<'a> IdiomBoard<'a> {
    pub fn new(idioms: &'a [IdiomEntry], date: &'a str, theme: &'a Theme) -> Self {
        Self {
            idioms,
            date,
            theme,
        }
    }
}

impl Widget for &IdiomBoard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(Line::from(Span::styled(
                format!(" Daily Idioms {} ", self.date),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.idioms.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No idioms bundled",
                Style::default().fg(colors.dim()),
            )))
            .centered()
            .render(inner, buf);
            return;
        }

        let mut lines = vec![Line::from("")];
        for idiom in self.idioms {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}", idiom.phrase),
                    Style::default()
                        .fg(colors.glyph())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", idiom.reading),
                    Style::default().fg(colors.dim()),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", idiom.meaning),
                Style::default().fg(colors.fg()),
            )));
            lines.push(Line::from(""));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
