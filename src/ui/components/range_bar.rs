use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::content::level::Level;
use crate::engine::pool::StudySource;
use crate::ui::theme::Theme;

/// One-line summary of the active range, source table and mode.
pub struct RangeBar<'a> {
    pub from: Level,
    pub to: Level,
    pub source: StudySource,
    pub mode_label: &'a str,
    pub theme: &'a Theme,
}

impl<'a> RangeBar<'a> {
    pub fn new(
        from: Level,
        to: Level,
        source: StudySource,
        mode_label: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            from,
            to,
            source,
            mode_label,
            theme,
        }
    }
}

impl Widget for &RangeBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let line = Line::from(vec![
            Span::styled(" Range ", Style::default().fg(colors.dim())),
            Span::styled(
                format!("{} ~ {}", self.from.label(), self.to.label()),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Source ", Style::default().fg(colors.dim())),
            Span::styled(self.source.as_str(), Style::default().fg(colors.fg())),
            Span::styled("   Mode ", Style::default().fg(colors.dim())),
            Span::styled(self.mode_label, Style::default().fg(colors.fg())),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}
