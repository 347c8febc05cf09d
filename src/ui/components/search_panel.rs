use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::lookup::{SearchFocus, SearchView};
use crate::ui::theme::Theme;

pub struct SearchPanel<'a> {
    pub view: &'a SearchView,
    pub theme: &'a Theme,
}

impl<'a> SearchPanel<'a> {
    pub fn new(view: &'a SearchView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Widget for &SearchPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        let query_focused = self.view.focus == SearchFocus::Query;
        let query_border = if query_focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let query_block = Block::bordered()
            .title(Line::from(Span::styled(
                " Query ",
                Style::default().fg(colors.accent()),
            )))
            .border_style(Style::default().fg(query_border))
            .style(Style::default().bg(colors.bg()));
        let query_inner = query_block.inner(layout[0]);
        query_block.render(layout[0], buf);

        let (before, cursor_char, after) = self.view.input.render_parts();
        let mut spans = vec![Span::styled(before, Style::default().fg(colors.fg()))];
        if query_focused {
            match cursor_char {
                Some(ch) => spans.push(Span::styled(
                    ch.to_string(),
                    Style::default().fg(colors.bg()).bg(colors.fg()),
                )),
                None => spans.push(Span::styled(
                    " ",
                    Style::default().bg(colors.fg()),
                )),
            }
        } else if let Some(ch) = cursor_char {
            spans.push(Span::styled(
                ch.to_string(),
                Style::default().fg(colors.fg()),
            ));
        }
        spans.push(Span::styled(after, Style::default().fg(colors.fg())));
        Paragraph::new(Line::from(spans)).render(query_inner, buf);

        let results_focused = self.view.focus == SearchFocus::Results;
        let results_border = if results_focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let results_block = Block::bordered()
            .title(Line::from(Span::styled(
                format!(" Results ({}) ", self.view.hits.len()),
                Style::default().fg(colors.accent()),
            )))
            .border_style(Style::default().fg(results_border))
            .style(Style::default().bg(colors.bg()));
        let results_inner = results_block.inner(layout[1]);
        results_block.render(layout[1], buf);

        if self.view.hits.is_empty() {
            if self.view.ran {
                Paragraph::new(Line::from(Span::styled(
                    "  No matches",
                    Style::default().fg(colors.dim()),
                )))
                .render(results_inner, buf);
            }
            return;
        }

        let visible = results_inner.height as usize;
        let offset = self
            .view
            .selected
            .saturating_sub(visible.saturating_sub(1));

        for (row_idx, hit) in self
            .view
            .hits
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
        {
            let y = results_inner.y + (row_idx - offset) as u16;
            let is_selected = results_focused && row_idx == self.view.selected;

            let row_style = if is_selected {
                Style::default().bg(colors.accent_dim())
            } else {
                Style::default()
            };
            if is_selected {
                for x in results_inner.x..results_inner.x + results_inner.width {
                    buf[(x, y)].set_style(row_style);
                }
            }

            let indicator = if is_selected { ">" } else { " " };
            buf.set_string(
                results_inner.x,
                y,
                format!(" {indicator} {:<6}", hit.level.label()),
                row_style.fg(colors.dim()),
            );
            buf.set_string(
                results_inner.x + 11,
                y,
                &hit.entry.glyph,
                row_style.fg(colors.glyph()),
            );
            buf.set_string(
                results_inner.x + 16,
                y,
                format!("{} {}", hit.entry.gloss, hit.entry.reading),
                row_style.fg(colors.fg()),
            );
        }
    }
}
