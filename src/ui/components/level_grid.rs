use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::browse::BrowseView;
use crate::ui::theme::Theme;

// Fixed column starts keep the table aligned; CJK cells are two
// terminal columns wide, so format-string padding cannot.
const COL_NUM: u16 = 1;
const COL_GLYPH: u16 = 6;
const COL_GLOSS: u16 = 12;
const COL_READING: u16 = 30;
const COL_STROKES: u16 = 40;

pub struct LevelGrid<'a> {
    pub view: &'a BrowseView,
    pub theme: &'a Theme,
}

impl<'a> LevelGrid<'a> {
    pub fn new(view: &'a BrowseView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Widget for &LevelGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let title = format!(" {} ", self.view.level.label());
        let block = Block::bordered()
            .title(Line::from(Span::styled(
                title,
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.view.rows.is_empty() {
            let message = Paragraph::new(Line::from(Span::styled(
                "Still in preparation",
                Style::default().fg(colors.dim()),
            )))
            .centered();
            message.render(inner, buf);
            return;
        }

        if inner.height < 3 || inner.width < COL_STROKES + 3 {
            return;
        }

        let header_style = Style::default()
            .fg(colors.accent())
            .add_modifier(Modifier::BOLD);
        let header_y = inner.y;
        buf.set_string(inner.x + COL_NUM, header_y, "#", header_style);
        if self.view.show_glyph {
            buf.set_string(inner.x + COL_GLYPH, header_y, "[1] hanja", header_style);
        }
        if self.view.show_gloss {
            buf.set_string(inner.x + COL_GLOSS, header_y, "[2] meaning", header_style);
        }
        if self.view.show_reading {
            buf.set_string(inner.x + COL_READING, header_y, "[3] sound", header_style);
        }
        buf.set_string(inner.x + COL_STROKES, header_y, "str", header_style);

        let visible = (inner.height - 1) as usize;
        let offset = self
            .view
            .selected
            .saturating_sub(visible.saturating_sub(1));

        for (row_idx, entry) in self.view.rows.iter().enumerate().skip(offset).take(visible) {
            let y = inner.y + 1 + (row_idx - offset) as u16;
            let is_selected = row_idx == self.view.selected;

            let style = if is_selected {
                Style::default().fg(colors.fg()).bg(colors.accent_dim())
            } else {
                Style::default().fg(colors.fg())
            };

            if is_selected {
                for x in inner.x..inner.x + inner.width {
                    buf[(x, y)].set_style(Style::default().bg(colors.accent_dim()));
                }
                buf.set_string(inner.x, y, ">", style.fg(colors.accent()));
            }

            buf.set_string(inner.x + COL_NUM, y, format!("{:>3}", row_idx + 1), style);
            if self.view.show_glyph {
                buf.set_string(inner.x + COL_GLYPH, y, &entry.glyph, style.fg(colors.glyph()));
            }
            if self.view.show_gloss {
                buf.set_string(inner.x + COL_GLOSS, y, &entry.gloss, style);
            }
            if self.view.show_reading {
                buf.set_string(inner.x + COL_READING, y, &entry.reading, style);
            }
            buf.set_string(
                inner.x + COL_STROKES,
                y,
                format!("{:>3}", entry.strokes),
                style.fg(colors.dim()),
            );
        }
    }
}
