use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::cards::{CardDeck, CardFace};
use crate::ui::theme::Theme;

pub struct CardPanel<'a> {
    pub deck: &'a CardDeck,
    pub theme: &'a Theme,
}

impl<'a> CardPanel<'a> {
    pub fn new(deck: &'a CardDeck, theme: &'a Theme) -> Self {
        Self { deck, theme }
    }
}

impl Widget for &CardPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let side = if self.deck.flipped { "back" } else { "front" };
        let block = Block::bordered()
            .title(Line::from(Span::styled(
                format!(" Card ({side}) "),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if let Err(err) = &self.deck.cards {
            let message = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    err.to_string(),
                    Style::default().fg(colors.warning()),
                )),
            ])
            .alignment(Alignment::Center);
            message.render(inner, buf);
            return;
        }

        let Some(face) = self.deck.face_text() else {
            let message = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No cards in this range",
                    Style::default().fg(colors.dim()),
                )),
            ])
            .alignment(Alignment::Center);
            message.render(inner, buf);
            return;
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let showing_glyph =
            matches!(self.deck.face, CardFace::GlyphFront) != self.deck.flipped;
        let face_style = if showing_glyph {
            Style::default()
                .fg(colors.glyph())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD)
        };
        Paragraph::new(Line::from(Span::styled(face, face_style)))
            .alignment(Alignment::Center)
            .render(layout[1], buf);

        let hint = Paragraph::new(Line::from(Span::styled(
            "Space flips the card",
            Style::default().fg(colors.dim()),
        )))
        .alignment(Alignment::Center);
        hint.render(layout[3], buf);
    }
}
