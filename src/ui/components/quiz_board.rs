use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::quiz::QuizSession;
use crate::ui::theme::Theme;

pub struct QuizBoard<'a> {
    pub session: &'a QuizSession,
    pub theme: &'a Theme,
}

impl<'a> QuizBoard<'a> {
    pub fn new(session: &'a QuizSession, theme: &'a Theme) -> Self {
        Self { session, theme }
    }
}

impl Widget for &QuizBoard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(Line::from(Span::styled(
                " Question ",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let round = match &self.session.deal {
            Ok(round) => round,
            Err(err) => {
                let message = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        err.to_string(),
                        Style::default().fg(colors.warning()),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Adjust the range with f/F and t/T",
                        Style::default().fg(colors.dim()),
                    )),
                ])
                .alignment(Alignment::Center);
                message.render(inner, buf);
                return;
            }
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(8),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let prompt = Paragraph::new(Line::from(Span::styled(
            self.session.style.prompt_face(&round.question),
            Style::default()
                .fg(colors.glyph())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        prompt.render(layout[1], buf);

        let mut option_lines = Vec::new();
        for (i, card) in round.options.iter().enumerate() {
            let is_answer = card.glyph == round.question.glyph;
            let is_cursor = i == self.session.selected && self.session.grading.is_none();
            let indicator = if is_cursor { ">" } else { " " };

            let style = match &self.session.grading {
                Some(grading) => {
                    if is_answer {
                        Style::default()
                            .fg(colors.success())
                            .add_modifier(Modifier::BOLD)
                    } else if i == grading.chosen {
                        Style::default().fg(colors.error())
                    } else {
                        Style::default().fg(colors.dim())
                    }
                }
                None => {
                    if is_cursor {
                        Style::default()
                            .fg(colors.accent())
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(colors.fg())
                    }
                }
            };

            let text = format!(
                "  {indicator} [{num}] {face}",
                num = i + 1,
                face = self.session.style.option_face(card)
            );
            option_lines.push(Line::from(Span::styled(text, style)));
            option_lines.push(Line::from(""));
        }
        Paragraph::new(option_lines).render(layout[3], buf);

        if let Some(grading) = &self.session.grading {
            let verdict = if grading.correct {
                Span::styled(
                    "Correct!",
                    Style::default()
                        .fg(colors.success())
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    "Wrong! The answer is highlighted.",
                    Style::default().fg(colors.error()),
                )
            };
            Paragraph::new(Line::from(verdict))
                .alignment(Alignment::Center)
                .render(layout[5], buf);
        }
    }
}
