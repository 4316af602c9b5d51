use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::form::FormState;
use platesight_types::Field;

/// The input form: one line per field, the focused field highlighted, and
/// the error marks from the last blocked submission inline.
pub struct FormView<'a> {
    form: &'a FormState,
}

impl<'a> FormView<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self { form }
    }
}

impl<'a> Widget for FormView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Enter the following details")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                "We will use this to run a prediction model of your business",
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::from(""),
        ];

        for field in Field::ALL {
            let focused = self.form.focused_field() == field;
            let marker = if focused { "> " } else { "  " };
            let label_style = if focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };

            let mut spans = vec![
                Span::raw(marker),
                Span::styled(format!("{:<22}", format!("{}:", field.label())), label_style),
                Span::raw(self.form.draft().field(field).to_string()),
            ];
            if focused {
                spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
            }
            if let Some(error) = self.form.error_for(field) {
                spans.push(Span::styled(
                    format!("  ({})", error),
                    Style::default().fg(Color::Red),
                ));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter submit · Tab/↓ next · ↑ prev · Esc quit",
            Style::default().add_modifier(Modifier::DIM),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
