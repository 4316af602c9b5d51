use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::indicator_color;
use crate::presentation::view_models::FeedbackViewModel;

/// Feedback indicator: three star slots filled by label rank, plus the
/// capitalized label in the active color.
pub struct FeedbackView<'a> {
    model: &'a FeedbackViewModel,
}

impl<'a> FeedbackView<'a> {
    pub fn new(model: &'a FeedbackViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for FeedbackView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Feedback Prediction")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut star_spans = Vec::with_capacity(self.model.slots.len() * 2);
        for slot in &self.model.slots {
            star_spans.push(Span::styled(
                "★",
                Style::default().fg(indicator_color(*slot)),
            ));
            star_spans.push(Span::raw(" "));
        }

        let lines = vec![
            Line::from(star_spans),
            Line::from(Span::styled(
                self.model.label.clone(),
                Style::default()
                    .fg(indicator_color(self.model.color))
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
