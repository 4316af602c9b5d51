use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::InsightViewModel;

/// Free-text insight panel.
pub struct InsightView<'a> {
    model: &'a InsightViewModel,
}

impl<'a> InsightView<'a> {
    pub fn new(model: &'a InsightViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for InsightView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("Insight").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let paragraph = match &self.model.text {
            Some(text) => Paragraph::new(text.as_str()).wrap(Wrap { trim: true }),
            None => Paragraph::new(Span::styled(
                "No insight provided for this prediction.",
                Style::default().add_modifier(Modifier::DIM),
            )),
        };
        paragraph.render(inner, buf);
    }
}
