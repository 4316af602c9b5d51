use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::RatingViewModel;

/// Predicted rating against the 0..=5 scale.
pub struct RatingView<'a> {
    model: &'a RatingViewModel,
}

impl<'a> RatingView<'a> {
    pub fn new(model: &'a RatingViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for RatingView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Rating Prediction")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = match self.model.value {
            Some(value) => Line::from(vec![
                Span::styled(
                    format!("{:.2}", value),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" / {:.0}", self.model.scale_max),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]),
            None => Line::from(Span::styled(
                "no data",
                Style::default().add_modifier(Modifier::DIM),
            )),
        };

        Paragraph::new(line).render(inner, buf);
    }
}
