use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::ProfileSummaryViewModel;

/// Echo of the submitted profile.
pub struct ProfileSummaryView<'a> {
    model: &'a ProfileSummaryViewModel,
}

impl<'a> ProfileSummaryView<'a> {
    pub fn new(model: &'a ProfileSummaryViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ProfileSummaryView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Predictions for {}", self.model.restaurant_name);
        let block = Block::default()
            .title(title)
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = [
            ("Cuisine: ", self.model.cuisine.clone()),
            ("Location: ", self.model.location.clone()),
            ("City: ", self.model.city.clone()),
            ("Established: ", self.model.established.clone()),
            ("Sales amount: ", format!("{:.0}", self.model.sales_amount)),
            ("Sales quantity: ", format!("{:.0}", self.model.sales_quantity)),
            ("Rating: ", format!("{:.1}", self.model.rating)),
        ];

        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(label, Style::default().add_modifier(Modifier::DIM)),
                    Span::raw(value),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
