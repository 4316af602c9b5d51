use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use super::indicator_color;
use crate::presentation::view_models::SuccessViewModel;

/// Success likelihood gauge with the revenue estimate underneath.
pub struct SuccessView<'a> {
    model: &'a SuccessViewModel,
}

impl<'a> SuccessView<'a> {
    pub fn new(model: &'a SuccessViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for SuccessView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Success Likelihood")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(inner);

        match self.model.percent {
            Some(percent) => {
                let gauge = Gauge::default()
                    .ratio((percent / 100.0).clamp(0.0, 1.0))
                    .label(format!("{:.1}%", percent))
                    .gauge_style(Style::default().fg(indicator_color(self.model.color)));
                gauge.render(chunks[0], buf);
            }
            None => {
                Paragraph::new(Span::styled(
                    "no data",
                    Style::default().add_modifier(Modifier::DIM),
                ))
                .render(chunks[0], buf);
            }
        }

        if let Some(sales) = self.model.sales_prediction {
            let line = Line::from(vec![
                Span::styled("Est. revenue: ", Style::default().add_modifier(Modifier::DIM)),
                Span::raw(format!("{:.0}", sales)),
            ]);
            Paragraph::new(line).render(chunks[1], buf);
        }
    }
}
