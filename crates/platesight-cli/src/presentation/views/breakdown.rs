use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::BreakdownViewModel;

/// Horizontal bar list shared by the city and month widgets.
pub struct BreakdownView<'a> {
    title: &'a str,
    model: &'a BreakdownViewModel,
}

impl<'a> BreakdownView<'a> {
    pub fn new(title: &'a str, model: &'a BreakdownViewModel) -> Self {
        Self { title, model }
    }
}

impl<'a> Widget for BreakdownView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title(self.title).borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.model.bars.is_empty() {
            Paragraph::new(Span::styled(
                "no data",
                Style::default().add_modifier(Modifier::DIM),
            ))
            .render(inner, buf);
            return;
        }

        // Label column, then a bar scaled into the remaining width.
        let label_width = self
            .model
            .bars
            .iter()
            .map(|bar| bar.label.len())
            .max()
            .unwrap_or(0)
            .min(14);
        let bar_budget = (inner.width as usize).saturating_sub(label_width + 9).max(1);

        let lines: Vec<Line> = self
            .model
            .bars
            .iter()
            .take(inner.height as usize)
            .map(|bar| {
                let filled = ((bar.percent / 100.0) * bar_budget as f64).round() as usize;
                Line::from(vec![
                    Span::styled(
                        format!("{:<width$}", truncate(&bar.label, label_width), width = label_width),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                    Span::raw(format!(" {:5.1}% ", bar.percent)),
                    Span::raw("▇".repeat(filled.min(bar_budget))),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max.saturating_sub(1)).collect::<String>() + "…"
    }
}
