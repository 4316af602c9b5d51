use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Static promotional footer. Same content on every render; takes no model.
pub struct PromoView;

impl Widget for PromoView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::raw("Want deeper market reports for your restaurant?")),
            Line::from(Span::styled(
                "https://platesight.dev/pro",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
