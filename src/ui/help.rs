use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;

/// Centered keybind overlay, two columns (key, description), sized to
/// fit the widest entry in each column.
pub fn render(frame: &mut Frame, area: Rect, entries: &[(String, &str)], theme: &Theme) {
    let key_col = entries.iter().map(|(key, _)| key.width()).max().unwrap_or(0);
    let desc_col = entries.iter().map(|(_, desc)| desc.width()).max().unwrap_or(0);

    // key cell padding + column gap + borders
    let want_width = (key_col + desc_col + 8) as u16;
    let width = want_width.min(area.width.saturating_sub(4));
    let height = (entries.len() as u16 + 2).min(area.height.saturating_sub(2));

    let [overlay] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [overlay] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(overlay);

    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " Keybinds ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(overlay);

    let key_style = Style::default()
        .fg(theme.pill_key_fg)
        .bg(theme.pill_key_bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(theme.pill_desc_fg);

    let lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {key:>key_col$} "), key_style),
                Span::raw("  "),
                Span::styled(*desc, desc_style),
            ])
        })
        .collect();

    frame.render_widget(block, overlay);
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme.surface_bg)),
        inner,
    );
}
