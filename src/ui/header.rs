use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::system::snapshot::SystemSnapshot;
use crate::ui::theme::{BorderStyle, Theme};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SystemSnapshot,
    theme: &Theme,
    border_style: BorderStyle,
    stale_sources: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_style.border_type())
        .border_style(Style::default().fg(theme.overlay_border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::styled(
        " cpuview ",
        Style::default()
            .fg(theme.header_accent_fg)
            .bg(theme.header_accent_bg)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(hostname) = &snapshot.hostname {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            hostname.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(os) = &snapshot.os {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            os.clone(),
            Style::default().fg(theme.text_secondary),
        ));
    }

    if stale_sources > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{stale_sources} sources stale"),
            Style::default().fg(theme.status_err),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
