use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Gauge};

use crate::format::format_gib;
use crate::system::snapshot::SystemSnapshot;
use crate::ui::theme::{BorderStyle, Theme};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SystemSnapshot,
    theme: &Theme,
    border_style: BorderStyle,
) {
    let ratio = if snapshot.memory_total_gib > 0.0 {
        (snapshot.memory_used_gib / snapshot.memory_total_gib).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_style.border_type())
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " Memory ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(
            Style::default()
                .fg(theme.gauge_filled)
                .bg(theme.gauge_unfilled),
        )
        .ratio(ratio)
        .label(format!(
            "{} / {} ({:.0}%)",
            format_gib(snapshot.memory_used_gib),
            format_gib(snapshot.memory_total_gib),
            ratio * 100.0
        ));

    frame.render_widget(gauge, area);
}
