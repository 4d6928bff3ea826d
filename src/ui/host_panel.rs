use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::format::{format_uptime, truncate_unicode};
use crate::system::snapshot::SystemSnapshot;
use crate::ui::cpu_panel::field_line;
use crate::ui::theme::{BorderStyle, Theme};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SystemSnapshot,
    theme: &Theme,
    border_style: BorderStyle,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_style.border_type())
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " System ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value_width = inner.width.saturating_sub(12) as usize;
    let field = |value: Option<&str>| {
        truncate_unicode(value.unwrap_or("-"), value_width)
    };

    let lines = vec![
        field_line("Hostname", field(snapshot.hostname.as_deref()), theme),
        field_line("Kernel", field(snapshot.kernel.as_deref()), theme),
        field_line("OS", field(snapshot.os.as_deref()), theme),
        field_line("Uptime", format_uptime(snapshot.uptime_seconds), theme),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
