use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::format::{format_ghz, truncate_unicode};
use crate::system::snapshot::SystemSnapshot;
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
            " CPU ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value_width = inner.width.saturating_sub(12) as usize;
    let model = snapshot.cpu_model.as_deref().unwrap_or("Unknown");

    let lines = vec![
        field_line("Model", truncate_unicode(model, value_width), theme),
        field_line("Cores", snapshot.cpu_cores.to_string(), theme),
        field_line("Threads", snapshot.cpu_threads.to_string(), theme),
        field_line("Frequency", format_ghz(snapshot.cpu_frequency_ghz), theme),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

pub(super) fn field_line(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {label:<9} "),
            Style::default().fg(theme.label_fg),
        ),
        Span::styled(value, Style::default().fg(theme.value_fg)),
    ])
}
