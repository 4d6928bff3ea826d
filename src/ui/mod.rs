pub mod cpu_panel;
pub mod header;
pub mod help;
pub mod host_panel;
pub mod memory_panel;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let snapshot = app.snapshot();

    header::render(
        frame,
        chunks[0],
        snapshot,
        &app.theme,
        app.border_style,
        app.last_report.stale_count(),
    );
    cpu_panel::render(frame, chunks[1], snapshot, &app.theme, app.border_style);
    memory_panel::render(frame, chunks[2], snapshot, &app.theme, app.border_style);
    host_panel::render(frame, chunks[3], snapshot, &app.theme, app.border_style);
    statusbar::render(frame, chunks[4], app.status_message.as_ref(), &app.theme);

    // Help overlay — rendered last to appear on top
    if app.show_help() {
        help::render(frame, frame.area(), &app.help_entries(), &app.theme);
    }
}
