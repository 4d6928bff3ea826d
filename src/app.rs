use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::config::{Config, parse_key};
use crate::system::collector::Collector;
use crate::system::snapshot::{RefreshReport, SystemSnapshot};
use crate::ui::theme::{BorderStyle, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub refresh: KeyCode,
    pub cycle_theme: KeyCode,
    pub help: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &crate::config::KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            refresh: parse_key(&kb.refresh).unwrap_or(KeyCode::Char('r')),
            cycle_theme: parse_key(&kb.cycle_theme).unwrap_or(KeyCode::Char('t')),
            help: parse_key(&kb.help).unwrap_or(KeyCode::Char('?')),
        }
    }

    /// Returns (key_label, description) pairs for all configurable keybinds.
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.refresh), "Refresh now"),
            (key_label(self.cycle_theme), "Cycle theme"),
            (key_label(self.help), "Toggle help"),
            ("Ctrl+C".to_string(), "Quit (always)"),
        ]
    }
}

/// Transient statusbar message. `ok` picks the color, independent of
/// the text.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub ok: bool,
    pub created: Instant,
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        _ => "?".to_string(),
    }
}

pub struct App {
    pub running: bool,
    pub collector: Collector,
    pub last_report: RefreshReport,
    pub input_mode: InputMode,
    pub theme: Theme,
    pub border_style: BorderStyle,
    pub status_message: Option<StatusMessage>,
    pub keybinds: ResolvedKeybinds,
}

impl App {
    pub fn new(config: Config) -> Self {
        // Collector::new performs the initial refresh.
        let collector = Collector::new();
        let last_report = collector.last_report();

        let theme = Theme::from_config(&config.general.theme);
        let border_style = BorderStyle::from_config_str(&config.general.border_style);
        let keybinds = ResolvedKeybinds::from_config(&config.keybinds);

        App {
            running: true,
            collector,
            last_report,
            input_mode: InputMode::Normal,
            theme,
            border_style,
            status_message: None,
            keybinds,
        }
    }

    pub fn snapshot(&self) -> &SystemSnapshot {
        self.collector.snapshot()
    }

    pub fn refresh_data(&mut self) {
        self.last_report = self.collector.refresh();

        // Clear expired status messages (older than 3 seconds)
        if let Some(message) = &self.status_message
            && message.created.elapsed().as_secs() >= 3
        {
            self.status_message = None;
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.input_mode {
            InputMode::Normal => self.map_key_normal(key),
            InputMode::Help => self.map_key_help(key),
        }
    }

    fn map_key_normal(&self, key: KeyEvent) -> Action {
        let code = key.code;
        let kb = &self.keybinds;

        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.refresh {
            return Action::Refresh;
        }
        if code == kb.cycle_theme {
            return Action::CycleTheme;
        }
        if code == kb.help {
            return Action::ToggleHelp;
        }

        Action::None
    }

    fn map_key_help(&self, key: KeyEvent) -> Action {
        let code = key.code;
        // In help mode, only the help key and Esc dismiss, everything else is ignored
        if code == self.keybinds.help || code == KeyCode::Esc {
            return Action::ToggleHelp;
        }
        Action::None
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Refresh => {
                self.refresh_data();
                self.set_refresh_status();
            }
            Action::CycleTheme => {
                self.theme = self.theme.next();
            }
            Action::ToggleHelp => {
                self.input_mode = if self.input_mode == InputMode::Help {
                    InputMode::Normal
                } else {
                    InputMode::Help
                };
            }
            Action::None => {}
        }
    }

    pub fn show_help(&self) -> bool {
        self.input_mode == InputMode::Help
    }

    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        self.keybinds.help_entries()
    }

    fn set_refresh_status(&mut self) {
        let stale = self.last_report.stale_count();
        let (text, ok) = if stale == 0 {
            ("Refreshed".to_string(), true)
        } else {
            (format!("{stale} sources unavailable"), false)
        };
        self.status_message = Some(StatusMessage {
            text,
            ok,
            created: Instant::now(),
        });
    }
}
