use ratatui::style::Color;
use ratatui::widgets::BorderType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Rounded,
    Thin,
}

impl BorderStyle {
    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "thin" | "plain" => BorderStyle::Thin,
            _ => BorderStyle::Rounded,
        }
    }

    pub fn border_type(self) -> BorderType {
        match self {
            BorderStyle::Rounded => BorderType::Rounded,
            BorderStyle::Thin => BorderType::Plain,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub header_accent_bg: Color,
    pub header_accent_fg: Color,
    pub label_fg: Color,
    pub value_fg: Color,
    pub text_secondary: Color,
    pub overlay_border: Color,
    pub accent: Color,
    pub gauge_filled: Color,
    pub gauge_unfilled: Color,
    pub statusbar_bg: Color,
    pub surface_bg: Color,
    pub pill_key_bg: Color,
    pub pill_key_fg: Color,
    pub pill_desc_fg: Color,
    pub status_ok: Color,
    pub status_err: Color,
}

impl Theme {
    pub fn from_config(theme_name: &str) -> Self {
        match theme_name.to_lowercase().as_str() {
            "light" => Self::light(),
            "mono" | "monochrome" => Self::mono(),
            _ => Self::dark(),
        }
    }

    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::mono(),
            _ => Self::dark(),
        }
    }

    fn dark() -> Self {
        Theme {
            name: "dark",
            header_accent_bg: Color::Rgb(137, 180, 250),
            header_accent_fg: Color::Rgb(17, 17, 27),
            label_fg: Color::Rgb(148, 156, 187),
            value_fg: Color::Rgb(205, 214, 244),
            text_secondary: Color::Rgb(127, 132, 156),
            overlay_border: Color::Rgb(88, 91, 112),
            accent: Color::Rgb(203, 166, 247),
            gauge_filled: Color::Rgb(137, 180, 250),
            gauge_unfilled: Color::Rgb(49, 50, 68),
            statusbar_bg: Color::Rgb(24, 24, 37),
            surface_bg: Color::Rgb(30, 30, 46),
            pill_key_bg: Color::Rgb(137, 180, 250),
            pill_key_fg: Color::Rgb(17, 17, 27),
            pill_desc_fg: Color::Rgb(166, 173, 200),
            status_ok: Color::Rgb(166, 227, 161),
            status_err: Color::Rgb(243, 139, 168),
        }
    }

    fn light() -> Self {
        Theme {
            name: "light",
            header_accent_bg: Color::Rgb(30, 102, 245),
            header_accent_fg: Color::Rgb(239, 241, 245),
            label_fg: Color::Rgb(92, 95, 119),
            value_fg: Color::Rgb(36, 39, 58),
            text_secondary: Color::Rgb(108, 111, 133),
            overlay_border: Color::Rgb(156, 160, 176),
            accent: Color::Rgb(136, 57, 239),
            gauge_filled: Color::Rgb(30, 102, 245),
            gauge_unfilled: Color::Rgb(204, 208, 218),
            statusbar_bg: Color::Rgb(230, 233, 239),
            surface_bg: Color::Rgb(239, 241, 245),
            pill_key_bg: Color::Rgb(30, 102, 245),
            pill_key_fg: Color::Rgb(239, 241, 245),
            pill_desc_fg: Color::Rgb(76, 79, 105),
            status_ok: Color::Rgb(64, 160, 43),
            status_err: Color::Rgb(210, 15, 57),
        }
    }

    fn mono() -> Self {
        Theme {
            name: "mono",
            header_accent_bg: Color::White,
            header_accent_fg: Color::Black,
            label_fg: Color::Gray,
            value_fg: Color::White,
            text_secondary: Color::DarkGray,
            overlay_border: Color::Gray,
            accent: Color::White,
            gauge_filled: Color::White,
            gauge_unfilled: Color::DarkGray,
            statusbar_bg: Color::Black,
            surface_bg: Color::Black,
            pill_key_bg: Color::White,
            pill_key_fg: Color::Black,
            pill_desc_fg: Color::Gray,
            status_ok: Color::White,
            status_err: Color::White,
        }
    }
}
