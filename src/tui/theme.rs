use ratatui::style::Color;

/// Color theme for the TUI. There is no configuration surface, so the
/// palette is fixed: a deep navy background with a periwinkle accent,
/// teal for completed state, and a soft red for the delete affordance.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub done: Color,
    pub delete: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1C, 0x20, 0x3A),
            text: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x9D, 0xA2, 0xC4),
            accent: Color::Rgb(0x7C, 0x8C, 0xE4),
            done: Color::Rgb(0x64, 0xFF, 0xDA),
            delete: Color::Rgb(0xFF, 0x6B, 0x6B),
            selection_bg: Color::Rgb(0x2A, 0x2F, 0x55),
        }
    }
}
