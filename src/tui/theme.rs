use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{Priority, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    /// Due dates that are still ahead
    pub cyan: Color,
    pub selection_bg: Color,
    /// Open items whose due date has passed
    pub overdue: Color,
    /// Per-tag colors
    pub tag_colors: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut tag_colors = HashMap::new();
        tag_colors.insert("home".into(), Color::Rgb(0x44, 0xFF, 0x88));
        tag_colors.insert("work".into(), Color::Rgb(0x44, 0x88, 0xFF));
        tag_colors.insert("errand".into(), Color::Rgb(0x44, 0xDD, 0xFF));
        tag_colors.insert("urgent".into(), Color::Rgb(0xFF, 0x44, 0x44));

        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            cyan: Color::Rgb(0x44, 0xDD, 0xFF),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            overdue: Color::Rgb(0xFF, 0x7C, 0x44),
            tag_colors,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the `[ui]` config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    "selection_bg" => theme.selection_bg = color,
                    "overdue" => theme.overdue = color,
                    _ => {}
                }
            }
        }

        for (tag, value) in &ui.tag_colors {
            if let Some(color) = parse_hex_color(value) {
                theme.tag_colors.insert(tag.clone(), color);
            }
        }

        theme
    }

    /// Get the color for a tag, falling back to text color
    pub fn tag_color(&self, tag: &str) -> Color {
        self.tag_colors.get(tag).copied().unwrap_or(self.text)
    }

    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Urgent => self.red,
            Priority::Medium => self.yellow,
            Priority::Low => self.green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
        assert_eq!(parse_hex_color("#a\u{e9}\u{e9}b"), None); // six bytes, not six digits
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("overdue".into(), "#000000".into());
        ui.colors.insert("bogus".into(), "#111111".into());
        ui.colors.insert("text".into(), "not a color".into());
        ui.tag_colors.insert("garden".into(), "#112233".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.overdue, Color::Rgb(0, 0, 0));
        assert_eq!(theme.tag_color("garden"), Color::Rgb(0x11, 0x22, 0x33));
        // Unparseable values keep the default
        assert_eq!(theme.text, Color::Rgb(0xB0, 0xAA, 0xFF));
    }

    #[test]
    fn test_non_ascii_color_keeps_default() {
        let mut ui = UiConfig::default();
        ui.colors.insert("highlight".into(), "#a\u{e9}\u{e9}b".into());
        ui.tag_colors.insert("home".into(), "#\u{e9}\u{e9}\u{e9}".into());

        let theme = Theme::from_config(&ui);
        let default = Theme::default();
        assert_eq!(theme.highlight, default.highlight);
        assert_eq!(theme.tag_color("home"), default.tag_color("home"));
    }

    #[test]
    fn test_cyan_override() {
        let mut ui = UiConfig::default();
        ui.colors.insert("cyan".into(), "#010203".into());
        assert_eq!(Theme::from_config(&ui).cyan, Color::Rgb(1, 2, 3));
    }

    #[test]
    fn test_tag_color_fallback() {
        let theme = Theme::default();
        assert_eq!(theme.tag_color("home"), Color::Rgb(0x44, 0xFF, 0x88));
        assert_eq!(theme.tag_color("unknown"), theme.text);
    }

    #[test]
    fn test_priority_color() {
        let theme = Theme::default();
        assert_eq!(theme.priority_color(Priority::Urgent), theme.red);
        assert_eq!(theme.priority_color(Priority::Medium), theme.yellow);
        assert_eq!(theme.priority_color(Priority::Low), theme.green);
    }
}
