use ratatui::style::Color;

use crate::io::config_io::ConfigError;
use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Active tab, checked boxes, buttons
    pub accent: Color,
    pub dim: Color,
    /// Destructive actions
    pub danger: Color,
    pub selection_bg: Color,
    pub input_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            accent: Color::Rgb(0x44, 0x88, 0xFF),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            danger: Color::Rgb(0xFF, 0x3B, 0x30),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            input_bg: Color::Rgb(0x24, 0x1A, 0x3A),
        }
    }
}

/// Parse "#RRGGBB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl Theme {
    /// Default theme with `[ui.colors]` overrides applied
    pub fn from_config(ui: &UiConfig) -> Result<Self, ConfigError> {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            let color = parse_hex_color(value).ok_or_else(|| ConfigError::InvalidColor {
                key: key.clone(),
                value: value.clone(),
            })?;
            let slot = match key.as_str() {
                "background" => &mut theme.background,
                "text" => &mut theme.text,
                "text_bright" => &mut theme.text_bright,
                "accent" => &mut theme.accent,
                "dim" => &mut theme.dim,
                "danger" => &mut theme.danger,
                "selection_bg" => &mut theme.selection_bg,
                "input_bg" => &mut theme.input_bg,
                _ => return Err(ConfigError::UnknownColorKey(key.clone())),
            };
            *slot = color;
        }
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF3B30"), Some(Color::Rgb(0xFF, 0x3B, 0x30)));
        assert_eq!(parse_hex_color("007AFF"), None);
        assert_eq!(parse_hex_color("#07AF"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("accent".into(), "#007AFF".into());
        let theme = Theme::from_config(&ui).unwrap();
        assert_eq!(theme.accent, Color::Rgb(0x00, 0x7A, 0xFF));
        assert_eq!(theme.text, Theme::default().text);
    }

    #[test]
    fn test_from_config_rejects_bad_values() {
        let mut ui = UiConfig::default();
        ui.colors.insert("accent".into(), "blue".into());
        assert!(matches!(
            Theme::from_config(&ui),
            Err(ConfigError::InvalidColor { .. })
        ));

        let mut ui = UiConfig::default();
        ui.colors.insert("sparkle".into(), "#FFFFFF".into());
        assert!(matches!(
            Theme::from_config(&ui),
            Err(ConfigError::UnknownColorKey(_))
        ));
    }
}
