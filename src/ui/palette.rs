use eframe::egui::Color32;

use crate::common::SentimentCategory;
use crate::config::PaletteConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub text_muted: Color32,
    pub green: Color32,
    pub red: Color32,
    pub muted: Color32,
    pub user_bubble: Color32,
    pub bot_bubble: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text_muted: Color32::from_rgb(0x47, 0x55, 0x69),
            green: Color32::from_rgb(0x10, 0xb9, 0x81),
            red: Color32::from_rgb(0xef, 0x44, 0x44),
            muted: Color32::from_rgb(0x6b, 0x72, 0x80),
            user_bubble: Color32::from_rgb(0x25, 0x63, 0xeb),
            bot_bubble: Color32::from_rgb(0xf1, 0xf5, 0xf9),
        }
    }
}

impl Palette {
    pub fn from_config(config: &PaletteConfig) -> Self {
        let defaults = Self::default();
        Self {
            text_muted: color_or(&config.text_muted, defaults.text_muted),
            green: color_or(&config.green, defaults.green),
            red: color_or(&config.red, defaults.red),
            muted: color_or(&config.muted, defaults.muted),
            ..defaults
        }
    }

    pub fn accent(&self, category: SentimentCategory) -> Color32 {
        match category {
            SentimentCategory::Positive => self.green,
            SentimentCategory::Negative => self.red,
            SentimentCategory::Neutral => self.muted,
        }
    }
}

fn color_or(value: &str, fallback: Color32) -> Color32 {
    parse_hex_color(value).unwrap_or_else(|| {
        log::warn!("Invalid palette colour `{value}`; using default");
        fallback
    })
}

/// Parses `#rrggbb` (the leading `#` is optional).
pub fn parse_hex_color(value: &str) -> Option<Color32> {
    let digits = value.trim().trim_start_matches('#');
    match hex::decode(digits).ok()?.as_slice() {
        [r, g, b] => Some(Color32::from_rgb(*r, *g, *b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_style_hex() {
        assert_eq!(
            parse_hex_color("#10b981"),
            Some(Color32::from_rgb(0x10, 0xb9, 0x81))
        );
        assert_eq!(
            parse_hex_color("EF4444"),
            Some(Color32::from_rgb(0xef, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#10b98100"), None);
    }

    #[test]
    fn default_config_matches_default_palette() {
        assert_eq!(
            Palette::from_config(&PaletteConfig::default()),
            Palette::default()
        );
    }

    #[test]
    fn invalid_entries_fall_back() {
        let config = PaletteConfig {
            green: "not a colour".into(),
            red: "#000000".into(),
            ..PaletteConfig::default()
        };
        let palette = Palette::from_config(&config);
        assert_eq!(palette.green, Palette::default().green);
        assert_eq!(palette.red, Color32::BLACK);
    }

    #[test]
    fn accent_follows_category() {
        let palette = Palette::default();
        assert_eq!(palette.accent(SentimentCategory::Positive), palette.green);
        assert_eq!(palette.accent(SentimentCategory::Negative), palette.red);
        assert_eq!(palette.accent(SentimentCategory::Neutral), palette.muted);
    }
}
